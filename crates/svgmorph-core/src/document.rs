//! A whole vector document: root element plus a flat list of direct children.

use crate::markup::{Element, NamespaceMap, escape_xml_into};
use crate::node::Node;
use crate::options::{ParseOptions, SerializeOptions};
use crate::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

fn re_xmlns() -> &'static Regex {
    static ONCE: OnceLock<Regex> = OnceLock::new();
    ONCE.get_or_init(|| {
        Regex::new(r#"\sxmlns:?([^=]*)="([^"]+)""#).expect("xmlns regex must compile")
    })
}

/// How a caller designates one of the document's children.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    /// 0-based position in [`Document::children`].
    Index(usize),
    /// First child whose `id` attribute equals the string.
    Id(&'a str),
    /// A node held by the caller, possibly from another document.
    Node(&'a Node),
}

impl From<usize> for NodeRef<'_> {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

impl<'a> From<&'a str> for NodeRef<'a> {
    fn from(value: &'a str) -> Self {
        Self::Id(value)
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(value: &'a Node) -> Self {
        Self::Node(value)
    }
}

impl std::fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(i) => write!(f, "#{i}"),
            Self::Id(id) => f.write_str(id),
            Self::Node(node) => write!(f, "<{}>", node.element().name.local),
        }
    }
}

/// One namespace declaration as written in the source, `(prefix, uri)`; the default namespace
/// has an empty prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    pub prefix: String,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    namespaces: Vec<Namespace>,
    root: Element,
    children: Vec<Node>,
}

impl Document {
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with(text, ParseOptions::default())
    }

    pub fn parse_with(text: &str, options: ParseOptions) -> Result<Self> {
        let namespaces: Vec<Namespace> = re_xmlns()
            .captures_iter(text)
            .map(|caps| Namespace {
                prefix: caps[1].to_string(),
                uri: caps[2].to_string(),
            })
            .collect();

        let doc = roxmltree::Document::parse_with_options(text, options.to_roxmltree())?;
        let root_node = doc.root_element();
        let mut root = Element::from_node(root_node, text);
        root.inner.clear();

        let children = root_node
            .children()
            .filter(|n| n.is_element())
            .map(|n| Node::from_element(Element::from_node(n, text)))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            root = %root.name,
            children = children.len(),
            namespaces = namespaces.len(),
            "parsed document"
        );
        Ok(Self {
            namespaces,
            root,
            children,
        })
    }

    /// Same root tag, attributes and namespaces, no children.
    pub fn clone_empty(&self) -> Self {
        Self {
            namespaces: self.namespaces.clone(),
            root: self.root.clone(),
            children: Vec::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn namespaces(&self) -> &[Namespace] {
        &self.namespaces
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn push(&mut self, node: Node) {
        self.children.push(node);
    }

    pub fn namespace_map(&self) -> NamespaceMap {
        self.namespaces
            .iter()
            .map(|ns| (ns.uri.as_str(), ns.prefix.as_str()))
            .collect()
    }

    pub fn resolve<'a>(&'a self, node: NodeRef<'a>) -> Option<&'a Node> {
        match node {
            NodeRef::Index(i) => self.children.get(i),
            NodeRef::Id(id) => self.children.iter().find(|n| n.id() == Some(id)),
            NodeRef::Node(node) => Some(node),
        }
    }

    /// Interpolates `from` toward `to` into a new, otherwise empty, copy of this document.
    pub fn interpolate<'a>(
        &'a self,
        from: impl Into<NodeRef<'a>>,
        to: impl Into<NodeRef<'a>>,
        steps: usize,
    ) -> Result<Self> {
        let nodes = self.interpolated_nodes(from.into(), to.into(), steps)?;
        let mut out = self.clone_empty();
        out.children.extend(nodes);
        Ok(out)
    }

    /// Interpolates `from` toward `to` and appends the results to this document.
    ///
    /// Nothing is appended when interpolation fails.
    pub fn interpolate_in_place<'a>(
        &mut self,
        from: impl Into<NodeRef<'a>>,
        to: impl Into<NodeRef<'a>>,
        steps: usize,
    ) -> Result<&mut Self> {
        let nodes = self.interpolated_nodes(from.into(), to.into(), steps)?;
        self.children.extend(nodes);
        Ok(self)
    }

    fn interpolated_nodes(
        &self,
        from: NodeRef<'_>,
        to: NodeRef<'_>,
        steps: usize,
    ) -> Result<Vec<Node>> {
        if steps == 0 {
            return Err(Error::InvalidSteps);
        }
        let a = self.resolve(from).ok_or_else(|| Error::NodeNotFound {
            reference: from.to_string(),
        })?;
        let b = self.resolve(to).ok_or_else(|| Error::NodeNotFound {
            reference: to.to_string(),
        })?;

        let nodes = a.interpolate(b, steps).map_err(|err| {
            if !err.is_incompatibility() {
                return err;
            }
            let namespaces = self.namespace_map();
            Error::IncompatibleNodes {
                from: a.element().serialize(&[], &namespaces, false),
                to: b.element().serialize(&[], &namespaces, false),
                source: Box::new(err),
            }
        })?;
        tracing::debug!(%from, %to, steps, "interpolated nodes");
        Ok(nodes)
    }

    pub fn serialize(&self) -> String {
        self.serialize_with(&SerializeOptions::default())
    }

    pub fn serialize_with(&self, options: &SerializeOptions) -> String {
        let namespaces = self.namespace_map();
        let tag = self.root.name.prefixed(&namespaces);

        let mut out = String::new();
        out.push('<');
        out.push_str(&tag);
        namespaces.write_declarations(&mut out);
        for (k, v) in &self.root.attributes {
            out.push(' ');
            out.push_str(&k.prefixed(&namespaces));
            out.push_str("=\"");
            escape_xml_into(&mut out, v);
            out.push('"');
        }

        if self.children.is_empty() {
            out.push_str(" />");
            return out;
        }
        out.push('>');
        for child in &self.children {
            out.push('\n');
            out.push_str(&options.indent);
            out.push_str(&child.serialize_with(&namespaces, false, options.decimals));
        }
        out.push_str("\n</");
        out.push_str(&tag);
        out.push('>');
        out
    }
}

impl std::str::FromStr for Document {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
