//! Owned, immutable-after-parse markup elements.
//!
//! Names keep their namespace URI (`{uri}local` in textual form) and are mapped back to
//! `prefix:local` only at serialization time, using a [`NamespaceMap`].

use indexmap::IndexMap;

pub const NS_XML: &str = "http://www.w3.org/XML/1998/namespace";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QName {
    pub namespace: Option<String>,
    pub local: String,
}

impl QName {
    pub fn local(local: impl Into<String>) -> Self {
        Self {
            namespace: None,
            local: local.into(),
        }
    }

    pub fn qualified(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: Some(namespace.into()),
            local: local.into(),
        }
    }

    fn from_parts(namespace: Option<&str>, local: &str) -> Self {
        Self {
            namespace: namespace.filter(|ns| !ns.is_empty()).map(str::to_string),
            local: local.to_string(),
        }
    }

    /// `prefix:local`, or `local` when the namespace is the default one.
    ///
    /// Unknown namespaces fall back to the bare local name.
    pub fn prefixed(&self, namespaces: &NamespaceMap) -> String {
        let Some(ns) = self.namespace.as_deref() else {
            return self.local.clone();
        };
        match namespaces.prefix(ns) {
            Some("") => self.local.clone(),
            Some(prefix) => format!("{prefix}:{}", self.local),
            None if ns == NS_XML => format!("xml:{}", self.local),
            None => {
                tracing::warn!(namespace = ns, name = %self.local, "undeclared namespace");
                self.local.clone()
            }
        }
    }
}

impl std::fmt::Display for QName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{{{ns}}}{}", self.local),
            None => f.write_str(&self.local),
        }
    }
}

/// Namespace URI to prefix (empty for the default namespace).
///
/// Built from declarations in source order: a URI declared twice keeps its first position and
/// its last prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    by_uri: IndexMap<String, String>,
}

impl NamespaceMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, uri: impl Into<String>, prefix: impl Into<String>) {
        self.by_uri.insert(uri.into(), prefix.into());
    }

    pub fn prefix(&self, uri: &str) -> Option<&str> {
        self.by_uri.get(uri).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.by_uri.is_empty()
    }

    /// `(uri, prefix)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_uri.iter().map(|(u, p)| (u.as_str(), p.as_str()))
    }

    /// Appends ` xmlns="…"` / ` xmlns:p="…"` for every entry.
    ///
    /// Each prefix is declared once; the first URI bound to it wins.
    pub(crate) fn write_declarations(&self, out: &mut String) {
        let mut written: Vec<&str> = Vec::new();
        for (uri, prefix) in self.iter() {
            if written.contains(&prefix) {
                tracing::debug!(prefix, namespace = uri, "skipping shadowed namespace declaration");
                continue;
            }
            written.push(prefix);
            out.push_str(" xmlns");
            if !prefix.is_empty() {
                out.push(':');
                out.push_str(prefix);
            }
            out.push_str("=\"");
            escape_xml_into(out, uri);
            out.push('"');
        }
    }
}

impl<U: Into<String>, P: Into<String>> FromIterator<(U, P)> for NamespaceMap {
    fn from_iter<T: IntoIterator<Item = (U, P)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (uri, prefix) in iter {
            map.insert(uri, prefix);
        }
        map
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub name: QName,
    pub attributes: Vec<(QName, String)>,
    /// Everything between the start and end tags, verbatim. Empty for self-closing elements.
    pub inner: String,
}

impl Element {
    pub fn new(name: QName) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            inner: String::new(),
        }
    }

    pub(crate) fn from_node(node: roxmltree::Node<'_, '_>, source: &str) -> Self {
        let tag = node.tag_name();
        let attributes = node
            .attributes()
            .map(|a| {
                (
                    QName::from_parts(a.namespace(), a.name()),
                    a.value().to_string(),
                )
            })
            .collect();
        let inner = match (node.first_child(), node.last_child()) {
            (Some(first), Some(last)) => source
                .get(first.range().start..last.range().end)
                .unwrap_or_default()
                .to_string(),
            _ => String::new(),
        };
        Self {
            name: QName::from_parts(tag.namespace(), tag.name()),
            attributes,
            inner,
        }
    }

    /// Value of the first attribute named `local` in no namespace.
    pub fn attribute(&self, local: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k.namespace.is_none() && k.local == local)
            .map(|(_, v)| v.as_str())
    }

    /// Serializes the element with `overrides` applied on top of its own attributes.
    ///
    /// Overrides replace same-named attributes in place and are appended otherwise; a `None`
    /// override drops the attribute.
    pub fn serialize(
        &self,
        overrides: &[(QName, Option<String>)],
        namespaces: &NamespaceMap,
        emit_namespaces: bool,
    ) -> String {
        let tag = self.name.prefixed(namespaces);
        let mut out = String::new();
        out.push('<');
        out.push_str(&tag);
        if emit_namespaces {
            namespaces.write_declarations(&mut out);
        }

        let mut merged: IndexMap<&QName, Option<&str>> = self
            .attributes
            .iter()
            .map(|(k, v)| (k, Some(v.as_str())))
            .collect();
        for (k, v) in overrides {
            merged.insert(k, v.as_deref());
        }
        for (k, v) in merged {
            let Some(v) = v else {
                continue;
            };
            out.push(' ');
            out.push_str(&k.prefixed(namespaces));
            out.push_str("=\"");
            escape_xml_into(&mut out, v);
            out.push('"');
        }

        if self.inner.is_empty() {
            out.push_str(" />");
        } else {
            out.push('>');
            out.push_str(&self.inner);
            out.push_str("</");
            out.push_str(&tag);
            out.push('>');
        }
        out
    }
}

pub(crate) fn escape_xml_into(out: &mut String, text: &str) {
    let mut start = 0usize;
    for (i, b) in text.bytes().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'"' => "&quot;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}
