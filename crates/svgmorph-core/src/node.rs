//! Direct children of a document, with their transform and (for paths) their geometry.

use crate::command::Command;
use crate::interpolate::{Interpolate, fractions};
use crate::markup::{Element, NamespaceMap, QName};
use crate::path::PathData;
use crate::transform::{Transform, serialize_list};
use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Generic,
    Path(PathData),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::Path(_) => "path",
        }
    }

    fn incompatibility(&self, other: &Self) -> Option<String> {
        match (self, other) {
            (Self::Generic, Self::Generic) => None,
            (Self::Path(a), Self::Path(b)) => a.incompatibility(b),
            _ => Some(format!(
                "cannot interpolate a {} node into a {} node",
                self.name(),
                other.name()
            )),
        }
    }

    fn interpolated(&self, other: &Self, p: f64) -> Result<Self> {
        match (self, other) {
            (Self::Path(a), Self::Path(b)) => Ok(Self::Path(a.interpolated(b, p)?)),
            (Self::Generic, Self::Generic) => Ok(Self::Generic),
            _ => Err(Error::StructuralIncompatibility {
                reason: self.incompatibility(other).unwrap_or_default(),
            }),
        }
    }

    fn string_attributes(&self, decimals: Option<u32>) -> Vec<(QName, Option<String>)> {
        match self {
            Self::Generic => Vec::new(),
            Self::Path(data) => vec![(QName::local("d"), Some(data.serialize_with(decimals)))],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    element: Element,
    transforms: Vec<Transform>,
    kind: NodeKind,
}

impl Node {
    /// Wraps an element. Elements whose local name is `path` get their `d` tokenized.
    pub fn from_element(element: Element) -> Result<Self> {
        let transforms = element
            .attribute("transform")
            .map(Transform::tokenize)
            .unwrap_or_default();
        let kind = if element.name.local == "path" {
            NodeKind::Path(PathData::parse(element.attribute("d").unwrap_or_default())?)
        } else {
            NodeKind::Generic
        };
        Ok(Self {
            element,
            transforms,
            kind,
        })
    }

    /// Parses a standalone element, e.g. `<path d="M 0 0 L 1 1" />`.
    pub fn parse(markup: &str) -> Result<Self> {
        let doc = roxmltree::Document::parse(markup)?;
        Self::from_element(Element::from_node(doc.root_element(), markup))
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn transforms(&self) -> &[Transform] {
        &self.transforms
    }

    /// Path commands; empty for non-path nodes.
    pub fn commands(&self) -> &[Command] {
        match &self.kind {
            NodeKind::Path(data) => &data.commands,
            NodeKind::Generic => &[],
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.element.attribute("id")
    }

    pub fn is_path(&self) -> bool {
        matches!(self.kind, NodeKind::Path(_))
    }

    /// `steps` evenly spaced nodes strictly between `self` and `other`.
    pub fn interpolate(&self, other: &Self, steps: usize) -> Result<Vec<Self>> {
        if let Some(reason) = self.kind.incompatibility(&other.kind) {
            return Err(Error::StructuralIncompatibility { reason });
        }
        let out = fractions(steps)
            .map(|p| self.interpolated(other, p))
            .collect::<Result<Vec<_>>>()?;
        tracing::trace!(steps, kind = self.kind.name(), "interpolated node");
        Ok(out)
    }

    /// Attributes that replace the element's own ones on output.
    ///
    /// `id` is always dropped so that generated nodes never collide with their sources.
    pub fn string_attributes(&self) -> Vec<(QName, Option<String>)> {
        self.string_attributes_with(None)
    }

    fn string_attributes_with(&self, decimals: Option<u32>) -> Vec<(QName, Option<String>)> {
        let mut attrs = vec![(QName::local("id"), None)];
        if !self.transforms.is_empty() {
            attrs.push((
                QName::local("transform"),
                Some(serialize_list(&self.transforms, decimals)),
            ));
        }
        attrs.extend(self.kind.string_attributes(decimals));
        attrs
    }

    pub fn serialize(&self, namespaces: &NamespaceMap, emit_namespaces: bool) -> String {
        self.serialize_with(namespaces, emit_namespaces, None)
    }

    pub(crate) fn serialize_with(
        &self,
        namespaces: &NamespaceMap,
        emit_namespaces: bool,
        decimals: Option<u32>,
    ) -> String {
        self.element.serialize(
            &self.string_attributes_with(decimals),
            namespaces,
            emit_namespaces,
        )
    }

    fn blended_transform(&self, other: &Self, p: f64) -> Result<Option<Transform>> {
        if self.transforms.len() > 1 || other.transforms.len() > 1 {
            return Err(Error::TooManyTransforms {
                from: self.transforms.len(),
                to: other.transforms.len(),
            });
        }
        let t = match (self.transforms.first(), other.transforms.first()) {
            (None, None) => None,
            (Some(a), Some(b)) => Some(a.interpolate(b, p)?),
            (Some(a), None) => Some(a.interpolate(&a.identity_like(), p)?),
            (None, Some(b)) => Some(b.identity_like().interpolate(b, p)?),
        };
        Ok(t)
    }
}

impl Interpolate for Node {
    fn can_interpolate(&self, other: &Self) -> bool {
        self.kind.incompatibility(&other.kind).is_none()
    }

    fn interpolated(&self, other: &Self, p: f64) -> Result<Self> {
        let transform = self.blended_transform(other, p)?;
        let mut out = self.clone();
        out.transforms = transform.into_iter().collect();
        out.kind = self.kind.interpolated(&other.kind, p)?;
        Ok(out)
    }
}
