#![forbid(unsafe_code)]

//! SVG node model + path/transform interpolation (headless).
//!
//! Design goals:
//! - refuse rather than guess: endpoints must have the same node kind and, for paths, the same
//!   command letters in the same order
//! - owned, immutable-after-parse element values; serialization is a pure function of the
//!   element and the attributes a node overrides
//! - deterministic number formatting (shortest round-trip, JS style)
//!
//! ```
//! use svgmorph_core::Document;
//!
//! let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
//!   <path id="a" d="M 0 0 L 10 10" />
//!   <path id="b" d="M 0 0 L 20 20" />
//! </svg>"#;
//!
//! let doc = Document::parse(svg)?;
//! let tween = doc.interpolate("a", "b", 1)?;
//! assert_eq!(tween.children()[0].commands()[1].values, vec![15.0, 15.0]);
//! # Ok::<(), svgmorph_core::Error>(())
//! ```

pub mod command;
pub mod document;
pub mod error;
pub mod interpolate;
pub mod markup;
pub mod node;
pub mod number;
pub mod options;
pub mod path;
pub mod transform;

pub use command::{Command, Operation};
pub use document::{Document, Namespace, NodeRef};
pub use error::{Error, Result};
pub use interpolate::Interpolate;
pub use markup::{Element, NamespaceMap, QName};
pub use node::{Node, NodeKind};
pub use options::{ParseOptions, SerializeOptions};
pub use path::PathData;
pub use transform::Transform;

#[cfg(test)]
mod tests;
