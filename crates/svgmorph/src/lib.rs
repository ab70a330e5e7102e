#![forbid(unsafe_code)]

//! `svgmorph` generates in-between shapes for two compatible SVG nodes.
//!
//! The heavy lifting lives in `svgmorph-core`; this crate re-exports it and adds one-shot
//! helpers for hosts that only exchange markup text (editor plugins, the CLI).

pub use svgmorph_core::*;

/// Options for [`morph_with`].
#[derive(Debug, Clone, Default)]
pub struct MorphOptions {
    pub parse: ParseOptions,
    pub serialize: SerializeOptions,
    /// Append the generated nodes to the source document instead of emitting a document that
    /// only holds them.
    pub in_place: bool,
}

impl MorphOptions {
    pub fn in_place(mut self, in_place: bool) -> Self {
        self.in_place = in_place;
        self
    }
}

/// Parses `text`, interpolates `from` toward `to` over `steps` in-betweens and serializes the
/// result as a document holding only the generated nodes.
///
/// ```
/// let svg = r#"<svg xmlns="http://www.w3.org/2000/svg">
///   <path id="a" d="M 0 0 L 10 10" />
///   <path id="b" d="M 0 0 L 20 20" />
/// </svg>"#;
/// let out = svgmorph::morph(svg, "a", "b", 1)?;
/// assert!(out.contains(r#"d="M 0 0L 15 15""#));
/// # Ok::<(), svgmorph::Error>(())
/// ```
pub fn morph<'a>(
    text: &str,
    from: impl Into<NodeRef<'a>>,
    to: impl Into<NodeRef<'a>>,
    steps: usize,
) -> Result<String> {
    morph_with(text, from, to, steps, &MorphOptions::default())
}

pub fn morph_with<'a>(
    text: &str,
    from: impl Into<NodeRef<'a>>,
    to: impl Into<NodeRef<'a>>,
    steps: usize,
    options: &MorphOptions,
) -> Result<String> {
    let mut doc = Document::parse_with(text, options.parse)?;
    let (from, to) = (from.into(), to.into());
    let out = if options.in_place {
        doc.interpolate_in_place(from, to, steps)?;
        doc.serialize_with(&options.serialize)
    } else {
        doc.interpolate(from, to, steps)?
            .serialize_with(&options.serialize)
    };
    tracing::debug!(bytes = out.len(), in_place = options.in_place, "morphed markup");
    Ok(out)
}
