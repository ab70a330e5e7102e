#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Accept a `<!DOCTYPE …>` prolog. Inkscape and Krita exports often carry one.
    pub allow_dtd: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { allow_dtd: true }
    }
}

impl ParseOptions {
    /// Rejects documents with a DTD.
    pub fn strict() -> Self {
        Self { allow_dtd: false }
    }

    pub(crate) fn to_roxmltree(self) -> roxmltree::ParsingOptions {
        roxmltree::ParsingOptions {
            allow_dtd: self.allow_dtd,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct SerializeOptions {
    /// Prefix written before every child line.
    pub indent: String,
    /// Round emitted path and transform values to this many decimals. `None` keeps the shortest
    /// round-trippable form.
    pub decimals: Option<u32>,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            indent: "\t".to_string(),
            decimals: None,
        }
    }
}

impl SerializeOptions {
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    pub fn with_decimals(mut self, decimals: Option<u32>) -> Self {
        self.decimals = decimals;
        self
    }
}
