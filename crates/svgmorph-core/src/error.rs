pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Markup parse error: {message}")]
    MarkupParse { message: String },

    #[error("Path command has no command letter: `{token}`")]
    CommandParse { token: String },

    #[error("Transform has no operation name: `{token}`")]
    TransformParse { token: String },

    #[error("Cannot interpolate transform `{from}` into `{to}`: operations differ")]
    IncompatibleTransform { from: String, to: String },

    #[error(
        "Interpolation can only manage a maximum of one transform (got {from} and {to})"
    )]
    TooManyTransforms { from: usize, to: usize },

    #[error("Nodes are structurally incompatible: {reason}")]
    StructuralIncompatibility { reason: String },

    #[error(
        "Path command #{command} has {left} values on one side and {right} on the other"
    )]
    ElementMismatch {
        command: usize,
        left: usize,
        right: usize,
    },

    #[error("Nodes are not compatible for interpolation\n\nnode 1 : {from}\nnode 2 : {to}")]
    IncompatibleNodes {
        from: String,
        to: String,
        #[source]
        source: Box<Error>,
    },

    #[error("No node matches reference `{reference}`")]
    NodeNotFound { reference: String },

    #[error("Interpolation steps must be a positive integer")]
    InvalidSteps,
}

impl Error {
    /// Errors that describe two endpoints that cannot be blended, as opposed to bad input text.
    pub fn is_incompatibility(&self) -> bool {
        matches!(
            self,
            Self::IncompatibleTransform { .. }
                | Self::TooManyTransforms { .. }
                | Self::StructuralIncompatibility { .. }
                | Self::IncompatibleNodes { .. }
        )
    }
}

impl From<roxmltree::Error> for Error {
    fn from(value: roxmltree::Error) -> Self {
        Self::MarkupParse {
            message: value.to_string(),
        }
    }
}
