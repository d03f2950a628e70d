//! Error types for the rendering core.

/// Errors reported while validating render input.
///
/// Every variant is raised before the pipeline starts. Once a grid and a
/// validated [`RenderConfig`](super::RenderConfig) reach the pipeline, the
/// stages cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RenderError {
    #[error("invalid {what}: {value}")]
    InvalidDimension {
        /// Which dimension was rejected
        what: &'static str,
        /// The offending value, formatted for display
        value: String,
    },

    #[error("unsupported {kind} '{value}' (expected one of: {expected})")]
    UnsupportedMethod {
        /// The kind of enum being parsed (e.g. "resize method")
        kind: &'static str,
        /// The value that failed to parse
        value: String,
        /// Accepted spellings, comma separated
        expected: &'static str,
    },

    #[error("invalid {name}: {value}")]
    InvalidParameter {
        /// Parameter name as the user sees it
        name: &'static str,
        /// The offending value, formatted for display
        value: String,
    },

    #[error("invalid task name '{0}': must start with a letter or '_' and contain only letters, digits, '_' or '$'")]
    InvalidTaskName(String),
}

impl RenderError {
    pub(crate) fn dimension(what: &'static str, value: impl ToString) -> Self {
        RenderError::InvalidDimension {
            what,
            value: value.to_string(),
        }
    }

    pub(crate) fn parameter(name: &'static str, value: impl ToString) -> Self {
        RenderError::InvalidParameter {
            name,
            value: value.to_string(),
        }
    }
}
