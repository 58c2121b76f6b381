use std::fmt;

use thiserror::Error;

/// Errors produced while turning raw inputs into a task definition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Input required and not supplied: {field}")]
    MissingRequiredField { field: &'static str },
    #[error("malformed input `{field}`: {reason}")]
    MalformedInput { field: &'static str, reason: String },
}

impl BuildError {
    /// Tag of this error, independent of its message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            BuildError::MissingRequiredField { .. } => ErrorKind::MissingRequiredField,
            BuildError::MalformedInput { .. } => ErrorKind::MalformedInput,
        }
    }

    /// Name of the input the error refers to.
    pub fn field(&self) -> &'static str {
        match self {
            BuildError::MissingRequiredField { field } => field,
            BuildError::MalformedInput { field, .. } => field,
        }
    }
}

/// Classification of a [`BuildError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingRequiredField,
    MalformedInput,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MissingRequiredField => "MissingRequiredField",
            ErrorKind::MalformedInput => "MalformedInput",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure to serialize a task definition to text.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize task definition: {0}")]
    Json(#[from] serde_json::Error),
}
