use thiserror::Error;

#[derive(Debug, Error)]
pub enum UnderwritingError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl UnderwritingError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        UnderwritingError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the input field that failed validation, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            UnderwritingError::InvalidInput { field, .. } => Some(field),
            UnderwritingError::SerializationError(_) => None,
        }
    }
}

impl From<serde_json::Error> for UnderwritingError {
    fn from(e: serde_json::Error) -> Self {
        UnderwritingError::SerializationError(e.to_string())
    }
}
