//! Errors raised by the report domain.
use shared::FieldError;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Input failed validation; carries one entry per offending field
    #[error("Validation failed")]
    Validation(Vec<FieldError>),
    #[error("Storage failure: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ReportError {
    pub fn invalid_field(field: &str, message: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError {
            field: field.to_string(),
            message: message.into(),
        }])
    }
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
