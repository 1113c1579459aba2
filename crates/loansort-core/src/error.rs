use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoansortError {
    #[error("Invalid argument: {field} ({reason})")]
    InvalidArgument { field: String, reason: String },

    #[error("Arithmetic anomaly in {context}")]
    ArithmeticAnomaly { context: String },
}

impl LoansortError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        LoansortError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
