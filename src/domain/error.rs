use thiserror::Error;

/// Rule violations raised by the post model itself.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input that cannot become part of a post, such as a malformed id.
    #[error("invalid post data: {message}")]
    Validation { message: String },
    #[error("post invariant violated: {message}")]
    Invariant { message: String },
}

impl DomainError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        Self::Invariant {
            message: message.into(),
        }
    }
}
