/// Convenience result type used across the crate.
pub type CageResult<T> = Result<T, CageError>;

/// Top-level error taxonomy used by the drawing APIs.
#[derive(thiserror::Error, Debug)]
pub enum CageError {
    /// A caller-supplied value was missing, empty or out of range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A drawing collaborator could not provide the operations the pipeline needs.
    #[error("internal error: {0}")]
    Internal(String),

    /// Font data could not be parsed or queried.
    #[error("font error: {0}")]
    Font(String),

    /// Configuration could not be read or decoded.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CageError {
    /// Build a [`CageError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`CageError::Internal`] value.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Build a [`CageError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`CageError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
