/// Domain-level error kinds shared across the workspace.
///
/// The HTTP layer maps these onto status codes: `NotFound` -> 404,
/// `Validation` and `Conflict` -> 400 (the duplicate-email contract
/// predates this rewrite and uses 400, not 409), `Internal` -> 500.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a missing required request field.
    pub fn missing_field(field: &str) -> Self {
        CoreError::Validation(format!("{field} is required"))
    }
}
