use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("Resource not found")]
    NotFound,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The text-generation call failed, returned blank text, or produced
    /// something that is not JSON. `raw` carries the unparsed upstream text
    /// for diagnostics.
    #[error("Upstream text generation failed: {message}")]
    UpstreamFailure { message: String, raw: String },

    #[error("Internal server error")]
    InternalServerError,
}
