use thiserror::Error;

/// Errors raised while handing an image to the hosting service.
#[derive(Debug, Error)]
pub enum MediaError {
    /// Host credentials are missing or empty.
    #[error("image host misconfigured: {0}")]
    Config(String),
    /// The request never produced a response.
    #[error("image host unreachable: {0}")]
    Transport(String),
    /// The host answered with an error status.
    #[error("image host rejected upload ({status}): {message}")]
    Rejected { status: u16, message: String },
    /// The host answered successfully but without the expected fields.
    #[error("image host returned malformed result: {0}")]
    MalformedResponse(String),
}
