use thiserror::Error;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Failures of the content generation call. Never surfaced to the UI.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] gloo::net::Error),

    #[error("service responded with HTTP {status}")]
    Status { status: u16 },

    #[error("response carried no candidate text")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}
