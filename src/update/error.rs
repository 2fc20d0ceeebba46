use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    #[error("Unexpected status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Invalid proxy URL '{proxy}': {reason}")]
    InvalidProxy { proxy: String, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Release has no tag_name")]
    MissingTag,

    #[error("Release tag is empty")]
    EmptyTag,

    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: &'static str },
}

/// Any failure of a single update check
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
