use thiserror::Error;

/// Failures crossing the backend API boundary.
///
/// Every variant is terminal for the request that produced it; callers
/// surface a notice and keep whatever was rendered before.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to backend failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}")]
    Status { status: u16 },

    #[error("no protein found for '{0}'")]
    NotFound(String),

    #[error("unexpected response shape: {0}")]
    Malformed(String),
}

impl ApiError {
    /// Message suitable for a user-facing notice.
    pub fn notice(&self) -> String {
        self.to_string()
    }
}
