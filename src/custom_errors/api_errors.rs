use reqwest::StatusCode;

/// Failure of one request against the roster API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request never completed, or the body could not be read
    #[error("network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx status
    #[error("server responded with {status}{}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Server {
        status: StatusCode,
        message: Option<String>,
    },

    /// Body is not the JSON we expected
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Envelope came back with `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("response carried no data")]
    MissingData,
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Server { status, .. } if *status == StatusCode::NOT_FOUND)
    }
}
