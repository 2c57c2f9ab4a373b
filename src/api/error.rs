use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid server URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{}", status_text(.status, .detail))]
    Status { status: u16, detail: Option<String> },
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("background task failed: {0}")]
    Runtime(String),
}

impl ApiError {
    /// HTTP status for `Status` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn status_text(status: &u16, detail: &Option<String>) -> String {
    match detail {
        Some(d) => format!("HTTP {status}: {d}"),
        None => format!("HTTP {status}"),
    }
}
