//! Node client errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("node returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl RpcError {
    /// HTTP status of the failed request, if the node answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => Self::Status {
                status: status.as_u16(),
                body: e.to_string(),
            },
            None => Self::Transport(e.to_string()),
        }
    }
}
