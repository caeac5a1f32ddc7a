use thiserror::Error;

/// Why the ticket dataset could not be loaded
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("browser window is unavailable")]
    NoWindow,

    #[error("request failed: {0}")]
    Request(String),

    #[error("server responded with status {0}")]
    Status(u16),

    #[error("response body could not be read: {0}")]
    Body(String),

    #[error("ticket data is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
