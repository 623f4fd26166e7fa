//! Error types for the chat core and its collaborators.

/// Errors returned to the host for a rejected message.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    TooLong(usize),
}

/// Errors from the listing source and the log sink.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("listing source not found: {0}")]
    SourceMissing(String),
    #[error("malformed listing data: {0}")]
    Malformed(String),
    #[error("failed to append log record: {0}")]
    Append(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<csv::Error> for StoreError {
    fn from(err: csv::Error) -> Self {
        StoreError::Malformed(err.to_string())
    }
}

/// Failures of the external text polish call. Always recovered by the caller.
#[derive(Debug, thiserror::Error)]
pub enum PolishError {
    #[error("polish request timed out")]
    Timeout,
    #[error("polish service rejected credentials (status {0})")]
    Auth(u16),
    #[error("polish service quota exceeded")]
    Quota,
    #[error("polish service returned status {0}")]
    Status(u16),
    #[error("polish request failed: {0}")]
    Transport(String),
    #[error("polish service returned an empty completion")]
    EmptyCompletion,
}

impl From<reqwest::Error> for PolishError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            PolishError::Timeout
        } else {
            PolishError::Transport(err.to_string())
        }
    }
}
