use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, CleanError>;

/// Failures raised by the I/O adapters. The cleaning pipeline itself never fails.
#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("clipboard is empty")]
    ClipboardEmpty,

    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("not a file path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("no input received")]
    NoInput,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CleanError {
    /// Empty sources are worth a warning, not a failure banner.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, CleanError::ClipboardEmpty | CleanError::NoInput)
    }
}
