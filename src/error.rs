//! Error types for taskpad.

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum TaskpadError {
    /// Durable storage error (preferences file).
    #[error("storage error: {0}")]
    Storage(String),

    /// I/O error (terminal setup, drawing, event polling).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, TaskpadError>;
