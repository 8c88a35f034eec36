use thiserror::Error;

/// Failures of the durable session storage. The in-memory session state is
/// never poisoned by these; callers log and carry on.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session storage i/o: {0}")]
    Io(#[from] std::io::Error),

    #[error("session storage encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}
