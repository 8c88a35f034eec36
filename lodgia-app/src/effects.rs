//! Side-effect ports the flows drive. A UI layer implements these; tests
//! use the recording versions in `mocks`.

/// Toast/inline notifications.
pub trait Notifier: Send + Sync {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// Page navigation.
pub trait Navigator: Send + Sync {
    fn navigate(&self, path: &str);
}

/// Blocking yes/no prompt for destructive actions.
pub trait ConfirmPrompt: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}
