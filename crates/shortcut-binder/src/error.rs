use thiserror::Error;

/// Failures the binder catches and reports. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BinderError {
    #[error("Failed to setup global shortcuts: {0}")]
    Unavailable(String),

    #[error("Failed to register global shortcut {combination}: {message}")]
    Register { combination: String, message: String },

    #[error("Failed to unregister shortcuts: {0}")]
    UnregisterAll(String),

    #[error("Failed to invoke host command {name}: {message}")]
    Command { name: String, message: String },
}
