use thiserror::Error;

/// Result type returned by every [`super::Platform`] call.
pub type PlatformResult<T> = Result<T, PlatformError>;

/// Failures reported by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    /// The referenced tab or window no longer exists.
    #[error("no {kind} with id {id}")]
    NotFound {
        /// `"tab"` or `"window"`.
        kind: &'static str,
        id: u64,
    },

    /// Any other host failure (permissions, transient errors, ...).
    #[error("platform call failed: {0}")]
    Failed(String),
}

impl PlatformError {
    pub fn tab_not_found(id: u64) -> Self {
        Self::NotFound { kind: "tab", id }
    }

    pub fn window_not_found(id: u64) -> Self {
        Self::NotFound { kind: "window", id }
    }

    /// Whether this error only says the referenced object is gone.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
