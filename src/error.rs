//! Typed error types for tab-shuttle.

use crate::platform::PlatformError;
use thiserror::Error;

/// Failure of handling one trigger.
///
/// A failed trigger never affects the handling of later triggers. Memory
/// table writes made before the failure are kept.
#[derive(Debug, Error)]
pub enum ShuttleError {
    /// A host platform call failed.
    #[error(transparent)]
    Platform(#[from] PlatformError),

    /// A keyboard command identifier that tab-shuttle does not know.
    #[error("unknown command '{0}'")]
    UnknownCommand(String),

    /// A trigger description that could not be parsed.
    #[error("unknown trigger '{0}' (expected a command id, 'menu' or 'icon')")]
    UnknownTrigger(String),
}
