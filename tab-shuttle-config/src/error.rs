//! Typed error variants for the tab-shuttle-config crate.
//!
//! `Settings::load` and `Settings::save` return `anyhow::Result`; these
//! values are coerced into it and can be recovered with `downcast_ref` by
//! callers that want to match on the failure mode.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the settings file.
    #[error("I/O error on settings file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file contained YAML that could not be parsed.
    #[error("YAML parse error in settings file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Settings could not be serialized.
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_yaml_ng::Error),
}
