//! Settings for the tab-shuttle navigation core.
//!
//! This crate provides loading, saving, and default values for the options
//! that shape tab and window navigation:
//!
//! - `jump_windows`: cross into the neighbouring window at an edge tab
//! - `focus_first_last_tab_if_edge_window`: land on the first/last tab when
//!   the jump reaches the first/last window
//! - `log_level`: verbosity of the log bridge

pub mod defaults;
mod error;
mod log_level;
mod persistence;
mod settings;

pub use error::ConfigError;
pub use log_level::LogLevel;
pub use settings::Settings;
