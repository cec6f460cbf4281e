//! Core `Settings` struct definition.

use crate::log_level::LogLevel;
use serde::{Deserialize, Serialize};

/// Options read by the dispatcher before every keyboard command.
///
/// Field names serialize in camelCase so a settings file reads the same as
/// the browser-side option keys (`jumpWindows`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// When the focused tab is the first/last of its window, prev/next tab
    /// moves focus into the neighbouring window instead of wrapping.
    #[serde(default = "crate::defaults::jump_windows")]
    pub jump_windows: bool,

    /// After jumping into the first/last window, activate its first tab
    /// (next) or last tab (prev).
    #[serde(default = "crate::defaults::focus_first_last_tab_if_edge_window")]
    pub focus_first_last_tab_if_edge_window: bool,

    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            jump_windows: crate::defaults::jump_windows(),
            focus_first_last_tab_if_edge_window:
                crate::defaults::focus_first_last_tab_if_edge_window(),
            log_level: LogLevel::default(),
        }
    }
}
