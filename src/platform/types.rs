//! Tab and window snapshot types plus the request types of the
//! [`super::Platform`] mutations.

use serde::{Deserialize, Serialize};

/// Opaque tab identity, unique while the tab is open.
pub type TabId = u64;

/// Opaque window identity.
pub type WindowId = u64;

/// Show state of a window. Only `Normal` and `Maximized` windows take part in
/// navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
    Fullscreen,
    LockedFullscreen,
}

impl WindowState {
    /// Whether a window in this state belongs to the eligible window set.
    pub fn is_navigable(self) -> bool {
        matches!(self, WindowState::Normal | WindowState::Maximized)
    }
}

/// Kind of browser window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WindowType {
    #[default]
    Normal,
    Popup,
    App,
    Devtools,
}

impl WindowType {
    /// Popup and app windows are "detached" from the normal tab strip.
    pub fn is_detached(self) -> bool {
        matches!(self, WindowType::Popup | WindowType::App)
    }
}

/// Screen position and size of a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Geometry {
    pub top: i32,
    pub left: i32,
    pub width: u32,
    pub height: u32,
}

/// Snapshot of one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tab {
    pub id: TabId,
    /// Zero-based position within its window.
    pub index: usize,
    pub window_id: WindowId,
    pub active: bool,
    pub incognito: bool,
}

/// Snapshot of one window with its tabs in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub id: WindowId,
    pub tabs: Vec<Tab>,
    pub state: WindowState,
    pub window_type: WindowType,
    pub geometry: Geometry,
    pub incognito: bool,
    pub focused: bool,
}

impl Window {
    /// Position of a tab in this window's display order.
    pub fn position_of(&self, tab_id: TabId) -> Option<usize> {
        self.tabs.iter().position(|t| t.id == tab_id)
    }

    /// Position of the active tab, if any.
    pub fn active_position(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.active)
    }

    pub fn first_tab(&self) -> Option<&Tab> {
        self.tabs.first()
    }

    pub fn last_tab(&self) -> Option<&Tab> {
        self.tabs.last()
    }
}

/// Filter for [`super::Platform::windows`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WindowQuery {
    /// Only windows of these types; `None` means every type.
    pub types: Option<Vec<WindowType>>,
}

impl WindowQuery {
    /// Every window.
    pub fn all() -> Self {
        Self::default()
    }

    /// Only windows of type `Normal`.
    pub fn normal_only() -> Self {
        Self {
            types: Some(vec![WindowType::Normal]),
        }
    }

    pub fn matches(&self, window_type: WindowType) -> bool {
        self.types
            .as_ref()
            .is_none_or(|types| types.contains(&window_type))
    }
}

/// Filter for [`super::Platform::query_tabs`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabQuery {
    /// Only tabs whose active flag equals this value.
    pub active: Option<bool>,
    /// Only tabs of the focused window.
    pub current_window: bool,
}

impl TabQuery {
    /// The active tab of the focused window.
    pub fn active_in_current_window() -> Self {
        Self {
            active: Some(true),
            current_window: true,
        }
    }
}

/// Destination slot of a moved tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TabPosition {
    /// Insert at this index, clamped to the end of the target window.
    At(usize),
    /// Append after the last tab.
    End,
}

/// Arguments of [`super::Platform::move_tab`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    /// Destination window; `None` keeps the tab in its current window.
    pub window_id: Option<WindowId>,
    pub position: TabPosition,
}

impl MoveTarget {
    /// Reposition within the tab's own window.
    pub fn within_window(position: TabPosition) -> Self {
        Self {
            window_id: None,
            position,
        }
    }

    /// Move into `window_id` at `position`.
    pub fn to_window(window_id: WindowId, position: TabPosition) -> Self {
        Self {
            window_id: Some(window_id),
            position,
        }
    }
}

/// Arguments of [`super::Platform::create_window`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreateWindow {
    /// Existing tab the new window is seeded with.
    pub tab_id: TabId,
    pub window_type: WindowType,
    /// Explicit placement; `None` lets the host choose.
    pub geometry: Option<Geometry>,
    pub incognito: bool,
    pub focused: bool,
}
