//! Host platform abstraction for tab-shuttle.
//!
//! The engines never talk to a browser directly. Everything they need from
//! the host (enumerating windows and tabs, moving and activating tabs,
//! focusing and creating windows, reading settings) goes through the
//! [`Platform`] trait.
//!
//! # Conventions
//!
//! - Windows returned by [`Platform::windows`] and [`Platform::window`] are
//!   always populated with their tabs, in display order.
//! - The order of [`Platform::windows`] is the host's native enumeration
//!   order. tab-shuttle never reorders it.
//! - Lookups of ids that no longer exist fail with [`PlatformError::NotFound`].
//!
//! # Contents
//!
//! | Item | Description |
//! |---|---|
//! | [`Platform`] | Capability surface consumed by the engines |
//! | [`MemoryPlatform`] | In-memory host over a serializable snapshot |
//! | [`types`] | Tab, window and request types |

mod error;
pub mod memory;
pub mod types;

use std::future::Future;

pub use error::{PlatformError, PlatformResult};
pub use memory::{HostSnapshot, MemoryPlatform, TabSnapshot, WindowSnapshot};
pub use tab_shuttle_config::Settings;
pub use types::{
    CreateWindow, Geometry, MoveTarget, Tab, TabId, TabPosition, TabQuery, Window, WindowId,
    WindowQuery, WindowState, WindowType,
};

/// Capability surface of the host that owns the live tab/window graph.
///
/// Implementations may suspend on every call. The returned futures are
/// `Send` so a dispatcher can run on a multi-threaded runtime.
pub trait Platform: Send + Sync {
    /// Enumerate windows (populated with their tabs), optionally restricted
    /// to some window types.
    fn windows(&self, query: WindowQuery)
    -> impl Future<Output = PlatformResult<Vec<Window>>> + Send;

    /// Get one window, populated with its tabs.
    fn window(&self, id: WindowId) -> impl Future<Output = PlatformResult<Window>> + Send;

    /// Get one tab.
    fn tab(&self, id: TabId) -> impl Future<Output = PlatformResult<Tab>> + Send;

    /// Enumerate tabs matching `query`.
    fn query_tabs(&self, query: TabQuery)
    -> impl Future<Output = PlatformResult<Vec<Tab>>> + Send;

    /// Move a tab within its window or into another window.
    fn move_tab(
        &self,
        id: TabId,
        target: MoveTarget,
    ) -> impl Future<Output = PlatformResult<Tab>> + Send;

    /// Make a tab the active tab of its window.
    fn activate_tab(&self, id: TabId) -> impl Future<Output = PlatformResult<()>> + Send;

    /// Give a window the system-wide focus.
    fn focus_window(&self, id: WindowId) -> impl Future<Output = PlatformResult<()>> + Send;

    /// Create a window seeded with an existing tab.
    fn create_window(
        &self,
        request: CreateWindow,
    ) -> impl Future<Output = PlatformResult<Window>> + Send;

    /// Read the persisted navigation settings.
    fn settings(&self) -> impl Future<Output = PlatformResult<Settings>> + Send;
}
