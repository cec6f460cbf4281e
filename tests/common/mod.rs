//! Shared integration test helpers for tab-shuttle.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{host, tab};
//! ```
//!
//! The `#[allow(dead_code)]` attribute suppresses warnings when only a
//! subset of helpers are used per file.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use tab_shuttle::platform::{
    CreateWindow, Geometry, HostSnapshot, MemoryPlatform, MoveTarget, Platform, PlatformError,
    PlatformResult, Settings, Tab, TabId, TabQuery, Window, WindowId, WindowQuery,
    WindowSnapshot,
};

/// Host with the given windows; the first window has focus.
pub fn host(windows: Vec<WindowSnapshot>) -> MemoryPlatform {
    host_with_settings(windows, Settings::default())
}

pub fn host_with_settings(windows: Vec<WindowSnapshot>, settings: Settings) -> MemoryPlatform {
    MemoryPlatform::new(HostSnapshot {
        focused_window: windows.first().map(|w| w.id),
        windows,
        settings,
    })
}

/// Current snapshot of a tab. Panics when the tab is gone.
pub fn tab(platform: &MemoryPlatform, id: TabId) -> Tab {
    platform
        .tab_now(id)
        .unwrap_or_else(|| panic!("tab {id} should exist"))
}

/// Current snapshot of the active tab of a window.
pub fn active_tab(platform: &MemoryPlatform, window_id: WindowId) -> Tab {
    let id = platform
        .active_tab_of(window_id)
        .unwrap_or_else(|| panic!("window {window_id} should have an active tab"));
    tab(platform, id)
}

pub fn geometry(top: i32, left: i32, width: u32, height: u32) -> Geometry {
    Geometry {
        top,
        left,
        width,
        height,
    }
}

pub fn settings(jump_windows: bool, focus_first_last_tab_if_edge_window: bool) -> Settings {
    Settings {
        jump_windows,
        focus_first_last_tab_if_edge_window,
        ..Settings::default()
    }
}

/// Wraps a [`MemoryPlatform`] and fails selected mutations on demand.
#[derive(Debug, Default)]
pub struct FlakyPlatform {
    pub inner: MemoryPlatform,
    pub fail_focus: AtomicBool,
    pub fail_create: AtomicBool,
}

impl FlakyPlatform {
    pub fn new(inner: MemoryPlatform) -> Self {
        Self {
            inner,
            ..Self::default()
        }
    }

    pub fn set_fail_focus(&self, fail: bool) {
        self.fail_focus.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    fn check(flag: &AtomicBool, what: &str) -> PlatformResult<()> {
        if flag.load(Ordering::SeqCst) {
            Err(PlatformError::Failed(format!("{what} denied")))
        } else {
            Ok(())
        }
    }
}

impl Platform for FlakyPlatform {
    async fn windows(&self, query: WindowQuery) -> PlatformResult<Vec<Window>> {
        self.inner.windows(query).await
    }

    async fn window(&self, id: WindowId) -> PlatformResult<Window> {
        self.inner.window(id).await
    }

    async fn tab(&self, id: TabId) -> PlatformResult<Tab> {
        self.inner.tab(id).await
    }

    async fn query_tabs(&self, query: TabQuery) -> PlatformResult<Vec<Tab>> {
        self.inner.query_tabs(query).await
    }

    async fn move_tab(&self, id: TabId, target: MoveTarget) -> PlatformResult<Tab> {
        self.inner.move_tab(id, target).await
    }

    async fn activate_tab(&self, id: TabId) -> PlatformResult<()> {
        self.inner.activate_tab(id).await
    }

    async fn focus_window(&self, id: WindowId) -> PlatformResult<()> {
        Self::check(&self.fail_focus, "focus")?;
        self.inner.focus_window(id).await
    }

    async fn create_window(&self, request: CreateWindow) -> PlatformResult<Window> {
        Self::check(&self.fail_create, "window creation")?;
        self.inner.create_window(request).await
    }

    async fn settings(&self) -> PlatformResult<Settings> {
        self.inner.settings().await
    }
}
