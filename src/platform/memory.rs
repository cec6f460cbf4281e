//! In-memory host platform.
//!
//! [`MemoryPlatform`] owns a [`HostSnapshot`] (ordered windows with ordered
//! tabs, the focused window and the settings) and applies the same mutation
//! semantics a tabbed browser does: a window that loses its last tab closes,
//! the neighbour of a departing active tab becomes active, new windows are
//! appended to the enumeration order. Tests build fabricated snapshots with
//! it and the CLI driver loads one from JSON.

use super::error::{PlatformError, PlatformResult};
use super::types::{
    CreateWindow, Geometry, MoveTarget, Tab, TabId, TabPosition, TabQuery, Window, WindowId,
    WindowQuery, WindowState, WindowType,
};
use super::{Platform, Settings};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

/// Serializable state of the whole host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HostSnapshot {
    /// Window holding the system-wide focus.
    #[serde(default)]
    pub focused_window: Option<WindowId>,
    /// Windows in native enumeration order.
    pub windows: Vec<WindowSnapshot>,
    #[serde(default)]
    pub settings: Settings,
}

/// Serializable state of one window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowSnapshot {
    pub id: WindowId,
    #[serde(default)]
    pub state: WindowState,
    #[serde(default, rename = "type")]
    pub window_type: WindowType,
    #[serde(default)]
    pub geometry: Geometry,
    #[serde(default)]
    pub incognito: bool,
    /// Tabs in display order.
    pub tabs: Vec<TabSnapshot>,
}

/// Serializable state of one tab. Its index and window come from where it
/// sits in the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub id: TabId,
    #[serde(default)]
    pub active: bool,
}

impl WindowSnapshot {
    /// A normal window with the given tabs; the first one is active.
    pub fn normal(id: WindowId, tab_ids: &[TabId]) -> Self {
        Self {
            id,
            state: WindowState::Normal,
            window_type: WindowType::Normal,
            geometry: Geometry::default(),
            incognito: false,
            tabs: tab_ids
                .iter()
                .enumerate()
                .map(|(i, &id)| TabSnapshot { id, active: i == 0 })
                .collect(),
        }
    }

    /// Mark `tab_id` as the only active tab.
    pub fn with_active(mut self, tab_id: TabId) -> Self {
        for tab in &mut self.tabs {
            tab.active = tab.id == tab_id;
        }
        self
    }

    pub fn with_type(mut self, window_type: WindowType) -> Self {
        self.window_type = window_type;
        self
    }

    pub fn with_state(mut self, state: WindowState) -> Self {
        self.state = state;
        self
    }

    pub fn with_geometry(mut self, geometry: Geometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn incognito(mut self) -> Self {
        self.incognito = true;
        self
    }

    fn to_window(&self, focused: bool) -> Window {
        Window {
            id: self.id,
            tabs: self
                .tabs
                .iter()
                .enumerate()
                .map(|(index, t)| self.tab_at(index, t))
                .collect(),
            state: self.state,
            window_type: self.window_type,
            geometry: self.geometry,
            incognito: self.incognito,
            focused,
        }
    }

    fn tab_at(&self, index: usize, tab: &TabSnapshot) -> Tab {
        Tab {
            id: tab.id,
            index,
            window_id: self.id,
            active: tab.active,
            incognito: self.incognito,
        }
    }

    /// Keep exactly one active tab in a non-empty window, preferring the
    /// first one already flagged.
    fn normalize_active(&mut self) {
        let keep = self.tabs.iter().position(|t| t.active).unwrap_or(0);
        for (i, tab) in self.tabs.iter_mut().enumerate() {
            tab.active = i == keep;
        }
    }
}

impl HostSnapshot {
    /// Window considered "current": the focused one, else the first window.
    fn current_window_id(&self) -> Option<WindowId> {
        self.focused_window
            .filter(|id| self.windows.iter().any(|w| w.id == *id))
            .or_else(|| self.windows.first().map(|w| w.id))
    }

    fn window_index(&self, id: WindowId) -> PlatformResult<usize> {
        self.windows
            .iter()
            .position(|w| w.id == id)
            .ok_or(PlatformError::window_not_found(id))
    }

    /// `(window index, tab index)` of a tab.
    fn locate_tab(&self, id: TabId) -> PlatformResult<(usize, usize)> {
        self.windows
            .iter()
            .enumerate()
            .find_map(|(w, win)| win.tabs.iter().position(|t| t.id == id).map(|t| (w, t)))
            .ok_or(PlatformError::tab_not_found(id))
    }

    fn window_view(&self, index: usize) -> Window {
        let window = &self.windows[index];
        window.to_window(self.focused_window == Some(window.id))
    }

    fn next_window_id(&self) -> WindowId {
        self.windows.iter().map(|w| w.id).max().unwrap_or(0) + 1
    }

    /// Take a tab out of its window, re-activating a neighbour and closing
    /// the window when it becomes empty.
    fn detach_tab(&mut self, window_index: usize, tab_index: usize) -> TabSnapshot {
        let window = &mut self.windows[window_index];
        let tab = window.tabs.remove(tab_index);

        if window.tabs.is_empty() {
            let closed = self.windows.remove(window_index);
            if self.focused_window == Some(closed.id) {
                self.focused_window = None;
            }
            log::debug!("Window {} closed after losing its last tab", closed.id);
        } else if tab.active {
            let next = tab_index.min(window.tabs.len() - 1);
            window.tabs[next].active = true;
        }

        tab
    }
}

/// In-memory implementation of [`Platform`].
#[derive(Debug, Default)]
pub struct MemoryPlatform {
    state: Mutex<HostSnapshot>,
}

impl MemoryPlatform {
    /// Build a host from a snapshot, normalizing active flags.
    pub fn new(mut snapshot: HostSnapshot) -> Self {
        snapshot.windows.retain(|w| !w.tabs.is_empty());
        for window in &mut snapshot.windows {
            window.normalize_active();
        }
        Self {
            state: Mutex::new(snapshot),
        }
    }

    /// Parse a JSON snapshot.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> HostSnapshot {
        self.state.lock().clone()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.state.lock())
    }

    pub fn set_settings(&self, settings: Settings) {
        self.state.lock().settings = settings;
    }

    /// Current view of a window, populated with tabs.
    pub fn window_now(&self, id: WindowId) -> Option<Window> {
        let state = self.state.lock();
        let index = state.window_index(id).ok()?;
        Some(state.window_view(index))
    }

    /// Current view of a tab.
    pub fn tab_now(&self, id: TabId) -> Option<Tab> {
        let state = self.state.lock();
        let (w, t) = state.locate_tab(id).ok()?;
        let window = &state.windows[w];
        Some(window.tab_at(t, &window.tabs[t]))
    }

    /// Tab ids per window, in enumeration and display order.
    pub fn layout(&self) -> Vec<(WindowId, Vec<TabId>)> {
        self.state
            .lock()
            .windows
            .iter()
            .map(|w| (w.id, w.tabs.iter().map(|t| t.id).collect()))
            .collect()
    }

    pub fn focused_window(&self) -> Option<WindowId> {
        self.state.lock().focused_window
    }

    /// Id of the active tab of a window.
    pub fn active_tab_of(&self, window_id: WindowId) -> Option<TabId> {
        let state = self.state.lock();
        let index = state.window_index(window_id).ok()?;
        state.windows[index]
            .tabs
            .iter()
            .find(|t| t.active)
            .map(|t| t.id)
    }
}

impl Platform for MemoryPlatform {
    async fn windows(&self, query: WindowQuery) -> PlatformResult<Vec<Window>> {
        let state = self.state.lock();
        Ok((0..state.windows.len())
            .filter(|&i| query.matches(state.windows[i].window_type))
            .map(|i| state.window_view(i))
            .collect())
    }

    async fn window(&self, id: WindowId) -> PlatformResult<Window> {
        let state = self.state.lock();
        let index = state.window_index(id)?;
        Ok(state.window_view(index))
    }

    async fn tab(&self, id: TabId) -> PlatformResult<Tab> {
        self.tab_now(id).ok_or(PlatformError::tab_not_found(id))
    }

    async fn query_tabs(&self, query: TabQuery) -> PlatformResult<Vec<Tab>> {
        let state = self.state.lock();
        let current = state.current_window_id();
        Ok(state
            .windows
            .iter()
            .filter(|w| !query.current_window || Some(w.id) == current)
            .flat_map(|w| w.tabs.iter().enumerate().map(move |(i, t)| w.tab_at(i, t)))
            .filter(|t| query.active.is_none_or(|active| t.active == active))
            .collect())
    }

    async fn move_tab(&self, id: TabId, target: MoveTarget) -> PlatformResult<Tab> {
        let mut state = self.state.lock();
        let (src_w, src_t) = state.locate_tab(id)?;
        let source_id = state.windows[src_w].id;
        let dest_id = target.window_id.unwrap_or(source_id);
        let dest_w = state.window_index(dest_id)?;

        if dest_id == source_id {
            let window = &mut state.windows[src_w];
            let tab = window.tabs.remove(src_t);
            let slot = match target.position {
                TabPosition::At(i) => i.min(window.tabs.len()),
                TabPosition::End => window.tabs.len(),
            };
            window.tabs.insert(slot, tab);
            log::info!("Moved tab {} from index {} to {}", id, src_t, slot);
            return Ok(window.tab_at(slot, &tab));
        }

        if state.windows[src_w].incognito != state.windows[dest_w].incognito {
            return Err(PlatformError::Failed(format!(
                "tab {id} cannot move between incognito and regular windows"
            )));
        }

        let mut tab = state.detach_tab(src_w, src_t);
        // Indices may have shifted if the source window closed
        let dest_w = state.window_index(dest_id)?;
        let window = &mut state.windows[dest_w];
        tab.active = window.tabs.is_empty();
        let slot = match target.position {
            TabPosition::At(i) => i.min(window.tabs.len()),
            TabPosition::End => window.tabs.len(),
        };
        window.tabs.insert(slot, tab);
        log::info!(
            "Moved tab {} from window {} to window {} at index {}",
            id,
            source_id,
            dest_id,
            slot
        );
        Ok(window.tab_at(slot, &tab))
    }

    async fn activate_tab(&self, id: TabId) -> PlatformResult<()> {
        let mut state = self.state.lock();
        let (w, _) = state.locate_tab(id)?;
        for tab in &mut state.windows[w].tabs {
            tab.active = tab.id == id;
        }
        log::debug!("Activated tab {}", id);
        Ok(())
    }

    async fn focus_window(&self, id: WindowId) -> PlatformResult<()> {
        let mut state = self.state.lock();
        state.window_index(id)?;
        state.focused_window = Some(id);
        log::debug!("Focused window {}", id);
        Ok(())
    }

    async fn create_window(&self, request: CreateWindow) -> PlatformResult<Window> {
        let mut state = self.state.lock();
        let (src_w, src_t) = state.locate_tab(request.tab_id)?;
        let source = &state.windows[src_w];
        if source.incognito != request.incognito {
            return Err(PlatformError::Failed(format!(
                "tab {} cannot move between incognito and regular windows",
                request.tab_id
            )));
        }
        let geometry = request.geometry.unwrap_or(source.geometry);
        let id = state.next_window_id();

        let mut tab = state.detach_tab(src_w, src_t);
        tab.active = true;
        state.windows.push(WindowSnapshot {
            id,
            state: WindowState::Normal,
            window_type: request.window_type,
            geometry,
            incognito: request.incognito,
            tabs: vec![tab],
        });
        if request.focused {
            state.focused_window = Some(id);
        }
        log::info!(
            "Created {:?} window {} for tab {}",
            request.window_type,
            id,
            request.tab_id
        );

        let index = state.windows.len() - 1;
        Ok(state.window_view(index))
    }

    async fn settings(&self) -> PlatformResult<Settings> {
        Ok(self.state.lock().settings)
    }
}
