//! Remembered tab positions that let a relocation be reversed.
//!
//! Two independent tables, both alive for the lifetime of the process only:
//!
//! - [`ToggleMemory`]: one entry per popped-out tab, recording the window and
//!   slot it left plus the geometry to recreate that window if it is gone.
//! - [`MoveMemory`]: the last index a tab held in every window it has been
//!   moved out of, so returning to that window restores the old slot.

use crate::platform::{Geometry, TabId, WindowId};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Where a popped-out tab came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Origin {
    pub window_id: WindowId,
    pub index: usize,
}

/// Toggle memory entry for one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleEntry {
    /// Absent when the tab was already detached before tab-shuttle saw it.
    pub origin: Option<Origin>,
    pub geometry: Geometry,
    pub incognito: bool,
}

/// Popped-out tabs, keyed by tab id. At most one entry per tab.
#[derive(Debug, Default)]
pub struct ToggleMemory {
    entries: HashMap<TabId, ToggleEntry>,
}

impl ToggleMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an entry, replacing any previous one for the tab.
    pub fn remember(&mut self, tab_id: TabId, entry: ToggleEntry) {
        if self.entries.insert(tab_id, entry).is_some() {
            log::warn!("Replaced stale toggle entry for tab {}", tab_id);
        }
    }

    pub fn get(&self, tab_id: TabId) -> Option<&ToggleEntry> {
        self.entries.get(&tab_id)
    }

    pub fn contains(&self, tab_id: TabId) -> bool {
        self.entries.contains_key(&tab_id)
    }

    pub fn forget(&mut self, tab_id: TabId) -> Option<ToggleEntry> {
        self.entries.remove(&tab_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Last index of a tab in each window it has left, keyed by
/// `(tab id, window id)`. Entries are overwritten, never removed.
#[derive(Debug, Default)]
pub struct MoveMemory {
    indices: HashMap<(TabId, WindowId), usize>,
}

impl MoveMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tab_id: TabId, window_id: WindowId, index: usize) {
        self.indices.insert((tab_id, window_id), index);
    }

    pub fn index_in(&self, tab_id: TabId, window_id: WindowId) -> Option<usize> {
        self.indices.get(&(tab_id, window_id)).copied()
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Both tables together, as owned by the dispatcher.
///
/// Each table has its own lock. Guards are taken for a single lookup or
/// write and are never held across an `.await`.
#[derive(Debug, Default)]
pub struct PositionMemory {
    pub toggles: Mutex<ToggleMemory>,
    pub moves: Mutex<MoveMemory>,
}

impl PositionMemory {
    pub fn new() -> Self {
        Self::default()
    }
}
