//! Trigger dispatcher: the coordinating process that owns the position
//! memory and routes every trigger to its engine.
//!
//! Triggers normally arrive one at a time and each runs to completion. If
//! two do arrive together, work on the same tab id is serialized through a
//! per-tab async lock so the toggle memory never sees two pops of one tab.

use crate::command::{Action, Trigger};
use crate::error::ShuttleError;
use crate::platform::{Platform, Tab, TabId};
use crate::position_memory::PositionMemory;
use crate::{navigation, popup, relocation};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OwnedMutexGuard;

/// Per-tab async locks.
#[derive(Debug, Default)]
pub struct TabLocks {
    locks: Mutex<HashMap<TabId, Arc<tokio::sync::Mutex<()>>>>,
}

impl TabLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait until no other trigger is working on `tab_id`.
    ///
    /// Locks nobody holds or waits on are dropped from the map on the way.
    pub async fn acquire(&self, tab_id: TabId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            locks.retain(|id, lock| *id == tab_id || Arc::strong_count(lock) > 1);
            Arc::clone(locks.entry(tab_id).or_default())
        };
        lock.lock_owned().await
    }

    /// Number of tab ids currently tracked.
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}

/// Routes triggers to the navigation, relocation and popup engines.
pub struct Dispatcher<P: Platform> {
    platform: P,
    memory: PositionMemory,
    tab_locks: TabLocks,
}

impl<P: Platform> Dispatcher<P> {
    pub fn new(platform: P) -> Self {
        Self {
            platform,
            memory: PositionMemory::new(),
            tab_locks: TabLocks::new(),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn memory(&self) -> &PositionMemory {
        &self.memory
    }

    /// Handle one trigger to completion.
    ///
    /// Triggers without a tab fall back to the active tab of the focused
    /// window; when there is none the trigger does nothing. The tab is read
    /// again once its lock is held, so engines always see its current window
    /// and index.
    pub async fn dispatch(&self, trigger: Trigger) -> Result<(), ShuttleError> {
        let Some(action) = trigger.action() else {
            log::debug!("Ignoring trigger {:?}", trigger);
            return Ok(());
        };

        let tab = match trigger.tab() {
            Some(tab) => tab.clone(),
            None => match popup::current_tab(&self.platform).await? {
                Some(tab) => tab,
                None => {
                    log::debug!("No current tab for {:?}, nothing to do", action);
                    return Ok(());
                }
            },
        };

        let _guard = self.tab_locks.acquire(tab.id).await;
        // A trigger queued behind the lock may carry a stale window and index
        let tab = self.platform.tab(tab.id).await?;
        log::info!("Handling {:?} for tab {}", action, tab.id);
        self.run(action, &tab).await?;
        Ok(())
    }

    async fn run(&self, action: Action, tab: &Tab) -> Result<(), ShuttleError> {
        match action {
            Action::FocusTab(direction) => {
                let settings = self.platform.settings().await?;
                navigation::focus_prev_next_tab(&self.platform, direction, tab, &settings).await?;
            }
            Action::MoveWithinWindow(side) => {
                relocation::move_tab_left_right(&self.platform, side, tab).await?;
            }
            Action::MoveToWindow(direction) => {
                relocation::move_tab_to_adjacent_window(
                    &self.platform,
                    &self.memory.moves,
                    direction,
                    tab,
                )
                .await?;
            }
            Action::TogglePopup => {
                popup::toggle_tab_in_popup(&self.platform, &self.memory.toggles, Some(tab.id))
                    .await?;
            }
        }
        Ok(())
    }
}
