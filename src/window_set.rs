//! The eligible window set: windows that take part in navigation.
//!
//! A window is eligible when its state is normal or maximized and its
//! incognito flag matches the triggering tab. Order is the host's native
//! enumeration order; every window index used by the engines is an index
//! into this filtered sequence.

use crate::direction::Direction;
use crate::platform::{Window, WindowId};

#[derive(Debug, Clone, Default)]
pub struct WindowSet {
    windows: Vec<Window>,
}

impl WindowSet {
    /// Filter `windows` down to the ones eligible for a tab with the given
    /// incognito flag.
    pub fn eligible(windows: Vec<Window>, incognito: bool) -> Self {
        let windows: Vec<Window> = windows
            .into_iter()
            .filter(|w| w.state.is_navigable() && w.incognito == incognito)
            .collect();
        log::debug!(
            "Eligible window set: {:?}",
            windows.iter().map(|w| w.id).collect::<Vec<_>>()
        );
        Self { windows }
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Window> {
        self.windows.get(index)
    }

    /// Position of a window in the set.
    pub fn position(&self, id: WindowId) -> Option<usize> {
        self.windows.iter().position(|w| w.id == id)
    }

    /// Whether `index` is the first or last window of the set.
    pub fn is_edge(&self, index: usize) -> bool {
        index == 0 || index + 1 == self.windows.len()
    }

    /// Index of the neighbour of `current` in `direction`, wrapping around.
    /// `None` only when the set is empty.
    pub fn neighbour(&self, current: Option<usize>, direction: Direction) -> Option<usize> {
        if self.windows.is_empty() {
            return None;
        }
        Some(direction.step_from(current, self.windows.len()))
    }
}
