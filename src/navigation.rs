//! Focus the previous/next tab, crossing into neighbouring windows at the
//! edges of a tab strip when enabled.

use crate::direction::Direction;
use crate::platform::{Platform, PlatformResult, Settings, Tab, WindowQuery};
use crate::window_set::WindowSet;

/// Activate the tab before/after the active one in `tab`'s window.
///
/// When `tab` is the edge tab in `direction`, `settings.jump_windows` is on
/// and there is more than one eligible window, focus moves to the
/// neighbouring window instead. Landing on the first or last window then
/// activates its first tab (next) or last tab (prev) when
/// `settings.focus_first_last_tab_if_edge_window` is on.
pub async fn focus_prev_next_tab<P: Platform>(
    platform: &P,
    direction: Direction,
    tab: &Tab,
    settings: &Settings,
) -> PlatformResult<()> {
    let window = platform.window(tab.window_id).await?;
    let windows = WindowSet::eligible(platform.windows(WindowQuery::all()).await?, tab.incognito);

    let tab_count = window.tabs.len();
    if tab_count == 0 {
        log::debug!("Window {} has no tabs, nothing to focus", window.id);
        return Ok(());
    }

    let is_edge_tab = direction.is_edge(tab.index, tab_count);

    if !is_edge_tab || !settings.jump_windows || windows.len() <= 1 {
        let next = direction.step_from(window.active_position(), tab_count);
        let target = &window.tabs[next];
        log::debug!(
            "Focus {} tab: window {} index {} -> tab {}",
            direction,
            window.id,
            next,
            target.id
        );
        return platform.activate_tab(target.id).await;
    }

    let current = windows.position(window.id);
    let Some(next_index) = windows.neighbour(current, direction) else {
        return Ok(());
    };
    let Some(next_window) = windows.get(next_index) else {
        return Ok(());
    };

    log::debug!(
        "Focus {} tab crosses from window {} to window {}",
        direction,
        window.id,
        next_window.id
    );
    platform.focus_window(next_window.id).await?;

    if !settings.focus_first_last_tab_if_edge_window || !windows.is_edge(next_index) {
        return Ok(());
    }

    let edge_tab = match direction {
        Direction::Next => next_window.first_tab(),
        Direction::Prev => next_window.last_tab(),
    };
    if let Some(edge_tab) = edge_tab {
        platform.activate_tab(edge_tab.id).await?;
    }
    Ok(())
}
