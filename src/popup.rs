//! Toggle a tab in and out of a detached popup window.
//!
//! Popping a tab out records where it came from in the [`ToggleMemory`];
//! toggling the same tab again puts it back there, or into a fresh normal
//! window at the old geometry when the origin window has been closed.

use crate::platform::{
    CreateWindow, MoveTarget, Platform, PlatformResult, Tab, TabId, TabPosition, TabQuery, Window,
    WindowType,
};
use crate::position_memory::{Origin, ToggleEntry, ToggleMemory};
use parking_lot::Mutex;

/// Active tab of the focused window, if there is one.
pub async fn current_tab<P: Platform>(platform: &P) -> PlatformResult<Option<Tab>> {
    Ok(platform
        .query_tabs(TabQuery::active_in_current_window())
        .await?
        .into_iter()
        .next())
}

/// Toggle `tab_id` (or the current tab when `None`) between its window and a
/// popup window.
///
/// A tab that already sits in a popup or app window the toggle memory knows
/// nothing about is restored into a normal window at that window's
/// geometry.
pub async fn toggle_tab_in_popup<P: Platform>(
    platform: &P,
    toggles: &Mutex<ToggleMemory>,
    tab_id: Option<TabId>,
) -> PlatformResult<()> {
    let tab = match tab_id {
        Some(id) => platform.tab(id).await?,
        None => match current_tab(platform).await? {
            Some(tab) => tab,
            None => {
                log::debug!("No active tab in the current window, nothing to toggle");
                return Ok(());
            }
        },
    };

    let popped = toggles.lock().contains(tab.id);
    if popped {
        return restore_tab(platform, toggles, tab.id).await;
    }

    let window = platform.window(tab.window_id).await?;

    if window.window_type.is_detached() {
        log::debug!(
            "Tab {} is already in a {:?} window, docking it",
            tab.id,
            window.window_type
        );
        toggles.lock().remember(
            tab.id,
            ToggleEntry {
                origin: None,
                geometry: window.geometry,
                incognito: window.incognito,
            },
        );
        return restore_tab(platform, toggles, tab.id).await;
    }

    open_tab_in_popup(platform, toggles, &tab, &window).await
}

async fn open_tab_in_popup<P: Platform>(
    platform: &P,
    toggles: &Mutex<ToggleMemory>,
    tab: &Tab,
    window: &Window,
) -> PlatformResult<()> {
    let popup = platform
        .create_window(CreateWindow {
            tab_id: tab.id,
            window_type: WindowType::Popup,
            geometry: Some(window.geometry),
            incognito: window.incognito,
            focused: true,
        })
        .await?;

    log::info!(
        "Popped tab {} out of window {} (index {}) into popup {}",
        tab.id,
        window.id,
        tab.index,
        popup.id
    );
    toggles.lock().remember(
        tab.id,
        ToggleEntry {
            origin: Some(Origin {
                window_id: window.id,
                index: tab.index,
            }),
            geometry: window.geometry,
            incognito: window.incognito,
        },
    );
    Ok(())
}

async fn restore_tab<P: Platform>(
    platform: &P,
    toggles: &Mutex<ToggleMemory>,
    tab_id: TabId,
) -> PlatformResult<()> {
    let Some(entry) = toggles.lock().get(tab_id).copied() else {
        return Ok(());
    };

    let origin = match entry.origin {
        Some(origin) => focus_origin(platform, origin).await?,
        None => None,
    };

    match origin {
        Some(origin) => {
            log::info!(
                "Restoring tab {} to window {} at index {}",
                tab_id,
                origin.window_id,
                origin.index
            );
            platform
                .move_tab(
                    tab_id,
                    MoveTarget::to_window(origin.window_id, TabPosition::At(origin.index)),
                )
                .await?;
        }
        None => {
            log::info!(
                "Restoring tab {} into a new window at {:?}",
                tab_id,
                entry.geometry
            );
            platform
                .create_window(CreateWindow {
                    tab_id,
                    window_type: WindowType::Normal,
                    geometry: Some(entry.geometry),
                    incognito: entry.incognito,
                    focused: true,
                })
                .await?;
        }
    }

    toggles.lock().forget(tab_id);
    platform.activate_tab(tab_id).await
}

/// Focus the origin window. `Ok(None)` when it no longer exists.
async fn focus_origin<P: Platform>(platform: &P, origin: Origin) -> PlatformResult<Option<Origin>> {
    let focused = async {
        let window = platform.window(origin.window_id).await?;
        platform.focus_window(window.id).await
    }
    .await;

    match focused {
        Ok(()) => Ok(Some(origin)),
        Err(e) if e.is_not_found() => {
            log::warn!(
                "Origin window {} is gone, falling back to a new window",
                origin.window_id
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
