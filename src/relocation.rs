//! Move a tab one slot within its window, or into the neighbouring window.

use crate::direction::{Direction, Side};
use crate::platform::{
    CreateWindow, MoveTarget, Platform, PlatformResult, Tab, TabPosition, WindowQuery, WindowType,
};
use crate::position_memory::MoveMemory;
use crate::window_set::WindowSet;
use parking_lot::Mutex;

/// Slot a tab at `index` moves to when shifted to `side` in a strip of
/// `len` tabs. Moving left from the first slot goes to the end; moving right
/// from the last slot goes to the start.
pub fn shifted_position(side: Side, index: usize, len: usize) -> TabPosition {
    match side {
        Side::Left if index == 0 => TabPosition::End,
        Side::Left => TabPosition::At(index - 1),
        Side::Right if index + 1 < len => TabPosition::At(index + 1),
        Side::Right => TabPosition::At(0),
    }
}

/// Move `tab` one slot to the left or right within its own window,
/// wrapping around at the ends.
pub async fn move_tab_left_right<P: Platform>(
    platform: &P,
    side: Side,
    tab: &Tab,
) -> PlatformResult<()> {
    let window = platform.window(tab.window_id).await?;
    let Some(index) = window.position_of(tab.id) else {
        log::debug!("Tab {} is no longer in window {}", tab.id, window.id);
        return Ok(());
    };

    let position = shifted_position(side, index, window.tabs.len());
    log::debug!("Move tab {} {}: {} -> {:?}", tab.id, side, index, position);
    platform
        .move_tab(tab.id, MoveTarget::within_window(position))
        .await?;
    Ok(())
}

/// Move `tab` into the previous/next eligible normal window.
///
/// The tab's current slot is remembered first, so a later move back into
/// this window puts it where it was. When there is no neighbouring window in
/// `direction` and the tab shares its window with others, the tab gets a new
/// window of its own instead. A tab alone in its window always joins the
/// neighbour, wrapping around the window list, as long as that neighbour is
/// a different window.
pub async fn move_tab_to_adjacent_window<P: Platform>(
    platform: &P,
    moves: &Mutex<MoveMemory>,
    direction: Direction,
    tab: &Tab,
) -> PlatformResult<()> {
    let windows = WindowSet::eligible(
        platform.windows(WindowQuery::normal_only()).await?,
        tab.incognito,
    );
    let window = platform.window(tab.window_id).await?;

    moves.lock().record(tab.id, window.id, tab.index);

    let current = windows.position(window.id);
    let is_lonely_tab = window.tabs.len() == 1;
    let has_neighbour = match direction {
        Direction::Prev => current.is_some_and(|i| i > 0),
        Direction::Next => current.map_or(!windows.is_empty(), |i| i + 1 < windows.len()),
    };

    let target = windows
        .neighbour(current, direction)
        .and_then(|i| windows.get(i))
        .filter(|w| w.id != window.id);

    match target {
        Some(target) if is_lonely_tab || has_neighbour => {
            let position = moves
                .lock()
                .index_in(tab.id, target.id)
                .map_or(TabPosition::End, TabPosition::At);
            log::info!(
                "Moving tab {} from window {} to {} window {} at {:?}",
                tab.id,
                window.id,
                direction,
                target.id,
                position
            );
            platform
                .move_tab(tab.id, MoveTarget::to_window(target.id, position))
                .await?;
            platform.focus_window(target.id).await?;
            platform.activate_tab(tab.id).await?;
        }
        _ => {
            log::info!(
                "No {} window for tab {}, opening it in a new window",
                direction,
                tab.id
            );
            platform
                .create_window(CreateWindow {
                    tab_id: tab.id,
                    window_type: WindowType::Normal,
                    geometry: None,
                    incognito: window.incognito,
                    focused: true,
                })
                .await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_wraps_to_end() {
        assert_eq!(shifted_position(Side::Left, 0, 3), TabPosition::End);
        assert_eq!(shifted_position(Side::Left, 2, 3), TabPosition::At(1));
    }

    #[test]
    fn right_wraps_to_start() {
        assert_eq!(shifted_position(Side::Right, 2, 3), TabPosition::At(0));
        assert_eq!(shifted_position(Side::Right, 0, 3), TabPosition::At(1));
    }

    #[test]
    fn single_tab_stays_put_either_way() {
        assert_eq!(shifted_position(Side::Right, 0, 1), TabPosition::At(0));
        assert_eq!(shifted_position(Side::Left, 0, 1), TabPosition::End);
    }
}
