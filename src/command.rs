//! Command identifiers and the triggers that carry them into the
//! dispatcher.
//!
//! | Command id | Action |
//! |---|---|
//! | `aa_focusPrevTab` | Focus previous tab |
//! | `ab_focusNextTab` | Focus next tab |
//! | `a_toggleTabInPopup` | Toggle tab in popup |
//! | `b_moveTabToLeft` | Move tab left |
//! | `c_moveTabToRight` | Move tab right |
//! | `d_moveTabPrevWindow` | Move tab to previous window |
//! | `e_moveTabNextWindow` | Move tab to next window |
//!
//! The context menu item [`TOGGLE_MENU_ITEM_ID`] and the toolbar icon both
//! toggle the popup.

use crate::direction::{Direction, Side};
use crate::error::ShuttleError;
use crate::platform::Tab;
use std::fmt;
use std::str::FromStr;

/// Id of the context menu entry that toggles the popup.
pub const TOGGLE_MENU_ITEM_ID: &str = "toggle-tab-in-popup";

/// Title of the context menu entry that toggles the popup.
pub const TOGGLE_MENU_ITEM_TITLE: &str = "Toggle tab in Popup";

/// Keyboard commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    FocusPrevTab,
    FocusNextTab,
    ToggleTabInPopup,
    MoveTabToLeft,
    MoveTabToRight,
    MoveTabPrevWindow,
    MoveTabNextWindow,
}

/// What a trigger asks the engines to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    FocusTab(Direction),
    MoveWithinWindow(Side),
    MoveToWindow(Direction),
    TogglePopup,
}

impl Command {
    pub const ALL: [Command; 7] = [
        Command::FocusPrevTab,
        Command::FocusNextTab,
        Command::ToggleTabInPopup,
        Command::MoveTabToLeft,
        Command::MoveTabToRight,
        Command::MoveTabPrevWindow,
        Command::MoveTabNextWindow,
    ];

    /// Identifier the host delivers for this command.
    pub fn id(self) -> &'static str {
        match self {
            Command::FocusPrevTab => "aa_focusPrevTab",
            Command::FocusNextTab => "ab_focusNextTab",
            Command::ToggleTabInPopup => "a_toggleTabInPopup",
            Command::MoveTabToLeft => "b_moveTabToLeft",
            Command::MoveTabToRight => "c_moveTabToRight",
            Command::MoveTabPrevWindow => "d_moveTabPrevWindow",
            Command::MoveTabNextWindow => "e_moveTabNextWindow",
        }
    }

    /// Look a command up by its identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }

    pub fn action(self) -> Action {
        match self {
            Command::FocusPrevTab => Action::FocusTab(Direction::Prev),
            Command::FocusNextTab => Action::FocusTab(Direction::Next),
            Command::ToggleTabInPopup => Action::TogglePopup,
            Command::MoveTabToLeft => Action::MoveWithinWindow(Side::Left),
            Command::MoveTabToRight => Action::MoveWithinWindow(Side::Right),
            Command::MoveTabPrevWindow => Action::MoveToWindow(Direction::Prev),
            Command::MoveTabNextWindow => Action::MoveToWindow(Direction::Next),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Command {
    type Err = ShuttleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_id(s).ok_or_else(|| ShuttleError::UnknownCommand(s.to_string()))
    }
}

/// An event delivered into the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Keyboard shortcut, with the tab that had focus when it fired.
    Command { command: Command, tab: Option<Tab> },
    /// Context menu click on a tab.
    MenuClick {
        menu_item_id: String,
        tab: Option<Tab>,
    },
    /// Toolbar icon click.
    IconClick,
}

impl Trigger {
    /// Action this trigger maps to. `None` for menu items tab-shuttle did
    /// not register.
    pub fn action(&self) -> Option<Action> {
        match self {
            Trigger::Command { command, .. } => Some(command.action()),
            Trigger::MenuClick { menu_item_id, .. } if menu_item_id == TOGGLE_MENU_ITEM_ID => {
                Some(Action::TogglePopup)
            }
            Trigger::MenuClick { .. } => None,
            Trigger::IconClick => Some(Action::TogglePopup),
        }
    }

    /// Tab the trigger refers to, if the host supplied one.
    pub fn tab(&self) -> Option<&Tab> {
        match self {
            Trigger::Command { tab, .. } | Trigger::MenuClick { tab, .. } => tab.as_ref(),
            Trigger::IconClick => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_parse() {
        for command in Command::ALL {
            assert_eq!(command.id().parse::<Command>().unwrap(), command);
        }
    }

    #[test]
    fn unknown_id_is_an_error() {
        let err = "f_closeTab".parse::<Command>().unwrap_err();
        assert!(matches!(err, ShuttleError::UnknownCommand(id) if id == "f_closeTab"));
    }

    #[test]
    fn commands_map_to_actions() {
        assert_eq!(
            Command::FocusNextTab.action(),
            Action::FocusTab(Direction::Next)
        );
        assert_eq!(
            Command::MoveTabToLeft.action(),
            Action::MoveWithinWindow(Side::Left)
        );
        assert_eq!(
            Command::MoveTabPrevWindow.action(),
            Action::MoveToWindow(Direction::Prev)
        );
        assert_eq!(Command::ToggleTabInPopup.action(), Action::TogglePopup);
    }

    #[test]
    fn menu_and_icon_toggle_the_popup() {
        let menu = Trigger::MenuClick {
            menu_item_id: TOGGLE_MENU_ITEM_ID.to_string(),
            tab: None,
        };
        assert_eq!(menu.action(), Some(Action::TogglePopup));
        assert_eq!(Trigger::IconClick.action(), Some(Action::TogglePopup));

        let other = Trigger::MenuClick {
            menu_item_id: "something-else".to_string(),
            tab: None,
        };
        assert_eq!(other.action(), None);
    }
}
