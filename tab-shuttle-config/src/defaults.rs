//! Default value functions used as `#[serde(default = "...")]` attributes on
//! `Settings` fields.

pub fn jump_windows() -> bool {
    true
}

pub fn focus_first_last_tab_if_edge_window() -> bool {
    true
}
