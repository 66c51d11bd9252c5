//! Root layout computation for page tabs + card + status bar.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Preferred card width; shrinks to fit narrow terminals.
pub const CARD_WIDTH: u16 = 64;
/// Hide the page tabs below this terminal height.
pub const HIDE_TABS_THRESHOLD: u16 = 12;

/// Computed layout regions for a single frame.
pub struct AppLayout {
    /// Page tab row (None when the terminal is too short).
    pub tabs: Option<Rect>,
    /// Main content area.
    pub main: Rect,
    /// Status bar (bottom row).
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let show_tabs = area.height >= HIDE_TABS_THRESHOLD;

        let rows = Layout::vertical([
            Constraint::Length(u16::from(show_tabs)), // Tabs
            Constraint::Min(1),                       // Content
            Constraint::Length(1),                    // Status bar
        ])
        .split(area);

        AppLayout {
            tabs: show_tabs.then_some(rows[0]),
            main: rows[1],
            status: rows[2],
        }
    }
}

/// Horizontally centered card of at most [`CARD_WIDTH`] columns and `height` rows.
pub fn card_area(area: Rect, height: u16) -> Rect {
    let [col] = Layout::horizontal([Constraint::Length(CARD_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [card] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Start)
        .areas(col);
    card
}
