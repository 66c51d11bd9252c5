//! Select and radio-group helpers over a static choice list.
//!
//! Choice fields keep no state of their own: the selected value is whatever
//! the form store holds, and moving the selection writes a new value back.

use ratatui::text::{Line, Span};

use crate::core::onboarding::Choice;
use crate::tui::theme;

/// Index of `value` in `choices`, if it is one of them.
pub fn position(choices: &[Choice], value: &str) -> Option<usize> {
    choices.iter().position(|c| c.value == value)
}

/// Value reached by moving `delta` places from `current`, wrapping around.
///
/// With nothing selected yet, forward picks the first choice and backward
/// the last.
pub fn cycle(choices: &'static [Choice], current: &str, delta: isize) -> Option<&'static str> {
    if choices.is_empty() {
        return None;
    }
    let len = choices.len() as isize;
    let idx = match position(choices, current) {
        Some(i) => (i as isize + delta).rem_euclid(len),
        None if delta >= 0 => 0,
        None => len - 1,
    };
    Some(choices[idx as usize].value)
}

/// Closed drop-down: `‹ label ›`, or the placeholder while empty.
pub fn select_line(choices: &[Choice], value: &str, placeholder: &str, focused: bool) -> Line<'static> {
    let body = match position(choices, value) {
        Some(i) => Span::styled(choices[i].label.to_string(), theme::highlight()),
        None => Span::styled(placeholder.to_string(), theme::placeholder()),
    };
    let arrow = if focused { theme::border_focused() } else { theme::muted() };
    Line::from(vec![
        Span::styled("‹ ", arrow),
        body,
        Span::styled(" ›", arrow),
    ])
}

/// One line per option with a filled marker on the selected one.
pub fn radio_lines(choices: &[Choice], value: &str) -> Vec<Line<'static>> {
    choices
        .iter()
        .map(|c| {
            let selected = c.value == value;
            let (marker, style) = if selected {
                ("(•) ", theme::highlight())
            } else {
                ("( ) ", theme::muted())
            };
            Line::from(vec![
                Span::styled(marker, style),
                Span::styled(c.label.to_string(), style),
            ])
        })
        .collect()
}
