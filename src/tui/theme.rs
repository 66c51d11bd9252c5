//! Slate & Violet color theme for the onboarding TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Violet: primary accent, focused borders, active page.
pub const PRIMARY: Color = Color::Rgb(0x7C, 0x3A, 0xED);
/// Light violet: key hints, selected choices.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0xA7, 0x8B, 0xFA);

// ── Accent ──────────────────────────────────────────────────────────────────

/// Amber: call-to-action buttons.
pub const ACCENT: Color = Color::Rgb(0xF5, 0x9E, 0x0B);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Slate: base background.
pub const BG_BASE: Color = Color::Rgb(0x0F, 0x17, 0x2A);
/// Error banner background.
pub const BG_ERROR: Color = Color::Rgb(0x45, 0x0A, 0x0A);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
/// Labels, placeholders.
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
/// Unfocused borders, disabled buttons.
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const WARNING: Color = Color::Rgb(0xEA, 0xB3, 0x08);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Card titles.
pub fn title() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Field labels.
pub fn label() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Selected choice in a list or radio group.
pub fn highlight() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Placeholder text in empty inputs.
pub fn placeholder() -> Style {
    Style::default().fg(TEXT_DIM).add_modifier(Modifier::ITALIC)
}

/// Key hint style (e.g., "Enter:next").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Primary button.
pub fn button() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Outline button (e.g., "Previous").
pub fn button_outline() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

/// Destructive/error banner.
pub fn error_banner() -> Style {
    Style::default().fg(ERROR).bg(BG_ERROR)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border_focused())
}

/// Untitled border around an input box.
pub fn input_block(focused: bool) -> Block<'static> {
    Block::default().borders(Borders::ALL).border_style(if focused {
        border_focused()
    } else {
        border_default()
    })
}
