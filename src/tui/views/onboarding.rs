use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::onboarding::{
    render_step, Choice, FieldKind, FieldView, StepView, SummaryRow, UserData, UserField, WizardState,
    CONFIRM_HEADING, PRODUCT_PROMPT,
};
use crate::core::sink::CompletionSink;
use crate::tui::layout::card_area;
use crate::tui::theme;
use crate::tui::widgets::choice;
use crate::tui::widgets::input_buffer::InputBuffer;

/// Rows for the card; enough for the tallest step (three labelled fields).
const CARD_HEIGHT: u16 = 20;

/// Onboarding page: the wizard plus per-field editing state.
pub struct OnboardingViewState {
    wizard: WizardState,
    /// Index into the current step's fields.
    focus_index: usize,
    /// Cursor-aware buffers for text fields; mirrored into the wizard on edit.
    inputs: HashMap<UserField, InputBuffer>,
}

impl Default for OnboardingViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl OnboardingViewState {
    pub fn new() -> Self {
        Self {
            wizard: WizardState::new(),
            focus_index: 0,
            inputs: Self::empty_inputs(),
        }
    }

    fn empty_inputs() -> HashMap<UserField, InputBuffer> {
        UserField::ALL
            .into_iter()
            .filter(|f| f.kind() == FieldKind::Text)
            .map(|f| (f, InputBuffer::new()))
            .collect()
    }

    pub fn wizard(&self) -> &WizardState {
        &self.wizard
    }

    fn focused_field(&self) -> Option<UserField> {
        self.wizard.step().fields().get(self.focus_index).copied()
    }

    // ── Input ───────────────────────────────────────────────────────────

    /// Handle a terminal event. Returns true if consumed.
    pub fn handle_input<S>(&mut self, event: &Event, sink: &S) -> bool
    where
        S: CompletionSink<UserData> + ?Sized,
    {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return false,
        };

        match key.code {
            KeyCode::Enter if key.modifiers == KeyModifiers::NONE => {
                if self.wizard.can_advance() {
                    self.wizard.advance();
                    self.focus_index = 0;
                } else {
                    self.submit(sink);
                }
                return true;
            }
            KeyCode::Esc => {
                if !self.wizard.can_retreat() {
                    return false;
                }
                self.wizard.retreat();
                self.focus_index = 0;
                return true;
            }
            _ => {}
        }

        // Modified keys belong to the global bindings (e.g. Ctrl+arrows).
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        let Some(field) = self.focused_field() else {
            return false;
        };

        match field.kind() {
            FieldKind::Text => self.handle_text_input(field, &key),
            FieldKind::Select { choices, .. } => match key.code {
                KeyCode::Left => self.cycle_choice(field, choices, -1),
                KeyCode::Right | KeyCode::Char(' ') => self.cycle_choice(field, choices, 1),
                _ => self.handle_focus_keys(&key),
            },
            FieldKind::Radio { choices } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => self.cycle_choice(field, choices, -1),
                KeyCode::Down | KeyCode::Char('j') => self.cycle_choice(field, choices, 1),
                _ => self.handle_focus_keys(&key),
            },
        }
    }

    fn handle_text_input(&mut self, field: UserField, key: &KeyEvent) -> bool {
        if self.handle_focus_keys(key) {
            return true;
        }
        if !InputBuffer::accepts(key) {
            return false;
        }
        if let Some(buf) = self.inputs.get_mut(&field) {
            if buf.handle_key(key) {
                self.wizard.set_field(field, buf.text());
            }
        }
        true
    }

    /// Tab/arrow movement between the fields of the current step.
    fn handle_focus_keys(&mut self, key: &KeyEvent) -> bool {
        let count = self.wizard.step().fields().len();
        if count == 0 {
            return false;
        }
        match key.code {
            KeyCode::Tab | KeyCode::Down => {
                self.focus_index = (self.focus_index + 1) % count;
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_index = (self.focus_index + count - 1) % count;
                true
            }
            _ => false,
        }
    }

    fn cycle_choice(&mut self, field: UserField, choices: &'static [Choice], delta: isize) -> bool {
        if let Some(value) = choice::cycle(choices, self.wizard.field(field), delta) {
            self.wizard.set_field(field, value);
        }
        true
    }

    fn submit<S>(&mut self, sink: &S)
    where
        S: CompletionSink<UserData> + ?Sized,
    {
        match self.wizard.complete(sink) {
            Ok(_) => {
                self.inputs = Self::empty_inputs();
                self.focus_index = 0;
            }
            Err(e) => log::error!("Onboarding completion rejected: {e}"),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let card = card_area(area, CARD_HEIGHT);
        let header = self.wizard.header();
        let block = theme::block_focused(&header).title_style(theme::title());
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [body, footer, hints] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        match render_step(&self.wizard) {
            StepView::PersonalInfo(fields) | StepView::CompanyDetails(fields) => {
                self.render_fields(frame, body, &fields)
            }
            StepView::ProductPreferences(fields) => self.render_preferences(frame, body, &fields),
            StepView::Confirmation(rows) => Self::render_confirmation(frame, body, &rows),
        }

        self.render_footer(frame, footer);
        self.render_hints(frame, hints);
    }

    fn render_fields(&self, frame: &mut Frame, area: Rect, fields: &[FieldView<'_>]) {
        let constraints = fields
            .iter()
            .flat_map(|_| [Constraint::Length(1), Constraint::Length(3)])
            .chain(std::iter::once(Constraint::Min(0)));
        let rows = Layout::vertical(constraints).split(area);

        for (i, field) in fields.iter().enumerate() {
            let focused = i == self.focus_index;
            let label_area = rows[i * 2];
            let box_area = rows[i * 2 + 1];

            frame.render_widget(Paragraph::new(Span::styled(field.label, theme::label())), label_area);

            let block = theme::input_block(focused);
            let input_area = block.inner(box_area);
            frame.render_widget(block, box_area);

            match field.kind {
                FieldKind::Text => {
                    frame.render_widget(Paragraph::new(field.value.to_string()), input_area);
                    if focused {
                        let col = self
                            .inputs
                            .get(&field.field)
                            .map(InputBuffer::cursor_column)
                            .unwrap_or(0);
                        frame.set_cursor_position((input_area.x + col.min(input_area.width), input_area.y));
                    }
                }
                FieldKind::Select { choices, placeholder } => {
                    let line = choice::select_line(choices, field.value, placeholder, focused);
                    frame.render_widget(Paragraph::new(line), input_area);
                }
                FieldKind::Radio { choices } => {
                    frame.render_widget(Paragraph::new(choice::radio_lines(choices, field.value)), input_area);
                }
            }
        }
    }

    fn render_preferences(&self, frame: &mut Frame, area: Rect, fields: &[FieldView<'_>]) {
        let mut lines = vec![Line::from(Span::styled(PRODUCT_PROMPT, theme::label())), Line::raw("")];
        for field in fields {
            lines.extend(choice::radio_lines(field.kind.choices(), field.value));
        }
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_confirmation(frame: &mut Frame, area: Rect, rows: &[SummaryRow]) {
        let mut lines = vec![Line::from(Span::styled(CONFIRM_HEADING, theme::title())), Line::raw("")];
        lines.extend(rows.iter().map(|row| {
            Line::from(vec![
                Span::styled(format!("{}: ", row.label), theme::label()),
                Span::raw(row.value.clone()),
            ])
        }));
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let [left, right] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(area);

        if self.wizard.can_retreat() {
            frame.render_widget(
                Paragraph::new(Span::styled("[ Previous ]", theme::button_outline())),
                left,
            );
        }

        let primary = if self.wizard.can_advance() {
            "[ Next ]"
        } else {
            "[ Complete Onboarding ]"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(primary, theme::button())).right_aligned(),
            right,
        );
    }

    fn render_hints(&self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Enter", theme::key_hint()),
            Span::raw(if self.wizard.can_advance() { ":next  " } else { ":complete  " }),
        ];
        if self.wizard.can_retreat() {
            spans.push(Span::styled("Esc", theme::key_hint()));
            spans.push(Span::raw(":previous  "));
        }
        if let Some(field) = self.focused_field() {
            match field.kind() {
                FieldKind::Text => {
                    spans.push(Span::styled("Tab", theme::key_hint()));
                    spans.push(Span::raw(":next field"));
                }
                FieldKind::Select { .. } => {
                    spans.push(Span::styled("←/→", theme::key_hint()));
                    spans.push(Span::raw(":choose"));
                }
                FieldKind::Radio { .. } => {
                    spans.push(Span::styled("↑/↓", theme::key_hint()));
                    spans.push(Span::raw(":choose"));
                }
            }
        }
        frame.render_widget(Paragraph::new(Line::from(spans)).style(theme::muted()), area);
    }
}
