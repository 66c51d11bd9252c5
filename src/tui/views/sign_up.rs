use std::collections::HashMap;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::signup::{SignupData, SignupField, SignupForm};
use crate::core::sink::CompletionSink;
use crate::tui::layout::card_area;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

const CARD_HEIGHT: u16 = 22;
/// Focus slot of the submit button, after the four fields.
const SUBMIT_SLOT: usize = SignupField::ALL.len();

pub struct SignUpViewState {
    form: SignupForm,
    inputs: HashMap<SignupField, InputBuffer>,
    /// 0..=3 are fields, 4 is the submit button.
    focus_index: usize,
}

impl SignUpViewState {
    pub fn new(min_password_len: usize) -> Self {
        Self {
            form: SignupForm::new(min_password_len),
            inputs: Self::empty_inputs(),
            focus_index: 0,
        }
    }

    fn empty_inputs() -> HashMap<SignupField, InputBuffer> {
        SignupField::ALL
            .into_iter()
            .map(|f| (f, InputBuffer::new()))
            .collect()
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    fn focused_field(&self) -> Option<SignupField> {
        SignupField::ALL.get(self.focus_index).copied()
    }

    /// Handle a terminal event. Returns true if consumed.
    pub fn handle_input<S>(&mut self, event: &Event, sink: &S) -> bool
    where
        S: CompletionSink<SignupData> + ?Sized,
    {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return false,
        };

        match key.code {
            KeyCode::Enter if key.modifiers == KeyModifiers::NONE => {
                self.submit(sink);
                true
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focus_index = (self.focus_index + 1) % (SUBMIT_SLOT + 1);
                true
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focus_index = (self.focus_index + SUBMIT_SLOT) % (SUBMIT_SLOT + 1);
                true
            }
            _ => self.handle_text_input(&key),
        }
    }

    fn handle_text_input(&mut self, key: &KeyEvent) -> bool {
        let Some(field) = self.focused_field() else {
            return false;
        };
        if !InputBuffer::accepts(key) {
            return false;
        }
        if let Some(buf) = self.inputs.get_mut(&field) {
            if buf.handle_key(key) {
                self.form.set_field(field, buf.text());
            }
        }
        true
    }

    fn submit<S>(&mut self, sink: &S)
    where
        S: CompletionSink<SignupData> + ?Sized,
    {
        if self.form.submit(sink).is_ok() {
            self.inputs.values_mut().for_each(InputBuffer::clear);
            self.focus_index = 0;
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let card = card_area(area, CARD_HEIGHT);
        let block = theme::block_focused("Sign Up").title_style(theme::title());
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [description, names, email, password, error, _, button, _, footer] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Span::styled("Create a new account to get started.", theme::muted())),
            description,
        );

        let [first, last] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).spacing(2).areas(names);
        self.render_field(frame, first, SignupField::FirstName);
        self.render_field(frame, last, SignupField::LastName);
        self.render_field(frame, email, SignupField::Email);
        self.render_field(frame, password, SignupField::Password);

        if let Some(message) = self.form.error() {
            frame.render_widget(
                Paragraph::new(Line::from(vec![Span::raw(" ⚠ "), Span::raw(message.to_string())]))
                    .style(theme::error_banner()),
                error,
            );
        }

        let button_style = if self.focus_index == SUBMIT_SLOT {
            theme::button()
        } else {
            theme::button().add_modifier(Modifier::DIM)
        };
        frame.render_widget(
            Paragraph::new(Span::styled("[ Sign Up ]", button_style)).alignment(Alignment::Center),
            button,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Already have an account? ", theme::muted()),
                Span::styled("Log in", theme::highlight()),
            ]))
            .alignment(Alignment::Center),
            footer,
        );
    }

    fn render_field(&self, frame: &mut Frame, area: Rect, field: SignupField) {
        let focused = self.focused_field() == Some(field);
        let [label_area, box_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(3)]).areas(area);

        frame.render_widget(Paragraph::new(Span::styled(field.label(), theme::label())), label_area);

        let block = theme::input_block(focused);
        let input_area = block.inner(box_area);
        frame.render_widget(block, box_area);

        let Some(buf) = self.inputs.get(&field) else {
            return;
        };
        let text = if buf.is_empty() {
            Span::styled(field.placeholder(), theme::placeholder())
        } else {
            Span::raw(buf.display(field.is_secret()))
        };
        frame.render_widget(Paragraph::new(text), input_area);

        if focused {
            let col = buf.cursor_column().min(input_area.width);
            frame.set_cursor_position((input_area.x + col, input_area.y));
        }
    }
}
