use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::counter::{parse_amount, reduce, select_count, CounterAction, CounterState};
use crate::tui::layout::card_area;
use crate::tui::theme;
use crate::tui::widgets::input_buffer::InputBuffer;

const CARD_HEIGHT: u16 = 12;

pub struct CounterViewState {
    state: CounterState,
    amount: InputBuffer,
}

impl CounterViewState {
    pub fn new(default_amount: i64) -> Self {
        Self {
            state: CounterState::default(),
            amount: InputBuffer::with_text(default_amount.to_string()),
        }
    }

    pub fn count(&self) -> i64 {
        select_count(&self.state)
    }

    pub fn dispatch(&mut self, action: CounterAction) {
        self.state = reduce(self.state, action);
        log::debug!("Counter {:?} -> {}", action, self.state.value);
    }

    fn amount(&self) -> i64 {
        parse_amount(self.amount.text())
    }

    /// Handle a terminal event. Returns true if consumed.
    pub fn handle_input(&mut self, event: &Event) -> bool {
        let key = match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => *k,
            _ => return false,
        };
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }

        match key.code {
            KeyCode::Char('+') | KeyCode::Up => self.dispatch(CounterAction::Increment),
            // A leading minus signs the amount instead of stepping down.
            KeyCode::Char('-')
                if self.amount.cursor_position() == 0 && !self.amount.text().starts_with('-') =>
            {
                self.amount.insert_char('-')
            }
            KeyCode::Char('-') | KeyCode::Down => self.dispatch(CounterAction::Decrement),
            KeyCode::Char('a') | KeyCode::Enter => {
                self.dispatch(CounterAction::IncrementByAmount(self.amount()))
            }
            KeyCode::Char('o') => self.dispatch(CounterAction::IncrementIfOdd(self.amount())),
            KeyCode::Char(c) if c.is_ascii_digit() => self.amount.insert_char(c),
            KeyCode::Backspace | KeyCode::Delete | KeyCode::Left | KeyCode::Right => {
                self.amount.handle_key(&KeyEvent::new(key.code, KeyModifiers::NONE));
            }
            _ => return false,
        }
        true
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let card = card_area(area, CARD_HEIGHT);
        let block = theme::block_focused("Counter").title_style(theme::title());
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [_, value, _, amount, _, buttons, hints] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[ - ]", theme::button_outline()),
                Span::styled(format!("   {}   ", self.count()), theme::title()),
                Span::styled("[ + ]", theme::button_outline()),
            ]))
            .alignment(Alignment::Center),
            value,
        );

        let [amount_box] = Layout::horizontal([Constraint::Length(12)])
            .flex(ratatui::layout::Flex::Center)
            .areas(amount);
        let amount_block = theme::input_block(true);
        let amount_inner = amount_block.inner(amount_box);
        frame.render_widget(amount_block, amount_box);
        frame.render_widget(
            Paragraph::new(self.amount.text().to_string()).alignment(Alignment::Center),
            amount_inner,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("[ Add Amount ]", theme::button()),
                Span::raw("  "),
                Span::styled("[ Add If Odd ]", theme::button()),
            ]))
            .alignment(Alignment::Center),
            buttons,
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("+/-", theme::key_hint()),
                Span::raw(":step  "),
                Span::styled("0-9", theme::key_hint()),
                Span::raw(":amount  "),
                Span::styled("a", theme::key_hint()),
                Span::raw(":add  "),
                Span::styled("o", theme::key_hint()),
                Span::raw(":add if odd"),
            ]))
            .style(theme::muted())
            .alignment(Alignment::Center),
            hints,
        );
    }
}
