use std::io;
use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame, Terminal,
};
use tokio::sync::mpsc;

use super::events::{Action, AppEvent, Notification, NotificationLevel, Page};
use super::layout::AppLayout;
use super::sink::EventSink;
use super::theme;
use super::views::counter::CounterViewState;
use super::views::onboarding::OnboardingViewState;
use super::views::sign_up::SignUpViewState;
use crate::config::{AppConfig, ConfigError};
use crate::core::sink::{CompletionSink, LogSink};

const MAX_NOTIFICATIONS: usize = 3;
const NOTIFICATION_TTL_TICKS: u32 = 100;

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Currently shown page.
    pub page: Page,
    pub onboarding: OnboardingViewState,
    pub sign_up: SignUpViewState,
    pub counter: CounterViewState,
    /// Active notifications (max 3 visible).
    pub notifications: Vec<Notification>,
    /// Whether the help modal is open.
    pub show_help: bool,
    /// Receiver for events posted from within the app.
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Where views hand completed forms.
    sink: EventSink,
    /// Final reporting of completed forms.
    onboarding_reporter: LogSink,
    signup_reporter: LogSink,
}

impl AppState {
    pub fn new(
        config: &AppConfig,
        event_rx: mpsc::UnboundedReceiver<AppEvent>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            running: true,
            page: config.tui.start_page,
            onboarding: OnboardingViewState::new(),
            sign_up: SignUpViewState::new(config.signup.min_password_len),
            counter: CounterViewState::new(config.counter.default_amount),
            notifications: Vec::new(),
            show_help: false,
            event_rx,
            sink: EventSink::new(event_tx),
            onboarding_reporter: LogSink::new("Onboarding complete"),
            signup_reporter: LogSink::new("Signup data"),
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.on_tick();
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_event(event);
                }
                Some(Ok(crossterm_event)) = event_stream.next() => {
                    self.handle_event(AppEvent::Input(crossterm_event));
                }
            }
        }

        log::info!("Event loop stopped");
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(crossterm_event) => {
                // Priority 1: Help modal
                if self.show_help {
                    if let Some(action) = self.map_help_input(&crossterm_event) {
                        self.handle_action(action);
                    }
                    return;
                }

                // Priority 2: Current page
                if self.dispatch_view_input(&crossterm_event) {
                    return;
                }

                // Priority 3: Global keybindings
                if let Some(action) = self.map_input_to_action(&crossterm_event) {
                    self.handle_action(action);
                }
            }
            AppEvent::OnboardingCompleted(data) => {
                self.onboarding_reporter.emit(&data);
                let who = if data.email.is_empty() {
                    "new user".to_string()
                } else {
                    data.email.clone()
                };
                self.push_notification(
                    format!("Onboarding complete for {who}"),
                    NotificationLevel::Success,
                );
            }
            AppEvent::SignedUp(data) => {
                self.signup_reporter.emit(&data);
                self.push_notification(
                    format!("Account created for {}", data.email),
                    NotificationLevel::Success,
                );
            }
        }
    }

    /// Dispatch input to the current page. Returns true if consumed.
    fn dispatch_view_input(&mut self, event: &Event) -> bool {
        match self.page {
            Page::Onboarding => self.onboarding.handle_input(event, &self.sink),
            Page::SignUp => self.sign_up.handle_input(event, &self.sink),
            Page::Counter => self.counter.handle_input(event),
        }
    }

    // ── Input mapping ───────────────────────────────────────────────────

    fn map_help_input(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };
        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (_, KeyCode::Esc | KeyCode::F(12)) => Some(Action::CloseHelp),
            _ => None,
        }
    }

    fn map_input_to_action(&self, event: &Event) -> Option<Action> {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return None;
        };

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Action::Quit),
            (KeyModifiers::CONTROL, KeyCode::Right) => Some(Action::PageNext),
            (KeyModifiers::CONTROL, KeyCode::Left) => Some(Action::PagePrev),
            (_, KeyCode::F(n @ 1..=3)) => Page::ALL.get(usize::from(n) - 1).map(|p| p.to_action()),
            (_, KeyCode::F(12)) => Some(Action::ToggleHelp),
            _ => None,
        }
    }

    fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::FocusOnboarding => self.set_page(Page::Onboarding),
            Action::FocusSignUp => self.set_page(Page::SignUp),
            Action::FocusCounter => self.set_page(Page::Counter),
            Action::PageNext => self.set_page(self.page.next()),
            Action::PagePrev => self.set_page(self.page.prev()),
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CloseHelp => self.show_help = false,
        }
    }

    fn set_page(&mut self, page: Page) {
        if page != self.page {
            log::debug!("Page {} -> {}", self.page.label(), page.label());
            self.page = page;
        }
    }

    // ── Notifications ───────────────────────────────────────────────────

    /// Push a notification (dedup by message, max 3).
    pub fn push_notification(&mut self, message: String, level: NotificationLevel) {
        if self.notifications.iter().any(|n| n.message == message) {
            return;
        }

        self.notifications.push(Notification {
            message,
            level,
            ttl_ticks: NOTIFICATION_TTL_TICKS,
        });

        while self.notifications.len() > MAX_NOTIFICATIONS {
            self.notifications.remove(0);
        }
    }

    /// Tell the user their config file was ignored.
    pub fn report_config_error(&mut self, err: &ConfigError) {
        log::warn!("{err}, using defaults");
        let text = err.to_string();
        let headline = text.lines().next().unwrap_or_default();
        self.push_notification(format!("{headline}; using defaults"), NotificationLevel::Warning);
    }

    /// Tick: decrement notification TTLs, dismiss expired.
    fn on_tick(&mut self) {
        for n in &mut self.notifications {
            n.ttl_ticks = n.ttl_ticks.saturating_sub(1);
        }
        self.notifications.retain(|n| n.ttl_ticks > 0);
    }

    // ── Rendering ───────────────────────────────────────────────────────

    fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        if let Some(tabs_area) = layout.tabs {
            self.render_tabs(frame, tabs_area);
        }

        match self.page {
            Page::Onboarding => self.onboarding.render(frame, layout.main),
            Page::SignUp => self.sign_up.render(frame, layout.main),
            Page::Counter => self.counter.render(frame, layout.main),
        }

        self.render_status_bar(frame, layout.status);
        self.render_notifications(frame, area);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect) {
        let titles = Page::ALL.map(|p| format!("{} {}", p.hotkey(), p.label()));
        let selected = Page::ALL.iter().position(|&p| p == self.page).unwrap_or(0);
        let tabs = Tabs::new(titles)
            .select(selected)
            .style(theme::muted())
            .highlight_style(theme::highlight())
            .divider("│");
        frame.render_widget(tabs, area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let status = Line::from(vec![
            Span::styled(" ONBOARD ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(
                self.page.label(),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
            Span::styled("F1-F3", theme::key_hint()),
            Span::raw(":pages "),
            Span::styled("Ctrl+←/→", theme::key_hint()),
            Span::raw(":cycle "),
            Span::styled("F12", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("Ctrl+C", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }

    fn render_notifications(&self, frame: &mut Frame, area: Rect) {
        if self.notifications.is_empty() {
            return;
        }

        let max_width = 50.min(area.width.saturating_sub(2));
        let height = (self.notifications.len() as u16).min(area.height);
        let x = area.width.saturating_sub(max_width + 1);
        let notification_area = Rect::new(x, 1.min(area.height.saturating_sub(height)), max_width, height);

        let lines: Vec<Line> = self
            .notifications
            .iter()
            .map(|n| {
                let (prefix, color) = match n.level {
                    NotificationLevel::Success => ("✓", theme::SUCCESS),
                    NotificationLevel::Warning => ("⚠", theme::WARNING),
                };
                Line::from(vec![
                    Span::styled(format!(" {prefix} "), Style::default().fg(color).bold()),
                    Span::raw(n.message.as_str()),
                ])
            })
            .collect();

        frame.render_widget(Clear, notification_area);
        frame.render_widget(Paragraph::new(lines), notification_area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("F1 / F2 / F3", "Onboarding / Sign Up / Counter"),
            ("Ctrl+← / Ctrl+→", "Previous / next page"),
            ("F12", "Toggle this help"),
            ("Ctrl+C", "Quit"),
            ("", ""),
            ("Onboarding:", ""),
            ("Tab / ↑ / ↓", "Move between fields"),
            ("← / →", "Change a drop-down"),
            ("↑ / ↓", "Pick a product"),
            ("Enter", "Next step / complete"),
            ("Esc", "Previous step"),
            ("", ""),
            ("Sign Up:", ""),
            ("Tab / ↑ / ↓", "Move between fields"),
            ("Enter", "Submit"),
            ("", ""),
            ("Counter:", ""),
            ("+ / -", "Increment / decrement"),
            ("0-9", "Edit amount"),
            ("a / Enter", "Add amount"),
            ("o", "Add amount if odd"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::highlight())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<18}", key),
                        Style::default().fg(theme::PRIMARY_LIGHT).bold(),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(theme::border_focused());

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }

    #[cfg(test)]
    fn drain_events(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
