//! Sign-Up Flow Tests
//!
//! Generated users through the sign-up view and the event channel.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use tokio::sync::mpsc;

use crate::core::signup::SignupField;
use crate::tui::events::AppEvent;
use crate::tui::sink::EventSink;
use crate::tui::views::sign_up::SignUpViewState;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn fill(view: &mut SignUpViewState, sink: &EventSink, values: &[String]) {
    for value in values {
        for c in value.chars() {
            view.handle_input(&press(KeyCode::Char(c)), sink);
        }
        view.handle_input(&press(KeyCode::Tab), sink);
    }
}

#[test]
fn test_generated_users_sign_up() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink = EventSink::new(tx);
    let mut view = SignUpViewState::new(8);

    for _ in 0..5 {
        let first: String = FirstName().fake();
        let last: String = LastName().fake();
        let email: String = SafeEmail().fake();
        fill(&mut view, &sink, &[first.clone(), last, email.clone(), "hunter2hunter2".into()]);
        view.handle_input(&press(KeyCode::Enter), &sink);

        let Ok(AppEvent::SignedUp(data)) = rx.try_recv() else {
            panic!("expected a sign-up event for {email}");
        };
        assert_eq!(data.first_name, first);
        assert_eq!(data.email, email);
        assert_eq!(view.form().error(), None);
        assert_eq!(view.form().field(SignupField::Email), "");
    }
}

#[test]
fn test_short_password_keeps_values_and_shows_error() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink = EventSink::new(tx);
    let mut view = SignUpViewState::new(8);
    let email: String = SafeEmail().fake();

    fill(&mut view, &sink, &["Jo".into(), "Lee".into(), email.clone(), "short".into()]);
    view.handle_input(&press(KeyCode::Enter), &sink);

    assert!(rx.try_recv().is_err());
    assert_eq!(view.form().error(), Some("Password must be at least 8 characters long"));
    assert_eq!(view.form().field(SignupField::Email), email);
}
