//! Onboarding Flow Tests
//!
//! Drives the onboarding view with key events and checks what reaches the
//! event channel.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::core::onboarding::{OnboardingStep, UserData};
use crate::tui::events::AppEvent;
use crate::tui::sink::EventSink;
use crate::tui::views::onboarding::OnboardingViewState;

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(view: &mut OnboardingViewState, sink: &EventSink, text: &str) {
    for c in text.chars() {
        view.handle_input(&press(KeyCode::Char(c)), sink);
    }
}

#[test]
fn test_full_onboarding_emits_collected_data() {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let sink = EventSink::new(tx);
    let mut view = OnboardingViewState::new();

    // Step 1
    type_text(&mut view, &sink, "Ada");
    view.handle_input(&press(KeyCode::Tab), &sink);
    type_text(&mut view, &sink, "Lovelace");
    view.handle_input(&press(KeyCode::Tab), &sink);
    type_text(&mut view, &sink, "ada@example.com");
    view.handle_input(&press(KeyCode::Enter), &sink);

    // Step 2
    type_text(&mut view, &sink, "Analytical Engines");
    view.handle_input(&press(KeyCode::Tab), &sink);
    view.handle_input(&press(KeyCode::Right), &sink);
    view.handle_input(&press(KeyCode::Tab), &sink);
    view.handle_input(&press(KeyCode::Left), &sink);
    view.handle_input(&press(KeyCode::Enter), &sink);

    // Step 3
    view.handle_input(&press(KeyCode::Down), &sink);
    view.handle_input(&press(KeyCode::Down), &sink);
    view.handle_input(&press(KeyCode::Enter), &sink);
    assert_eq!(view.wizard().step(), OnboardingStep::Confirmation);

    // Step 4
    view.handle_input(&press(KeyCode::Enter), &sink);

    let Ok(AppEvent::OnboardingCompleted(data)) = rx.try_recv() else {
        panic!("expected a completion event");
    };
    assert_eq!(
        data,
        UserData {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            company_name: "Analytical Engines".into(),
            company_size: "1-10".into(),
            industry: "other".into(),
            product_interest: "productB".into(),
        }
    );
    assert!(rx.try_recv().is_err());
    assert_eq!(view.wizard().step(), OnboardingStep::PersonalInfo);
    assert_eq!(view.wizard().data(), &UserData::default());
}

#[test]
fn test_going_back_keeps_entered_values() {
    let (tx, _rx) = mpsc::unbounded_channel();
    let sink = EventSink::new(tx);
    let mut view = OnboardingViewState::new();

    type_text(&mut view, &sink, "Grace");
    view.handle_input(&press(KeyCode::Enter), &sink);
    assert!(view.handle_input(&press(KeyCode::Esc), &sink));

    assert_eq!(view.wizard().step(), OnboardingStep::PersonalInfo);
    assert_eq!(view.wizard().data().first_name, "Grace");
    // Esc on the first step is left to the caller.
    assert!(!view.handle_input(&press(KeyCode::Esc), &sink));
}
