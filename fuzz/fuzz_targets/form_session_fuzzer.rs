//! Fuzz target for the form session state machine
//!
//! Drives a controller with arbitrary keys, pastes and resizes under
//! arbitrary field length limits.
//!
//! # Strategy
//!
//! - Limits: zero, tiny and large keyword/location limits
//! - Keys: every key the form understands, including quit keys
//! - Pastes: arbitrary unicode text, including text longer than any limit
//!
//! # Invariants
//!
//! - Standard harness invariants hold after every event
//! - No buffer ever holds a control character
//! - Rendering never panics and always has a cursor unless submit is focused
//! - A quit key returns exactly `[Quit]` and leaves state untouched

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use searchform_app::{AppAction, AppEvent, FormConfig, FormController, KeyInput};
use searchform_harness::{FormSnapshot, InvariantRegistry};

#[derive(Debug, Clone, Arbitrary)]
enum FormOp {
    Key(FuzzKey),
    Paste(String),
    Resize(u16, u16),
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzKey {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Esc,
    CtrlC,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
}

impl From<FuzzKey> for KeyInput {
    fn from(key: FuzzKey) -> Self {
        match key {
            FuzzKey::Char(c) => Self::Char(c),
            FuzzKey::Enter => Self::Enter,
            FuzzKey::Backspace => Self::Backspace,
            FuzzKey::Delete => Self::Delete,
            FuzzKey::Tab => Self::Tab,
            FuzzKey::BackTab => Self::BackTab,
            FuzzKey::Esc => Self::Esc,
            FuzzKey::CtrlC => Self::CtrlC,
            FuzzKey::Left => Self::Left,
            FuzzKey::Right => Self::Right,
            FuzzKey::Up => Self::Up,
            FuzzKey::Down => Self::Down,
            FuzzKey::Home => Self::Home,
            FuzzKey::End => Self::End,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Session {
    keyword_limit: u8,
    location_limit: u8,
    ops: Vec<FormOp>,
}

fuzz_target!(|session: Session| {
    let config = FormConfig::default()
        .with_keyword_limit(usize::from(session.keyword_limit))
        .with_location_limit(usize::from(session.location_limit));
    let mut controller = FormController::new(&config);
    let registry = InvariantRegistry::standard();
    let mut previous = FormSnapshot::from_controller(&controller);

    for op in session.ops {
        let event = match op {
            FormOp::Key(key) => AppEvent::Key(key.into()),
            FormOp::Paste(text) => AppEvent::Paste(text),
            FormOp::Resize(cols, rows) => AppEvent::Resize(cols, rows),
        };

        let quit = matches!(&event, AppEvent::Key(key) if key.is_quit());
        let before = controller.clone();
        let actions = controller.handle(event);

        if quit {
            assert_eq!(actions, vec![AppAction::Quit]);
            assert_eq!(controller, before);
        }

        let snapshot = FormSnapshot::from_controller(&controller).with_previous(&previous);
        if let Err(violations) = registry.check_all(&snapshot) {
            panic!("invariant violations: {violations:?}");
        }
        previous = snapshot;

        for set in [controller.criteria(), controller.confirm()] {
            for field in set.fields() {
                assert!(!field.value().chars().any(char::is_control));
            }
        }

        let view = controller.render();
        assert_eq!(view.cursor.is_none(), controller.active_set().is_submit_focused());
    }
});
