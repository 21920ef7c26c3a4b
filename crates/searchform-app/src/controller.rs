//! Session state machine.
//!
//! This module defines the [`FormController`], which owns both forms and the
//! accumulated [`SearchRecord`]s, completely decoupled from terminal I/O.
//!
//! This is a pure state machine: it consumes [`AppEvent`] inputs and produces
//! [`AppAction`] instructions for the runtime to execute.
//!
//! # Modes
//!
//! - [`Mode::Editing`]: keys go to the criteria form (keyword, location).
//!   `enter` on the submit slot commits the pair.
//! - [`Mode::ConfirmAdd`]: keys go to the "add another?" form. `Y`, `y` or
//!   `enter` return to editing.
//!
//! Quit keys (`q`, `esc`, `ctrl+c`) are checked before either mode sees the
//! key. Uncommitted criteria are discarded on quit.

use crate::{
    AppAction, AppEvent, Field, FieldSet, FormConfig, KeyInput, Line, SearchRecord, Span,
    StyleTag, View,
};

const EDITING_HEADER: &str = "Enter search criteria";
const CONFIRM_HEADER: &str = "Add another search item? [Y/n]";
const EDITING_HINT: &str = "tab/shift+tab: move  enter: select  q/esc: quit";
const CONFIRM_HINT: &str = "y/enter: add another  q/esc: done";

/// Top-level form mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Collecting a keyword/location pair.
    #[default]
    Editing,
    /// Asking whether to add another pair.
    ConfirmAdd,
}

/// Outcome of a key in a given mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// End the session.
    Quit,
    /// Append the criteria as a record and ask to add another.
    Commit,
    /// Clear the answer and go back to editing.
    Resume,
    /// Forward the key to the active field set.
    Dispatch,
}

impl Mode {
    /// Transition table.
    ///
    /// `submit_focused` is whether the active field set's submit slot holds
    /// focus; only `Editing` consults it.
    pub fn transition(self, key: KeyInput, submit_focused: bool) -> Transition {
        if key.is_quit() {
            return Transition::Quit;
        }

        match self {
            Self::Editing if key == KeyInput::Enter && submit_focused => Transition::Commit,
            Self::Editing => Transition::Dispatch,
            Self::ConfirmAdd if key.is_confirm() => Transition::Resume,
            Self::ConfirmAdd => Transition::Dispatch,
        }
    }
}

/// Session state machine.
///
/// Owns the criteria form, the confirm-add form and the append-only record
/// list. No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    mode: Mode,
    /// Keyword and location fields.
    criteria: FieldSet,
    /// Single "add another?" answer field.
    confirm: FieldSet,
    /// Committed records, in commit order.
    records: Vec<SearchRecord>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::new(&FormConfig::default())
    }
}

impl FormController {
    /// Create a controller in `Editing` mode with the keyword field focused.
    pub fn new(config: &FormConfig) -> Self {
        let criteria = FieldSet::new(
            vec![Field::from_config(&config.keyword), Field::from_config(&config.location)],
            config.submit_label.clone(),
        );
        let confirm =
            FieldSet::new(vec![Field::from_config(&config.confirm)], config.add_label.clone());

        Self { mode: Mode::Editing, criteria, confirm, records: Vec::new() }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => self.handle_key(key),
            AppEvent::Paste(text) => {
                let accepted = self.active_set_mut().insert_str(&text);
                tracing::trace!(accepted, offered = text.chars().count(), "paste");
                vec![AppAction::Render]
            },
            AppEvent::Resize(..) => vec![AppAction::Render],
        }
    }

    /// Process a canonical key token (`"tab"`, `"enter"`, `"a"`, ...).
    ///
    /// Unrecognized tokens are inserted as literal text.
    pub fn handle_token(&mut self, token: &str) -> Vec<AppAction> {
        self.handle(AppEvent::from_token(token))
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<AppAction> {
        let submit_focused = self.active_set().is_submit_focused();

        match self.mode.transition(key, submit_focused) {
            Transition::Quit => {
                tracing::debug!(mode = ?self.mode, key = %key, "quit requested");
                vec![AppAction::Quit]
            },
            Transition::Commit => {
                let record = self.commit();
                vec![AppAction::Committed { record }, AppAction::Render]
            },
            Transition::Resume => {
                self.confirm.clear();
                self.mode = Mode::Editing;
                tracing::debug!("resuming criteria entry");
                vec![AppAction::Render]
            },
            Transition::Dispatch => {
                self.active_set_mut().dispatch_key(key);
                vec![AppAction::Render]
            },
        }
    }

    /// Append the current criteria, reset the criteria form and switch to
    /// `ConfirmAdd`.
    fn commit(&mut self) -> SearchRecord {
        let record = SearchRecord::new(self.criteria.value(0), self.criteria.value(1));
        self.records.push(record.clone());

        self.criteria.reset();
        self.confirm.reset();
        self.mode = Mode::ConfirmAdd;

        tracing::debug!(count = self.records.len(), "record committed");
        record
    }

    /// Render the active form with its header and footer.
    pub fn render(&self) -> View {
        let (header, hint) = match self.mode {
            Mode::Editing => (EDITING_HEADER, EDITING_HINT),
            Mode::ConfirmAdd => (CONFIRM_HEADER, CONFIRM_HINT),
        };

        let mut view = View::default();
        view.push(Span::new(header, StyleTag::Header));
        view.push(Line::blank());
        view.append(self.active_set().render());
        view.push(Line::blank());
        view.push(Span::new(hint, StyleTag::Hint));
        view.push(Span::new(self.queued_summary(), StyleTag::Hint));
        view
    }

    fn queued_summary(&self) -> String {
        match self.records.len() {
            1 => "1 search queued".to_string(),
            n => format!("{n} searches queued"),
        }
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Criteria form (keyword, location).
    pub fn criteria(&self) -> &FieldSet {
        &self.criteria
    }

    /// Confirm-add form.
    pub fn confirm(&self) -> &FieldSet {
        &self.confirm
    }

    /// Field set receiving keys in the current mode.
    pub fn active_set(&self) -> &FieldSet {
        match self.mode {
            Mode::Editing => &self.criteria,
            Mode::ConfirmAdd => &self.confirm,
        }
    }

    fn active_set_mut(&mut self) -> &mut FieldSet {
        match self.mode {
            Mode::Editing => &mut self.criteria,
            Mode::ConfirmAdd => &mut self.confirm,
        }
    }

    /// Records committed so far.
    pub fn records(&self) -> &[SearchRecord] {
        &self.records
    }

    /// Consume the controller, handing off the committed records.
    pub fn into_records(self) -> Vec<SearchRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FocusTarget;

    fn type_str(controller: &mut FormController, text: &str) {
        for c in text.chars() {
            let _ = controller.handle(AppEvent::Key(KeyInput::Char(c)));
        }
    }

    fn press(controller: &mut FormController, key: KeyInput) -> Vec<AppAction> {
        controller.handle(AppEvent::Key(key))
    }

    #[test]
    fn transition_table() {
        use KeyInput::{BackTab, Char, CtrlC, Enter, Esc, Tab};
        use Mode::{ConfirmAdd, Editing};
        use Transition::{Commit, Dispatch, Quit, Resume};

        let cases = [
            (Editing, Char('q'), false, Quit),
            (Editing, Esc, true, Quit),
            (Editing, CtrlC, false, Quit),
            (Editing, Enter, true, Commit),
            (Editing, Enter, false, Dispatch),
            (Editing, Tab, true, Dispatch),
            (Editing, BackTab, false, Dispatch),
            (Editing, Char('y'), false, Dispatch),
            (ConfirmAdd, Char('q'), false, Quit),
            (ConfirmAdd, Esc, false, Quit),
            (ConfirmAdd, Char('Y'), false, Resume),
            (ConfirmAdd, Char('y'), false, Resume),
            (ConfirmAdd, Enter, false, Resume),
            (ConfirmAdd, Enter, true, Resume),
            (ConfirmAdd, Char('n'), false, Dispatch),
            (ConfirmAdd, Tab, false, Dispatch),
        ];

        for (mode, key, submit_focused, expected) in cases {
            assert_eq!(
                mode.transition(key, submit_focused),
                expected,
                "{mode:?} + {key} (submit focused: {submit_focused})"
            );
        }
    }

    #[test]
    fn starts_editing_on_keyword() {
        let controller = FormController::default();

        assert_eq!(controller.mode(), Mode::Editing);
        assert_eq!(controller.criteria().focus_target(), FocusTarget::Field(0));
        assert!(controller.records().is_empty());
    }

    #[test]
    fn enter_on_field_cycles_instead_of_committing() {
        let mut controller = FormController::default();
        type_str(&mut controller, "Engineer");

        let actions = press(&mut controller, KeyInput::Enter);

        assert_eq!(actions, vec![AppAction::Render]);
        assert_eq!(controller.mode(), Mode::Editing);
        assert_eq!(controller.criteria().focus_target(), FocusTarget::Field(1));
        assert!(controller.records().is_empty());
    }

    #[test]
    fn commit_from_submit_slot() {
        let mut controller = FormController::default();
        type_str(&mut controller, "Engineer");
        press(&mut controller, KeyInput::Tab);
        type_str(&mut controller, "Denver CO");
        press(&mut controller, KeyInput::Tab);

        let actions = press(&mut controller, KeyInput::Enter);

        let record = SearchRecord::new("Engineer", "Denver CO");
        assert_eq!(actions, vec![AppAction::Committed { record: record.clone() }, AppAction::Render]);
        assert_eq!(controller.records(), &[record]);
        assert_eq!(controller.mode(), Mode::ConfirmAdd);
        assert_eq!(controller.criteria().focus_target(), FocusTarget::Field(0));
        assert!(controller.criteria().fields().iter().all(Field::is_empty));
    }

    #[test]
    fn confirm_answer_goes_to_confirm_field() {
        let mut controller = FormController::default();
        press(&mut controller, KeyInput::BackTab);
        press(&mut controller, KeyInput::Enter);

        type_str(&mut controller, "n");

        assert_eq!(controller.mode(), Mode::ConfirmAdd);
        assert_eq!(controller.confirm().value(0), "n");
    }

    #[test]
    fn yes_clears_answer_and_resumes_editing() {
        let mut controller = FormController::default();
        press(&mut controller, KeyInput::BackTab);
        press(&mut controller, KeyInput::Enter);
        type_str(&mut controller, "n");

        press(&mut controller, KeyInput::Char('y'));

        assert_eq!(controller.mode(), Mode::Editing);
        assert!(controller.confirm().value(0).is_empty());
        assert_eq!(controller.criteria().focus_target(), FocusTarget::Field(0));
        assert_eq!(controller.records().len(), 1);
    }

    #[test]
    fn quit_discards_uncommitted_criteria() {
        let mut controller = FormController::default();
        type_str(&mut controller, "Nurse");

        let actions = press(&mut controller, KeyInput::Esc);

        assert_eq!(actions, vec![AppAction::Quit]);
        assert!(controller.records().is_empty());
    }

    #[test]
    fn lowercase_q_quits_even_mid_edit() {
        let mut controller = FormController::default();
        type_str(&mut controller, "Ab");

        assert_eq!(press(&mut controller, KeyInput::Char('q')), vec![AppAction::Quit]);
        assert_eq!(controller.criteria().value(0), "Ab");
    }

    #[test]
    fn paste_fills_focused_field() {
        let mut controller = FormController::default();
        controller.handle(AppEvent::Paste("Web Developer".into()));

        assert_eq!(controller.criteria().value(0), "Web Developer");
    }

    #[test]
    fn control_characters_never_reach_the_buffer() {
        let mut controller = FormController::default();
        controller.handle(AppEvent::Paste("Web\nDev\u{1b}[31m".into()));
        controller.handle_token("\t");

        assert_eq!(controller.criteria().value(0), "WebDev[31m");

        let view = controller.render();
        assert_eq!(view.lines[2].text(), "> Keyword: WebDev[31m");
        assert_eq!(view.lines[3].text(), "> Location: eg: Boulder CO, Salt Lake City UT");
        assert_eq!(view.cursor.map(|c| (c.line, c.column)), Some((2, 21)));
    }

    #[test]
    fn unknown_token_is_typed_as_text() {
        let mut controller = FormController::default();
        controller.handle_token("Denver");
        controller.handle_token("tab");
        controller.handle_token("x");

        assert_eq!(controller.criteria().value(0), "Denver");
        assert_eq!(controller.criteria().value(1), "x");
    }

    #[test]
    fn render_editing_layout() {
        let controller = FormController::default();
        let view = controller.render();

        assert_eq!(
            view.to_plain_text(),
            [
                "Enter search criteria",
                "",
                "> Keyword: eg: Web Developer",
                "> Location: eg: Boulder CO, Salt Lake City UT",
                "",
                "[ Submit ]",
                "",
                EDITING_HINT,
                "0 searches queued",
            ]
            .join("\n")
        );
        assert_eq!(view.cursor.map(|c| (c.line, c.column)), Some((2, 11)));
    }

    #[test]
    fn render_confirm_layout() {
        let mut controller = FormController::default();
        press(&mut controller, KeyInput::BackTab);
        press(&mut controller, KeyInput::Enter);

        let view = controller.render();
        assert_eq!(
            view.to_plain_text(),
            [
                CONFIRM_HEADER,
                "",
                "> [Y/n]",
                "",
                "[ Add ]",
                "",
                CONFIRM_HINT,
                "1 search queued",
            ]
            .join("\n")
        );
        assert_eq!(view.lines[0].spans[0].style, StyleTag::Header);
    }
}
