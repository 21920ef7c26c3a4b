//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use searchform_app::Mode;

use super::{FieldSetSnapshot, FormSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Each field set has exactly one focused position.
///
/// Counting fields whose own flag is set plus the submit slot must give one.
/// Zero means input would vanish; two means a stale flag survived a move.
pub struct SingleFocus;

impl Invariant for SingleFocus {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SingleFocus
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        for (name, set) in [("criteria", &state.criteria), ("confirm", &state.confirm)] {
            let focused = set.focused_positions();
            if focused != 1 {
                return Err(Violation {
                    invariant: self.kind(),
                    message: format!("{name}: {focused} positions focused"),
                });
            }
        }
        Ok(())
    }
}

/// Focus index stays in `0..=fields.len()` and agrees with the flags.
pub struct FocusInRange;

impl FocusInRange {
    fn check_set(name: &str, set: &FieldSetSnapshot) -> Option<String> {
        let submit_index = set.fields.len();
        if set.focus_index > submit_index {
            return Some(format!("{name}: focus index {} > {submit_index}", set.focus_index));
        }
        if set.submit_focused != (set.focus_index == submit_index) {
            return Some(format!(
                "{name}: submit focused = {} at focus index {}",
                set.submit_focused, set.focus_index
            ));
        }
        if let Some(field) = set.fields.get(set.focus_index)
            && !field.focused
        {
            return Some(format!("{name}: field {} not flagged focused", set.focus_index));
        }
        None
    }
}

impl Invariant for FocusInRange {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FocusInRange
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        for (name, set) in [("criteria", &state.criteria), ("confirm", &state.confirm)] {
            if let Some(message) = Self::check_set(name, set) {
                return Err(Violation { invariant: self.kind(), message });
            }
        }
        Ok(())
    }
}

/// No buffer holds more characters than its limit.
pub struct BufferWithinLimit;

impl Invariant for BufferWithinLimit {
    fn kind(&self) -> InvariantKind {
        InvariantKind::BufferWithinLimit
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        for (name, set) in [("criteria", &state.criteria), ("confirm", &state.confirm)] {
            for (index, field) in set.fields.iter().enumerate() {
                if field.len > field.max_length {
                    return Err(Violation {
                        invariant: self.kind(),
                        message: format!(
                            "{name} field {index}: length {} > limit {}",
                            field.len, field.max_length
                        ),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Records only grow at the end, by at most one per event.
///
/// Requires `previous_records`; the first frame always passes.
pub struct RecordsAppendOnly;

impl Invariant for RecordsAppendOnly {
    fn kind(&self) -> InvariantKind {
        InvariantKind::RecordsAppendOnly
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        let Some(previous) = &state.previous_records else {
            return Ok(());
        };

        if !state.records.starts_with(previous) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!(
                    "earlier records changed: {} before, {} now",
                    previous.len(),
                    state.records.len()
                ),
            });
        }

        let added = state.records.len() - previous.len();
        if added > 1 {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("{added} records appended by one event"),
            });
        }
        Ok(())
    }
}

/// `ConfirmAdd` only follows a commit.
///
/// In confirm mode at least one record exists and the criteria form is
/// cleared with focus back on its first field.
pub struct ConfirmFollowsCommit;

impl Invariant for ConfirmFollowsCommit {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ConfirmFollowsCommit
    }

    fn check(&self, state: &FormSnapshot) -> InvariantResult {
        if state.mode != Mode::ConfirmAdd {
            return Ok(());
        }

        let message = if state.records.is_empty() {
            Some("confirm mode with no records".to_string())
        } else if state.criteria.fields.iter().any(|f| f.len > 0) {
            Some("confirm mode with uncleared criteria".to_string())
        } else if state.criteria.focus_index != 0 {
            Some(format!("criteria focus left at {}", state.criteria.focus_index))
        } else {
            None
        };

        message.map_or(Ok(()), |message| Err(Violation { invariant: self.kind(), message }))
    }
}

#[cfg(test)]
mod tests {
    use searchform_app::{FormController, KeyInput, SearchRecord};

    use super::*;
    use crate::invariants::{FieldSnapshot, InvariantRegistry};

    fn committed_controller() -> FormController {
        let mut controller = FormController::default();
        for token in ["E", "tab", "D", "tab", "enter"] {
            let _ = controller.handle_token(token);
        }
        controller
    }

    #[test]
    fn fresh_controller_satisfies_standard_invariants() {
        let snapshot = FormSnapshot::from_controller(&FormController::default());
        assert!(InvariantRegistry::standard().check_all(&snapshot).is_ok());
    }

    #[test]
    fn double_focus_detected() {
        let mut snapshot = FormSnapshot::from_controller(&FormController::default());
        snapshot.criteria.fields[1].focused = true;

        let result = SingleFocus.check(&snapshot);
        assert!(matches!(result, Err(Violation { invariant: InvariantKind::SingleFocus, .. })));
    }

    #[test]
    fn no_focus_detected() {
        let mut snapshot = FormSnapshot::from_controller(&FormController::default());
        snapshot.confirm.fields[0].focused = false;

        assert!(SingleFocus.check(&snapshot).is_err());
    }

    #[test]
    fn focus_index_out_of_range_detected() {
        let mut snapshot = FormSnapshot::from_controller(&FormController::default());
        snapshot.criteria.focus_index = 5;

        let result = FocusInRange.check(&snapshot);
        assert!(matches!(result, Err(Violation { invariant: InvariantKind::FocusInRange, .. })));
    }

    #[test]
    fn overflow_detected() {
        let mut snapshot = FormSnapshot::from_controller(&FormController::default());
        snapshot.criteria.fields[0] = FieldSnapshot { len: 33, max_length: 32, focused: true };

        assert!(BufferWithinLimit.check(&snapshot).is_err());
    }

    #[test]
    fn rewritten_history_detected() {
        let controller = committed_controller();
        let mut previous = FormSnapshot::from_controller(&controller);
        previous.records = vec![SearchRecord::new("Other", "Place")];

        let snapshot = FormSnapshot::from_controller(&controller).with_previous(&previous);
        assert!(RecordsAppendOnly.check(&snapshot).is_err());
    }

    #[test]
    fn single_append_passes() {
        let before = FormSnapshot::from_controller(&FormController::default());
        let after = FormSnapshot::from_controller(&committed_controller()).with_previous(&before);

        assert!(RecordsAppendOnly.check(&after).is_ok());
        assert!(ConfirmFollowsCommit.check(&after).is_ok());
    }

    #[test]
    fn confirm_without_records_detected() {
        let mut snapshot = FormSnapshot::from_controller(&committed_controller());
        snapshot.records.clear();

        let result = ConfirmFollowsCommit.check(&snapshot);
        assert!(matches!(
            result,
            Err(Violation { invariant: InvariantKind::ConfirmFollowsCommit, .. })
        ));
    }

    #[test]
    fn quit_key_does_not_break_invariants() {
        let mut controller = committed_controller();
        let _ = controller.handle(KeyInput::Esc.into());

        let snapshot = FormSnapshot::from_controller(&controller);
        assert!(InvariantRegistry::standard().check_all(&snapshot).is_ok());
    }
}
