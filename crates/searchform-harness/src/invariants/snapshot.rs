//! Observable state snapshots for invariant checking.
//!
//! Snapshots capture the observable state of a form controller at a point in
//! time. Invariants operate on snapshots rather than live state so a check
//! sees one consistent frame.

use searchform_app::{Field, FieldSet, FormController, Mode, SearchRecord};

/// Snapshot of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSnapshot {
    /// Content length in characters.
    pub len: usize,
    /// Length limit in characters.
    pub max_length: usize,
    /// Field's own focus flag.
    pub focused: bool,
}

impl From<&Field> for FieldSnapshot {
    fn from(field: &Field) -> Self {
        Self { len: field.len(), max_length: field.max_length(), focused: field.is_focused() }
    }
}

/// Snapshot of a field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSetSnapshot {
    /// Per-field state, in order.
    pub fields: Vec<FieldSnapshot>,
    /// Focus index (`fields.len()` is submit).
    pub focus_index: usize,
    /// Submit slot reports focus.
    pub submit_focused: bool,
}

impl From<&FieldSet> for FieldSetSnapshot {
    fn from(set: &FieldSet) -> Self {
        Self {
            fields: set.fields().iter().map(FieldSnapshot::from).collect(),
            focus_index: set.focus_index(),
            submit_focused: set.is_submit_focused(),
        }
    }
}

impl FieldSetSnapshot {
    /// Number of positions reporting focus (fields plus submit).
    pub fn focused_positions(&self) -> usize {
        self.fields.iter().filter(|f| f.focused).count() + usize::from(self.submit_focused)
    }
}

/// Snapshot of the whole form session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    /// Current mode.
    pub mode: Mode,
    /// Criteria form state.
    pub criteria: FieldSetSnapshot,
    /// Confirm-add form state.
    pub confirm: FieldSetSnapshot,
    /// Committed records.
    pub records: Vec<SearchRecord>,
    /// Records at the previous snapshot. `None` for the first frame.
    pub previous_records: Option<Vec<SearchRecord>>,
}

impl FormSnapshot {
    /// Capture the controller's observable state.
    pub fn from_controller(controller: &FormController) -> Self {
        Self {
            mode: controller.mode(),
            criteria: controller.criteria().into(),
            confirm: controller.confirm().into(),
            records: controller.records().to_vec(),
            previous_records: None,
        }
    }

    /// Attach the records seen in an earlier snapshot for history checks.
    #[must_use]
    pub fn with_previous(mut self, previous: &FormSnapshot) -> Self {
        self.previous_records = Some(previous.records.clone());
        self
    }
}
