use std::collections::{BTreeMap, BTreeSet};

use crate::form::{Field, MessageDraft};
use crate::ui::mvi::UiState;

/// Where key input lands inside the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCursor {
    Field(Field),
    Submit,
}

impl Default for FormCursor {
    fn default() -> Self {
        FormCursor::Field(Field::Name)
    }
}

/// Lifecycle of a submission attempt.
///
/// Transitions only `Idle -> Submitting -> {Success, Error} -> Idle`;
/// the terminal states auto-revert after a fixed delay unless superseded
/// by a newer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionStatus::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactFormState {
    pub draft: MessageDraft,
    /// Failing fields only. Display is additionally gated on `touched`.
    pub errors: BTreeMap<Field, String>,
    /// Fields the user has left at least once. Errors stay hidden until
    /// a field is touched, so nothing is flagged before first interaction.
    pub touched: BTreeSet<Field>,
    pub cursor: FormCursor,
    pub status: SubmissionStatus,
    /// Bumped on every status change. Timers carry the value they were
    /// scheduled under and their expiry is ignored unless it still
    /// matches, which is how a newer submission cancels a stale reset.
    pub generation: u64,
}

impl UiState for ContactFormState {}

impl ContactFormState {
    /// The error to display for a field, if any: present and touched.
    pub fn shown_error(&self, field: Field) -> Option<&str> {
        if self.touched.contains(&field) {
            self.errors.get(&field).map(String::as_str)
        } else {
            None
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.status.is_submitting()
    }
}
