use crate::ui::mvi::Intent;

/// User actions and system events for the contact form.
#[derive(Debug, Clone)]
pub enum ContactIntent {
    /// Type a character into the focused field.
    Input(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Move focus forward, blurring the field being left.
    FocusNext,
    /// Move focus backward, blurring the field being left.
    FocusPrev,
    /// Attempt submission. Validates the whole form and marks every field
    /// touched; only a clean form enters `Submitting`.
    Submit,
    DeliverySucceeded,
    DeliveryFailed,
    /// Auto-reset timer fired. Ignored unless `generation` still matches
    /// the state's current one.
    StatusExpired { generation: u64 },
}

impl Intent for ContactIntent {}
