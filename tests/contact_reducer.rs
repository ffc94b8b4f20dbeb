use termfolio::form::{Field, MessageDraft};
use termfolio::ui::contact::{ContactFormState, ContactIntent, ContactReducer, FormCursor, SubmissionStatus};
use termfolio::ui::mvi::Reducer;

fn reduce(state: ContactFormState, intent: ContactIntent) -> ContactFormState {
    ContactReducer::reduce(state, intent)
}

fn valid_state() -> ContactFormState {
    ContactFormState {
        draft: MessageDraft {
            name: "Jo".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hi there".to_string(),
            message: "1234567890".to_string(),
        },
        ..ContactFormState::default()
    }
}

// -- input & touch gating ----------------------------------------------------

#[test]
fn typing_routes_to_focused_field() {
    let mut state = ContactFormState::default();
    for ch in "Jo".chars() {
        state = reduce(state, ContactIntent::Input(ch));
    }
    assert_eq!(state.draft.name, "Jo");
}

#[test]
fn untouched_field_shows_no_error_while_typing() {
    let state = reduce(ContactFormState::default(), ContactIntent::Input('J'));
    // "J" is too short, but the field was never blurred.
    assert!(state.errors.is_empty());
    assert_eq!(state.shown_error(Field::Name), None);
}

#[test]
fn leaving_a_field_marks_it_touched_and_validates() {
    let state = reduce(ContactFormState::default(), ContactIntent::Input('J'));
    let state = reduce(state, ContactIntent::FocusNext);
    assert!(state.touched.contains(&Field::Name));
    assert_eq!(
        state.shown_error(Field::Name),
        Some("Name must be at least 2 characters")
    );
    assert_eq!(state.cursor, FormCursor::Field(Field::Email));
}

#[test]
fn touched_field_revalidates_on_every_edit() {
    let state = reduce(ContactFormState::default(), ContactIntent::Input('J'));
    let state = reduce(state, ContactIntent::FocusNext);
    let state = reduce(state, ContactIntent::FocusPrev);
    assert_eq!(state.cursor, FormCursor::Field(Field::Name));
    // Fixing the value clears the error immediately now that it's touched.
    let state = reduce(state, ContactIntent::Input('o'));
    assert_eq!(state.shown_error(Field::Name), None);
}

#[test]
fn backspace_edits_focused_field() {
    let state = reduce(ContactFormState::default(), ContactIntent::Input('J'));
    let state = reduce(state, ContactIntent::Input('o'));
    let state = reduce(state, ContactIntent::Backspace);
    assert_eq!(state.draft.name, "J");
}

#[test]
fn focus_cycles_through_fields_and_submit() {
    let mut state = ContactFormState::default();
    let expected = [
        FormCursor::Field(Field::Email),
        FormCursor::Field(Field::Subject),
        FormCursor::Field(Field::Message),
        FormCursor::Submit,
        FormCursor::Field(Field::Name),
    ];
    for cursor in expected {
        state = reduce(state, ContactIntent::FocusNext);
        assert_eq!(state.cursor, cursor);
    }
}

#[test]
fn focus_prev_wraps_to_submit() {
    let state = reduce(ContactFormState::default(), ContactIntent::FocusPrev);
    assert_eq!(state.cursor, FormCursor::Submit);
}

#[test]
fn typing_on_submit_control_is_ignored() {
    let state = reduce(ContactFormState::default(), ContactIntent::FocusPrev);
    let state = reduce(state, ContactIntent::Input('x'));
    assert_eq!(state.draft, MessageDraft::default());
}

// -- submit gating -----------------------------------------------------------

#[test]
fn submit_with_empty_form_shows_all_errors_without_status_change() {
    let state = reduce(ContactFormState::default(), ContactIntent::Submit);
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert_eq!(state.errors.len(), 4);
    // Submit marks every field touched so the errors actually display.
    for field in Field::ALL {
        assert!(state.touched.contains(&field));
        assert!(state.shown_error(field).is_some());
    }
}

#[test]
fn submit_with_valid_form_enters_submitting() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    assert_eq!(state.status, SubmissionStatus::Submitting);
    assert!(state.errors.is_empty());
}

#[test]
fn submit_bumps_generation() {
    let before = valid_state();
    let generation = before.generation;
    let state = reduce(before, ContactIntent::Submit);
    assert_eq!(state.generation, generation + 1);
}

#[test]
fn submit_while_submitting_is_ignored() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    let generation = state.generation;
    let state = reduce(state, ContactIntent::Submit);
    assert_eq!(state.status, SubmissionStatus::Submitting);
    assert_eq!(state.generation, generation);
}

#[test]
fn typing_remains_possible_while_submitting() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    let state = reduce(state, ContactIntent::Input('!'));
    assert_eq!(state.draft.name, "Jo!");
}

// -- delivery outcomes -------------------------------------------------------

#[test]
fn success_clears_form_and_sets_status() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    let state = reduce(state, ContactIntent::DeliverySucceeded);
    assert_eq!(state.status, SubmissionStatus::Success);
    assert_eq!(state.draft, MessageDraft::default());
    assert!(state.errors.is_empty());
    assert!(state.touched.is_empty());
}

#[test]
fn failure_preserves_draft_for_retry() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    let state = reduce(state, ContactIntent::DeliveryFailed);
    assert_eq!(state.status, SubmissionStatus::Error);
    assert_eq!(state.draft.name, "Jo");
    assert_eq!(state.draft.message, "1234567890");
}

#[test]
fn delivery_outcome_without_submission_is_noop() {
    let state = reduce(valid_state(), ContactIntent::DeliverySucceeded);
    assert_eq!(state.status, SubmissionStatus::Idle);
    assert_eq!(state.draft.name, "Jo");
}

// -- auto-reset & cancellation -----------------------------------------------

#[test]
fn status_expires_back_to_idle_with_matching_generation() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    let state = reduce(state, ContactIntent::DeliverySucceeded);
    let generation = state.generation;
    let state = reduce(state, ContactIntent::StatusExpired { generation });
    assert_eq!(state.status, SubmissionStatus::Idle);
}

#[test]
fn stale_timer_cannot_clobber_newer_status() {
    // First submission succeeds; its reset timer is scheduled under g1.
    let state = reduce(valid_state(), ContactIntent::Submit);
    let state = reduce(state, ContactIntent::DeliverySucceeded);
    let stale = state.generation;

    // Second submission lands inside the reset window.
    let mut state = state;
    state.draft = valid_state().draft;
    let state = reduce(state, ContactIntent::Submit);
    assert_eq!(state.status, SubmissionStatus::Submitting);

    // The first timer fires late: ignored, the new submission stands.
    let state = reduce(state, ContactIntent::StatusExpired { generation: stale });
    assert_eq!(state.status, SubmissionStatus::Submitting);
}

#[test]
fn second_success_window_restarts_cleanly() {
    let state = reduce(valid_state(), ContactIntent::Submit);
    let state = reduce(state, ContactIntent::DeliverySucceeded);
    let first = state.generation;

    let mut state = state;
    state.draft = valid_state().draft;
    let state = reduce(state, ContactIntent::Submit);
    let state = reduce(state, ContactIntent::DeliverySucceeded);
    let second = state.generation;
    assert_ne!(first, second);

    // Only the second window's timer resets the banner.
    let state = reduce(state, ContactIntent::StatusExpired { generation: first });
    assert_eq!(state.status, SubmissionStatus::Success);
    let state = reduce(state, ContactIntent::StatusExpired { generation: second });
    assert_eq!(state.status, SubmissionStatus::Idle);
}

#[test]
fn expiry_in_idle_is_noop() {
    let state = ContactFormState::default();
    let generation = state.generation;
    let state = reduce(state, ContactIntent::StatusExpired { generation });
    assert_eq!(state.status, SubmissionStatus::Idle);
}
