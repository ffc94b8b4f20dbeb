use crate::form::{validate, validate_form, Field};
use crate::ui::contact::intent::ContactIntent;
use crate::ui::contact::state::{ContactFormState, FormCursor, SubmissionStatus};
use crate::ui::mvi::Reducer;

pub struct ContactReducer;

impl Reducer for ContactReducer {
    type State = ContactFormState;
    type Intent = ContactIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let mut state = state;
        match intent {
            ContactIntent::Input(ch) => {
                if let FormCursor::Field(field) = state.cursor {
                    state.draft.get_mut(field).push(ch);
                    revalidate_if_touched(&mut state, field);
                }
                state
            }
            ContactIntent::Backspace => {
                if let FormCursor::Field(field) = state.cursor {
                    state.draft.get_mut(field).pop();
                    revalidate_if_touched(&mut state, field);
                }
                state
            }
            ContactIntent::FocusNext => {
                blur_current(&mut state);
                state.cursor = next_cursor(state.cursor);
                state
            }
            ContactIntent::FocusPrev => {
                blur_current(&mut state);
                state.cursor = prev_cursor(state.cursor);
                state
            }
            ContactIntent::Submit => {
                // Disabled control: ignore while a delivery is in flight.
                if state.status.is_submitting() {
                    return state;
                }
                let errors = validate_form(&state.draft);
                state.touched = Field::ALL.iter().copied().collect();
                if errors.is_empty() {
                    state.errors.clear();
                    state.status = SubmissionStatus::Submitting;
                    state.generation += 1;
                } else {
                    // Invalid form: no status change, errors become visible.
                    state.errors = errors;
                }
                state
            }
            ContactIntent::DeliverySucceeded => {
                if !state.status.is_submitting() {
                    return state;
                }
                state.draft.clear();
                state.errors.clear();
                state.touched.clear();
                state.status = SubmissionStatus::Success;
                state.generation += 1;
                state
            }
            ContactIntent::DeliveryFailed => {
                if !state.status.is_submitting() {
                    return state;
                }
                // Draft, errors and touched set stay intact for retry.
                state.status = SubmissionStatus::Error;
                state.generation += 1;
                state
            }
            ContactIntent::StatusExpired { generation } => {
                if generation == state.generation && state.status.is_terminal() {
                    state.status = SubmissionStatus::Idle;
                }
                state
            }
        }
    }
}

/// Leaving a field marks it touched and refreshes its error.
fn blur_current(state: &mut ContactFormState) {
    if let FormCursor::Field(field) = state.cursor {
        state.touched.insert(field);
        set_error(state, field);
    }
}

/// Once a field has been touched, its error tracks every edit.
fn revalidate_if_touched(state: &mut ContactFormState, field: Field) {
    if state.touched.contains(&field) {
        set_error(state, field);
    }
}

fn set_error(state: &mut ContactFormState, field: Field) {
    match validate(field, state.draft.get(field)) {
        Some(message) => {
            state.errors.insert(field, message);
        }
        None => {
            state.errors.remove(&field);
        }
    }
}

fn next_cursor(cursor: FormCursor) -> FormCursor {
    match cursor {
        FormCursor::Field(Field::Name) => FormCursor::Field(Field::Email),
        FormCursor::Field(Field::Email) => FormCursor::Field(Field::Subject),
        FormCursor::Field(Field::Subject) => FormCursor::Field(Field::Message),
        FormCursor::Field(Field::Message) => FormCursor::Submit,
        FormCursor::Submit => FormCursor::Field(Field::Name),
    }
}

fn prev_cursor(cursor: FormCursor) -> FormCursor {
    match cursor {
        FormCursor::Field(Field::Name) => FormCursor::Submit,
        FormCursor::Field(Field::Email) => FormCursor::Field(Field::Name),
        FormCursor::Field(Field::Subject) => FormCursor::Field(Field::Email),
        FormCursor::Field(Field::Message) => FormCursor::Field(Field::Subject),
        FormCursor::Submit => FormCursor::Field(Field::Message),
    }
}
