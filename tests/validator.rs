use termfolio::form::{validate, validate_form, Field, MessageDraft};

fn valid_draft() -> MessageDraft {
    MessageDraft {
        name: "Jo".to_string(),
        email: "a@b.co".to_string(),
        subject: "Hi there".to_string(),
        message: "1234567890".to_string(),
    }
}

// -- required ----------------------------------------------------------------

#[test]
fn empty_values_are_required() {
    assert_eq!(validate(Field::Name, ""), Some("Name is required".to_string()));
    assert_eq!(validate(Field::Email, ""), Some("Email is required".to_string()));
    assert_eq!(
        validate(Field::Subject, ""),
        Some("Subject is required".to_string())
    );
    assert_eq!(
        validate(Field::Message, ""),
        Some("Message is required".to_string())
    );
}

#[test]
fn all_whitespace_counts_as_empty() {
    assert_eq!(
        validate(Field::Name, "   \t "),
        Some("Name is required".to_string())
    );
}

#[test]
fn required_wins_over_format_for_blank_email() {
    // Precedence: an all-whitespace email reports "required", not the
    // format error, even though the pattern would also reject it.
    assert_eq!(
        validate(Field::Email, "   "),
        Some("Email is required".to_string())
    );
}

// -- email format ------------------------------------------------------------

#[test]
fn email_accepts_simple_address() {
    assert_eq!(validate(Field::Email, "a@b.co"), None);
}

#[test]
fn email_rejects_missing_at() {
    assert_eq!(
        validate(Field::Email, "plainaddress"),
        Some("Please enter a valid email address".to_string())
    );
}

#[test]
fn email_rejects_missing_dot_after_at() {
    assert_eq!(
        validate(Field::Email, "user@host"),
        Some("Please enter a valid email address".to_string())
    );
}

#[test]
fn email_rejects_inner_whitespace() {
    assert_eq!(
        validate(Field::Email, "user name@host.com"),
        Some("Please enter a valid email address".to_string())
    );
}

#[test]
fn email_rejects_surrounding_whitespace() {
    // The format check runs on the raw value; the anchored pattern
    // rejects padding that trimming would otherwise hide.
    assert_eq!(
        validate(Field::Email, " a@b.co "),
        Some("Please enter a valid email address".to_string())
    );
}

// -- length bounds -----------------------------------------------------------

#[test]
fn name_below_minimum_by_one() {
    assert_eq!(
        validate(Field::Name, "J"),
        Some("Name must be at least 2 characters".to_string())
    );
}

#[test]
fn name_at_minimum_is_valid() {
    assert_eq!(validate(Field::Name, "Jo"), None);
}

#[test]
fn name_length_counts_trimmed_characters() {
    // " Jo " trims to two characters.
    assert_eq!(validate(Field::Name, " Jo "), None);
}

#[test]
fn name_above_maximum() {
    let long = "x".repeat(51);
    assert_eq!(
        validate(Field::Name, &long),
        Some("Name must not exceed 50 characters".to_string())
    );
    assert_eq!(validate(Field::Name, &"x".repeat(50)), None);
}

#[test]
fn subject_bounds() {
    assert_eq!(
        validate(Field::Subject, "Hi"),
        Some("Subject must be at least 3 characters".to_string())
    );
    assert_eq!(validate(Field::Subject, "Hi!"), None);
    assert_eq!(
        validate(Field::Subject, &"s".repeat(101)),
        Some("Subject must not exceed 100 characters".to_string())
    );
    assert_eq!(validate(Field::Subject, &"s".repeat(100)), None);
}

#[test]
fn message_bounds() {
    assert_eq!(
        validate(Field::Message, "123456789"),
        Some("Message must be at least 10 characters".to_string())
    );
    assert_eq!(validate(Field::Message, "1234567890"), None);
    assert_eq!(
        validate(Field::Message, &"m".repeat(1001)),
        Some("Message must not exceed 1000 characters".to_string())
    );
    assert_eq!(validate(Field::Message, &"m".repeat(1000)), None);
}

#[test]
fn length_counts_characters_not_bytes() {
    // Two non-ASCII characters satisfy the two-character minimum.
    assert_eq!(validate(Field::Name, "Ōk"), None);
}

// -- whole-form validation ---------------------------------------------------

#[test]
fn empty_form_reports_four_required_errors() {
    let errors = validate_form(&MessageDraft::default());
    assert_eq!(errors.len(), 4);
    assert_eq!(errors[&Field::Name], "Name is required");
    assert_eq!(errors[&Field::Email], "Email is required");
    assert_eq!(errors[&Field::Subject], "Subject is required");
    assert_eq!(errors[&Field::Message], "Message is required");
}

#[test]
fn boundary_form_is_clean() {
    assert!(validate_form(&valid_draft()).is_empty());
}

#[test]
fn form_reports_only_failing_fields() {
    let mut draft = valid_draft();
    draft.name = "J".to_string();
    let errors = validate_form(&draft);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[&Field::Name], "Name must be at least 2 characters");
}

#[test]
fn at_most_one_error_per_field() {
    // "J" is both short and (hypothetically) other things; only the first
    // failing rule is reported.
    let error = validate(Field::Name, "J");
    assert_eq!(error, Some("Name must be at least 2 characters".to_string()));
}
