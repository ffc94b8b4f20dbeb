//! Per-field validation rules.
//!
//! Each field maps to at most one error message. Rules run in a fixed
//! order: required, email format, minimum length, maximum length. The
//! first failing rule wins.

use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::draft::{Field, MessageDraft};

struct Rules {
    required: &'static str,
    /// Character bounds on the trimmed value, with their messages.
    length: Option<(usize, &'static str, usize, &'static str)>,
}

fn rules(field: Field) -> Rules {
    match field {
        Field::Name => Rules {
            required: "Name is required",
            length: Some((
                2,
                "Name must be at least 2 characters",
                50,
                "Name must not exceed 50 characters",
            )),
        },
        Field::Email => Rules {
            required: "Email is required",
            length: None,
        },
        Field::Subject => Rules {
            required: "Subject is required",
            length: Some((
                3,
                "Subject must be at least 3 characters",
                100,
                "Subject must not exceed 100 characters",
            )),
        },
        Field::Message => Rules {
            required: "Message is required",
            length: Some((
                10,
                "Message must be at least 10 characters",
                1000,
                "Message must not exceed 1000 characters",
            )),
        },
    }
}

/// Anchored `local@domain.tld` shape: no whitespace, a single `@`, a dot
/// somewhere after it.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
    })
}

/// Validate a single field, returning the first failing rule's message.
///
/// The required and length checks run on the trimmed value (all-whitespace
/// input counts as empty); the email format check runs on the raw value,
/// which the anchored pattern rejects for surrounding whitespace anyway.
pub fn validate(field: Field, raw: &str) -> Option<String> {
    let rules = rules(field);
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Some(rules.required.to_string());
    }

    if field == Field::Email && !email_pattern().is_match(raw) {
        return Some("Please enter a valid email address".to_string());
    }

    if let Some((min, too_short, max, too_long)) = rules.length {
        let len = trimmed.chars().count();
        if len < min {
            return Some(too_short.to_string());
        }
        if len > max {
            return Some(too_long.to_string());
        }
    }

    None
}

/// Validate the whole draft, returning the failing fields only.
pub fn validate_form(draft: &MessageDraft) -> BTreeMap<Field, String> {
    Field::ALL
        .iter()
        .filter_map(|&field| validate(field, draft.get(field)).map(|message| (field, message)))
        .collect()
}
