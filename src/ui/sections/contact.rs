//! Contact section: info block, social links, and the message form.
//!
//! The section is exactly [`HEIGHT`] rows for every form state: error
//! rows render blank when there is nothing to show, so typing, blurring
//! and submitting never shift the page layout under the viewport.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::form::Field;
use crate::ui::contact::{ContactFormState, FormCursor, SubmissionStatus};
use crate::ui::theme::{
    ACCENT, FIELD_IDLE, STATUS_ERROR, STATUS_OK, TEXT, TEXT_BRIGHT, TEXT_FAINT,
};

use super::{content_width, faded, heading};

/// Total rows of the section.
pub const HEIGHT: usize = 30;

/// Row of the first field's label, within the section.
const FIELD_ROWS_START: usize = 15;

/// Row of a field's input line, within the section.
pub fn input_row(field: Field) -> usize {
    let index = Field::ALL
        .iter()
        .position(|&f| f == field)
        .unwrap_or_default();
    FIELD_ROWS_START + index * 3 + 1
}

pub fn lines(
    profile: &Profile,
    width: u16,
    form: &ContactFormState,
    form_focused: bool,
    copied: bool,
    p: impl Fn(u32) -> f32,
) -> Vec<Line<'static>> {
    let mut lines = heading("Get In Touch", p(0));

    let info = p(1);
    lines.push(faded(info, block_title("Contact Information")));
    lines.push(faded(
        info,
        Line::from(vec![
            Span::styled("  Location  ", Style::default().fg(TEXT_FAINT)),
            Span::styled(profile.location, Style::default().fg(TEXT)),
        ]),
    ));
    let copy_hint = if copied {
        Span::styled("✓ copied", Style::default().fg(STATUS_OK))
    } else {
        Span::styled("[y] copy", Style::default().fg(ACCENT))
    };
    lines.push(faded(
        info,
        Line::from(vec![
            Span::styled("  Email     ", Style::default().fg(TEXT_FAINT)),
            Span::styled(profile.email, Style::default().fg(TEXT)),
            Span::raw("   "),
            copy_hint,
        ]),
    ));
    lines.push(Line::default());
    lines.push(faded(info, block_title("Connect with me")));
    lines.push(faded(
        info,
        Line::from(vec![
            Span::styled("  GitHub    ", Style::default().fg(TEXT_FAINT)),
            Span::styled(profile.github, Style::default().fg(TEXT)),
            Span::raw("   "),
            Span::styled("[o] open", Style::default().fg(ACCENT)),
        ]),
    ));
    lines.push(faded(
        info,
        Line::from(vec![
            Span::styled("  LinkedIn  ", Style::default().fg(TEXT_FAINT)),
            Span::styled(profile.linkedin, Style::default().fg(TEXT)),
            Span::raw("   "),
            Span::styled("[l] open", Style::default().fg(ACCENT)),
        ]),
    ));
    lines.push(Line::default());

    let form_progress = p(2);
    lines.push(faded(form_progress, block_title("Send a Message")));
    lines.push(status_line(form.status));
    lines.push(Line::default());

    for &field in &Field::ALL {
        lines.push(faded(form_progress, label_line(field, form, form_focused)));
        lines.push(faded(
            form_progress,
            input_line(field, form, form_focused, width),
        ));
        lines.push(detail_line(field, form));
    }

    lines.push(faded(p(3), submit_line(form, form_focused)));
    lines.push(strip_line(form));
    lines.push(Line::default());

    debug_assert_eq!(lines.len(), HEIGHT);
    lines
}

pub fn height(_profile: &Profile, _width: u16) -> usize {
    HEIGHT
}

fn block_title(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn label_line(field: Field, form: &ContactFormState, form_focused: bool) -> Line<'static> {
    let focused = form_focused && form.cursor == FormCursor::Field(field);
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(TEXT_FAINT)
    };
    Line::from(Span::styled(format!("  {}", field.label()), style))
}

fn input_line(
    field: Field,
    form: &ContactFormState,
    form_focused: bool,
    width: u16,
) -> Line<'static> {
    let focused = form_focused && form.cursor == FormCursor::Field(field);
    let value = form.draft.get(field);

    if value.is_empty() && !focused {
        return Line::from(vec![
            Span::styled("  ▏", Style::default().fg(FIELD_IDLE)),
            Span::styled(
                field.placeholder(),
                Style::default().fg(TEXT_FAINT).add_modifier(Modifier::DIM),
            ),
        ]);
    }

    // Long values show their tail, which is where the user is typing.
    let avail = content_width(width).saturating_sub(4);
    let chars: Vec<char> = value.chars().collect();
    let shown: String = if chars.len() > avail {
        chars[chars.len() - avail..].iter().collect()
    } else {
        chars.iter().collect()
    };

    let mut spans = vec![
        Span::styled(
            "  ▏",
            Style::default().fg(if focused { ACCENT } else { FIELD_IDLE }),
        ),
        Span::styled(shown, Style::default().fg(TEXT_BRIGHT)),
    ];
    if focused {
        spans.push(Span::styled("█", Style::default().fg(ACCENT)));
    }
    Line::from(spans)
}

/// Error row under a field: the shown error, or the running character
/// count for the message body, or blank.
fn detail_line(field: Field, form: &ContactFormState) -> Line<'static> {
    if let Some(error) = form.shown_error(field) {
        return Line::from(Span::styled(
            format!("    ✗ {error}"),
            Style::default().fg(STATUS_ERROR),
        ));
    }

    if field == Field::Message {
        if let Some(max) = field.max_len() {
            let count = form.draft.message.chars().count();
            let style = if count > max {
                Style::default().fg(STATUS_ERROR)
            } else {
                Style::default().fg(TEXT_FAINT)
            };
            return Line::from(Span::styled(format!("    {count}/{max}"), style));
        }
    }

    Line::default()
}

fn status_line(status: SubmissionStatus) -> Line<'static> {
    match status {
        SubmissionStatus::Idle => Line::default(),
        SubmissionStatus::Submitting => Line::from(Span::styled(
            "  ⟳ Sending...",
            Style::default().fg(ACCENT),
        )),
        SubmissionStatus::Success => Line::from(Span::styled(
            "  ✓ Your message has been sent successfully! I'll get back to you soon.",
            Style::default().fg(STATUS_OK),
        )),
        SubmissionStatus::Error => Line::from(Span::styled(
            "  ✗ Failed to send message. Please try again later.",
            Style::default().fg(STATUS_ERROR),
        )),
    }
}

fn submit_line(form: &ContactFormState, form_focused: bool) -> Line<'static> {
    let selected = form_focused && form.cursor == FormCursor::Submit;
    let (text, style) = if form.is_submitting() {
        (
            "  [ Sending... ]",
            Style::default().fg(TEXT_FAINT).add_modifier(Modifier::DIM),
        )
    } else if selected {
        (
            "  [ Send Message → ]",
            Style::default()
                .fg(TEXT_BRIGHT)
                .bg(ACCENT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  [ Send Message → ]", Style::default().fg(ACCENT))
    };
    Line::from(Span::styled(text, style))
}

/// Field-status strip: one segment per field, accent when filled and
/// clean, red when filled and failing, idle otherwise.
fn strip_line(form: &ContactFormState) -> Line<'static> {
    let mut spans = vec![Span::raw("  ")];
    for &field in &Field::ALL {
        let filled = !form.draft.get(field).is_empty();
        let failing = form.errors.contains_key(&field);
        let color = match (filled, failing) {
            (true, false) => ACCENT,
            (true, true) => STATUS_ERROR,
            _ => FIELD_IDLE,
        };
        spans.push(Span::styled("▰▰▰▰▰", Style::default().fg(color)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}
