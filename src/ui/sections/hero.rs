//! Hero banner: badge, typewriter title, summary, calls to action.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, ACCENT_ALT, TEXT, TEXT_BRIGHT};

use super::{content_width, faded, wrap};

/// The title is split so the name carries the accent color.
const TITLE_PREFIX: &str = "Hey, I'm ";

pub fn lines(
    profile: &Profile,
    width: u16,
    typed: &str,
    show_tail: bool,
    p: impl Fn(u32) -> f32,
) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::default(),
        faded(
            p(0),
            Line::from(Span::styled(
                format!("· {} ·", profile.badge),
                Style::default().fg(ACCENT),
            ))
            .centered(),
        ),
        Line::default(),
        title_line(typed, if show_tail { profile.hero_tail } else { "" }),
        Line::default(),
    ];

    for row in wrap(profile.summary, content_width(width)) {
        lines.push(faded(
            p(1),
            Line::from(Span::styled(row, Style::default().fg(TEXT))).centered(),
        ));
    }

    lines.push(Line::default());
    lines.push(faded(
        p(2),
        Line::from(vec![
            Span::styled("[5]", Style::default().fg(ACCENT)),
            Span::styled(" View My Work   ", Style::default().fg(TEXT)),
            Span::styled("[7]", Style::default().fg(ACCENT)),
            Span::styled(" Contact Me", Style::default().fg(TEXT)),
        ])
        .centered(),
    ));
    lines.push(Line::default());
    lines.push(faded(
        p(3),
        Line::from(vec![
            Span::styled("[o]", Style::default().fg(ACCENT)),
            Span::styled(" GitHub   ", Style::default().fg(TEXT)),
            Span::styled("[l]", Style::default().fg(ACCENT)),
            Span::styled(" LinkedIn   ", Style::default().fg(TEXT)),
            Span::styled("[m]", Style::default().fg(ACCENT)),
            Span::styled(" Email", Style::default().fg(TEXT)),
        ])
        .centered(),
    ));
    lines.push(Line::default());
    lines
}

/// The typed prefix renders plain; once typing reaches the name, the rest
/// shows in the accent color, with the tail glyph appended after the
/// sequence completes.
fn title_line(typed: &str, tail: &'static str) -> Line<'static> {
    let prefix_len = TITLE_PREFIX.chars().count();
    let typed_len = typed.chars().count();

    let mut spans = Vec::new();
    if typed_len <= prefix_len {
        spans.push(Span::styled(
            typed.to_string(),
            Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD),
        ));
    } else {
        let split = TITLE_PREFIX.len();
        spans.push(Span::styled(
            typed[..split].to_string(),
            Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            typed[split..].to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ));
    }
    if !tail.is_empty() {
        spans.push(Span::styled(
            tail,
            Style::default().fg(ACCENT_ALT).add_modifier(Modifier::BOLD),
        ));
    }
    Line::from(spans).centered()
}

pub fn height(profile: &Profile, width: u16) -> usize {
    // Fixed rows plus the wrapped summary; typing never changes the count.
    10 + wrap(profile.summary, content_width(width)).len()
}
