//! Experience & education timeline.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, ACCENT_ALT, TEXT, TEXT_FAINT};

use super::{content_width, faded, heading, wrap};

const INTRO: &str = "My professional journey and academic background that have shaped my \
skills and expertise in web development.";

pub fn lines(profile: &Profile, width: u16, p: impl Fn(u32) -> f32) -> Vec<Line<'static>> {
    let mut lines = heading("Experience & Education", p(0));

    for row in wrap(INTRO, content_width(width)) {
        lines.push(faded(
            p(0),
            Line::from(Span::styled(row, Style::default().fg(TEXT_FAINT))).centered(),
        ));
    }
    lines.push(Line::default());

    let body_width = content_width(width).saturating_sub(4);
    for (index, entry) in profile.timeline.iter().enumerate() {
        let progress = p(index as u32 + 1);
        lines.push(faded(
            progress,
            Line::from(vec![
                Span::styled("  ● ", Style::default().fg(ACCENT_ALT)),
                Span::styled(
                    entry.title,
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
            ]),
        ));
        lines.push(faded(
            progress,
            Line::from(Span::styled(
                format!("  │ {}", entry.organization),
                Style::default().fg(TEXT),
            )),
        ));
        lines.push(faded(
            progress,
            Line::from(Span::styled(
                format!("  │ {}", entry.period),
                Style::default().fg(ACCENT),
            )),
        ));
        for row in wrap(entry.description, body_width) {
            lines.push(faded(
                progress,
                Line::from(Span::styled(
                    format!("  │ {row}"),
                    Style::default().fg(TEXT_FAINT),
                )),
            ));
        }
        if let Some(certificate) = entry.certificate {
            lines.push(faded(
                progress,
                Line::from(vec![
                    Span::styled("  │ ", Style::default().fg(TEXT_FAINT)),
                    Span::styled("View Certificate → ", Style::default().fg(ACCENT)),
                    Span::styled(certificate, Style::default().fg(TEXT_FAINT)),
                ]),
            ));
        }
        lines.push(Line::default());
    }

    lines
}

pub fn height(profile: &Profile, width: u16) -> usize {
    let intro = wrap(INTRO, content_width(width)).len() + 1;
    let body_width = content_width(width).saturating_sub(4);
    let items: usize = profile
        .timeline
        .iter()
        .map(|entry| {
            let certificate = usize::from(entry.certificate.is_some());
            4 + wrap(entry.description, body_width).len() + certificate
        })
        .sum();
    4 + intro + items
}
