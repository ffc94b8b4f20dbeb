//! Certifications.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, TEXT, TEXT_FAINT};

use super::{content_width, faded, heading, wrap};

pub fn lines(profile: &Profile, width: u16, p: impl Fn(u32) -> f32) -> Vec<Line<'static>> {
    let mut lines = heading("Certifications", p(0));

    for row in wrap(profile.certifications_intro, content_width(width)) {
        lines.push(faded(
            p(0),
            Line::from(Span::styled(row, Style::default().fg(TEXT_FAINT))).centered(),
        ));
    }
    lines.push(Line::default());

    let body_width = content_width(width).saturating_sub(2);
    for (index, certification) in profile.certifications.iter().enumerate() {
        let progress = p(index as u32 + 1);
        lines.push(faded(
            progress,
            Line::from(vec![
                Span::styled("  ✦ ", Style::default().fg(ACCENT)),
                Span::styled(
                    certification.title,
                    Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  · {}", certification.issuer),
                    Style::default().fg(TEXT_FAINT),
                ),
            ]),
        ));
        for row in wrap(certification.description, body_width) {
            lines.push(faded(
                progress,
                Line::from(Span::styled(
                    format!("    {row}"),
                    Style::default().fg(TEXT),
                )),
            ));
        }
        lines.push(faded(
            progress,
            Line::from(vec![
                Span::styled("    View Certificate → ", Style::default().fg(ACCENT)),
                Span::styled(certification.link, Style::default().fg(TEXT_FAINT)),
            ]),
        ));
        lines.push(Line::default());
    }

    lines
}

pub fn height(profile: &Profile, width: u16) -> usize {
    let intro = wrap(profile.certifications_intro, content_width(width)).len() + 1;
    let body_width = content_width(width).saturating_sub(2);
    let cards: usize = profile
        .certifications
        .iter()
        .map(|certification| 3 + wrap(certification.description, body_width).len())
        .sum();
    4 + intro + cards
}
