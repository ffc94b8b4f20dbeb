//! About section: bio paragraphs and calls to action.

use ratatui::style::Style;
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, TEXT};

use super::{content_width, faded, heading, paragraph, wrap};

pub fn lines(profile: &Profile, width: u16, p: impl Fn(u32) -> f32) -> Vec<Line<'static>> {
    let mut lines = heading("About Me", p(0));

    for (index, bio) in profile.bio.iter().enumerate() {
        lines.extend(paragraph(bio, width, p(index as u32 + 1)));
        lines.push(Line::default());
    }

    let cta_progress = p(profile.bio.len() as u32 + 1);
    lines.push(faded(
        cta_progress,
        Line::from(vec![
            Span::styled("[5]", Style::default().fg(ACCENT)),
            Span::styled(" View My Work   ", Style::default().fg(TEXT)),
            Span::styled("[7]", Style::default().fg(ACCENT)),
            Span::styled(" Let's Talk", Style::default().fg(TEXT)),
        ])
        .centered(),
    ));
    lines.push(Line::default());
    lines
}

pub fn height(profile: &Profile, width: u16) -> usize {
    let body: usize = profile
        .bio
        .iter()
        .map(|bio| wrap(bio, content_width(width)).len() + 1)
        .sum();
    heading_rows() + body + 2
}

fn heading_rows() -> usize {
    4
}
