//! Skills section: grouped skill chips with per-chip stagger.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, TEXT, TEXT_FAINT};

use super::{faded, heading};

pub fn lines(profile: &Profile, _width: u16, p: impl Fn(u32) -> f32) -> Vec<Line<'static>> {
    let mut lines = heading("Technical Skills", p(0));

    let mut item = 1u32;
    for group in profile.skills {
        lines.push(faded(
            p(item),
            Line::from(Span::styled(
                format!("  {}", group.title),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
        ));
        item += 1;

        // Chips fade individually so siblings appear in sequence.
        let mut spans = vec![Span::raw("    ")];
        for (index, skill) in group.skills.iter().enumerate() {
            let chip_progress = p(item + index as u32);
            let style = if chip_progress <= 0.0 {
                Style::default().fg(TEXT_FAINT).add_modifier(Modifier::HIDDEN)
            } else if chip_progress < 1.0 {
                Style::default().fg(ACCENT).add_modifier(Modifier::DIM)
            } else {
                Style::default().fg(ACCENT)
            };
            spans.push(Span::styled(format!("⟨{skill}⟩"), style));
            spans.push(Span::raw(" "));
        }
        item += group.skills.len() as u32;
        lines.push(Line::from(spans));
        lines.push(Line::default());
    }

    lines
}

pub fn height(profile: &Profile, _width: u16) -> usize {
    4 + profile.skills.len() * 3
}
