//! Featured projects.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, TEXT, TEXT_FAINT};

use super::{content_width, faded, heading, wrap};

pub fn lines(profile: &Profile, width: u16, p: impl Fn(u32) -> f32) -> Vec<Line<'static>> {
    let mut lines = heading("Featured Projects", p(0));

    for row in wrap(profile.projects_intro, content_width(width)) {
        lines.push(faded(
            p(0),
            Line::from(Span::styled(row, Style::default().fg(TEXT_FAINT))).centered(),
        ));
    }
    lines.push(Line::default());

    let body_width = content_width(width).saturating_sub(2);
    for (index, project) in profile.projects.iter().enumerate() {
        let progress = p(index as u32 + 1);
        lines.push(faded(
            progress,
            Line::from(Span::styled(
                format!("  {}", project.title),
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            )),
        ));

        let mut tag_spans = vec![Span::raw("    ")];
        for tag in project.tags {
            tag_spans.push(Span::styled(format!("[{tag}]"), Style::default().fg(ACCENT)));
            tag_spans.push(Span::raw(" "));
        }
        lines.push(faded(progress, Line::from(tag_spans)));

        for row in wrap(project.description, body_width) {
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
                Span::styled("    ⇗ ", Style::default().fg(ACCENT)),
                Span::styled(project.repo, Style::default().fg(TEXT_FAINT)),
            ]),
        ));
        lines.push(Line::default());
    }

    lines
}

pub fn height(profile: &Profile, width: u16) -> usize {
    let intro = wrap(profile.projects_intro, content_width(width)).len() + 1;
    let body_width = content_width(width).saturating_sub(2);
    let cards: usize = profile
        .projects
        .iter()
        .map(|project| 4 + wrap(project.description, body_width).len())
        .sum();
    4 + intro + cards
}
