//! Page sections of the portfolio, rendered as rows of a virtual page.
//!
//! Every section emits a fixed number of lines for a given width,
//! regardless of animation progress or form state: reveals replace
//! content with blanks or dim it instead of adding or removing rows, so
//! the page layout stays stable while animations run.

pub mod about;
pub mod certifications;
pub mod contact;
pub mod experience;
pub mod hero;
pub mod projects;
pub mod skills;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::content::Profile;
use crate::ui::theme::{ACCENT, TEXT, TEXT_FAINT};

/// Sections in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionId {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Certifications,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Certifications,
        SectionId::Contact,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Certifications => "Certifications",
            SectionId::Contact => "Contact",
        }
    }

    /// Fraction of the section that must be inside the viewport before
    /// its reveal triggers.
    pub fn threshold(&self) -> f32 {
        match self {
            SectionId::Home => 0.1,
            SectionId::About => 0.3,
            SectionId::Skills => 0.1,
            SectionId::Experience => 0.1,
            SectionId::Projects => 0.1,
            SectionId::Certifications => 0.1,
            SectionId::Contact => 0.05,
        }
    }
}

/// Height of a section in rows for the given width.
pub fn section_height(id: SectionId, profile: &Profile, width: u16) -> usize {
    match id {
        SectionId::Home => hero::height(profile, width),
        SectionId::About => about::height(profile, width),
        SectionId::Skills => skills::height(profile, width),
        SectionId::Experience => experience::height(profile, width),
        SectionId::Projects => projects::height(profile, width),
        SectionId::Certifications => certifications::height(profile, width),
        SectionId::Contact => contact::height(profile, width),
    }
}

/// Rows trailing the last section: a rule and the page footer text.
pub fn tail_lines(profile: &Profile) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        Line::from(Span::styled(
            "────────────────────────────",
            Style::default().fg(TEXT_FAINT),
        ))
        .centered(),
        Line::from(Span::styled(
            format!("© 2025 {} · built with Rust", profile.name),
            Style::default().fg(TEXT_FAINT),
        ))
        .centered(),
        Line::default(),
    ]
}

pub fn tail_height() -> usize {
    4
}

/// Rows usable for wrapped text at the given terminal width.
pub(crate) fn content_width(width: u16) -> usize {
    (width.saturating_sub(4) as usize).max(20)
}

/// Map a reveal ramp onto terminal "opacity": below zero progress the
/// line is blanked out, a partial ramp dims it, a finished ramp shows it
/// as styled.
pub(crate) fn faded(progress: f32, line: Line<'static>) -> Line<'static> {
    if progress <= 0.0 {
        Line::default()
    } else if progress < 1.0 {
        line.style(Style::default().add_modifier(Modifier::DIM))
    } else {
        line
    }
}

/// Section heading: top padding, centered title, accent rule, padding.
/// Always four rows.
pub(crate) fn heading(title: &'static str, progress: f32) -> Vec<Line<'static>> {
    vec![
        Line::default(),
        faded(
            progress,
            Line::from(Span::styled(
                title,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ),
        faded(
            progress,
            Line::from(Span::styled("━━━━━━━━━━", Style::default().fg(ACCENT))).centered(),
        ),
        Line::default(),
    ]
}

/// Word-wrap `text` to `width` columns. Words longer than the width are
/// emitted on their own overlong line rather than split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// A wrapped paragraph as body-text lines, indented two columns.
pub(crate) fn paragraph(text: &str, width: u16, progress: f32) -> Vec<Line<'static>> {
    wrap(text, content_width(width))
        .into_iter()
        .map(|row| {
            faded(
                progress,
                Line::from(Span::styled(format!("  {row}"), Style::default().fg(TEXT))),
            )
        })
        .collect()
}
