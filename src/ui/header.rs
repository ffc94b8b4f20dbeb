use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::sections::SectionId;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT, TEXT_BRIGHT, TEXT_FAINT};

pub struct Navbar;

impl Navbar {
    pub fn new() -> Self {
        Self
    }

    /// Fixed navigation bar. The border picks up the accent once the page
    /// is scrolled off its very top, echoing the original's condensed
    /// scrolled style.
    pub fn widget(&self, active: SectionId, scrolled: bool) -> Paragraph<'static> {
        let mut spans = vec![
            Span::styled(
                "  Darshan",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                " Gowda",
                Style::default().fg(TEXT_BRIGHT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("   │ ", Style::default().fg(TEXT_FAINT)),
        ];

        for (index, id) in SectionId::ALL.into_iter().enumerate() {
            let style = if id == active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(TEXT)
            };
            spans.push(Span::styled(format!(" {} ", index + 1), style));
            spans.push(Span::styled(id.title(), style));
            spans.push(Span::raw(" "));
        }

        let border = if scrolled { ACCENT } else { GLOBAL_BORDER };
        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(border)),
        )
    }
}

impl Default for Navbar {
    fn default() -> Self {
        Self::new()
    }
}
