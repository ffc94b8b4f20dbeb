use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::Focus;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, TEXT};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, focus: Focus, show_back_to_top: bool) -> Paragraph<'static> {
        let hints = match focus {
            Focus::Page => {
                " ↑↓ Scroll │ 1-7 Jump │ Enter: Message Form │ y: Copy Email │ o/l/m: Links │ q: Quit"
            }
            Focus::Form => {
                " Tab/Shift+Tab: Fields │ Enter: Next/Send │ Backspace: Delete │ Esc: Back to Page"
            }
        };
        let top_hint = if show_back_to_top { "g: Top ↑  " } else { "" };
        let version = format!("{top_hint}v{VERSION} ");

        // Pad by char count, not byte count (for Unicode).
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
        let top_style = Style::default().fg(ACCENT);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(top_hint, top_style),
            Span::styled(format!("v{VERSION} "), text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
