use ratatui::layout::Rect;

use crate::content::Profile;
use crate::ui::sections::{self, SectionId};

/// Split the terminal into header, body and footer regions.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Row extents of each section in the virtual page for a given width.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    tops: Vec<usize>,
    heights: Vec<usize>,
    total: usize,
}

impl PageLayout {
    pub fn compute(profile: &Profile, width: u16) -> Self {
        let mut tops = Vec::with_capacity(SectionId::ALL.len());
        let mut heights = Vec::with_capacity(SectionId::ALL.len());
        let mut cursor = 0;
        for id in SectionId::ALL {
            let height = sections::section_height(id, profile, width);
            tops.push(cursor);
            heights.push(height);
            cursor += height;
        }
        Self {
            tops,
            heights,
            total: cursor + sections::tail_height(),
        }
    }

    pub fn top(&self, id: SectionId) -> usize {
        self.tops.get(id.index()).copied().unwrap_or_default()
    }

    pub fn height(&self, id: SectionId) -> usize {
        self.heights.get(id.index()).copied().unwrap_or_default()
    }

    /// Total page height in rows, tail included.
    pub fn total(&self) -> usize {
        self.total
    }

    /// The section containing a page row; rows past the last section
    /// belong to it.
    pub fn section_at(&self, row: usize) -> SectionId {
        let mut current = SectionId::Home;
        for id in SectionId::ALL {
            if self.top(id) <= row {
                current = id;
            }
        }
        current
    }
}
