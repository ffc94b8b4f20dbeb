/// Scroll window over the virtual page.
///
/// The page is a column of rows; the viewport is `height` rows starting
/// at `offset`. Scrolling is eased: inputs move a target and [`step`]
/// closes a quarter of the remaining distance per tick, so jumps glide
/// instead of teleporting.
///
/// [`step`]: Viewport::step
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewport {
    offset: usize,
    target: usize,
    height: usize,
}

impl Viewport {
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Resize the window, clamping position against the page extent.
    pub fn resize(&mut self, height: usize, page_height: usize) {
        self.height = height;
        let max = page_height.saturating_sub(height);
        self.offset = self.offset.min(max);
        self.target = self.target.min(max);
    }

    /// Nudge the scroll target by a signed number of rows.
    pub fn scroll_by(&mut self, delta: isize, page_height: usize) {
        let max = page_height.saturating_sub(self.height) as isize;
        let next = (self.target as isize + delta).clamp(0, max.max(0));
        self.target = next as usize;
    }

    /// Begin an eased scroll toward an absolute row.
    pub fn jump_to(&mut self, row: usize, page_height: usize) {
        let max = page_height.saturating_sub(self.height);
        self.target = row.min(max);
    }

    /// Advance the easing by one tick. Returns true while still moving.
    pub fn step(&mut self) -> bool {
        if self.offset == self.target {
            return false;
        }
        let remaining = self.target as isize - self.offset as isize;
        let stride = if remaining > 0 {
            (remaining / 4).max(1)
        } else {
            (remaining / 4).min(-1)
        };
        self.offset = (self.offset as isize + stride) as usize;
        true
    }

    /// Fraction of a section's rows currently inside the window.
    pub fn visible_fraction(&self, top: usize, height: usize) -> f32 {
        if height == 0 {
            return 0.0;
        }
        let bottom = top + height;
        let view_bottom = self.offset + self.height;
        let overlap = bottom.min(view_bottom).saturating_sub(top.max(self.offset));
        overlap as f32 / height as f32
    }

    /// The page has been scrolled off its very top.
    pub fn scrolled(&self) -> bool {
        self.offset > 0
    }

    /// Past the point where a back-to-top affordance is worth showing.
    pub fn show_back_to_top(&self) -> bool {
        self.offset > self.height
    }
}
