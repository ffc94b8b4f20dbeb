/// Per-element visibility trigger with a monotonic flag.
///
/// The flag flips the first time the observed fraction reaches the
/// threshold and never reverts; scrolling the element back out of view
/// does not re-arm it. Once visible, [`Reveal::tick`] advances an
/// animation clock that consumers map onto a style interpolation
/// (opacity stages, offsets, per-sibling stagger).
#[derive(Debug, Clone)]
pub struct Reveal {
    threshold: f32,
    visible: bool,
    ticks: u32,
}

impl Reveal {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            visible: false,
            ticks: 0,
        }
    }

    /// Feed the current visible fraction of the element.
    pub fn observe(&mut self, fraction: f32) {
        if !self.visible && fraction >= self.threshold {
            self.visible = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Advance the animation clock. No-op until the flag has flipped.
    pub fn tick(&mut self) {
        if self.visible {
            self.ticks = self.ticks.saturating_add(1);
        }
    }

    /// Interpolation ramp in `0.0..=1.0`: stays at zero for `delay` ticks
    /// after the flip, then rises linearly over `duration` ticks and
    /// clamps at one. `delay` sequences sibling elements.
    pub fn progress(&self, delay: u32, duration: u32) -> f32 {
        if !self.visible {
            return 0.0;
        }
        let elapsed = self.ticks.saturating_sub(delay);
        (elapsed as f32 / duration.max(1) as f32).min(1.0)
    }
}

/// Forward-only character reveal of a fixed string.
///
/// The owner gates ticking on its [`Reveal`] flag, so the sequence starts
/// only once the element is visible. One character per tick; a string of
/// N characters completes in exactly N ticks. There is no loop, no
/// reverse, and no restart within a session.
#[derive(Debug, Clone)]
pub struct Typewriter {
    text: &'static str,
    shown: usize,
    len: usize,
}

impl Typewriter {
    pub fn new(text: &'static str) -> Self {
        Self {
            text,
            shown: 0,
            len: text.chars().count(),
        }
    }

    /// Reveal one more character. Returns false once the full text is
    /// already shown.
    pub fn tick(&mut self) -> bool {
        if self.shown < self.len {
            self.shown += 1;
            true
        } else {
            false
        }
    }

    pub fn is_done(&self) -> bool {
        self.shown == self.len
    }

    /// The revealed prefix.
    pub fn visible(&self) -> &str {
        match self.text.char_indices().nth(self.shown) {
            Some((offset, _)) => &self.text[..offset],
            None => self.text,
        }
    }
}
