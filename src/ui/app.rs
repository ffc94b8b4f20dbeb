use crate::clipboard::ClipboardHandler;
use crate::config::Config;
use crate::content::{Profile, PROFILE};
use crate::form::MessageDraft;
use crate::links;
use crate::reveal::{Reveal, Typewriter, Viewport};
use crate::transport::DeliveryError;
use crate::ui::contact::{ContactFormState, ContactIntent, ContactReducer, FormCursor};
use crate::ui::layout::PageLayout;
use crate::ui::mvi::Reducer;
use crate::ui::sections::{self, SectionId};

/// Where key input lands: the scrolling page, or the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Page,
    Form,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    focus: Focus,
    config: Config,
    profile: &'static Profile,
    width: u16,
    viewport: Viewport,
    layout: PageLayout,
    /// One reveal per section, in `SectionId::ALL` order.
    reveals: Vec<Reveal>,
    typewriter: Typewriter,
    /// State of the contact form (MVI pattern).
    contact: ContactFormState,
    /// Lazily opened; stays `None` when the platform has no clipboard.
    clipboard: Option<ClipboardHandler>,
    clipboard_failed: bool,
    copied: bool,
    /// Tags the pending copied-indicator timer; stale expiries are ignored.
    copied_generation: u64,
}

impl App {
    pub fn new(config: Config) -> Self {
        let reveals = SectionId::ALL
            .iter()
            .map(|id| Reveal::new(id.threshold()))
            .collect();
        Self {
            should_quit: false,
            focus: Focus::Page,
            config,
            profile: &PROFILE,
            width: 0,
            viewport: Viewport::default(),
            layout: PageLayout::default(),
            reveals,
            typewriter: Typewriter::new(PROFILE.hero_title),
            contact: ContactFormState::default(),
            clipboard: None,
            clipboard_failed: false,
            copied: false,
            copied_generation: 0,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    pub fn contact(&self) -> &ContactFormState {
        &self.contact
    }

    pub fn copied(&self) -> bool {
        self.copied
    }

    pub fn typed_title(&self) -> &str {
        self.typewriter.visible()
    }

    pub fn title_complete(&self) -> bool {
        self.typewriter.is_done()
    }

    /// Section the viewport currently starts in; drives the navbar
    /// highlight.
    pub fn active_section(&self) -> SectionId {
        self.layout.section_at(self.viewport.offset())
    }

    // ------------------------------------------------------------------
    // Geometry
    // ------------------------------------------------------------------

    pub fn on_resize(&mut self, cols: u16, rows: u16) {
        self.width = cols;
        self.layout = PageLayout::compute(self.profile, cols);
        // Chrome takes three rows above and below the body.
        let body = rows.saturating_sub(6) as usize;
        self.viewport.resize(body.max(1), self.layout.total());
        self.refresh_visibility();
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    fn refresh_visibility(&mut self) {
        for (index, id) in SectionId::ALL.into_iter().enumerate() {
            let fraction = self
                .viewport
                .visible_fraction(self.layout.top(id), self.layout.height(id));
            self.reveals[index].observe(fraction);
        }
    }

    // ------------------------------------------------------------------
    // Scrolling
    // ------------------------------------------------------------------

    pub fn scroll_by(&mut self, delta: isize) {
        self.viewport.scroll_by(delta, self.layout.total());
        self.refresh_visibility();
    }

    pub fn scroll_page(&mut self, direction: isize) {
        let page = self.viewport.height() as isize;
        self.scroll_by(direction * page);
    }

    pub fn scroll_to_top(&mut self) {
        self.viewport.jump_to(0, self.layout.total());
    }

    pub fn scroll_to_bottom(&mut self) {
        let total = self.layout.total();
        self.viewport.jump_to(total, total);
    }

    pub fn jump_to_section(&mut self, id: SectionId) {
        self.viewport.jump_to(self.layout.top(id), self.layout.total());
        self.refresh_visibility();
    }

    // ------------------------------------------------------------------
    // Animation clock
    // ------------------------------------------------------------------

    pub fn on_tick(&mut self) {
        if self.viewport.step() {
            self.refresh_visibility();
        }
        for reveal in &mut self.reveals {
            reveal.tick();
        }
        // The typewriter starts only once the hero has revealed, and
        // never restarts once finished.
        if self.reveals[SectionId::Home.index()].is_visible() {
            self.typewriter.tick();
        }
    }

    /// Reveal ramp for a whole section.
    pub fn section_progress(&self, id: SectionId) -> f32 {
        self.reveals[id.index()].progress(0, self.config.animation.reveal_ticks)
    }

    /// Reveal ramp for the `index`-th sibling within a section, staggered
    /// by a fixed per-element delay.
    pub fn item_progress(&self, id: SectionId, index: u32) -> f32 {
        self.reveals[id.index()].progress(
            index * self.config.animation.stagger_ticks,
            self.config.animation.reveal_ticks,
        )
    }

    // ------------------------------------------------------------------
    // Contact form (MVI pattern)
    // ------------------------------------------------------------------

    pub fn dispatch_contact(&mut self, intent: ContactIntent) {
        dispatch_mvi!(self, contact, ContactReducer, intent);
    }

    /// Enter form mode, scrolling the contact section into view.
    pub fn enter_form(&mut self) {
        self.jump_to_section(SectionId::Contact);
        self.focus = Focus::Form;
    }

    pub fn leave_form(&mut self) {
        self.focus = Focus::Page;
    }

    /// Keep the focused control inside the viewport after focus moves.
    pub fn ensure_cursor_visible(&mut self) {
        let row = match self.contact.cursor {
            FormCursor::Field(field) => {
                self.layout.top(SectionId::Contact) + sections::contact::input_row(field)
            }
            FormCursor::Submit => {
                self.layout.top(SectionId::Contact) + sections::contact::HEIGHT - 3
            }
        };
        let top = self.viewport.offset();
        let bottom = top + self.viewport.height();
        if row < top + 2 || row + 2 >= bottom {
            let target = row.saturating_sub(self.viewport.height() / 3);
            self.viewport.jump_to(target, self.layout.total());
        }
    }

    /// Run the submit transition. Returns the draft to hand to the
    /// transport when the form actually entered `Submitting`.
    pub fn begin_submission(&mut self) -> Option<MessageDraft> {
        let was_submitting = self.contact.is_submitting();
        self.dispatch_contact(ContactIntent::Submit);
        if !was_submitting && self.contact.is_submitting() {
            tracing::info!("contact form submitted");
            Some(self.contact.draft.clone())
        } else {
            None
        }
    }

    /// Feed the delivery outcome in. Returns the generation to tag the
    /// status auto-reset timer with when a banner went up.
    pub fn finish_submission(&mut self, result: Result<(), DeliveryError>) -> Option<u64> {
        match result {
            Ok(()) => self.dispatch_contact(ContactIntent::DeliverySucceeded),
            Err(err) => {
                tracing::warn!(%err, "delivery failed");
                self.dispatch_contact(ContactIntent::DeliveryFailed);
            }
        }
        self.contact
            .status
            .is_terminal()
            .then_some(self.contact.generation)
    }

    pub fn on_status_timer(&mut self, generation: u64) {
        self.dispatch_contact(ContactIntent::StatusExpired { generation });
    }

    // ------------------------------------------------------------------
    // Clipboard & links
    // ------------------------------------------------------------------

    /// Copy the contact email. Returns the generation to tag the
    /// copied-indicator reset timer with, when the copy succeeded.
    pub fn copy_email(&mut self) -> Option<u64> {
        if self.clipboard.is_none() && !self.clipboard_failed {
            match ClipboardHandler::new() {
                Ok(handler) => self.clipboard = Some(handler),
                Err(err) => {
                    tracing::warn!(%err, "clipboard unavailable");
                    self.clipboard_failed = true;
                }
            }
        }

        let copied = self
            .clipboard
            .as_mut()
            .map(|clipboard| clipboard.copy(self.profile.email))
            .unwrap_or(false);

        if copied {
            self.copied = true;
            self.copied_generation += 1;
            Some(self.copied_generation)
        } else {
            None
        }
    }

    pub fn on_copied_timer(&mut self, generation: u64) {
        if generation == self.copied_generation {
            self.copied = false;
        }
    }

    pub fn open_github(&self) {
        links::open_external(self.profile.github);
    }

    pub fn open_linkedin(&self) {
        links::open_external(self.profile.linkedin);
    }

    pub fn open_mail(&self) {
        links::open_external(&format!("mailto:{}", self.profile.email));
    }
}
