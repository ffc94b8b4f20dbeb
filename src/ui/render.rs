use ratatui::text::Line;
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

use crate::ui::app::{App, Focus};
use crate::ui::footer::Footer;
use crate::ui::header::Navbar;
use crate::ui::layout::layout_regions;
use crate::ui::sections::{self, SectionId};

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let navbar = Navbar::new();
    frame.render_widget(
        navbar.widget(app.active_section(), app.viewport().scrolled()),
        header,
    );

    frame.render_widget(Clear, body);
    let offset = app.viewport().offset();
    let visible: Vec<Line<'static>> = page_lines(app)
        .into_iter()
        .skip(offset)
        .take(body.height as usize)
        .collect();
    frame.render_widget(Paragraph::new(visible), body);

    let footer_widget = Footer::new();
    frame.render_widget(
        footer_widget.widget(footer, app.focus(), app.viewport().show_back_to_top()),
        footer,
    );
}

/// Assemble the whole virtual page for the current width and animation
/// state. Cheap enough to rebuild per frame; the layout never shifts
/// while animations run, so slicing by the viewport offset is stable.
fn page_lines(app: &App) -> Vec<Line<'static>> {
    let profile = app.profile();
    let width = app.width();
    let mut lines = Vec::new();

    lines.extend(sections::hero::lines(
        profile,
        width,
        app.typed_title(),
        app.title_complete(),
        |i| app.item_progress(SectionId::Home, i),
    ));
    lines.extend(sections::about::lines(profile, width, |i| {
        app.item_progress(SectionId::About, i)
    }));
    lines.extend(sections::skills::lines(profile, width, |i| {
        app.item_progress(SectionId::Skills, i)
    }));
    lines.extend(sections::experience::lines(profile, width, |i| {
        app.item_progress(SectionId::Experience, i)
    }));
    lines.extend(sections::projects::lines(profile, width, |i| {
        app.item_progress(SectionId::Projects, i)
    }));
    lines.extend(sections::certifications::lines(profile, width, |i| {
        app.item_progress(SectionId::Certifications, i)
    }));
    lines.extend(sections::contact::lines(
        profile,
        width,
        app.contact(),
        app.focus() == Focus::Form,
        app.copied(),
        |i| app.item_progress(SectionId::Contact, i),
    ));
    lines.extend(sections::tail_lines(profile));
    lines
}
