use termfolio::content::PROFILE;
use termfolio::form::{Field, MessageDraft};
use termfolio::ui::contact::{ContactFormState, ContactIntent, ContactReducer};
use termfolio::ui::layout::PageLayout;
use termfolio::ui::mvi::Reducer;
use termfolio::ui::sections::{self, SectionId};

const WIDTHS: [u16; 3] = [60, 100, 160];

#[test]
fn sections_tile_the_page_without_gaps() {
    for width in WIDTHS {
        let layout = PageLayout::compute(&PROFILE, width);
        let mut expected_top = 0;
        for id in SectionId::ALL {
            assert_eq!(layout.top(id), expected_top, "width {width}, {id:?}");
            assert!(layout.height(id) > 0, "width {width}, {id:?} is empty");
            expected_top += layout.height(id);
        }
        assert_eq!(layout.total(), expected_top + sections::tail_height());
    }
}

#[test]
fn declared_heights_match_rendered_lines() {
    for width in WIDTHS {
        let layout = PageLayout::compute(&PROFILE, width);

        let hero = sections::hero::lines(&PROFILE, width, PROFILE.hero_title, true, |_| 1.0);
        assert_eq!(hero.len(), layout.height(SectionId::Home), "hero at {width}");

        let about = sections::about::lines(&PROFILE, width, |_| 1.0);
        assert_eq!(about.len(), layout.height(SectionId::About), "about at {width}");

        let skills = sections::skills::lines(&PROFILE, width, |_| 1.0);
        assert_eq!(skills.len(), layout.height(SectionId::Skills), "skills at {width}");

        let experience = sections::experience::lines(&PROFILE, width, |_| 1.0);
        assert_eq!(
            experience.len(),
            layout.height(SectionId::Experience),
            "experience at {width}"
        );

        let projects = sections::projects::lines(&PROFILE, width, |_| 1.0);
        assert_eq!(
            projects.len(),
            layout.height(SectionId::Projects),
            "projects at {width}"
        );

        let certifications = sections::certifications::lines(&PROFILE, width, |_| 1.0);
        assert_eq!(
            certifications.len(),
            layout.height(SectionId::Certifications),
            "certifications at {width}"
        );
    }
}

#[test]
fn hero_height_is_stable_while_typing() {
    let width = 100;
    let empty = sections::hero::lines(&PROFILE, width, "", false, |_| 0.0);
    let partial = sections::hero::lines(&PROFILE, width, "Hey, I'm Dar", false, |_| 0.5);
    let full = sections::hero::lines(&PROFILE, width, PROFILE.hero_title, true, |_| 1.0);
    assert_eq!(empty.len(), partial.len());
    assert_eq!(partial.len(), full.len());
}

#[test]
fn contact_height_is_stable_across_form_states() {
    let width = 100;
    let idle = ContactFormState::default();

    // A submit attempt on an empty form surfaces four error rows.
    let failed = ContactReducer::reduce(ContactFormState::default(), ContactIntent::Submit);
    assert_eq!(failed.errors.len(), 4);

    let mut long_message = ContactFormState::default();
    long_message.draft = MessageDraft {
        name: "Jo".to_string(),
        email: "a@b.co".to_string(),
        subject: "Hi there".to_string(),
        message: "m".repeat(1200),
    };

    for state in [&idle, &failed, &long_message] {
        let lines = sections::contact::lines(&PROFILE, width, state, true, false, |_| 1.0);
        assert_eq!(lines.len(), sections::contact::HEIGHT);
    }
}

#[test]
fn contact_input_rows_point_at_the_field_values() {
    let width = 100;
    let mut state = ContactFormState::default();
    state.draft = MessageDraft {
        name: "NAMEVALUE".to_string(),
        email: "EMAILVALUE@x.co".to_string(),
        subject: "SUBJECTVALUE".to_string(),
        message: "MESSAGEVALUE".to_string(),
    };

    let lines = sections::contact::lines(&PROFILE, width, &state, false, false, |_| 1.0);
    for field in Field::ALL {
        let row = sections::contact::input_row(field);
        let rendered: String = lines[row]
            .spans
            .iter()
            .map(|span| span.content.as_ref())
            .collect();
        let value = state.draft.get(field);
        assert!(
            rendered.contains(value),
            "{field:?} input row {row} does not show {value:?}: {rendered:?}"
        );
    }
}

#[test]
fn section_at_maps_rows_to_their_section() {
    let layout = PageLayout::compute(&PROFILE, 100);
    assert_eq!(layout.section_at(0), SectionId::Home);
    for id in SectionId::ALL {
        assert_eq!(layout.section_at(layout.top(id)), id);
        let last_row = layout.top(id) + layout.height(id) - 1;
        assert_eq!(layout.section_at(last_row), id);
    }
    // Tail rows past the last section still report the last section.
    assert_eq!(layout.section_at(layout.total() - 1), SectionId::Contact);
}
