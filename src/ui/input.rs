use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, Focus};
use crate::ui::contact::{ContactIntent, FormCursor};
use crate::ui::sections::SectionId;

/// Action the runtime must carry out after a key was processed; anything
/// needing the async runtime (transport, timers) is reported instead of
/// performed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    None,
    Submit,
    CopyEmail,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.request_quit();
        return InputAction::None;
    }

    match app.focus() {
        Focus::Page => handle_page_key(app, key),
        Focus::Form => handle_form_key(app, key),
    }
}

fn handle_page_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Up => app.scroll_by(-1),
        KeyCode::Down => app.scroll_by(1),
        KeyCode::PageUp => app.scroll_page(-1),
        KeyCode::PageDown => app.scroll_page(1),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        KeyCode::End | KeyCode::Char('G') => app.scroll_to_bottom(),
        KeyCode::Enter => {
            app.enter_form();
        }
        KeyCode::Char('y') => return InputAction::CopyEmail,
        KeyCode::Char('o') => app.open_github(),
        KeyCode::Char('l') => app.open_linkedin(),
        KeyCode::Char('m') => app.open_mail(),
        KeyCode::Char(digit @ '1'..='7') => {
            let index = digit as usize - '1' as usize;
            app.jump_to_section(SectionId::ALL[index]);
        }
        _ => {}
    }
    InputAction::None
}

fn handle_form_key(app: &mut App, key: KeyEvent) -> InputAction {
    match key.code {
        KeyCode::Esc => app.leave_form(),
        KeyCode::Tab => {
            app.dispatch_contact(ContactIntent::FocusNext);
            app.ensure_cursor_visible();
        }
        KeyCode::BackTab => {
            app.dispatch_contact(ContactIntent::FocusPrev);
            app.ensure_cursor_visible();
        }
        KeyCode::Down => {
            app.dispatch_contact(ContactIntent::FocusNext);
            app.ensure_cursor_visible();
        }
        KeyCode::Up => {
            app.dispatch_contact(ContactIntent::FocusPrev);
            app.ensure_cursor_visible();
        }
        KeyCode::Enter => {
            if app.contact().cursor == FormCursor::Submit {
                return InputAction::Submit;
            }
            app.dispatch_contact(ContactIntent::FocusNext);
            app.ensure_cursor_visible();
        }
        KeyCode::Backspace => app.dispatch_contact(ContactIntent::Backspace),
        KeyCode::Char(ch) => {
            if !key.modifiers.contains(KeyModifiers::CONTROL) {
                app.dispatch_contact(ContactIntent::Input(ch));
            }
        }
        _ => {}
    }
    InputAction::None
}
