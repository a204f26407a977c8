use crate::application::{App, Field, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match app.screen {
            Screen::Setup => Self::handle_setup_screen(app, key, modifiers),
            // Details is read-only; quitting is handled by the main loop
            Screen::Details(_) => {}
        }
    }

    fn handle_setup_screen(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Tab | KeyCode::Down => {
                app.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up => {
                app.focus_previous();
            }
            KeyCode::Enter => match app.focus {
                // Enter on a text field just advances, like tabbing through a form
                Field::Name | Field::Age => app.focus_next(),
                Field::Verify => app.toggle_verification(),
                Field::Continue => app.continue_to_details(),
            },
            KeyCode::Char(' ') if app.focus == Field::Verify => {
                app.toggle_verification();
            }
            KeyCode::Char(' ') if app.focus == Field::Continue => {
                app.continue_to_details();
            }
            KeyCode::Backspace => {
                let pos = app.cursor_position;
                if pos > 0 {
                    if let Some(text) = app.focused_text_mut() {
                        let start = prev_char_start(text, pos);
                        text.remove(start);
                        app.cursor_position = start;
                    }
                }
            }
            KeyCode::Delete => {
                let pos = app.cursor_position;
                if let Some(text) = app.focused_text_mut() {
                    if pos < text.len() {
                        text.remove(pos);
                    }
                }
            }
            KeyCode::Left => {
                let pos = app
                    .focused_text()
                    .map(|t| prev_char_start(t, app.cursor_position));
                if let Some(pos) = pos {
                    app.cursor_position = pos;
                }
            }
            KeyCode::Right => {
                let step = app
                    .focused_text()
                    .and_then(|t| t[app.cursor_position..].chars().next())
                    .map(|c| c.len_utf8());
                if let Some(step) = step {
                    app.cursor_position += step;
                }
            }
            KeyCode::Home => {
                app.cursor_position = 0;
            }
            KeyCode::End => {
                app.cursor_position = app.focused_text().map(|t| t.len()).unwrap_or(0);
            }
            KeyCode::Char(c) => {
                // Both fields accept arbitrary text; the age field is
                // numeric-hinted but not enforced
                if !modifiers.contains(KeyModifiers::CONTROL) {
                    let pos = app.cursor_position;
                    if let Some(text) = app.focused_text_mut() {
                        text.insert(pos, c);
                        app.cursor_position = pos + c.len_utf8();
                    }
                }
            }
            _ => {}
        }
    }
}

/// Start of the character preceding byte position `pos`, or 0 at the
/// front of the string. `cursor_position` tracks bytes, so movement
/// and deletion must step by whole characters to stay on a boundary.
fn prev_char_start(text: &str, pos: usize) -> usize {
    text[..pos]
        .chars()
        .next_back()
        .map(|c| pos - c.len_utf8())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            InputHandler::handle_key_event(app, KeyCode::Char(c), KeyModifiers::NONE);
        }
    }

    #[test]
    fn test_typing_into_name_updates_greeting() {
        let mut app = App::default();
        assert_eq!(app.greeting(), "Welcome!!");

        type_str(&mut app, "Ada");

        assert_eq!(app.name, "Ada");
        assert_eq!(app.cursor_position, 3);
        assert_eq!(app.greeting(), "Welcome, Ada");
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Field::Age);
        InputHandler::handle_key_event(&mut app, KeyCode::BackTab, KeyModifiers::NONE);
        assert_eq!(app.focus, Field::Name);
    }

    #[test]
    fn test_age_field_accepts_non_numeric_text() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.focus, Field::Age);

        type_str(&mut app, "thirty");

        assert_eq!(app.age_input, "thirty");
        assert_eq!(app.parsed_age(), None);
    }

    #[test]
    fn test_backspace_edits_focused_field() {
        let mut app = App::default();
        type_str(&mut app, "Adam");

        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);

        assert_eq!(app.name, "Ada");
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_cursor_movement_and_mid_field_insert() {
        let mut app = App::default();
        type_str(&mut app, "Aa");

        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        type_str(&mut app, "d");

        assert_eq!(app.name, "Ada");

        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(app.cursor_position, 0);
        InputHandler::handle_key_event(&mut app, KeyCode::End, KeyModifiers::NONE);
        assert_eq!(app.cursor_position, 3);
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut app = App::default();
        type_str(&mut app, "Ada");
        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);

        InputHandler::handle_key_event(&mut app, KeyCode::Delete, KeyModifiers::NONE);

        assert_eq!(app.name, "da");
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_enter_on_verify_toggles() {
        let mut app = App::default();
        app.focus = Field::Verify;

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.verified);
        assert_eq!(app.verify_button_caption(), "Revoke");

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert!(!app.verified);
        assert_eq!(app.verify_button_caption(), "Verify");
    }

    #[test]
    fn test_space_on_verify_toggles_but_space_in_name_types() {
        let mut app = App::default();
        type_str(&mut app, "Grace Hopper");
        assert_eq!(app.name, "Grace Hopper");
        assert!(!app.verified);

        app.focus = Field::Verify;
        InputHandler::handle_key_event(&mut app, KeyCode::Char(' '), KeyModifiers::NONE);
        assert!(app.verified);
        assert_eq!(app.name, "Grace Hopper");
    }

    #[test]
    fn test_enter_on_text_field_advances_focus() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.focus, Field::Age);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.focus, Field::Verify);
    }

    #[test]
    fn test_enter_on_continue_navigates() {
        let mut app = App::default();
        type_str(&mut app, "Ada");
        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        type_str(&mut app, "34");
        app.focus = Field::Continue;

        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        match &app.screen {
            Screen::Details(details) => {
                assert_eq!(details.name, "Ada");
                assert_eq!(details.age, Some(34));
            }
            Screen::Setup => panic!("expected details screen"),
        }
    }

    #[test]
    fn test_details_screen_ignores_input() {
        let mut app = App::default();
        app.continue_to_details();

        InputHandler::handle_key_event(&mut app, KeyCode::Char('x'), KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Tab, KeyModifiers::NONE);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter, KeyModifiers::NONE);

        assert!(app.name.is_empty());
        assert!(matches!(app.screen, Screen::Details(_)));
    }

    #[test]
    fn test_multibyte_name_typing_and_append() {
        let mut app = App::default();
        type_str(&mut app, "né");
        assert_eq!(app.cursor_position, "né".len());

        // Appending after a multi-byte char must not split it
        type_str(&mut app, "e");

        assert_eq!(app.name, "née");
        assert_eq!(app.greeting(), "Welcome, née");
    }

    #[test]
    fn test_backspace_removes_whole_multibyte_char() {
        let mut app = App::default();
        type_str(&mut app, "né");

        InputHandler::handle_key_event(&mut app, KeyCode::Backspace, KeyModifiers::NONE);

        assert_eq!(app.name, "n");
        assert_eq!(app.cursor_position, 1);
    }

    #[test]
    fn test_cursor_steps_over_multibyte_chars() {
        let mut app = App::default();
        type_str(&mut app, "né");

        // Left crosses the 2-byte 'é' in one step
        InputHandler::handle_key_event(&mut app, KeyCode::Left, KeyModifiers::NONE);
        assert_eq!(app.cursor_position, 1);

        // Inserting here lands between 'n' and 'é'
        type_str(&mut app, "o");
        assert_eq!(app.name, "noé");

        InputHandler::handle_key_event(&mut app, KeyCode::Right, KeyModifiers::NONE);
        assert_eq!(app.cursor_position, "noé".len());
    }

    #[test]
    fn test_delete_removes_whole_multibyte_char() {
        let mut app = App::default();
        type_str(&mut app, "éa");
        InputHandler::handle_key_event(&mut app, KeyCode::Home, KeyModifiers::NONE);

        InputHandler::handle_key_event(&mut app, KeyCode::Delete, KeyModifiers::NONE);

        assert_eq!(app.name, "a");
        assert_eq!(app.cursor_position, 0);
    }

    #[test]
    fn test_control_chars_are_not_typed() {
        let mut app = App::default();
        InputHandler::handle_key_event(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.name.is_empty());
    }
}
