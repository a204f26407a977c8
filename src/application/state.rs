//! Application state management for the terminal profile form.
//!
//! This module contains the form state, the focus model, and the
//! one-way transition to the details screen.

use crate::domain::{greeting, parse_age, ProfileDetails};

/// Represents the screen currently displayed.
///
/// Navigation is one-way: the setup form builds a [`ProfileDetails`]
/// snapshot and hands it to the details screen; nothing flows back.
#[derive(Debug)]
pub enum Screen {
    /// The profile setup form is displayed
    Setup,
    /// The read-only details screen is displayed, holding the values
    /// forwarded at navigation time
    Details(ProfileDetails),
}

/// The form widget that currently has keyboard focus.
///
/// Focus cycles in the order the widgets appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Name text field
    Name,
    /// Age text field
    Age,
    /// Verification toggle button
    Verify,
    /// Continue button
    Continue,
}

impl Field {
    /// The widget after this one in visual order, wrapping at the end.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Age,
            Field::Age => Field::Verify,
            Field::Verify => Field::Continue,
            Field::Continue => Field::Name,
        }
    }

    /// The widget before this one in visual order, wrapping at the start.
    pub fn previous(self) -> Self {
        match self {
            Field::Name => Field::Continue,
            Field::Age => Field::Name,
            Field::Verify => Field::Age,
            Field::Continue => Field::Verify,
        }
    }
}

/// Main application state containing the form input and UI state.
///
/// This structure holds everything needed to render the terminal UI:
/// the raw text of both fields, the verification flag, which widget
/// has focus, and the cursor position within the focused text field.
/// All of it is ephemeral; nothing survives the process.
///
/// # Examples
///
/// ```
/// use tprof::application::App;
///
/// let app = App::default();
/// assert!(app.name.is_empty());
/// assert!(!app.verified);
/// ```
#[derive(Debug)]
pub struct App {
    /// The screen currently displayed
    pub screen: Screen,
    /// Name field contents, exactly as typed
    pub name: String,
    /// Age field contents, exactly as typed (any text accepted,
    /// including non-numeric)
    pub age_input: String,
    /// Verification flag; purely cosmetic, no backing authority
    pub verified: bool,
    /// Widget with keyboard focus
    pub focus: Field,
    /// Cursor position within the focused text field
    pub cursor_position: usize,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Setup,
            name: String::new(),
            age_input: String::new(),
            verified: false,
            focus: Field::Name,
            cursor_position: 0,
        }
    }
}

impl App {
    /// Greeting shown at the top of the form, derived from the name
    /// field on every render.
    pub fn greeting(&self) -> String {
        greeting(&self.name)
    }

    /// Integer value of the age field, or `None` while the text does
    /// not parse. Recomputed from the raw text, never stored.
    pub fn parsed_age(&self) -> Option<i64> {
        parse_age(&self.age_input)
    }

    /// Status label next to the verification toggle.
    pub fn verification_label(&self) -> &'static str {
        if self.verified {
            "Verified user"
        } else {
            "Not verified"
        }
    }

    /// Caption of the verification toggle button.
    pub fn verify_button_caption(&self) -> &'static str {
        if self.verified {
            "Revoke"
        } else {
            "Verify"
        }
    }

    /// Flips the verification flag.
    ///
    /// Pure boolean negation with no side effects beyond the status
    /// label and button caption changing; applying it twice restores
    /// the original state.
    pub fn toggle_verification(&mut self) {
        self.verified = !self.verified;
    }

    /// Moves focus to the next widget, placing the cursor at the end
    /// of the newly focused text field (if any).
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
        self.reset_cursor();
    }

    /// Moves focus to the previous widget, placing the cursor at the
    /// end of the newly focused text field (if any).
    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
        self.reset_cursor();
    }

    /// Contents of the focused text field, or `None` when a button
    /// has focus.
    pub fn focused_text(&self) -> Option<&String> {
        match self.focus {
            Field::Name => Some(&self.name),
            Field::Age => Some(&self.age_input),
            Field::Verify | Field::Continue => None,
        }
    }

    /// Mutable contents of the focused text field, or `None` when a
    /// button has focus.
    pub fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::Name => Some(&mut self.name),
            Field::Age => Some(&mut self.age_input),
            Field::Verify | Field::Continue => None,
        }
    }

    /// Snapshots the form and switches to the details screen.
    ///
    /// The payload carries the name verbatim and the parse of the age
    /// text at this moment; an unparseable age becomes "no age", not
    /// an error. The transition is one-way: the form is not consulted
    /// again once the details screen is up.
    pub fn continue_to_details(&mut self) {
        let details = ProfileDetails::from_input(&self.name, &self.age_input);
        self.screen = Screen::Details(details);
    }

    fn reset_cursor(&mut self) {
        self.cursor_position = self.focused_text().map(|t| t.len()).unwrap_or(0);
    }
}
