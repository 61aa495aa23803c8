// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Keyboard mapping.
//!
//! Digits, `.`, the four ASCII operators, `Enter`, `Backspace` and `Esc` are
//! translated into keypad presses. `q` and `Ctrl+C` exit the application.
//! Everything else is ignored.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{App, calculator::Operation, components::KeypadButton, events::AppEvent};

/// Routes a key press to an application event.
///
/// # Errors
///
/// Returns an error if the event channel has been closed.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) => app.event_tx.send(AppEvent::ExitApplication)?,

        (KeyCode::Char('c'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            app.event_tx.send(AppEvent::ExitApplication)?
        }

        (code, _) => {
            if let Some(button) = button_for_key(code) {
                app.event_tx.send(AppEvent::Press(button))?;
            }
        }
    }

    Ok(())
}

pub(super) fn button_for_key(code: KeyCode) -> Option<KeypadButton> {
    match code {
        KeyCode::Char(c) if c.is_ascii_digit() => Some(KeypadButton::Digit(c)),
        KeyCode::Char('.') => Some(KeypadButton::Decimal),
        KeyCode::Char(c) => Operation::from_key(c).map(KeypadButton::Operator),
        KeyCode::Enter => Some(KeypadButton::Equals),
        KeyCode::Backspace => Some(KeypadButton::Backspace),
        KeyCode::Esc => Some(KeypadButton::Clear),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_digits_and_decimal_point() {
        for d in '0'..='9' {
            assert_eq!(button_for_key(KeyCode::Char(d)), Some(KeypadButton::Digit(d)));
        }
        assert_eq!(button_for_key(KeyCode::Char('.')), Some(KeypadButton::Decimal));
    }

    #[test]
    fn maps_operators_and_controls() {
        assert_eq!(
            button_for_key(KeyCode::Char('*')),
            Some(KeypadButton::Operator(Operation::Multiply))
        );
        assert_eq!(
            button_for_key(KeyCode::Char('-')),
            Some(KeypadButton::Operator(Operation::Subtract))
        );
        assert_eq!(button_for_key(KeyCode::Enter), Some(KeypadButton::Equals));
        assert_eq!(button_for_key(KeyCode::Backspace), Some(KeypadButton::Backspace));
        assert_eq!(button_for_key(KeyCode::Esc), Some(KeypadButton::Clear));
    }

    #[test]
    fn ignores_unbound_keys() {
        assert_eq!(button_for_key(KeyCode::Char('x')), None);
        assert_eq!(button_for_key(KeyCode::Char('=')), None);
        assert_eq!(button_for_key(KeyCode::Tab), None);
        assert_eq!(button_for_key(KeyCode::Up), None);
    }
}
