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

//! Clickable calculator keypad.
//!
//! The keypad is a grid of [`KeypadButton`]s. Each button maps to exactly one
//! calculator operation, keyboard input is translated into the same buttons
//! so that both input sources share a single path into the [`Calculator`].
//! The grid remembers where each button was last drawn so mouse clicks can be
//! resolved back to buttons.

mod event;
mod render;

use ratatui::layout::{Position, Rect};

use crate::calculator::{Calculator, Operation};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum KeypadButton {
    Digit(char),
    Decimal,
    Operator(Operation),
    Equals,
    Backspace,
    Clear,
}

/// Button rows, top to bottom.
pub(crate) const KEYPAD_ROWS: [&[KeypadButton]; 5] = [
    &[
        KeypadButton::Clear,
        KeypadButton::Backspace,
        KeypadButton::Operator(Operation::Divide),
    ],
    &[
        KeypadButton::Digit('7'),
        KeypadButton::Digit('8'),
        KeypadButton::Digit('9'),
        KeypadButton::Operator(Operation::Multiply),
    ],
    &[
        KeypadButton::Digit('4'),
        KeypadButton::Digit('5'),
        KeypadButton::Digit('6'),
        KeypadButton::Operator(Operation::Subtract),
    ],
    &[
        KeypadButton::Digit('1'),
        KeypadButton::Digit('2'),
        KeypadButton::Digit('3'),
        KeypadButton::Operator(Operation::Add),
    ],
    &[
        KeypadButton::Digit('0'),
        KeypadButton::Decimal,
        KeypadButton::Equals,
    ],
];

impl KeypadButton {
    pub(crate) fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => String::from("."),
            Self::Operator(op) => op.label().to_string(),
            Self::Equals => String::from("="),
            Self::Backspace => String::from("⌫"),
            Self::Clear => String::from("C"),
        }
    }

    /// Performs the calculator operation bound to this button.
    pub(crate) fn press(self, calculator: &mut Calculator) {
        match self {
            Self::Digit(d) => calculator.digit(d),
            Self::Decimal => calculator.decimal_point(),
            Self::Operator(op) => calculator.operator(op),
            Self::Equals => calculator.equals(),
            Self::Backspace => calculator.backspace(),
            Self::Clear => calculator.clear(),
        }
    }
}

pub(crate) struct Keypad {
    /// The most recently pressed button, drawn highlighted.
    pub(crate) pressed: Option<KeypadButton>,
    hitboxes: Vec<(Rect, KeypadButton)>,
}

impl Keypad {
    pub(crate) fn new() -> Self {
        Self {
            pressed: None,
            hitboxes: Vec::new(),
        }
    }

    /// Finds the button drawn at a screen cell, if any.
    pub(crate) fn button_at(&self, column: u16, row: u16) -> Option<KeypadButton> {
        let position = Position::new(column, row);
        self.hitboxes
            .iter()
            .find(|(area, _)| area.contains(position))
            .map(|(_, button)| *button)
    }

    /// Forgets every drawn button, e.g. when the keypad is hidden.
    pub(crate) fn clear_hitboxes(&mut self) {
        self.hitboxes.clear();
    }
}
