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

//! Visual styling for the calculator.
//!
//! Defines the colour palette and a conversion to the hexadecimal form used
//! when styling the terminal emulator itself.

use ratatui::style::Color;

#[derive(Clone, Copy, Debug)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) text_colour: Color,
    pub(crate) dim_colour: Color,
    pub(crate) error_colour: Color,

    pub(crate) digit_fg: Color,
    pub(crate) operator_fg: Color,
    pub(crate) control_fg: Color,
    pub(crate) pressed_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(250, 189, 47),
            border_colour: Color::Rgb(102, 102, 102),
            text_colour: Color::Rgb(255, 255, 255),
            dim_colour: Color::Rgb(162, 161, 166),
            error_colour: Color::Rgb(239, 83, 80),

            digit_fg: Color::Rgb(255, 255, 255),
            operator_fg: Color::Rgb(250, 189, 47),
            control_fg: Color::Rgb(179, 157, 219),
            pressed_bg: Color::Rgb(70, 45, 85),
        }
    }

    /// Converts an RGB colour into a CSS-style hexadecimal string.
    ///
    /// Returns `None` for named and indexed colours, which have no fixed RGB
    /// value.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{r:02x}{g:02x}{b:02x}")),
            _ => None,
        }
    }
}
