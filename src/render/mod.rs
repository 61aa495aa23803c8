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

//! User interface rendering logic.
//!
//! This module translates the [`App`] state into `ratatui` widgets. The
//! screen is a single column: the equation readout on top, the keypad filling
//! the middle and a one-line key help footer at the bottom.
//!
//! # Rendering Pipeline
//!
//! [`draw`] is called after every processed event, so the readout always
//! reflects the calculator state left by the last operation.

mod help;
mod readout;

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};

use crate::{App, render::help::draw_help, render::readout::draw_readout, theme::Theme};

/// Secondary line, main line and the borders around them.
const READOUT_HEIGHT: u16 = 4;

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// Takes the application mutably because the keypad records where its
/// buttons were drawn for mouse hit-testing.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let help_height = if app.config.show_help { 1 } else { 0 };

    let [readout_area, keypad_area, help_area] = Layout::vertical([
        Constraint::Length(READOUT_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(help_height),
    ])
    .areas(f.area());

    draw_readout(f, readout_area, app);

    if app.config.show_keypad {
        app.keypad.draw(f, keypad_area, &app.theme);
    } else {
        app.keypad.clear_hitboxes();
    }

    if app.config.show_help {
        draw_help(f, help_area, app);
    }
}
