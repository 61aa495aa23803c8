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

//! Render the equation readout.
//!
//! The secondary text (the last finished equation) sits above the main text
//! (the equation being composed), both right aligned like a desk calculator.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{App, calculator::ERROR_TEXT};

pub(crate) fn draw_readout(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let (main, secondary) = app.calculator.display();

    let main_colour = if main == ERROR_TEXT {
        theme.error_colour
    } else {
        theme.text_colour
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::styled(secondary, Style::default().fg(theme.dim_colour)),
        Line::styled(
            main,
            Style::default().fg(main_colour).add_modifier(Modifier::BOLD),
        ),
    ];

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Right).block(block),
        area,
    );
}
