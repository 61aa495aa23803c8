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

//! Rendering of the keypad grid.
//!
//! Rows share the height evenly and the buttons of each row share its width,
//! so rows with fewer buttons get wider ones.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    components::keypad::{KEYPAD_ROWS, Keypad, KeypadButton},
    render::Render,
    theme::Theme,
};

impl Render for Keypad {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.hitboxes.clear();

        let rows = Layout::vertical(ratios(KEYPAD_ROWS.len())).split(area);

        for (buttons, row_area) in KEYPAD_ROWS.iter().zip(rows.iter()) {
            let cells = Layout::horizontal(ratios(buttons.len())).split(*row_area);

            for (button, cell) in buttons.iter().zip(cells.iter()) {
                self.draw_button(f, *cell, *button, theme);
                self.hitboxes.push((*cell, *button));
            }
        }
    }
}

impl Keypad {
    fn draw_button(&self, f: &mut Frame, area: Rect, button: KeypadButton, theme: &Theme) {
        let fg = match button {
            KeypadButton::Digit(_) | KeypadButton::Decimal => theme.digit_fg,
            KeypadButton::Operator(_) | KeypadButton::Equals => theme.operator_fg,
            KeypadButton::Backspace | KeypadButton::Clear => theme.control_fg,
        };

        let mut style = Style::default().fg(fg).add_modifier(Modifier::BOLD);
        let mut border_style = Style::default().fg(theme.border_colour);
        if self.pressed == Some(button) {
            style = style.bg(theme.pressed_bg);
            border_style = border_style.fg(theme.accent_colour).bg(theme.pressed_bg);
        }

        // Centre the label vertically inside the borders
        let top = area.height.saturating_sub(3) / 2;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .padding(Padding::top(top));

        f.render_widget(
            Paragraph::new(button.label())
                .style(style)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
    }
}

fn ratios(count: usize) -> Vec<Constraint> {
    let count = count as u32;
    (0..count).map(|_| Constraint::Ratio(1, count)).collect()
}
