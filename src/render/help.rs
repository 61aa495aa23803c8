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

//! Render the key help footer.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const KEY_HELP: [(&str, &str); 6] = [
    ("0-9.", "digit"),
    ("+-*/", "operator"),
    ("Enter", "equals"),
    ("Bksp", "delete"),
    ("Esc", "clear"),
    ("q", "quit"),
];

pub(crate) fn draw_help(f: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(app.theme.accent_colour);
    let text_style = Style::default().fg(app.theme.dim_colour);

    let spans: Vec<Span> = KEY_HELP
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}  "), text_style),
            ]
        })
        .collect();

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
