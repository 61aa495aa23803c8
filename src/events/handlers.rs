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

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseEvent};

use crate::{
    App,
    components::KeypadButton,
    events::{AppEventProcessor, key_handlers},
};

pub(super) fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    key_handlers::process_key_event(app, key)
}

pub(super) fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Result<()> {
    app.keypad.process_event(Event::Mouse(mouse), &app.event_tx)
}

pub(super) fn handle_press(app: &mut App, button: KeypadButton) {
    button.press(&mut app.calculator);
    app.keypad.pressed = Some(button);
}
