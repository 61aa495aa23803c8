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

//! Mouse routing for the keypad.
//!
//! A left click on a drawn button is translated into an
//! [`AppEvent::Press`], the same event the keyboard produces.

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, MouseButton, MouseEventKind};

use crate::{
    components::Keypad,
    events::{AppEvent, AppEventProcessor},
};

impl AppEventProcessor for Keypad {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()> {
        if let Event::Mouse(mouse) = event
            && mouse.kind == MouseEventKind::Down(MouseButton::Left)
            && let Some(button) = self.button_at(mouse.column, mouse.row)
        {
            event_tx.send(AppEvent::Press(button))?;
        }

        Ok(())
    }
}
