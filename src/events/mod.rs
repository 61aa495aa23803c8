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

//! Application events and the main event loop.
//!
//! Raw terminal input arrives on the application channel as [`AppEvent`]s
//! from a reader thread. Keys and mouse clicks are first translated into
//! [`AppEvent::Press`] events naming a keypad button, and only those press
//! events touch the calculator. The UI is redrawn after every event.
//!
//! # Organization
//!
//! * [`key_handlers`]: Keyboard mapping.
//! * [`handlers`]: One handler per event kind.

mod handlers;
mod key_handlers;

use handlers::*;

use std::sync::mpsc::Sender;

use anyhow::Result;
use crossterm::event::{Event, KeyEvent, MouseEvent};

use crate::{App, components::KeypadButton, render::draw, util::term::Tui};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize,

    Press(KeypadButton),

    ExitApplication,
}

pub(crate) trait AppEventProcessor {
    fn process_event(&mut self, event: Event, event_tx: &Sender<AppEvent>) -> Result<()>;
}

/// Runs the event loop until [`AppEvent::ExitApplication`] is received or
/// every sender has gone away.
///
/// # Errors
///
/// Returns an error if an event cannot be forwarded or the terminal cannot be
/// drawn.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        if matches!(event, AppEvent::ExitApplication) {
            break;
        }

        handle_event(app, event)?;

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) -> Result<()> {
    match event {
        AppEvent::Key(key) => handle_key(app, key)?,
        AppEvent::Mouse(mouse) => handle_mouse(app, mouse)?,
        AppEvent::Press(button) => handle_press(app, button),
        AppEvent::Resize | AppEvent::ExitApplication => {}
    }

    Ok(())
}
