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

//! # Calculator TUI.
//!
//! A single-screen arithmetic calculator for the terminal, driven by the
//! keyboard or by clicking the on-screen keypad.
//!
//! The application is event-driven:
//!
//! * The **Main Thread** owns the terminal and the [`Calculator`], applying
//!   one event at a time and redrawing after each.
//! * An **Input Thread** forwards terminal key, mouse and resize events to
//!   the main thread over a `std::sync::mpsc` channel.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so that the
//! terminal is restored even when the event loop fails.

mod calculator;
mod components;
mod config;
mod events;
mod logging;
mod render;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use std::{
    sync::mpsc::{self, Receiver, Sender},
    thread,
};
use tracing::info;

use crate::{
    calculator::Calculator,
    components::Keypad,
    config::AppConfig,
    events::{AppEvent, process_events},
    theme::Theme,
    util::term::{self, Tui},
};

/// Application state.
struct App {
    pub config: AppConfig,
    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub calculator: Calculator,
    pub keypad: Keypad,
}

impl App {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            calculator: Calculator::new(),
            keypad: Keypad::new(),
        }
    }
}

/// The entry point of the application.
fn main() -> Result<()> {
    let config = config::load_config();
    logging::init_logging(&config).context("Failed to initialise logging")?;

    info!("starting calcui {}", env!("CARGO_PKG_VERSION"));

    let mut app = App::new(config);

    let mut terminal = term::setup_terminal(&app.theme)?;
    let res = run(&mut terminal, &mut app);
    term::restore_terminal(&mut terminal);

    info!("exiting");

    res.context("Application error occurred")
}

/// Spawns the input thread and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event loop encounters an unrecoverable error.
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Translate raw terminal events to application events. Key releases and
    // repeats are dropped so each physical press acts once.
    let tx_input = app.event_tx.clone();
    thread::spawn(move || {
        while let Ok(event) = event::read() {
            let app_event = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => AppEvent::Key(key),
                Event::Mouse(mouse) => AppEvent::Mouse(mouse),
                Event::Resize(..) => AppEvent::Resize,
                _ => continue,
            };

            if tx_input.send(app_event).is_err() {
                break;
            }
        }
    });

    process_events(terminal, app)
}
