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

//! Terminal lifecycle and styling.
//!
//! Setup puts the terminal into raw mode on the alternate screen with mouse
//! capture enabled, and paints the emulator background with the theme colour
//! using OSC 11. Teardown reverses each step.
//!
//! # Compatibility
//!
//! The background colour relies on the emulator honouring OSC 11 and OSC 111,
//! which most modern terminals (XTerm, Alacritty, Kitty, iTerm2) do. Others
//! silently ignore the sequences.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::theme::Theme;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the calculator.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled, the alternate screen cannot
/// be entered or the terminal cannot be created.
pub(crate) fn setup_terminal(theme: &Theme) -> Result<Tui> {
    // Paint the whole window, otherwise a thin border of the default
    // background shows around the frame
    if let Some(hex) = Theme::to_hex(theme.background_colour) {
        set_terminal_bg(&hex).context("Failed to set terminal background")?;
    }

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
}

/// Restores the terminal to the state it was in before [`setup_terminal`].
///
/// Best-effort, every step is attempted even if an earlier one fails.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen).ok();
    reset_terminal_bg().ok();
    terminal.show_cursor().ok();
}

fn set_terminal_bg(hex_colour: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{hex_colour}\x07")?;
    stdout.flush()
}

fn reset_terminal_bg() -> io::Result<()> {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07")?;
    stdout.flush()
}
