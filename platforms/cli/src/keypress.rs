//! Single key press detection for stepping mode.
//!
//! The terminal is switched into raw mode for exactly one key read and
//! restored before returning, so ordinary line-buffered output keeps working
//! between steps.

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use std::io;

/// One key press as seen by the stepping loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// Ctrl+C.
    Interrupt,
    /// Any other key (arrows, function keys, ...).
    Other,
}

/// Blocks until a single key press and returns it.
pub fn keypress() -> io::Result<Key> {
    enable_raw_mode()?;

    let key = loop {
        match event::read() {
            Ok(Event::Key(event)) if event.kind == KeyEventKind::Press => {
                if event.code == KeyCode::Char('c')
                    && event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break Ok(Key::Interrupt);
                }

                break Ok(match event.code {
                    KeyCode::Char(c) => Key::Char(c),
                    _ => Key::Other,
                });
            }
            // Ignore releases, resizes, and other terminal events.
            Ok(_) => continue,
            Err(e) => break Err(e),
        }
    };

    disable_raw_mode()?;

    key
}
