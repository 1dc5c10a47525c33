//! Blocking key input.
//!
//! Every screen reads keys through [`KeySource`] so it can be driven by the
//! real terminal or by a scripted sequence.

use crate::error::{GltError, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::collections::VecDeque;

/// A synchronous provider of key presses
pub trait KeySource {
    /// Block until the next key press is available
    fn next_key(&mut self) -> Result<KeyEvent>;
}

/// Reads key presses from the terminal via crossterm
///
/// Mouse, resize and key-release events are skipped.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

/// Replays a fixed list of key presses
#[derive(Debug, Default, Clone)]
pub struct ScriptedKeys {
    keys: VecDeque<KeyEvent>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Script a list of key codes without modifiers
    pub fn from_codes(codes: impl IntoIterator<Item = KeyCode>) -> Self {
        Self::new(
            codes
                .into_iter()
                .map(|code| KeyEvent::new(code, KeyModifiers::NONE)),
        )
    }

    /// Append one key press per character of `text`
    pub fn push_text(&mut self, text: &str) {
        self.keys.extend(
            text.chars()
                .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
        );
    }

    /// Append a single key press
    pub fn push(&mut self, code: KeyCode) {
        self.keys.push_back(KeyEvent::new(code, KeyModifiers::NONE));
    }

    /// Number of key presses not yet consumed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self) -> Result<KeyEvent> {
        self.keys.pop_front().ok_or(GltError::InputClosed)
    }
}
