//! Keyboard bindings for a mounted carousel.
//!
//! Keys are matched by their DOM `KeyboardEvent.key` name so the host can
//! forward events without translation.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    Previous,
    Next,
    First,
    Last,
    Exit,
    Complete,
}

#[derive(Clone, Copy, Debug)]
pub struct KeyBinding {
    pub key: &'static str,
    pub command: Command,
    pub label: &'static str,
}

pub const BINDINGS: &[KeyBinding] = &[
    KeyBinding { key: "ArrowLeft", command: Command::Previous, label: "Previous slide" },
    KeyBinding { key: "ArrowRight", command: Command::Next, label: "Next slide" },
    KeyBinding { key: "Home", command: Command::First, label: "First slide" },
    KeyBinding { key: "End", command: Command::Last, label: "Last slide" },
    KeyBinding { key: "Escape", command: Command::Exit, label: "Exit tour" },
    KeyBinding { key: "Enter", command: Command::Complete, label: "Finish (final slide)" },
];

#[must_use]
pub fn command_for_key(key: &str) -> Option<Command> {
    BINDINGS.iter().find(|binding| binding.key == key).map(|binding| binding.command)
}
