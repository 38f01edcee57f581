//! Keyboard handling: raw crossterm events become session commands.
//!
//! Translation lives here so the simulation never sees a key code, and the
//! main loop never sees lane math. The loop calls [`handle_key`] once per
//! event; it is the only input binding in the process, so restarting a game
//! never stacks a second handler.

use crate::game::{Command, SessionManager};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

/// What the main loop should do after a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep looping; the key may have moved the player or restarted.
    Continue,
    /// Tear the terminal down and exit.
    Quit,
}

/// Unified key → command mapping.
pub fn translate_key(key: KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Confirm),
        _ => None,
    }
}

/// True for the quit chords: q, Esc, Ctrl-C.
pub fn is_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Process one key event: quit chords exit, game keys route to the live
/// session, everything else falls through.
pub fn handle_key<R: Rng>(
    key: KeyEvent,
    manager: &mut SessionManager,
    rng: &mut R,
) -> InputResult {
    if is_quit(key) {
        return InputResult::Quit;
    }
    if let Some(command) = translate_key(key) {
        manager.apply(command, rng);
    }
    InputResult::Continue
}
