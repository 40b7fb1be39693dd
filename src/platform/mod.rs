//! Platform input mapping
//!
//! Browser key names and on-screen buttons both end up here. Held direction
//! keys become a `TickInput`; one-shot keys become a `Command`.

use crate::sim::{Command, GamePhase, TickInput};

/// What a key does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Left,
    Right,
    /// Start from the menu, restart from game over
    Confirm,
    /// Back to the menu
    Back,
}

/// Map a `KeyboardEvent.key` value
pub fn key_action(key: &str) -> Option<KeyAction> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(KeyAction::Left),
        "ArrowRight" | "d" | "D" => Some(KeyAction::Right),
        " " | "Enter" => Some(KeyAction::Confirm),
        "Escape" => Some(KeyAction::Back),
        _ => None,
    }
}

/// The command a confirm press means in `phase`, if any
pub fn confirm_command(phase: GamePhase) -> Option<Command> {
    match phase {
        GamePhase::Menu => Some(Command::Start),
        GamePhase::GameOver => Some(Command::Restart),
        GamePhase::Playing => None,
    }
}

/// Held direction sources. Keyboard and touch buttons are tracked
/// separately so releasing one does not cancel the other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    key_left: bool,
    key_right: bool,
    touch_left: bool,
    touch_right: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key down/up. Returns the command to issue, if the key is one-shot.
    pub fn key(&mut self, key: &str, pressed: bool, phase: GamePhase) -> Option<Command> {
        match key_action(key)? {
            KeyAction::Left => self.key_left = pressed,
            KeyAction::Right => self.key_right = pressed,
            KeyAction::Confirm if pressed => return confirm_command(phase),
            KeyAction::Back if pressed => return Some(Command::ReturnToMenu),
            KeyAction::Confirm | KeyAction::Back => {}
        }
        None
    }

    /// On-screen left/right buttons
    pub fn touch(&mut self, action: KeyAction, pressed: bool) {
        match action {
            KeyAction::Left => self.touch_left = pressed,
            KeyAction::Right => self.touch_right = pressed,
            KeyAction::Confirm | KeyAction::Back => {}
        }
    }

    /// Drop everything held (focus loss, phase change)
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: self.key_left || self.touch_left,
            right: self.key_right || self.touch_right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_action("ArrowLeft"), Some(KeyAction::Left));
        assert_eq!(key_action("A"), Some(KeyAction::Left));
        assert_eq!(key_action("d"), Some(KeyAction::Right));
        assert_eq!(key_action(" "), Some(KeyAction::Confirm));
        assert_eq!(key_action("q"), None);
    }

    #[test]
    fn test_confirm_depends_on_phase() {
        let mut input = InputState::new();
        assert_eq!(input.key("Enter", true, GamePhase::Menu), Some(Command::Start));
        assert_eq!(input.key("Enter", true, GamePhase::GameOver), Some(Command::Restart));
        assert_eq!(input.key("Enter", true, GamePhase::Playing), None);
        // Key release never issues a command
        assert_eq!(input.key("Enter", false, GamePhase::Menu), None);
    }

    #[test]
    fn test_held_keys() {
        let mut input = InputState::new();
        input.key("ArrowLeft", true, GamePhase::Playing);
        assert_eq!(input.tick_input(), TickInput { left: true, right: false });

        input.key("d", true, GamePhase::Playing);
        input.key("ArrowLeft", false, GamePhase::Playing);
        assert_eq!(input.tick_input(), TickInput { left: false, right: true });
    }

    #[test]
    fn test_touch_and_keys_are_independent() {
        let mut input = InputState::new();
        input.touch(KeyAction::Left, true);
        input.key("a", true, GamePhase::Playing);
        input.key("a", false, GamePhase::Playing);
        assert!(input.tick_input().left);

        input.release_all();
        assert_eq!(input.tick_input(), TickInput::default());
    }
}
