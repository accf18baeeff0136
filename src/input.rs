//! Keyboard input handling
//!
//! Maps raw DOM key identifier strings onto game controls and tracks the
//! currently-held movement keys as a set. Key state is purely instantaneous:
//! no debouncing, no repeat handling. Unrecognized identifiers are ignored.

use std::collections::HashSet;

use glam::Vec2;

/// Movement keys (arrows or WASD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Up,
    Down,
    Left,
    Right,
}

/// One-shot action keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Enter: leave the start screen
    Confirm,
    /// R: reset the session, in any phase
    Restart,
}

/// Map a key identifier to a movement key. WASD is case-insensitive
/// (shift/caps produce the uppercase form).
pub fn move_key(key: &str) -> Option<MoveKey> {
    match key {
        "ArrowUp" | "w" | "W" => Some(MoveKey::Up),
        "ArrowDown" | "s" | "S" => Some(MoveKey::Down),
        "ArrowLeft" | "a" | "A" => Some(MoveKey::Left),
        "ArrowRight" | "d" | "D" => Some(MoveKey::Right),
        _ => None,
    }
}

/// Map a key identifier to a one-shot action
pub fn action_key(key: &str) -> Option<Action> {
    match key {
        "Enter" => Some(Action::Confirm),
        "r" | "R" => Some(Action::Restart),
        _ => None,
    }
}

/// Keys whose browser default (page scrolling) must be suppressed
pub fn scroll_key(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | "ArrowLeft" | "ArrowRight" | " ")
}

/// The set of movement keys currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    keys: HashSet<MoveKey>,
}

impl HeldKeys {
    pub fn press(&mut self, key: MoveKey) {
        self.keys.insert(key);
    }

    pub fn release(&mut self, key: MoveKey) {
        self.keys.remove(&key);
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.keys.contains(&key)
    }

    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Movement direction for this frame: one unit per axis in {-1, 0, 1}.
    /// Opposite keys cancel; diagonals are not normalized.
    pub fn direction(&self) -> Vec2 {
        let mut dir = Vec2::ZERO;
        if self.is_held(MoveKey::Up) {
            dir.y -= 1.0;
        }
        if self.is_held(MoveKey::Down) {
            dir.y += 1.0;
        }
        if self.is_held(MoveKey::Left) {
            dir.x -= 1.0;
        }
        if self.is_held(MoveKey::Right) {
            dir.x += 1.0;
        }
        dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_map_to_moves() {
        assert_eq!(move_key("ArrowUp"), Some(MoveKey::Up));
        assert_eq!(move_key("ArrowDown"), Some(MoveKey::Down));
        assert_eq!(move_key("ArrowLeft"), Some(MoveKey::Left));
        assert_eq!(move_key("ArrowRight"), Some(MoveKey::Right));
    }

    #[test]
    fn test_wasd_is_case_insensitive() {
        assert_eq!(move_key("w"), Some(MoveKey::Up));
        assert_eq!(move_key("W"), Some(MoveKey::Up));
        assert_eq!(move_key("a"), Some(MoveKey::Left));
        assert_eq!(move_key("S"), Some(MoveKey::Down));
        assert_eq!(move_key("d"), Some(MoveKey::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(action_key("r"), Some(Action::Restart));
        assert_eq!(action_key("R"), Some(Action::Restart));
        assert_eq!(action_key("Enter"), Some(Action::Confirm));
        assert_eq!(action_key("Escape"), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        for key in ["q", "Shift", "Tab", "F5", ""] {
            assert_eq!(move_key(key), None);
            assert_eq!(action_key(key), None);
            assert!(!scroll_key(key));
        }
    }

    #[test]
    fn test_scroll_keys() {
        assert!(scroll_key("ArrowUp"));
        assert!(scroll_key("ArrowLeft"));
        assert!(scroll_key(" "));
        // Letter keys scroll nothing and must not be suppressed
        assert!(!scroll_key("w"));
        assert!(!scroll_key("r"));
    }

    #[test]
    fn test_direction_from_held_keys() {
        let mut held = HeldKeys::default();
        assert_eq!(held.direction(), Vec2::ZERO);

        held.press(MoveKey::Up);
        held.press(MoveKey::Left);
        assert_eq!(held.direction(), Vec2::new(-1.0, -1.0));

        // Opposite keys cancel
        held.press(MoveKey::Down);
        assert_eq!(held.direction(), Vec2::new(-1.0, 0.0));

        held.release(MoveKey::Left);
        assert_eq!(held.direction(), Vec2::new(0.0, 0.0));
    }

    #[test]
    fn test_press_is_idempotent() {
        let mut held = HeldKeys::default();
        held.press(MoveKey::Right);
        held.press(MoveKey::Right);
        assert_eq!(held.direction(), Vec2::new(1.0, 0.0));
        held.release(MoveKey::Right);
        assert_eq!(held.direction(), Vec2::ZERO);
    }

    #[test]
    fn test_clear_releases_everything() {
        let mut held = HeldKeys::default();
        held.press(MoveKey::Up);
        held.press(MoveKey::Right);
        held.clear();
        assert_eq!(held.direction(), Vec2::ZERO);
    }
}
