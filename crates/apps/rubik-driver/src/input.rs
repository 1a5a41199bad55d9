//! Keyboard state for the driver loop
//!
//! Keys are identified by name (case-insensitive), so any backend that can
//! report which named keys are held each frame can feed the driver.

use crate::config::{normalize_key, BindingsConfig};
use rubik::Face;
use std::collections::{HashMap, HashSet};

/// Key state for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyState {
    /// Whether the key is currently pressed
    pub pressed: bool,
    /// Whether the key was just pressed this frame
    pub just_pressed: bool,
    /// Whether the key was just released this frame
    pub just_released: bool,
}

impl KeyState {
    /// Advance one frame with the key's current level
    pub fn update(&mut self, down: bool) {
        self.just_pressed = down && !self.pressed;
        self.just_released = !down && self.pressed;
        self.pressed = down;
    }
}

/// What a bound key does
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    SelectFace(Face),
    Clockwise,
    CounterClockwise,
    Cancel,
}

/// Per-action key tracking
#[derive(Debug, Clone)]
pub struct InputState {
    bindings: HashMap<String, Action>,
    keys: HashMap<Action, KeyState>,
}

impl InputState {
    pub fn new(bindings: &BindingsConfig) -> Self {
        let mut map = HashMap::new();
        for face in Face::ALL {
            map.insert(normalize_key(bindings.face_key(face)), Action::SelectFace(face));
        }
        map.insert(normalize_key(&bindings.clockwise), Action::Clockwise);
        map.insert(
            normalize_key(&bindings.counter_clockwise),
            Action::CounterClockwise,
        );
        map.insert(normalize_key(&bindings.cancel), Action::Cancel);

        let keys = map.values().map(|a| (*a, KeyState::default())).collect();
        Self {
            bindings: map,
            keys,
        }
    }

    /// Action bound to a key name, if any
    pub fn action_for(&self, key: &str) -> Option<Action> {
        self.bindings.get(&normalize_key(key)).copied()
    }

    /// Feed the set of held key names for a new frame
    ///
    /// Unbound names are ignored and reported back.
    pub fn update<'a>(&mut self, held: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
        let mut down: HashSet<Action> = HashSet::new();
        let mut unbound = Vec::new();
        for key in held {
            match self.action_for(key) {
                Some(action) => {
                    down.insert(action);
                }
                None => unbound.push(key),
            }
        }
        for (action, state) in self.keys.iter_mut() {
            state.update(down.contains(action));
        }
        unbound
    }

    pub fn state(&self, action: Action) -> KeyState {
        self.keys.get(&action).copied().unwrap_or_default()
    }

    pub fn pressed(&self, action: Action) -> bool {
        self.state(action).pressed
    }

    pub fn just_pressed(&self, action: Action) -> bool {
        self.state(action).just_pressed
    }

    /// First face (in face table order) whose key went down this frame
    pub fn face_just_pressed(&self) -> Option<Face> {
        Face::ALL
            .into_iter()
            .find(|face| self.just_pressed(Action::SelectFace(*face)))
    }

    /// Whether any bound key was released this frame
    pub fn any_just_released(&self) -> bool {
        self.keys.values().any(|s| s.just_released)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_state_edges() {
        let mut key = KeyState::default();
        key.update(true);
        assert!(key.pressed && key.just_pressed && !key.just_released);
        key.update(true);
        assert!(key.pressed && !key.just_pressed);
        key.update(false);
        assert!(!key.pressed && key.just_released);
        key.update(false);
        assert_eq!(key, KeyState::default());
    }

    #[test]
    fn test_default_bindings_resolve_case_insensitively() {
        let input = InputState::new(&BindingsConfig::default());
        assert_eq!(input.action_for("w"), Some(Action::SelectFace(Face::PosY)));
        assert_eq!(input.action_for("RIGHT"), Some(Action::Clockwise));
        assert_eq!(input.action_for("escape"), Some(Action::Cancel));
        assert_eq!(input.action_for("Q"), None);
    }

    #[test]
    fn test_update_tracks_presses_and_releases() {
        let mut input = InputState::new(&BindingsConfig::default());
        let unbound = input.update(["B", "Right", "Q"]);
        assert_eq!(unbound, vec!["Q"]);
        assert_eq!(input.face_just_pressed(), Some(Face::PosX));
        assert!(input.pressed(Action::Clockwise));
        assert!(!input.any_just_released());

        input.update(["Right"]);
        assert_eq!(input.face_just_pressed(), None);
        assert!(input.any_just_released());

        input.update(Vec::<&str>::new());
        assert!(input.any_just_released());
        assert!(!input.pressed(Action::Clockwise));
    }

    #[test]
    fn test_face_priority_follows_table_order() {
        let mut input = InputState::new(&BindingsConfig::default());
        input.update(["O", "W"]);
        assert_eq!(input.face_just_pressed(), Some(Face::PosY));
    }
}
