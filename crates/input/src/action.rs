use std::collections::HashMap;
use std::hash::Hash;

/// A high-level action produced by input.
///
/// The frame driver consumes actions, never raw key codes, so the same
/// bindings logic serves every platform shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Step toward -y.
    MoveForward,
    /// Step toward +y.
    MoveBack,
    /// Step toward -x.
    StrafeLeft,
    /// Step toward +x.
    StrafeRight,
    /// Leave the frame loop.
    Quit,
}

/// Maps platform keys to actions. Several keys may share one action.
#[derive(Debug, Clone)]
pub struct KeyBindings<K> {
    map: HashMap<K, Action>,
}

impl<K: Eq + Hash> Default for KeyBindings<K> {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> KeyBindings<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to `action`, replacing any previous binding of that key.
    pub fn bind(&mut self, key: K, action: Action) -> &mut Self {
        self.map.insert(key, action);
        self
    }

    pub fn action_for(&self, key: &K) -> Option<Action> {
        self.map.get(key).copied()
    }
}
