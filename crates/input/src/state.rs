use std::collections::HashSet;
use std::hash::Hash;

use crate::action::{Action, KeyBindings};

/// Everything the frame driver needs to know about input for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputFrame {
    /// Relative horizontal mouse motion since the last frame, in screen pixels.
    pub mouse_dx: f32,
    pub forward: bool,
    pub back: bool,
    pub left: bool,
    pub right: bool,
    /// Window close or a held quit key.
    pub quit: bool,
}

impl InputFrame {
    /// A frame with no input at all.
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn is_held(&self, action: Action) -> bool {
        match action {
            Action::MoveForward => self.forward,
            Action::MoveBack => self.back,
            Action::StrafeLeft => self.left,
            Action::StrafeRight => self.right,
            Action::Quit => self.quit,
        }
    }

    fn hold(&mut self, action: Action) {
        match action {
            Action::MoveForward => self.forward = true,
            Action::MoveBack => self.back = true,
            Action::StrafeLeft => self.left = true,
            Action::StrafeRight => self.right = true,
            Action::Quit => self.quit = true,
        }
    }
}

/// Input gathered from platform events between two frames.
///
/// Keys are tracked individually so that releasing one of two keys bound to
/// the same action keeps the action held.
#[derive(Debug, Clone)]
pub struct InputState<K> {
    held: HashSet<K>,
    mouse_dx: f64,
    quit_requested: bool,
}

impl<K: Eq + Hash> Default for InputState<K> {
    fn default() -> Self {
        Self {
            held: HashSet::new(),
            mouse_dx: 0.0,
            quit_requested: false,
        }
    }
}

impl<K: Eq + Hash> InputState<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: K) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: &K) {
        self.held.remove(key);
    }

    pub fn handle_key(&mut self, key: K, pressed: bool) {
        if pressed {
            self.press(key);
        } else {
            self.release(&key);
        }
    }

    /// Accumulate relative mouse motion reported by the platform.
    pub fn mouse_motion(&mut self, dx: f64) {
        self.mouse_dx += dx;
    }

    /// Latch a quit request, e.g. from a window close.
    pub fn request_quit(&mut self) {
        if !self.quit_requested {
            tracing::debug!("quit requested");
        }
        self.quit_requested = true;
    }

    /// Sample this frame's input and reset the accumulated mouse motion.
    pub fn snapshot(&mut self, bindings: &KeyBindings<K>) -> InputFrame {
        let mut frame = InputFrame {
            mouse_dx: std::mem::take(&mut self.mouse_dx) as f32,
            ..InputFrame::default()
        };
        for action in self.held.iter().filter_map(|k| bindings.action_for(k)) {
            frame.hold(action);
        }
        if frame.quit {
            self.quit_requested = true;
        }
        frame.quit = self.quit_requested;
        frame
    }
}
