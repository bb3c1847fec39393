//! Input: platform key events mapped to actions, sampled once per frame.
//!
//! # Invariants
//! - Consumers see actions and an [`InputFrame`], never raw platform events.
//! - Relative mouse motion accumulates between snapshots and resets on each one.
//! - A quit request stays latched once raised.

pub mod action;
pub mod state;

pub use action::{Action, KeyBindings};
pub use state::{InputFrame, InputState};

pub fn crate_info() -> &'static str {
    "tilecast-input v0.1.0"
}
