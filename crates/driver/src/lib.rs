//! Frame driver: the loop body that ties input, world, and renderer together.
//!
//! Each frame: the shell samples input, [`FrameDriver::step`] integrates it into
//! the camera and renders, the shell presents the surface, and [`FramePacer`]
//! says how long to wait before the next frame.
//!
//! # Invariants
//! - Single-threaded; one frame runs to completion before the next starts.
//! - Quit takes effect between frames, never in the middle of one.
//! - Movement is axis-aligned in world space unless configured otherwise.

pub mod config;
pub mod controls;
mod driver;
pub mod pacing;

pub use config::{AppConfig, ConfigError, SurfaceConfig, load_map};
pub use controls::{ControlConfig, MovementMode, integrate};
pub use driver::{FrameDriver, StepOutcome};
pub use pacing::{DEFAULT_FRAME_BUDGET, FramePacer, FrameTimer};

pub fn crate_info() -> &'static str {
    "tilecast-driver v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("driver"));
    }
}
