//! Rendering: turns the world into pixels.
//!
//! # Invariants
//! - Renderers read the world; they never mutate it.
//! - One render call overwrites the whole target; nothing is kept between frames.
//! - The minimap and player marker are drawn before any 3D column.
//!
//! [`RaycastRenderer`] is the main implementation. [`TextRenderer`] prints the
//! same world as ASCII for the CLI and logs.

mod config;
mod raycast;
mod renderer;

pub use config::{RenderConfig, TintMode};
pub use raycast::{
    FrameStats, RayOutcome, RaycastRenderer, column_height, march, minimap_cell_size, ray_angle,
};
pub use renderer::{Renderer, TextRenderer};

pub fn crate_info() -> &'static str {
    "tilecast-render v0.1.0"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_loads() {
        assert!(crate_info().contains("render"));
    }
}
