//! World kernel: the tile grid, the camera pose, and the world value that owns both.
//!
//! # Invariants
//! - The grid is immutable after construction and always holds `width * height` cells.
//! - Grid lookups outside the grid fail with an error; they never wrap.
//! - Camera position is unconstrained.

pub mod camera;
pub mod grid;
pub mod world;

pub use camera::Camera;
pub use grid::{GridError, TileGrid, TileKind, WallKind, is_wall};
pub use world::World;

pub fn crate_info() -> &'static str {
    "tilecast-kernel v0.1.0"
}
