//! Shared types: packed pixel colors and the output surface the renderer draws into.
//!
//! # Invariants
//! - Pixel layout is fixed: `r` in bits 0-7, `g` 8-15, `b` 16-23, `a` 24-31.
//! - Surface writes are clipped to the surface bounds; drawing never fails.

pub mod color;
pub mod surface;

pub use color::{Rgba, pack, pack_rgb, unpack};
pub use surface::Surface;

pub fn crate_info() -> &'static str {
    "tilecast-common v0.1.0"
}
