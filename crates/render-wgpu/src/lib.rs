//! wgpu presenter for CPU-rendered frames.
//!
//! The raycaster draws into a [`tilecast_common::Surface`]; this crate copies
//! that surface into a texture each frame and draws it over the window with a
//! single fullscreen triangle.
//!
//! # Invariants
//! - Presenting never mutates the surface.
//! - The frame texture follows the surface size, not the window size.
//! - A lost window surface drops one frame; it is never fatal.

mod gpu;
mod shaders;

pub use gpu::{FramePresenter, GpuContext, PresentError, pick_surface_format, surface_bytes};
