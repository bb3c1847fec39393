use crate::camera::Camera;
use crate::grid::{GridError, TileGrid, TileKind};

/// The whole simulation state: a fixed tile grid and the camera moving over it.
///
/// The frame driver owns the world and lends it out: read-only to renderers,
/// mutably to the input integration step. The grid never changes after
/// construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    grid: TileGrid,
    camera: Camera,
    /// Number of frames integrated so far.
    frame: u64,
}

impl World {
    pub fn new(grid: TileGrid, camera: Camera) -> Self {
        Self {
            grid,
            camera,
            frame: 0,
        }
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Count one more integrated frame.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Tile under the camera, or an error when the camera has left the grid.
    pub fn tile_under_camera(&self) -> Result<TileKind, GridError> {
        let p = self.camera.position;
        self.grid.at_world(p.x, p.y)
    }
}
