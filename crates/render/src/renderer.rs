use std::fmt::Write;

use tilecast_kernel::{TileKind, World};

/// Renderer interface. All renderers implement this trait.
///
/// A renderer reads the world and writes into a target it borrows for the
/// duration of one call. It never mutates the world; the frame driver owns it.
pub trait Renderer {
    /// What the renderer draws into.
    type Target: ?Sized;
    /// Summary returned after a frame.
    type Output;

    /// Render one frame of `world` into `target`, replacing its previous contents.
    fn render(&self, world: &World, target: &mut Self::Target) -> Self::Output;
}

/// Text renderer: an ASCII top-down view of the grid.
///
/// Walls print as their kind digit, empty cells as `.`, and the camera cell as
/// `@`. Useful for CLI output, logging, and tests.
#[derive(Debug, Default)]
pub struct TextRenderer;

impl TextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for TextRenderer {
    type Target = String;
    type Output = ();

    fn render(&self, world: &World, out: &mut String) {
        out.clear();
        let grid = world.grid();
        let cam = world.camera();
        let _ = writeln!(
            out,
            "=== tilecast (frame={}, {}x{}) ===",
            world.frame(),
            grid.width(),
            grid.height()
        );
        let _ = writeln!(
            out,
            "Camera: pos=({:.2}, {:.2}) angle={:.3} fov={:.3}",
            cam.position.x, cam.position.y, cam.angle, cam.fov
        );

        let camera_cell = world.tile_under_camera().ok().map(|_| cam.cell());
        if camera_cell.is_none() {
            out.push_str("(camera outside grid)\n");
        }

        for (y, row) in grid.cells().chunks(grid.width()).enumerate() {
            for (x, tile) in row.iter().enumerate() {
                let c = if camera_cell == Some((x as i64, y as i64)) {
                    '@'
                } else {
                    match tile {
                        TileKind::Empty => '.',
                        TileKind::Wall(kind) => kind.symbol(),
                    }
                };
                out.push(c);
            }
            out.push('\n');
        }
    }
}
