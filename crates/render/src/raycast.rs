use glam::Vec2;
use tilecast_common::Surface;
use tilecast_kernel::{Camera, TileGrid, TileKind, WallKind, World};

use crate::config::RenderConfig;
use crate::renderer::Renderer;

/// How a single marched ray ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RayOutcome {
    /// The ray sampled a wall cell at distance `distance`.
    Hit {
        distance: f32,
        cell: (i64, i64),
        kind: WallKind,
    },
    /// The ray reached the distance cutoff without touching a wall.
    Escaped,
    /// The ray left the grid at `distance` before hitting anything.
    OutOfBounds { distance: f32 },
}

/// Per-frame counters returned by [`RaycastRenderer`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub columns: u32,
    pub hits: u32,
    pub escaped: u32,
    pub out_of_bounds: u32,
    /// March samples taken across all rays.
    pub steps: u64,
    pub nearest_hit: Option<f32>,
}

impl FrameStats {
    fn record(&mut self, outcome: &RayOutcome) {
        self.columns += 1;
        match *outcome {
            RayOutcome::Hit { distance, .. } => {
                self.hits += 1;
                self.nearest_hit = Some(self.nearest_hit.map_or(distance, |d| d.min(distance)));
            }
            RayOutcome::Escaped => self.escaped += 1,
            RayOutcome::OutOfBounds { .. } => self.out_of_bounds += 1,
        }
    }
}

/// Angle of the ray for screen column `i` out of `columns`.
///
/// Rays are spread evenly from `angle - fov/2`, with `columns` (not
/// `columns - 1`) as the denominator. The offset from the camera angle is
/// computed first, so for an even `columns` the column `columns / 2` looks
/// exactly along the camera angle.
#[inline]
pub fn ray_angle(camera: &Camera, i: u32, columns: u32) -> f32 {
    camera.angle + camera.fov * (i as f32 / columns as f32 - 0.5)
}

/// Height in pixels of the strip for a wall hit at distance `t`.
///
/// Not clamped: `t` near zero saturates to `u32::MAX` and is clipped when drawn.
#[inline]
pub fn column_height(surface_height: u32, t: f32) -> u32 {
    (surface_height as f32 / t) as u32
}

/// Pixel size of one grid cell on the minimap, which fills the left half.
pub fn minimap_cell_size(surface: &Surface, grid: &TileGrid) -> (u32, u32) {
    let w = surface.width() as usize / (grid.width() * 2);
    let h = surface.height() as usize / grid.height();
    (w as u32, h as u32)
}

/// March a ray from `origin` along `angle` in fixed steps of `step`.
///
/// `on_step` sees every sample point, including the one that hits. The
/// march stops at the first wall cell, when a sample leaves the grid, or once
/// `t` reaches `max_distance`. `t` is accumulated, not multiplied, so the
/// sample positions match a plain `t += step` loop bit for bit.
pub fn march(
    grid: &TileGrid,
    origin: Vec2,
    angle: f32,
    step: f32,
    max_distance: f32,
    mut on_step: impl FnMut(f32, f32),
) -> RayOutcome {
    if step.is_nan() || step <= 0.0 {
        return RayOutcome::Escaped;
    }
    let (cos, sin) = (angle.cos(), angle.sin());

    let mut t = 0.0_f32;
    while t < max_distance {
        let cx = origin.x + t * cos;
        let cy = origin.y + t * sin;
        on_step(cx, cy);

        match grid.at_world(cx, cy) {
            Err(_) => return RayOutcome::OutOfBounds { distance: t },
            Ok(TileKind::Wall(kind)) => {
                return RayOutcome::Hit {
                    distance: t,
                    cell: (cx as i64, cy as i64),
                    kind,
                };
            }
            Ok(TileKind::Empty) => {}
        }
        t += step;
    }
    RayOutcome::Escaped
}

/// Software ray-march renderer.
///
/// Left half of the surface: top-down minimap with walls, the player marker
/// and every march sample. Right half: one vertical strip per column whose
/// height is inversely proportional to the hit distance.
#[derive(Debug, Clone, Default)]
pub struct RaycastRenderer {
    config: RenderConfig,
}

impl RaycastRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    fn draw_minimap(&self, grid: &TileGrid, surface: &mut Surface, cell: (u32, u32)) {
        let (rect_w, rect_h) = cell;
        for (col, row, kind) in grid.walls() {
            surface.fill_rect(
                col as i64 * rect_w as i64,
                row as i64 * rect_h as i64,
                rect_w as u64,
                rect_h as u64,
                self.config.wall_color(kind),
            );
        }
    }

    fn draw_marker(&self, camera: &Camera, surface: &mut Surface, cell: (u32, u32)) {
        let size = self.config.marker_size;
        let half = (size / 2) as i64;
        // Float casts saturate, so a far-off camera lands at i64::MIN or MAX.
        let x = ((camera.position.x * cell.0 as f32) as i64).saturating_sub(half);
        let y = ((camera.position.y * cell.1 as f32) as i64).saturating_sub(half);
        surface.fill_rect(x, y, size as u64, size as u64, self.config.marker.pack());
    }

    fn draw_column(&self, surface: &mut Surface, x: u32, t: f32, kind: WallKind) {
        let h = column_height(surface.height(), t);
        let top = (surface.height() / 2) as i64 - (h / 2) as i64;
        surface.fill_rect(x as i64, top, 1, h as u64, self.config.wall_color(kind));
    }
}

impl Renderer for RaycastRenderer {
    type Target = Surface;
    type Output = FrameStats;

    fn render(&self, world: &World, surface: &mut Surface) -> FrameStats {
        let _span = tracing::debug_span!("render_frame", frame = world.frame()).entered();
        let grid = world.grid();
        let camera = world.camera();
        let config = &self.config;

        surface.clear(config.background.pack());

        let cell = minimap_cell_size(surface, grid);
        self.draw_minimap(grid, surface, cell);
        self.draw_marker(camera, surface, cell);

        let columns = surface.width() / 2;
        let trace_color = config.ray_trace.pack();
        let mut stats = FrameStats::default();

        for i in 0..columns {
            let angle = ray_angle(camera, i, columns);
            let mut steps = 0_u64;
            let outcome = march(
                grid,
                camera.position,
                angle,
                config.step,
                config.max_distance,
                |cx, cy| {
                    steps += 1;
                    if config.draw_ray_trace {
                        surface.put_pixel(
                            (cx * cell.0 as f32) as i64,
                            (cy * cell.1 as f32) as i64,
                            trace_color,
                        );
                    }
                },
            );
            stats.steps += steps;
            stats.record(&outcome);

            if let RayOutcome::Hit { distance, kind, .. } = outcome {
                self.draw_column(surface, columns + i, distance, kind);
            }
        }

        tracing::trace!(
            hits = stats.hits,
            escaped = stats.escaped,
            out_of_bounds = stats.out_of_bounds,
            steps = stats.steps,
            "frame rendered"
        );
        stats
    }
}
