use glam::Vec2;
use std::fmt;
use tilecast_kernel::{TileKind, World};
use tilecast_render::FrameStats;

/// World inspector for developer tooling.
///
/// Provides read-only queries against the world and rendered frames for
/// debugging, logging, and the CLI.
pub struct WorldInspector;

impl WorldInspector {
    /// Produce a summary of the world state.
    pub fn summary(world: &World) -> WorldSummary {
        let grid = world.grid();
        let cam = world.camera();
        let tile = world.tile_under_camera().ok();
        WorldSummary {
            frame: world.frame(),
            grid_width: grid.width(),
            grid_height: grid.height(),
            wall_count: grid.wall_count(),
            position: cam.position,
            angle: cam.angle,
            fov: cam.fov,
            camera_cell: cam.cell(),
            camera_in_grid: tile.is_some(),
            camera_in_wall: matches!(tile, Some(TileKind::Wall(_))),
        }
    }

    /// Turn renderer counters into a report with derived ratios.
    pub fn frame_report(stats: &FrameStats) -> FrameReport {
        let columns = stats.columns.max(1) as f32;
        FrameReport {
            stats: *stats,
            hit_ratio: stats.hits as f32 / columns,
            mean_steps: stats.steps as f32 / columns,
        }
    }
}

/// Summary of world state for the inspector.
#[derive(Debug, Clone, PartialEq)]
pub struct WorldSummary {
    pub frame: u64,
    pub grid_width: usize,
    pub grid_height: usize,
    pub wall_count: usize,
    pub position: Vec2,
    pub angle: f32,
    pub fov: f32,
    pub camera_cell: (i64, i64),
    pub camera_in_grid: bool,
    pub camera_in_wall: bool,
}

impl fmt::Display for WorldSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "World: frame={} grid={}x{} walls={} camera=({:.3}, {:.3}) angle={:.3} fov={:.3} cell=({}, {})",
            self.frame,
            self.grid_width,
            self.grid_height,
            self.wall_count,
            self.position.x,
            self.position.y,
            self.angle,
            self.fov,
            self.camera_cell.0,
            self.camera_cell.1,
        )?;
        if !self.camera_in_grid {
            write!(f, " [outside grid]")?;
        } else if self.camera_in_wall {
            write!(f, " [inside wall]")?;
        }
        Ok(())
    }
}

/// Renderer counters for one frame plus derived ratios.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub stats: FrameStats,
    /// Fraction of columns that drew a strip.
    pub hit_ratio: f32,
    /// March samples per column.
    pub mean_steps: f32,
}

impl fmt::Display for FrameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = &self.stats;
        write!(
            f,
            "Frame: columns={} hits={} escaped={} out_of_bounds={} steps={} hit_ratio={:.2} mean_steps={:.1}",
            s.columns, s.hits, s.escaped, s.out_of_bounds, s.steps, self.hit_ratio, self.mean_steps
        )?;
        if let Some(d) = s.nearest_hit {
            write!(f, " nearest={d:.2}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecast_common::Surface;
    use tilecast_kernel::{Camera, TileGrid};
    use tilecast_render::{RaycastRenderer, Renderer};

    #[test]
    fn summary_default_world() {
        let world = World::default();
        let summary = WorldInspector::summary(&world);
        assert_eq!(summary.frame, 0);
        assert_eq!(summary.grid_width, 16);
        assert_eq!(summary.camera_cell, (3, 2));
        assert!(summary.camera_in_grid);
        assert!(!summary.camera_in_wall);
        assert!(summary.wall_count > 0);
    }

    #[test]
    fn summary_flags_camera_in_wall_and_outside() {
        let grid = TileGrid::from_literal(2, 1, "0 ").unwrap();
        let inside = World::new(grid.clone(), Camera::new(Vec2::new(0.5, 0.5), 0.0));
        let s = WorldInspector::summary(&inside);
        assert!(s.camera_in_wall);
        assert!(s.to_string().contains("[inside wall]"));

        let outside = World::new(grid, Camera::new(Vec2::new(5.0, 0.5), 0.0));
        let s = WorldInspector::summary(&outside);
        assert!(!s.camera_in_grid);
        assert!(s.to_string().contains("[outside grid]"));
    }

    #[test]
    fn summary_display() {
        let s = WorldInspector::summary(&World::default()).to_string();
        assert!(s.contains("frame=0"));
        assert!(s.contains("grid=16x16"));
        assert!(!s.contains('['));
    }

    #[test]
    fn frame_report_from_render() {
        let world = World::default();
        let mut surface = Surface::new(1024, 512);
        let stats = RaycastRenderer::default().render(&world, &mut surface);
        let report = WorldInspector::frame_report(&stats);
        assert!(report.hit_ratio > 0.0 && report.hit_ratio <= 1.0);
        assert!(report.mean_steps > 0.0);
        let text = report.to_string();
        assert!(text.contains("columns=512"));
        assert!(text.contains("nearest="));
    }

    #[test]
    fn frame_report_empty_stats() {
        let report = WorldInspector::frame_report(&FrameStats::default());
        assert_eq!(report.hit_ratio, 0.0);
        assert!(!report.to_string().contains("nearest"));
    }
}
