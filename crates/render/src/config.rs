use serde::{Deserialize, Serialize};
use tilecast_common::Rgba;
use tilecast_kernel::WallKind;

/// How wall cells and column strips are colored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TintMode {
    /// Every wall kind uses [`RenderConfig::wall`].
    #[default]
    Uniform,
    /// Wall kind `n` uses `palette[n % palette.len()]`.
    PerKind,
}

/// Ray-march parameters and colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Ray march increment in grid units.
    pub step: f32,
    /// Rays that travel this far without a hit draw no column.
    pub max_distance: f32,
    /// Side of the square player marker, in pixels.
    pub marker_size: u32,
    pub background: Rgba,
    pub wall: Rgba,
    pub marker: Rgba,
    pub ray_trace: Rgba,
    /// Plot each march step on the minimap.
    pub draw_ray_trace: bool,
    pub tint: TintMode,
    pub palette: Vec<Rgba>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            step: 0.05,
            max_distance: 20.0,
            marker_size: 5,
            background: Rgba::WHITE,
            wall: Rgba::WALL,
            marker: Rgba::MARKER,
            ray_trace: Rgba::RAY_TRACE,
            draw_ray_trace: true,
            tint: TintMode::Uniform,
            palette: vec![
                Rgba::WALL,
                Rgba::rgb(0, 160, 96),
                Rgba::rgb(192, 96, 0),
                Rgba::rgb(128, 0, 192),
            ],
        }
    }
}

impl RenderConfig {
    /// Packed color for a wall of the given kind.
    pub fn wall_color(&self, kind: WallKind) -> u32 {
        match self.tint {
            TintMode::PerKind if !self.palette.is_empty() => {
                self.palette[kind.0 as usize % self.palette.len()].pack()
            }
            _ => self.wall.pack(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_baseline() {
        let c = RenderConfig::default();
        assert_eq!(c.step, 0.05);
        assert_eq!(c.max_distance, 20.0);
        assert_eq!(c.marker_size, 5);
        assert_eq!(c.tint, TintMode::Uniform);
        assert!(c.draw_ray_trace);
    }

    #[test]
    fn uniform_tint_ignores_kind() {
        let c = RenderConfig::default();
        assert_eq!(c.wall_color(WallKind(0)), c.wall_color(WallKind(3)));
        assert_eq!(c.wall_color(WallKind(2)), Rgba::WALL.pack());
    }

    #[test]
    fn per_kind_tint_cycles_palette() {
        let c = RenderConfig {
            tint: TintMode::PerKind,
            ..RenderConfig::default()
        };
        assert_ne!(c.wall_color(WallKind(0)), c.wall_color(WallKind(1)));
        assert_eq!(c.wall_color(WallKind(1)), c.wall_color(WallKind(5)));
    }

    #[test]
    fn per_kind_with_empty_palette_falls_back() {
        let c = RenderConfig {
            tint: TintMode::PerKind,
            palette: Vec::new(),
            ..RenderConfig::default()
        };
        assert_eq!(c.wall_color(WallKind(7)), Rgba::WALL.pack());
    }
}
