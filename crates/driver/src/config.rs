//! Application configuration, optionally loaded from a YAML file.
//!
//! Every field has a default, so an empty file (or no file) gives the
//! default 1024x512 view of the built-in map at 16 ms per frame.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tilecast_kernel::{Camera, GridError, TileGrid, World};
use tilecast_render::RenderConfig;

use crate::controls::ControlConfig;
use crate::pacing::{DEFAULT_FRAME_BUDGET, FramePacer};

/// Errors from loading or validating configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid map {path}: {source}")]
    Map {
        path: PathBuf,
        #[source]
        source: GridError,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Output surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 512,
        }
    }
}

/// Top-level configuration for both binaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub surface: SurfaceConfig,
    /// Target frame duration in milliseconds; 0 disables the cap.
    pub frame_budget_ms: u64,
    /// Map file with one row per line; the built-in map when absent.
    pub map: Option<PathBuf>,
    /// Starting pose; the built-in pose when absent.
    pub camera: Option<Camera>,
    pub render: RenderConfig,
    pub controls: ControlConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            surface: SurfaceConfig::default(),
            frame_budget_ms: DEFAULT_FRAME_BUDGET.as_millis() as u64,
            map: None,
            camera: None,
            render: RenderConfig::default(),
            controls: ControlConfig::default(),
        }
    }
}

impl AppConfig {
    /// Parse a YAML document. Missing fields take their defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config = if text.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str::<Self>(text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML config file.
    ///
    /// A relative `map` path is taken relative to the config file's directory.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_yaml(&text)?;
        if let (Some(map), Some(dir)) = (&config.map, path.parent()) {
            if map.is_relative() {
                config.map = Some(dir.join(map));
            }
        }
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load `path` when given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.surface.width == 0 || self.surface.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "surface must be non-empty, got {}x{}",
                self.surface.width, self.surface.height
            )));
        }
        let step = self.render.step;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "render.step must be positive, got {step}"
            )));
        }
        let max = self.render.max_distance;
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "render.max_distance must be positive, got {max}"
            )));
        }
        Ok(())
    }

    pub fn pacer(&self) -> FramePacer {
        FramePacer::new(Duration::from_millis(self.frame_budget_ms))
    }

    /// Build the starting world from the configured map and pose.
    pub fn load_world(&self) -> Result<World, ConfigError> {
        let grid = match &self.map {
            Some(path) => load_map(path)?,
            None => TileGrid::default_map(),
        };
        Ok(World::new(grid, self.camera.unwrap_or_default()))
    }
}

/// Read a map file: one row per line, space for empty, digits for walls.
pub fn load_map(path: &Path) -> Result<TileGrid, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let grid = TileGrid::from_rows(&text).map_err(|source| ConfigError::Map {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "map loaded"
    );
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controls::MovementMode;
    use std::io::Write;
    use tilecast_common::Rgba;
    use tilecast_render::TintMode;

    #[test]
    fn default_values() {
        let c = AppConfig::default();
        assert_eq!(c.surface, SurfaceConfig { width: 1024, height: 512 });
        assert_eq!(c.frame_budget_ms, 16);
        assert_eq!(c.pacer().budget(), Duration::from_millis(16));
        assert!(c.map.is_none());
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(AppConfig::from_yaml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let c = AppConfig::from_yaml(
            "surface:\n  width: 640\nrender:\n  tint: per_kind\n  ray_trace: { r: 1, g: 2, b: 3 }\ncontrols:\n  movement: facing\n",
        )
        .unwrap();
        assert_eq!(c.surface.width, 640);
        assert_eq!(c.surface.height, 512);
        assert_eq!(c.frame_budget_ms, 16);
        assert_eq!(c.render.tint, TintMode::PerKind);
        assert_eq!(c.render.ray_trace, Rgba::rgb(1, 2, 3));
        assert_eq!(c.render.step, 0.05);
        assert_eq!(c.controls.movement, MovementMode::Facing);
        assert_eq!(c.controls.move_step, 0.05);
    }

    #[test]
    fn explicit_zero_budget_is_kept() {
        let c = AppConfig::from_yaml("frame_budget_ms: 0\n").unwrap();
        assert_eq!(c.frame_budget_ms, 0);
        assert_eq!(c.pacer().remaining(Duration::ZERO), Duration::ZERO);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(matches!(
            AppConfig::from_yaml("surface: { width: 0 }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("render: { step: 0.0 }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("render: { max_distance: -1.0 }"),
            Err(ConfigError::Invalid(_))
        ));
        assert!(matches!(
            AppConfig::from_yaml("surface: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn camera_pose_from_yaml() {
        let c = AppConfig::from_yaml(
            "camera:\n  position: [1.5, 2.5]\n  angle: 0.0\n  fov: 1.0\n",
        )
        .unwrap();
        let world = c.load_world().unwrap();
        assert_eq!(world.camera().position, glam::Vec2::new(1.5, 2.5));
        assert_eq!(world.camera().fov, 1.0);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "frame_budget_ms: 33").unwrap();
        let c = AppConfig::load(file.path()).unwrap();
        assert_eq!(c.frame_budget_ms, 33);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = AppConfig::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn world_from_map_file() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("room.map");
        std::fs::write(&map, "0000\n0  0\n0  0\n0000\n").unwrap();
        let c = AppConfig {
            map: Some(map),
            ..AppConfig::default()
        };
        let world = c.load_world().unwrap();
        assert_eq!(world.grid().width(), 4);
        assert_eq!(world.grid().wall_count(), 12);
    }

    #[test]
    fn malformed_map_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("bad.map");
        std::fs::write(&map, "0000\n0 x0\n").unwrap();
        let err = load_map(&map).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Map {
                source: GridError::InvalidSymbol { symbol: 'x', .. },
                ..
            }
        ));
    }

    #[test]
    fn demo_config_and_map_load() {
        let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos");
        let c = AppConfig::load(&demos.join("tilecast.yaml")).unwrap();
        assert_eq!(c.render.tint, TintMode::PerKind);
        assert_eq!(c.map, Some(demos.join("room.map")));

        let world = c.load_world().unwrap();
        let grid = world.grid();
        assert_eq!((grid.width(), grid.height()), (16, 8));
        assert!(world.tile_under_camera().is_ok_and(|t| !t.is_wall()));
    }

    #[test]
    fn relative_map_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("maps")).unwrap();
        std::fs::write(dir.path().join("maps/box.map"), "000\n0 0\n000\n").unwrap();
        let config_path = dir.path().join("game.yaml");
        std::fs::write(&config_path, "map: maps/box.map\n").unwrap();

        let c = AppConfig::load(&config_path).unwrap();
        assert_eq!(c.map, Some(dir.path().join("maps/box.map")));
        assert_eq!(c.load_world().unwrap().grid().wall_count(), 8);
    }

    #[test]
    fn absolute_map_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let map = dir.path().join("abs.map");
        let config_path = dir.path().join("sub.yaml");
        std::fs::write(&config_path, format!("map: {}\n", map.display())).unwrap();
        let c = AppConfig::load(&config_path).unwrap();
        assert_eq!(c.map, Some(map));
    }

    #[test]
    fn default_world_without_map() {
        let world = AppConfig::default().load_world().unwrap();
        assert_eq!(world, World::default());
    }
}
