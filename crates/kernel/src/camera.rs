use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

/// First-person camera on the tile grid.
///
/// Position is in grid-cell units. Nothing keeps the camera inside the grid or
/// out of walls; movement is unclamped and may pass through either.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec2,
    /// Facing angle in radians. 0 looks along +x, positive turns toward +y.
    pub angle: f32,
    /// Horizontal field of view in radians.
    pub fov: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec2::new(3.456, 2.345),
            angle: 1.523,
            fov: PI / 3.0,
        }
    }
}

impl Camera {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self {
            position,
            angle,
            ..Self::default()
        }
    }

    /// Unit vector along the facing angle.
    pub fn forward(&self) -> Vec2 {
        Vec2::from_angle(self.angle)
    }

    /// Grid cell under the camera, truncated toward zero.
    pub fn cell(&self) -> (i64, i64) {
        (self.position.x as i64, self.position.y as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_pose() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec2::new(3.456, 2.345));
        assert_eq!(cam.angle, 1.523);
        assert_eq!(cam.fov, PI / 3.0);
        assert_eq!(cam.cell(), (3, 2));
    }

    #[test]
    fn forward_follows_angle() {
        let cam = Camera::new(Vec2::ZERO, 0.0);
        assert!((cam.forward() - Vec2::X).length() < 1e-6);
        let cam = Camera::new(Vec2::ZERO, PI / 2.0);
        assert!((cam.forward() - Vec2::Y).length() < 1e-6);
    }

    #[test]
    fn new_keeps_default_fov() {
        let cam = Camera::new(Vec2::new(1.0, 2.0), 0.5);
        assert_eq!(cam.fov, PI / 3.0);
        assert_eq!(cam.position.y, 2.0);
    }
}
