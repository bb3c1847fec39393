use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use tilecast_input::InputFrame;
use tilecast_kernel::Camera;

/// How movement keys translate into camera motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementMode {
    /// Forward is -y, right is +x, whatever the camera faces.
    #[default]
    WorldAxes,
    /// The same steps rotated so that forward follows the facing angle.
    Facing,
}

/// Tuning for camera integration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlConfig {
    /// Grid units moved per held key per frame.
    pub move_step: f32,
    /// Radians of turn per pixel of horizontal mouse motion.
    pub mouse_scale: f32,
    pub movement: MovementMode,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            move_step: 0.05,
            mouse_scale: PI / 180.0,
            movement: MovementMode::WorldAxes,
        }
    }
}

/// Advance the camera by one frame of input.
///
/// Mouse look is applied first, then one fixed step per held movement key.
/// No collision check is made.
pub fn integrate(camera: &mut Camera, input: &InputFrame, controls: &ControlConfig) {
    camera.angle += input.mouse_dx * controls.mouse_scale;

    let step = controls.move_step;
    match controls.movement {
        MovementMode::WorldAxes => {
            if input.forward {
                camera.position.y -= step;
            }
            if input.back {
                camera.position.y += step;
            }
            if input.right {
                camera.position.x += step;
            }
            if input.left {
                camera.position.x -= step;
            }
        }
        MovementMode::Facing => {
            let fwd = camera.forward();
            // right of forward with +y pointing down the screen
            let right = Vec2::new(-fwd.y, fwd.x);
            let mut delta = Vec2::ZERO;
            if input.forward {
                delta += fwd;
            }
            if input.back {
                delta -= fwd;
            }
            if input.right {
                delta += right;
            }
            if input.left {
                delta -= right;
            }
            camera.position += delta * step;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> InputFrame {
        InputFrame::idle()
    }

    #[test]
    fn forward_decreases_y_regardless_of_angle() {
        for angle in [0.0, 1.523, PI, -2.0] {
            let mut cam = Camera::new(Vec2::new(3.0, 2.345), angle);
            let start = cam.position;
            integrate(
                &mut cam,
                &InputFrame {
                    forward: true,
                    ..frame()
                },
                &ControlConfig::default(),
            );
            assert_eq!(cam.position.y, start.y - 0.05);
            assert_eq!(cam.position.x, start.x);
            assert_eq!(cam.angle, angle);
        }
    }

    #[test]
    fn each_key_moves_one_axis() {
        let controls = ControlConfig::default();
        let mut cam = Camera::new(Vec2::new(5.0, 5.0), 0.0);
        integrate(&mut cam, &InputFrame { back: true, ..frame() }, &controls);
        assert_eq!(cam.position, Vec2::new(5.0, 5.0 + 0.05));

        let mut cam = Camera::new(Vec2::new(5.0, 5.0), 0.0);
        integrate(&mut cam, &InputFrame { right: true, ..frame() }, &controls);
        assert_eq!(cam.position, Vec2::new(5.0 + 0.05, 5.0));

        let mut cam = Camera::new(Vec2::new(5.0, 5.0), 0.0);
        integrate(&mut cam, &InputFrame { left: true, ..frame() }, &controls);
        assert_eq!(cam.position, Vec2::new(5.0 - 0.05, 5.0));
    }

    #[test]
    fn opposite_keys_cancel() {
        let mut cam = Camera::new(Vec2::new(5.0, 5.0), 0.0);
        let input = InputFrame {
            left: true,
            right: true,
            ..frame()
        };
        integrate(&mut cam, &input, &ControlConfig::default());
        assert!((cam.position.x - 5.0).abs() < 1e-6);
    }

    #[test]
    fn mouse_turns_by_degrees_per_pixel() {
        let mut cam = Camera::new(Vec2::ZERO, 0.0);
        integrate(
            &mut cam,
            &InputFrame {
                mouse_dx: 90.0,
                ..frame()
            },
            &ControlConfig::default(),
        );
        assert!((cam.angle - PI / 2.0).abs() < 1e-6);
        assert_eq!(cam.position, Vec2::ZERO);
    }

    #[test]
    fn movement_is_unclamped() {
        let mut cam = Camera::new(Vec2::new(0.01, 0.01), 0.0);
        let input = InputFrame {
            forward: true,
            left: true,
            ..frame()
        };
        integrate(&mut cam, &input, &ControlConfig::default());
        assert!(cam.position.x < 0.0);
        assert!(cam.position.y < 0.0);
    }

    #[test]
    fn facing_mode_follows_angle() {
        let controls = ControlConfig {
            movement: MovementMode::Facing,
            ..ControlConfig::default()
        };
        let mut cam = Camera::new(Vec2::ZERO, 0.0);
        integrate(&mut cam, &InputFrame { forward: true, ..frame() }, &controls);
        assert!((cam.position - Vec2::new(0.05, 0.0)).length() < 1e-6);

        let mut cam = Camera::new(Vec2::ZERO, 0.0);
        integrate(&mut cam, &InputFrame { right: true, ..frame() }, &controls);
        assert!((cam.position - Vec2::new(0.0, 0.05)).length() < 1e-6);
    }
}
