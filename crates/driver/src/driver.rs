use std::time::{Duration, Instant};

use tilecast_common::Surface;
use tilecast_input::InputFrame;
use tilecast_kernel::World;
use tilecast_render::Renderer;

use crate::controls::{ControlConfig, integrate};
use crate::pacing::FrameTimer;

/// Result of one [`FrameDriver::step`].
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome<O> {
    /// The frame was integrated and rendered; the surface is ready to present.
    Rendered(O),
    /// Quit was requested. Nothing was integrated or drawn.
    Quit,
}

/// Per-frame orchestration: integrate input into the camera, then render.
///
/// The driver owns the world and the surface and lends them to the renderer
/// for one call at a time. Polling input and presenting the surface belong to
/// the platform shell on either side of [`FrameDriver::step`].
pub struct FrameDriver<R> {
    world: World,
    renderer: R,
    surface: Surface,
    controls: ControlConfig,
    timer: FrameTimer,
}

impl<R> FrameDriver<R>
where
    R: Renderer<Target = Surface>,
{
    pub fn new(world: World, renderer: R, surface: Surface, controls: ControlConfig) -> Self {
        Self {
            world,
            renderer,
            surface,
            controls,
            timer: FrameTimer::new(120),
        }
    }

    /// Run one frame. Quit is checked before anything else so that a
    /// terminating loop never delivers a half-updated frame.
    pub fn step(&mut self, input: &InputFrame) -> StepOutcome<R::Output> {
        if input.quit {
            tracing::info!(frame = self.world.frame(), "quit between frames");
            return StepOutcome::Quit;
        }

        let start = Instant::now();
        integrate(self.world.camera_mut(), input, &self.controls);
        self.world.advance_frame();
        let output = self.renderer.render(&self.world, &mut self.surface);
        self.timer.record(start.elapsed());

        StepOutcome::Rendered(output)
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// The most recently rendered frame.
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn timer(&self) -> &FrameTimer {
        &self.timer
    }

    /// Average time spent integrating and rendering, over recent frames.
    pub fn average_frame_time(&self) -> Duration {
        self.timer.average()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use tilecast_common::Rgba;
    use tilecast_kernel::{Camera, TileGrid};
    use tilecast_render::{FrameStats, RaycastRenderer};

    fn driver() -> FrameDriver<RaycastRenderer> {
        FrameDriver::new(
            World::default(),
            RaycastRenderer::default(),
            Surface::new(1024, 512),
            ControlConfig::default(),
        )
    }

    #[test]
    fn idle_step_renders_without_moving() {
        let mut d = driver();
        let before = *d.world().camera();
        let outcome = d.step(&InputFrame::idle());
        assert!(matches!(outcome, StepOutcome::Rendered(FrameStats { columns: 512, .. })));
        assert_eq!(*d.world().camera(), before);
        assert_eq!(d.world().frame(), 1);
        assert_eq!(d.timer().len(), 1);
        assert!(d.surface().pixels().contains(&Rgba::WALL.pack()));
    }

    #[test]
    fn forward_moves_before_rendering() {
        let mut d = driver();
        let y = d.world().camera().position.y;
        d.step(&InputFrame {
            forward: true,
            ..InputFrame::idle()
        });
        assert_eq!(d.world().camera().position.y, y - 0.05);
    }

    #[test]
    fn quit_skips_the_frame() {
        let mut d = driver();
        d.step(&InputFrame::idle());
        let rendered = d.surface().clone();
        let outcome = d.step(&InputFrame {
            quit: true,
            forward: true,
            mouse_dx: 45.0,
            ..InputFrame::idle()
        });
        assert_eq!(outcome, StepOutcome::Quit);
        assert_eq!(d.world().frame(), 1);
        assert_eq!(d.surface(), &rendered);
    }

    #[test]
    fn frame_reflects_new_pose() {
        let grid = TileGrid::from_literal(4, 4, "          0     ").unwrap();
        let world = World::new(grid, Camera::new(Vec2::new(0.5, 0.5), 0.0));
        let mut d = FrameDriver::new(
            world,
            RaycastRenderer::default(),
            Surface::new(100, 100),
            ControlConfig::default(),
        );

        // Facing +x along row 0 there is no wall to see.
        let StepOutcome::Rendered(stats) = d.step(&InputFrame::idle()) else {
            panic!("expected a frame");
        };
        assert_eq!(stats.hits, 0);

        // 45 pixels of mouse motion turns the view onto the wall at (2, 2).
        let StepOutcome::Rendered(stats) = d.step(&InputFrame {
            mouse_dx: 45.0,
            ..InputFrame::idle()
        }) else {
            panic!("expected a frame");
        };
        assert!(stats.hits > 0);
    }
}
