use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tilecast_common::Surface;
use tilecast_driver::{AppConfig, FrameDriver, FramePacer, StepOutcome};
use tilecast_input::{Action, InputState, KeyBindings};
use tilecast_render::RaycastRenderer;
use tilecast_render_wgpu::GpuContext;
use tilecast_tools::WorldInspector;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{DeviceEvent, ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{CursorGrabMode, Window, WindowId};

/// Frames between debug summaries of the world.
const LOG_INTERVAL: u64 = 120;

#[derive(Parser)]
#[command(name = "tilecast-desktop", about = "Tilecast raycaster window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Map file, overriding the one in the config
    #[arg(short, long)]
    map: Option<PathBuf>,
}

fn default_bindings() -> KeyBindings<KeyCode> {
    let mut bindings = KeyBindings::new();
    bindings
        .bind(KeyCode::ArrowUp, Action::MoveForward)
        .bind(KeyCode::KeyW, Action::MoveForward)
        .bind(KeyCode::ArrowDown, Action::MoveBack)
        .bind(KeyCode::KeyS, Action::MoveBack)
        .bind(KeyCode::ArrowLeft, Action::StrafeLeft)
        .bind(KeyCode::KeyA, Action::StrafeLeft)
        .bind(KeyCode::ArrowRight, Action::StrafeRight)
        .bind(KeyCode::KeyD, Action::StrafeRight)
        .bind(KeyCode::Escape, Action::Quit);
    bindings
}

/// Window shell around the frame driver.
struct App {
    driver: FrameDriver<RaycastRenderer>,
    bindings: KeyBindings<KeyCode>,
    input: InputState<KeyCode>,
    pacer: FramePacer,
    next_frame: Instant,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    error: Option<anyhow::Error>,
}

impl App {
    fn new(config: &AppConfig) -> Result<Self> {
        let world = config.load_world()?;
        let surface = Surface::new(config.surface.width, config.surface.height);
        let driver = FrameDriver::new(
            world,
            RaycastRenderer::new(config.render.clone()),
            surface,
            config.controls,
        );
        Ok(Self {
            driver,
            bindings: default_bindings(),
            input: InputState::new(),
            pacer: config.pacer(),
            next_frame: Instant::now(),
            window: None,
            gpu: None,
            error: None,
        })
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: anyhow::Error) {
        tracing::error!("{error:#}");
        self.error = Some(error);
        event_loop.exit();
    }

    fn init_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let surface = self.driver.surface();
        let attrs = Window::default_attributes()
            .with_title("tilecast")
            .with_inner_size(PhysicalSize::new(surface.width(), surface.height()));
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .context("failed to create window")?,
        );

        // Relative mouse look needs the pointer held in the window.
        if let Err(e) = window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| window.set_cursor_grab(CursorGrabMode::Confined))
        {
            tracing::warn!("cursor grab unavailable: {e}");
        }
        window.set_cursor_visible(false);

        let size = window.inner_size();
        let gpu = GpuContext::new(
            window.clone(),
            size.width,
            size.height,
            surface.width(),
            surface.height(),
        )?;

        self.window = Some(window);
        self.gpu = Some(gpu);
        Ok(())
    }

    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let start = Instant::now();
        let input = self.input.snapshot(&self.bindings);

        let stats = match self.driver.step(&input) {
            StepOutcome::Quit => {
                event_loop.exit();
                return;
            }
            StepOutcome::Rendered(stats) => stats,
        };

        if let Some(gpu) = &mut self.gpu {
            if let Err(e) = gpu.present(self.driver.surface()) {
                self.fail(event_loop, e.into());
                return;
            }
        }

        let world = self.driver.world();
        if world.frame() % LOG_INTERVAL == 0 {
            tracing::debug!("{}", WorldInspector::summary(world));
            tracing::debug!("{}", WorldInspector::frame_report(&stats));
            tracing::debug!(
                avg_ms = self.driver.average_frame_time().as_secs_f64() * 1000.0,
                fps = self.driver.timer().fps(),
                "frame timing"
            );
        }

        self.next_frame = self.pacer.next_deadline(start, Instant::now());
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init_window(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                // Seen by the next step, which ends the loop between frames.
                self.input.request_quit();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state,
                        ..
                    },
                ..
            } => {
                let pressed = state == ElementState::Pressed;
                // A tap shorter than a frame would never be seen as held.
                if pressed && self.bindings.action_for(&key) == Some(Action::Quit) {
                    self.input.request_quit();
                }
                self.input.handle_key(key, pressed);
            }
            WindowEvent::RedrawRequested => self.frame(event_loop),
            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: winit::event::DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.input.mouse_motion(delta.0);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if Instant::now() >= self.next_frame {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        } else {
            event_loop.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(map) = cli.map {
        config.map = Some(map);
    }

    tracing::info!(
        width = config.surface.width,
        height = config.surface.height,
        budget_ms = config.frame_budget_ms,
        "tilecast-desktop starting"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&config)?;
    event_loop.run_app(&mut app)?;

    match app.error {
        Some(e) => Err(e),
        None => {
            tracing::info!(frames = app.driver.world().frame(), "tilecast-desktop exiting");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrows_and_wasd_share_actions() {
        let b = default_bindings();
        assert_eq!(b.action_for(&KeyCode::ArrowUp), Some(Action::MoveForward));
        assert_eq!(b.action_for(&KeyCode::KeyD), Some(Action::StrafeRight));
        assert_eq!(b.action_for(&KeyCode::ArrowDown), Some(Action::MoveBack));
        assert_eq!(b.action_for(&KeyCode::KeyS), Some(Action::MoveBack));
        assert_eq!(b.action_for(&KeyCode::Escape), Some(Action::Quit));
        assert_eq!(b.action_for(&KeyCode::Space), None);
    }

    #[test]
    fn held_escape_latches_quit() {
        let b = default_bindings();
        let mut input = InputState::new();
        input.handle_key(KeyCode::Escape, true);
        assert!(input.snapshot(&b).quit);
        input.handle_key(KeyCode::Escape, false);
        assert!(input.snapshot(&b).quit);
    }
}
