use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use glam::Vec2;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tilecast_common::{Surface, unpack};
use tilecast_driver::{AppConfig, FrameDriver, StepOutcome};
use tilecast_input::InputFrame;
use tilecast_kernel::World;
use tilecast_render::{RaycastRenderer, Renderer, TextRenderer};
use tilecast_tools::WorldInspector;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilecast-cli", about = "CLI tool for tilecast maps and frames")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// YAML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Map file, overriding the one in the config
    #[arg(short, long, global = true)]
    map: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate info and a summary of the starting world
    Info,
    /// Print the map as text with the camera marked
    Map,
    /// Render one frame to a PNG file
    Snapshot {
        /// Output PNG path
        #[arg(short, long)]
        out: PathBuf,
        /// Camera x, overriding the configured pose
        #[arg(long, allow_hyphen_values = true)]
        x: Option<f32>,
        /// Camera y, overriding the configured pose
        #[arg(long, allow_hyphen_values = true)]
        y: Option<f32>,
        /// Camera angle in radians, overriding the configured pose
        #[arg(long, allow_hyphen_values = true)]
        angle: Option<f32>,
    },
    /// Run frames headless and report timings
    Bench {
        /// Number of frames to render
        #[arg(short, long, default_value = "300")]
        frames: u64,
        /// Mouse motion fed each frame, in pixels; 0 keeps the view still
        #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
        turn: f32,
    },
}

/// Apply any pose overrides from the command line.
fn place_camera(world: &mut World, x: Option<f32>, y: Option<f32>, angle: Option<f32>) {
    let cam = world.camera_mut();
    let position = Vec2::new(x.unwrap_or(cam.position.x), y.unwrap_or(cam.position.y));
    cam.position = position;
    if let Some(a) = angle {
        cam.angle = a;
    }
}

/// Convert the surface to an RGB image. Packed alpha is not meaningful and is dropped.
fn surface_to_image(surface: &Surface) -> image::RgbImage {
    image::RgbImage::from_fn(surface.width(), surface.height(), |x, y| {
        let (r, g, b, _) = unpack(surface.get(x, y).unwrap_or_default());
        image::Rgb([r, g, b])
    })
}

fn write_png(surface: &Surface, path: &Path) -> Result<()> {
    surface_to_image(surface)
        .save(path)
        .with_context(|| format!("failed to write {}", path.display()))
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
    let mut world = config.load_world()?;

    match cli.command {
        Commands::Info => {
            println!("tilecast-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", tilecast_common::crate_info());
            println!("kernel: {}", tilecast_kernel::crate_info());
            println!("input: {}", tilecast_input::crate_info());
            println!("render: {}", tilecast_render::crate_info());
            println!("driver: {}", tilecast_driver::crate_info());
            println!("tools: {}", tilecast_tools::crate_info());
            println!("{}", WorldInspector::summary(&world));
            println!(
                "surface: {}x{}, frame budget: {} ms",
                config.surface.width, config.surface.height, config.frame_budget_ms
            );
        }
        Commands::Map => {
            let mut out = String::new();
            TextRenderer::new().render(&world, &mut out);
            print!("{out}");
        }
        Commands::Snapshot { out, x, y, angle } => {
            place_camera(&mut world, x, y, angle);
            let mut surface = Surface::new(config.surface.width, config.surface.height);
            let renderer = RaycastRenderer::new(config.render.clone());
            let stats = renderer.render(&world, &mut surface);

            write_png(&surface, &out)?;
            println!("{}", WorldInspector::summary(&world));
            println!("{}", WorldInspector::frame_report(&stats));
            println!("wrote {}", out.display());
        }
        Commands::Bench { frames, turn } => {
            let surface = Surface::new(config.surface.width, config.surface.height);
            let mut driver = FrameDriver::new(
                world,
                RaycastRenderer::new(config.render.clone()),
                surface,
                config.controls,
            );
            let input = InputFrame {
                mouse_dx: turn,
                ..InputFrame::idle()
            };

            let start = Instant::now();
            let mut hits = 0u64;
            let mut steps = 0u64;
            for _ in 0..frames {
                if let StepOutcome::Rendered(stats) = driver.step(&input) {
                    hits += stats.hits as u64;
                    steps += stats.steps;
                }
            }
            let total = start.elapsed();

            let timer = driver.timer();
            println!(
                "Bench: {frames} frames at {}x{} in {:.1} ms",
                config.surface.width,
                config.surface.height,
                total.as_secs_f64() * 1000.0
            );
            println!(
                "  frame time (last {}): avg={:?} min={:?} max={:?} fps={:.1}",
                timer.len(),
                timer.average(),
                timer.min(),
                timer.max(),
                timer.fps()
            );
            println!("  total hits={hits} march steps={steps}");
            println!("{}", WorldInspector::summary(driver.world()));
        }
    }

    Ok(())
}
