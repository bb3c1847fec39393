use std::hint::black_box;
use std::time::Instant;

use glam::Vec2;
use tilecast_common::Surface;
use tilecast_kernel::{Camera, TileGrid, World};
use tilecast_render::{RaycastRenderer, RenderConfig, Renderer, march};

fn bench_frame(width: u32, height: u32, draw_ray_trace: bool, iterations: usize) {
    let world = World::default();
    let renderer = RaycastRenderer::new(RenderConfig {
        draw_ray_trace,
        ..RenderConfig::default()
    });
    let mut surface = Surface::new(width, height);

    let start = Instant::now();
    for _ in 0..iterations {
        renderer.render(black_box(&world), &mut surface);
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!(
        "  frame ({width}x{height}, trace={draw_ray_trace}, {iterations} iters): {per_iter:?}/iter, total {elapsed:?}"
    );
}

fn bench_open_field_march(iterations: usize) {
    let grid = TileGrid::from_literal(64, 64, &" ".repeat(64 * 64)).unwrap();
    let camera = Camera::new(Vec2::new(32.0, 32.0), 0.0);

    let start = Instant::now();
    for i in 0..iterations {
        let angle = i as f32 * 0.001;
        black_box(march(&grid, camera.position, angle, 0.05, 20.0, |_, _| {}));
    }
    let elapsed = start.elapsed();
    let per_iter = elapsed / iterations as u32;
    println!("  march to cutoff ({iterations} rays): {per_iter:?}/ray, total {elapsed:?}");
}

fn main() {
    println!("=== Raycast Benchmarks ===");
    bench_frame(1024, 512, true, 50);
    bench_frame(1024, 512, false, 50);
    bench_frame(2048, 1024, true, 10);
    bench_open_field_march(10_000);
}
