use anyhow::{bail, Context, Result};
use clap::Parser;

use ganache::core::integrator::Integrator;
use ganache::demo::{build_demo, DemoScene};
use ganache::integrators::whitted::{RayTracer, DEFAULT_MAX_DEPTH};
use ganache::math::constants::{Float, Vector2f};

/// Trace a single pixel of a built-in scene and print its radiance.
#[derive(Debug, Parser)]
#[command(name = "render_pixel")]
struct Args {
    x: usize,
    y: usize,

    /// spheres, glass, mesh or mirrors
    #[arg(long, default_value = "spheres")]
    scene: DemoScene,

    #[arg(long, default_value = "640")]
    width: usize,

    #[arg(long, default_value = "480")]
    height: usize,

    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    #[arg(long, default_value = "1")]
    spp: u32,

    #[arg(long, default_value = "0")]
    camera: usize,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
    let args = Args::parse();

    let scene = build_demo(args.scene, args.width, args.height)
        .context("failed to build scene")?;
    let sensor = match scene.camera(args.camera) {
        Some(sensor) => sensor,
        None => bail!("camera {} not found", args.camera),
    };
    let (width, height) = {
        let bmp = sensor.bitmap();
        (bmp.width(), bmp.height())
    };
    if args.x >= width || args.y >= height {
        bail!("pixel out of bounds: ({}, {}) for size {}x{}", args.x, args.y, width, height);
    }

    let tracer = RayTracer::new(args.max_depth, args.spp);
    let pixel = Vector2f::new(args.x as Float, args.y as Float);
    let rgb = tracer.trace_pixel(&scene, sensor, pixel);
    let stats = tracer.stats().snapshot();

    println!(
        "pixel ({}, {}) spp={} depth={} -> R {:.6}, G {:.6}, B {:.6}",
        args.x, args.y, tracer.samples_per_pixel(), args.max_depth, rgb[0], rgb[1], rgb[2]
    );
    println!("rays: {}", stats);
    Ok(())
}
