// Copyright 2020 TwoCookingMice

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

use ganache::demo::{build_demo, DemoScene};
use ganache::integrators::whitted::{RayTracer, DEFAULT_MAX_DEPTH};
use ganache::io::write_image;
use ganache::renderers::simple::{Renderer, SimpleRenderer};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ganache")]
#[command(about = "A recursive Whitted ray tracer")]
struct Args {
    /// Built-in scene to render: spheres, glass, mesh or mirrors
    #[arg(long, default_value = "spheres")]
    scene: DemoScene,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: usize,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: usize,

    /// Deepest recursion level that is still shaded
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,

    /// Samples per pixel, rounded down to a square grid
    #[arg(long, short = 's', default_value = "4")]
    samples: u32,

    /// Camera index: 0 perspective, 1 orthographic
    #[arg(long, default_value = "0")]
    camera: usize,

    /// Output file (.exr for linear HDR, .png for gamma corrected 8-bit)
    #[arg(short, long, default_value = "output.exr")]
    output: String,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    if args.width == 0 || args.height == 0 {
        bail!("image size must be positive, got {}x{}", args.width, args.height);
    }

    let mut scene = build_demo(args.scene, args.width, args.height)
        .context("failed to build scene")?;
    if scene.camera(args.camera).is_none() {
        bail!("camera {} does not exist, the scene has {}", args.camera, scene.sensors().len());
    }

    let tracer = RayTracer::new(args.max_depth, args.samples);
    let renderer = SimpleRenderer::new(Box::new(tracer), args.camera);
    let image = renderer.render(&mut scene);

    write_image(&image, &args.output)
        .with_context(|| format!("failed to write {}", args.output))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_flag_uses_demo_names() {
        let args = Args::try_parse_from(["ganache", "--scene", "mirrors"]).unwrap();
        assert_eq!(args.scene, DemoScene::Mirrors);
        assert_eq!(Args::try_parse_from(["ganache"]).unwrap().scene, DemoScene::Spheres);
        assert!(Args::try_parse_from(["ganache", "--scene", "teapot"]).is_err());
    }
}
