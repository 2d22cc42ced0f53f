use std::{path::PathBuf, time::Instant};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use sdfmarch::{canvas::Color, marcher::Marcher, render::Config, scene::ObjectKind, vector::Vec3};

/// Render a signed distance field scene by sphere tracing
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Image width in pixels
    #[arg(short, long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Number of render threads, defaults to the number of cpus
    #[arg(short, long)]
    jobs: Option<usize>,

    /// Number of frames to render
    #[arg(short, long, default_value = "1")]
    frames: u32,

    /// Write the last frame to this file instead of printing it as ascii
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Args::parse();

    let config = args.jobs.map(Config::new).unwrap_or_default();
    info!("rendering with {} jobs", config.jobs());

    let marcher = Marcher::new(config);
    marcher.add_object(Vec3::new(0., 1., 6.), Vec3::splat(1.), ObjectKind::Box);
    marcher.add_light(Vec3::new(0., 5., 6.), Color::new(1., 0., 0.));

    let mut canvas = None;
    let mut last = Instant::now();
    for frame in 0..args.frames.max(1) {
        let resolution = marcher.on_frame_start(args.width, args.height)?;
        let start = Instant::now();
        canvas = Some(marcher.render_frame(resolution, start - last)?);
        info!(
            "frame {} ({}x{}) rendered in {:?}",
            frame,
            resolution.width,
            resolution.height,
            start.elapsed()
        );
        last = start;
    }

    let canvas = canvas.context("no frames rendered")?;
    match args.output {
        Some(path) => {
            canvas
                .save(&path)
                .with_context(|| format!("failed to save `{}`", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => print!("{}", canvas.to_ascii()),
    }

    Ok(())
}
