use clap::Parser;
use mandelbrot_zoom::{PixelsPresenterFactory, RasterSpec, RunGuiCommand, ZoomConfig, ZoomPreset};
use std::error::Error;

/// Animated zoom into the Mandelbrot set.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Aim point and zoom speeds to start from.
    #[arg(short, long, value_enum, default_value_t = ZoomPreset::Classic)]
    preset: ZoomPreset,

    /// Raster width in pixels.
    #[arg(long)]
    width: Option<u32>,

    /// Raster height in pixels.
    #[arg(long)]
    height: Option<u32>,

    /// Iteration budget before the depth offset is applied.
    #[arg(long)]
    base_depth: Option<u32>,

    /// Start with the animation running instead of paused.
    #[arg(short, long)]
    running: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    let mut config = ZoomConfig::from_preset(args.preset);

    if args.width.is_some() || args.height.is_some() {
        config.raster = RasterSpec::new(
            args.width.unwrap_or(config.raster.width()),
            args.height.unwrap_or(config.raster.height()),
        )?;
    }
    if let Some(base_depth) = args.base_depth {
        config.base_depth = base_depth;
    }
    config.start_paused = !args.running;

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), config);
    command.execute()?;

    Ok(())
}
