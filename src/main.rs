use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::Line;
use log::info;
use stopline::{
  Config, LinearRgba, Range, StrategyKind, parse_pair,
  render::{self, Preview},
  sample,
  strategy::{DEFAULT_COUNT, DEFAULT_STOP_DISTANCE, DEFAULT_TOLERANCE},
};

/// Approximates a line of pixels from an image with a few gradient stops and
/// prints them as a CSS gradient.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
  /// PNG or JPEG image to sample.
  image: PathBuf,

  /// Start of the sampled line, in unit coordinates.
  #[arg(long, value_parser = parse_pair, default_value = "0,0.5")]
  from: (f64, f64),

  /// End of the sampled line, in unit coordinates.
  #[arg(long, value_parser = parse_pair, default_value = "1,0.5")]
  to: (f64, f64),

  /// Take this many evenly spaced samples instead of every pixel.
  #[arg(long)]
  samples: Option<usize>,

  #[arg(long, value_enum, default_value_t = StrategyKind::Approximate)]
  strategy: StrategyKind,

  /// Largest divergence a span may keep (approximate).
  #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
  tolerance: f32,

  /// Stops to add (color-count) or rounds to run (step-count).
  #[arg(long, default_value_t = DEFAULT_COUNT)]
  count: usize,

  /// Relative slack for taking several stops per round (step-count).
  #[arg(long, default_value_t = DEFAULT_STOP_DISTANCE)]
  stop_distance: f32,

  /// Output positions are mapped onto this range.
  #[arg(long, value_parser = parse_pair, default_value = "0,1")]
  range: (f64, f64),

  /// Angle of the CSS gradient, in degrees.
  #[arg(long, default_value_t = 90.0)]
  angle: f32,

  /// Also write a preview strip of the result to this PNG.
  #[arg(long)]
  preview: Option<PathBuf>,
}

fn main() -> Result<()> {
  env_logger::init();
  let args = Args::parse();

  let config = Config {
    strategy:      args.strategy,
    tolerance:     args.tolerance,
    count:         args.count,
    stop_distance: args.stop_distance,
    out_range:     Range::new(args.range.0, args.range.1),
  };
  config.validate()?;
  let out_range = config.out_range;

  let image = sample::load(&args.image)
    .with_context(|| format!("failed to load {}", args.image.display()))?;

  let line = Line::new(args.from, args.to);
  let keys: LinearRgba = match args.samples {
    Some(count) => sample::sample_count(&image, line, count),
    None => sample::sample_line(&image, line),
  };
  info!("sampled {} colors from {}", keys.len(), args.image.display());

  // The CSS percentages are relative to the gradient box, so extract in unit
  // space and only remap for the log.
  let unit = Config { out_range: Range::UNIT, ..config };
  let stops: LinearRgba = unit.extractor().extract(&keys);
  info!("reduced to {} stops", stops.len());
  println!("{}", render::css(&stops, args.angle));

  if let Some(path) = &args.preview {
    Preview::new(&stops, 512, 64)
      .save(path)
      .with_context(|| format!("failed to write {}", path.display()))?;
  }

  for stop in &stops {
    info!("{:?} @ {}", stop.color, out_range.remap(stop.position));
  }

  Ok(())
}
