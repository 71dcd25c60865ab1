use log::debug;
use rayon::prelude::*;

mod bounds;
mod builder;
mod config;
mod distance;
mod error;
mod key;
mod model;

pub mod render;
pub mod sample;
pub mod strategy;

pub use bounds::{Bounds, Range};
pub use builder::Builder;
pub use config::{Config, StrategyKind, parse_pair};
pub use distance::{DistanceOperator, Euclidean, MaxDifference};
pub use error::{Error, Result};
pub use key::{Key, Linear, LinearCmyk, LinearCmyka, LinearGray, LinearGrayA, LinearRgb, LinearRgba};
pub use model::{Cmyk, Cmyka, ColorModel, Gray, GrayA, Rgb, Rgba};
pub use strategy::{Approximate, ColorCount, StepCount, Strategy};

/// Reduces dense color sequences to a few gradient stops.
///
/// ```
/// use stopline::{ColorCount, Rgb, StopExtractor};
///
/// let mut extractor = StopExtractor::<Rgb>::new();
/// extractor.strategy(ColorCount::new(1)).out_range(0.0, 100.0);
///
/// let stops = extractor.extract_colors(&[
///   [0.0, 0.0, 0.0],
///   [0.5, 0.5, 0.5],
///   [1.0, 0.0, 0.0],
///   [0.5, 0.5, 0.5],
///   [0.0, 0.0, 0.0],
/// ]);
/// assert_eq!(stops.len(), 3);
/// assert_eq!(stops[1].position, 50.0);
/// ```
pub struct StopExtractor<C: ColorModel> {
  strategy: Box<dyn Strategy<C>>,
  distance: Box<dyn DistanceOperator<C>>,
  builder:  Builder,
}

impl<C: ColorModel> Default for StopExtractor<C> {
  fn default() -> Self {
    StopExtractor {
      strategy: Box::new(Approximate::default()),
      distance: Box::new(MaxDifference),
      builder:  Builder::default(),
    }
  }
}

impl<C: ColorModel> StopExtractor<C> {
  pub fn new() -> Self { StopExtractor::default() }

  pub fn strategy(&mut self, strategy: impl Strategy<C> + 'static) -> &mut Self {
    self.strategy = Box::new(strategy);
    self
  }

  pub fn boxed_strategy(&mut self, strategy: Box<dyn Strategy<C>>) -> &mut Self {
    self.strategy = strategy;
    self
  }

  pub fn distance(&mut self, distance: impl DistanceOperator<C> + 'static) -> &mut Self {
    self.distance = Box::new(distance);
    self
  }

  pub fn out_range(&mut self, min: f32, max: f32) -> &mut Self {
    self.builder.out_range = Range::new(f64::from(min), f64::from(max));
    self
  }

  /// Picks the stops of `keys`. The result always starts and ends with the
  /// first and last key, remapped into the output range.
  pub fn extract(&self, keys: &[Key<C>]) -> Linear<C> {
    let splits = self.strategy.extract(keys, self.distance.as_ref());
    debug!("keeping {} of {} keys", (splits.len() + 2).min(keys.len()), keys.len());
    self.builder.build(keys, &splits)
  }

  /// Like `extract`, for colors spread evenly over `[0, 1]`.
  pub fn extract_colors(&self, colors: &[C]) -> Linear<C> {
    self.extract(&Builder::positions_from_colors(colors))
  }

  /// Extracts every sequence independently, in parallel.
  pub fn extract_many(&self, lines: &[Linear<C>]) -> Vec<Linear<C>> {
    lines.par_iter().map(|keys| self.extract(keys)).collect()
  }
}
