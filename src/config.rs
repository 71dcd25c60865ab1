use clap::ValueEnum;

use crate::{
  Error, Result, StopExtractor,
  bounds::Range,
  model::ColorModel,
  strategy::{
    Approximate, ColorCount, DEFAULT_COUNT, DEFAULT_STOP_DISTANCE, DEFAULT_TOLERANCE, StepCount,
  },
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum StrategyKind {
  /// Split until every span is within `tolerance`.
  #[default]
  Approximate,
  /// Exactly `count` extra stops, most significant first.
  ColorCount,
  /// `count` rounds, each taking every stop within `stop_distance` of the best.
  StepCount,
}

/// Every option of an extraction, in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
  pub strategy:      StrategyKind,
  pub tolerance:     f32,
  pub count:         usize,
  pub stop_distance: f32,
  pub out_range:     Range,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      strategy:      StrategyKind::default(),
      tolerance:     DEFAULT_TOLERANCE,
      count:         DEFAULT_COUNT,
      stop_distance: DEFAULT_STOP_DISTANCE,
      out_range:     Range::UNIT,
    }
  }
}

impl Config {
  /// Rejects values the strategies would silently clamp or misbehave on.
  pub fn validate(&self) -> Result<()> {
    if !self.tolerance.is_finite() {
      return Err(Error::InvalidArgument(format!("tolerance must be finite, got {}", self.tolerance)));
    }
    if !(0.0..=1.0).contains(&self.stop_distance) {
      return Err(Error::InvalidArgument(format!(
        "stop distance must be within [0, 1], got {}",
        self.stop_distance
      )));
    }
    if !self.out_range.min.is_finite() || !self.out_range.max.is_finite() {
      return Err(Error::InvalidArgument("output range must be finite".to_string()));
    }
    Ok(())
  }

  pub fn extractor<C: ColorModel>(&self) -> StopExtractor<C> {
    let mut extractor = StopExtractor::new();
    match self.strategy {
      StrategyKind::Approximate => extractor.strategy(Approximate::new(self.tolerance)),
      StrategyKind::ColorCount => extractor.strategy(ColorCount::new(self.count)),
      StrategyKind::StepCount => {
        extractor.strategy(StepCount::new(self.count, self.stop_distance))
      }
    };
    extractor.out_range(self.out_range.min as f32, self.out_range.max as f32);
    extractor
  }
}

/// Parses `"x,y"`.
pub fn parse_pair(s: &str) -> Result<(f64, f64)> {
  let invalid = || Error::InvalidArgument(format!("expected two comma separated numbers, got `{s}`"));

  let (a, b) = s.split_once(',').ok_or_else(invalid)?;
  let a = a.trim().parse::<f64>().map_err(|_| invalid())?;
  let b = b.trim().parse::<f64>().map_err(|_| invalid())?;
  Ok((a, b))
}
