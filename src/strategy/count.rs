use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use super::{DEFAULT_COUNT, DEFAULT_STOP_DISTANCE, Strategy, find_farthest};
use crate::{distance::DistanceOperator, key::Key, model::ColorModel};

/// Adds exactly `count` interior keys (fewer if the gradient runs out of
/// non-linear intervals), one per round, always the globally farthest one.
#[derive(Clone, Copy, Debug)]
pub struct ColorCount {
  pub count: usize,
}

/// Runs `count` rounds of extraction. Each round adds every candidate whose
/// divergence is within `stop_distance` (relative) of that round's largest.
#[derive(Clone, Copy, Debug)]
pub struct StepCount {
  pub count:         usize,
  /// In `[0, 1]`. A round keeps candidates with divergence at least
  /// `max * (1 - stop_distance)`.
  pub stop_distance: f32,
}

impl Default for ColorCount {
  fn default() -> Self { ColorCount { count: DEFAULT_COUNT } }
}

impl Default for StepCount {
  fn default() -> Self { StepCount { count: DEFAULT_COUNT, stop_distance: DEFAULT_STOP_DISTANCE } }
}

impl ColorCount {
  pub const fn new(count: usize) -> Self { ColorCount { count } }
}

impl StepCount {
  pub const fn new(count: usize, stop_distance: f32) -> Self { StepCount { count, stop_distance } }
}

impl<C: ColorModel> Strategy<C> for ColorCount {
  fn extract(&self, keys: &[Key<C>], distance: &dyn DistanceOperator<C>) -> Vec<usize> {
    let mut intervals = Intervals::new(keys, distance);

    for round in 0..self.count {
      let Some((lo, _)) = intervals.best() else {
        trace!("color count: no candidates left after {round} rounds");
        break;
      };
      intervals.split(lo);
    }

    debug!("color count: {} of {} interior keys", intervals.splits.len(), self.count);
    intervals.into_splits()
  }
}

impl<C: ColorModel> Strategy<C> for StepCount {
  fn extract(&self, keys: &[Key<C>], distance: &dyn DistanceOperator<C>) -> Vec<usize> {
    let mut intervals = Intervals::new(keys, distance);
    let keep = 1.0 - self.stop_distance.clamp(0.0, 1.0);

    for round in 0..self.count {
      let Some((_, max)) = intervals.best() else {
        trace!("step count: no candidates left after {round} rounds");
        break;
      };

      let threshold = max * keep;
      let selected: Vec<usize> = intervals
        .candidates
        .iter()
        .filter(|(_, candidate)| candidate.divergence >= threshold)
        .map(|(&lo, _)| lo)
        .collect();

      trace!("step count: round {round} takes {} keys above {threshold}", selected.len());
      for lo in selected {
        intervals.split(lo);
      }
    }

    debug!("step count: {} interior keys after {} rounds", intervals.splits.len(), self.count);
    intervals.into_splits()
  }
}

/// The best split of one interval between two current boundaries.
#[derive(Clone, Copy, Debug)]
struct Candidate {
  hi:         usize,
  split:      usize,
  divergence: f32,
}

/// Boundary bookkeeping shared by the greedy strategies.
///
/// Only intervals that still have a candidate are tracked. An interval
/// without one is linear and stays that way, since boundaries are only ever
/// added inside intervals that have a candidate.
struct Intervals<'a, C: ColorModel> {
  keys:       &'a [Key<C>],
  distance:   &'a dyn DistanceOperator<C>,
  /// Keyed by the index of the interval's first key.
  candidates: BTreeMap<usize, Candidate>,
  splits:     BTreeSet<usize>,
}

impl<'a, C: ColorModel> Intervals<'a, C> {
  fn new(keys: &'a [Key<C>], distance: &'a dyn DistanceOperator<C>) -> Self {
    let mut intervals =
      Intervals { keys, distance, candidates: BTreeMap::new(), splits: BTreeSet::new() };
    if let Some(last) = keys.len().checked_sub(1) {
      intervals.evaluate(0, last);
    }
    intervals
  }

  fn evaluate(&mut self, lo: usize, hi: usize) {
    if let Some(farthest) = find_farthest(&self.keys[lo..=hi], self.distance) {
      self
        .candidates
        .insert(lo, Candidate { hi, split: lo + farthest.index, divergence: farthest.divergence });
    }
  }

  /// Start of the interval with the largest candidate, and its divergence.
  /// Exact ties go to the interval nearest the start of the gradient.
  fn best(&self) -> Option<(usize, f32)> {
    self.candidates.iter().fold(None, |best, (&lo, candidate)| match best {
      Some((_, max)) if max >= candidate.divergence => best,
      _ => Some((lo, candidate.divergence)),
    })
  }

  /// Adds the candidate of the interval starting at `lo` as a boundary.
  fn split(&mut self, lo: usize) {
    let Some(candidate) = self.candidates.remove(&lo) else { return };

    self.splits.insert(candidate.split);
    self.evaluate(lo, candidate.split);
    self.evaluate(candidate.split, candidate.hi);
  }

  fn into_splits(self) -> Vec<usize> { self.splits.into_iter().collect() }
}
