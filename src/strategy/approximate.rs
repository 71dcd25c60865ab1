use std::collections::BTreeSet;

use log::debug;

use super::{DEFAULT_TOLERANCE, Strategy, find_farthest};
use crate::{distance::DistanceOperator, key::Key, model::ColorModel};

/// Keeps splitting at the farthest key until every sub-range is within
/// `tolerance` of a straight line.
///
/// Sub-ranges are processed from an explicit work stack rather than by
/// recursion, so a ramp that needs one split per key does not grow the call
/// stack.
#[derive(Clone, Copy, Debug)]
pub struct Approximate {
  /// Largest divergence a sub-range may have and still count as linear.
  pub tolerance: f32,
}

impl Default for Approximate {
  fn default() -> Self { Approximate { tolerance: DEFAULT_TOLERANCE } }
}

impl Approximate {
  pub const fn new(tolerance: f32) -> Self { Approximate { tolerance } }
}

impl<C: ColorModel> Strategy<C> for Approximate {
  fn extract(&self, keys: &[Key<C>], distance: &dyn DistanceOperator<C>) -> Vec<usize> {
    let Some(last) = keys.len().checked_sub(1) else { return vec![] };

    // Inclusive index ranges; neighbouring ranges share their split key.
    let mut pending = vec![(0, last)];
    let mut splits = BTreeSet::new();

    while let Some((lo, hi)) = pending.pop() {
      let Some(farthest) = find_farthest(&keys[lo..=hi], distance) else { continue };
      if farthest.divergence <= self.tolerance {
        continue;
      }

      let split = lo + farthest.index;

      // Right first, so the left half is popped next.
      pending.push((split, hi));
      pending.push((lo, split));

      splits.insert(split);
    }

    debug!("approximate: {} interior keys within tolerance {}", splits.len(), self.tolerance);
    splits.into_iter().collect()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::{
    distance::MaxDifference,
    model::{Gray, Rgb},
  };

  /// Straightforward recursive form, used to cross-check the stack based one.
  fn approximate_recurse<C: ColorModel>(
    keys: &[Key<C>],
    offset: usize,
    tolerance: f32,
    distance: &dyn DistanceOperator<C>,
    splits: &mut Vec<usize>,
  ) {
    let Some(farthest) = find_farthest(keys, distance) else { return };
    if farthest.divergence <= tolerance {
      return;
    }

    let split = farthest.index;
    approximate_recurse(&keys[..=split], offset, tolerance, distance, splits);
    splits.push(offset + split);
    approximate_recurse(&keys[split..], offset + split, tolerance, distance, splits);
  }

  fn recurse<C: ColorModel>(keys: &[Key<C>], tolerance: f32) -> Vec<usize> {
    let mut splits = vec![];
    approximate_recurse(keys, 0, tolerance, &MaxDifference, &mut splits);
    splits
  }

  fn gray(values: &[f32]) -> Vec<Key<Gray>> {
    let last = (values.len() - 1) as f32;
    values.iter().enumerate().map(|(i, &v)| Key::new([v], i as f32 / last)).collect()
  }

  #[test]
  fn empty_and_tiny() {
    let empty: Vec<Key<Gray>> = vec![];
    assert!(Approximate::default().extract(&empty, &MaxDifference).is_empty());
    assert!(Approximate::default().extract(&gray(&[0.4]), &MaxDifference).is_empty());
    assert!(Approximate::default().extract(&gray(&[0.0, 1.0]), &MaxDifference).is_empty());
  }

  #[test]
  fn linear_input_keeps_nothing() {
    let keys = gray(&[0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0]);
    for tolerance in [1e-6, 0.01, 0.5] {
      assert!(Approximate::new(tolerance).extract(&keys, &MaxDifference).is_empty());
    }
  }

  #[test]
  fn splits_on_corner() {
    // Up then flat.
    let keys = gray(&[0.0, 0.5, 1.0, 1.0, 1.0]);
    assert_eq!(Approximate::default().extract(&keys, &MaxDifference), vec![2]);
  }

  #[test]
  fn tolerance_gates_small_bumps() {
    let keys = gray(&[0.0, 0.0, 0.05, 0.0, 0.0]);
    assert_eq!(Approximate::new(0.1).extract(&keys, &MaxDifference), Vec::<usize>::new());
    assert_eq!(Approximate::new(0.03).extract(&keys, &MaxDifference), vec![2]);
    // The shoulders of the bump deviate by half as much.
    assert_eq!(Approximate::new(0.01).extract(&keys, &MaxDifference), vec![1, 2, 3]);
  }

  #[test]
  fn zero_tolerance_keeps_every_deviating_key() {
    let keys = gray(&[0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0]);
    assert_eq!(Approximate::new(0.0).extract(&keys, &MaxDifference), vec![1, 2, 3, 4, 5]);
    assert_eq!(Approximate::new(-1.0).extract(&keys, &MaxDifference), vec![1, 2, 3, 4, 5]);
  }

  #[test]
  fn zigzag_needs_one_split_per_key() {
    let values: Vec<f32> = (0..5_001).map(|i| (i % 2) as f32).collect();
    let keys = gray(&values);
    let splits = Approximate::new(0.0).extract(&keys, &MaxDifference);
    assert_eq!(splits.len(), keys.len() - 2);
    assert!(splits.windows(2).all(|w| w[0] < w[1]));
  }

  #[test]
  fn matches_recursive_form() {
    // Each sub-range is judged on its own, so visiting order cannot change
    // which keys survive.
    let keys: Vec<Key<Rgb>> = (0..40)
      .map(|i| {
        let t = i as f32 / 39.0;
        Key::new([t * t, (t * 7.0).sin() * 0.5 + 0.5, 1.0 - t * t * t], t)
      })
      .collect();

    for tolerance in [0.001, 0.01, 0.05, 0.2] {
      let stacked = Approximate::new(tolerance).extract(&keys, &MaxDifference);
      assert_eq!(stacked, recurse(&keys, tolerance), "tolerance {tolerance}");
    }
  }
}
