use crate::{key::Key, model::ColorModel};

/// Measures how far a color strays from where a straight gradient would put
/// it.
///
/// Every strategy is built on this single primitive, so swapping the
/// operator changes what "close enough" means without touching the
/// strategies themselves.
pub trait DistanceOperator<C: ColorModel>: Send + Sync {
  /// Non-negative divergence between two colors.
  fn divergence(&self, a: &C, b: &C) -> f32;

  /// Divergence of `candidate` from the color interpolated between the ends
  /// of `range` at `u`.
  ///
  /// `range` must hold at least one key.
  fn divergence_at(&self, range: &[Key<C>], candidate: &Key<C>, u: f32) -> f32 {
    let first = &range[0];
    let last = &range[range.len() - 1];
    let expected = first.color.lerp(&last.color, u);
    self.divergence(&expected, &candidate.color)
  }
}

/// Largest absolute difference over all channels.
#[derive(Clone, Copy, Debug, Default)]
pub struct MaxDifference;

impl<C: ColorModel> DistanceOperator<C> for MaxDifference {
  fn divergence(&self, a: &C, b: &C) -> f32 {
    a.abs_diff(b).channels().iter().copied().fold(0.0, f32::max)
  }
}

/// Straight-line distance in channel space.
#[derive(Clone, Copy, Debug, Default)]
pub struct Euclidean;

impl<C: ColorModel> DistanceOperator<C> for Euclidean {
  fn divergence(&self, a: &C, b: &C) -> f32 {
    a.abs_diff(b).channels().iter().map(|d| d * d).sum::<f32>().sqrt()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{Rgb, Rgba};

  #[test]
  fn max_difference_picks_largest_channel() {
    let a: Rgba = [0.0, 0.5, 1.0, 1.0];
    let b: Rgba = [0.25, 0.5, 0.0, 1.0];
    assert_eq!(MaxDifference.divergence(&a, &b), 1.0);
    assert_eq!(MaxDifference.divergence(&b, &a), 1.0);
    assert_eq!(MaxDifference.divergence(&a, &a), 0.0);
  }

  #[test]
  fn euclidean() {
    let a: Rgb = [0.0, 0.0, 0.0];
    let b: Rgb = [0.3, 0.4, 0.0];
    assert!((Euclidean.divergence(&a, &b) - 0.5).abs() < 1e-6);
  }

  #[test]
  fn divergence_at_interpolates_range_ends() {
    let range: Vec<Key<Rgb>> = vec![
      Key::new([0.0, 0.0, 0.0], 0.0),
      Key::new([1.0, 0.0, 0.0], 0.5),
      Key::new([1.0, 1.0, 1.0], 1.0),
    ];

    // Expected at 0.5 is mid gray, the key is pure red.
    let d = MaxDifference.divergence_at(&range, &range[1], 0.5);
    assert_eq!(d, 0.5);

    assert_eq!(MaxDifference.divergence_at(&range, &range[0], 0.0), 0.0);
    assert_eq!(MaxDifference.divergence_at(&range, &range[2], 1.0), 0.0);
  }
}
