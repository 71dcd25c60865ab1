use crate::{
  distance::DistanceOperator,
  key::{Key, relative_position},
  model::ColorModel,
};

/// The key of a range that deviates most from the straight line between the
/// range's ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Farthest {
  /// Index into the searched range, never its first or last key.
  pub index:      usize,
  pub divergence: f32,
}

/// Finds the key of `range` farthest from the interpolation between its first
/// and last key.
///
/// Returns `None` when the range has no splittable interior: fewer than two
/// keys, or a maximum that lands on one of the ends (which is always the case
/// for a perfectly linear range). Ties go to the first key in order.
pub fn find_farthest<C: ColorModel>(
  range: &[Key<C>],
  distance: &dyn DistanceOperator<C>,
) -> Option<Farthest> {
  let [first, .., last] = range else { return None };

  let mut farthest = Farthest { index: 0, divergence: f32::NEG_INFINITY };
  for (index, key) in range.iter().enumerate() {
    let divergence = distance.divergence_at(range, key, relative_position(first, last, key));
    if divergence > farthest.divergence {
      farthest = Farthest { index, divergence };
    }
  }

  if farthest.index == 0 || farthest.index == range.len() - 1 { None } else { Some(farthest) }
}
