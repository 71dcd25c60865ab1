use log::trace;

use crate::{
  bounds::Range,
  key::{Key, Linear},
  model::ColorModel,
};

/// Assembles the surviving keys of a sequence into the output gradient.
#[derive(Clone, Copy, Debug, Default)]
pub struct Builder {
  /// Positions are mapped from `[0, 1]` onto this range.
  pub out_range: Range,
}

impl Builder {
  pub const fn new(out_range: Range) -> Self { Builder { out_range } }

  /// Both endpoints of `keys` plus the interior keys at `splits`, which must be
  /// ascending.
  pub fn build<C: ColorModel>(&self, keys: &[Key<C>], splits: &[usize]) -> Linear<C> {
    let [first, .., last] = keys else {
      return keys.iter().map(|key| self.remap(key)).collect();
    };

    let mut gradient = Vec::with_capacity(splits.len() + 2);
    gradient.push(self.remap(first));
    gradient.extend(splits.iter().map(|&index| self.remap(&keys[index])));
    gradient.push(self.remap(last));

    trace!("built {} stops from {} keys", gradient.len(), keys.len());
    gradient
  }

  fn remap<C: ColorModel>(&self, key: &Key<C>) -> Key<C> {
    if self.out_range.is_unit() {
      *key
    } else {
      Key::new(key.color, self.out_range.remap(key.position))
    }
  }

  /// Spreads `colors` evenly over `[0, 1]`.
  pub fn positions_from_colors<C: ColorModel>(colors: &[C]) -> Linear<C> {
    let last = colors.len().saturating_sub(1).max(1) as f32;
    colors.iter().enumerate().map(|(i, &color)| Key::new(color, i as f32 / last)).collect()
  }
}
