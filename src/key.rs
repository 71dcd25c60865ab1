use crate::model::{Cmyk, Cmyka, ColorModel, Gray, GrayA, Rgb, Rgba};

/// A single color sample at a position along a gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Key<C> {
  pub color:    C,
  pub position: f32,
}

impl<C: ColorModel> Key<C> {
  pub const fn new(color: C, position: f32) -> Self { Key { color, position } }
}

/// An ordered sequence of keys with strictly increasing positions.
pub type Linear<C> = Vec<Key<C>>;

pub type LinearGray = Linear<Gray>;
pub type LinearGrayA = Linear<GrayA>;
pub type LinearRgb = Linear<Rgb>;
pub type LinearRgba = Linear<Rgba>;
pub type LinearCmyk = Linear<Cmyk>;
pub type LinearCmyka = Linear<Cmyka>;

/// Where `key` sits between `first` and `last`, as a fraction of the range.
pub(crate) fn relative_position<C>(first: &Key<C>, last: &Key<C>, key: &Key<C>) -> f32 {
  (key.position - first.position) / (last.position - first.position)
}
