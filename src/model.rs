use std::fmt;

/// A fixed-arity vector of color channels.
///
/// The extraction engine only ever needs three things from a color: the
/// per-channel absolute difference to another color, linear interpolation,
/// and indexed access to the channels. Anything that provides those can be
/// simplified, regardless of how many channels it carries or what they mean.
pub trait ColorModel: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
  fn channels(&self) -> &[f32];

  /// Per-channel `|a - b|`.
  fn abs_diff(&self, other: &Self) -> Self;

  /// Per-channel linear interpolation, exact at `u = 0` and `u = 1`.
  fn lerp(&self, other: &Self, u: f32) -> Self;

  fn channel(&self, index: usize) -> f32 { self.channels()[index] }
  fn len(&self) -> usize { self.channels().len() }
}

impl<const N: usize> ColorModel for [f32; N] {
  fn channels(&self) -> &[f32] { self }

  fn abs_diff(&self, other: &Self) -> Self { std::array::from_fn(|i| (self[i] - other[i]).abs()) }

  fn lerp(&self, other: &Self, u: f32) -> Self {
    std::array::from_fn(|i| self[i] * (1.0 - u) + other[i] * u)
  }
}

pub type Gray = [f32; 1];
pub type GrayA = [f32; 2];
pub type Rgb = [f32; 3];
pub type Rgba = [f32; 4];
pub type Cmyka = [f32; 5];

/// Cyan, magenta, yellow and key. Kept apart from [`Rgba`] so the two
/// four-channel layouts can never be confused when rendering.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(transparent)]
pub struct Cmyk(pub [f32; 4]);

impl ColorModel for Cmyk {
  fn channels(&self) -> &[f32] { &self.0 }
  fn abs_diff(&self, other: &Self) -> Self { Cmyk(self.0.abs_diff(&other.0)) }
  fn lerp(&self, other: &Self, u: f32) -> Self { Cmyk(self.0.lerp(&other.0, u)) }
}
