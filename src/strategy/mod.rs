mod approximate;
mod count;
mod find_farthest;

pub use approximate::Approximate;
pub use count::{ColorCount, StepCount};
pub use find_farthest::{Farthest, find_farthest};

use crate::{distance::DistanceOperator, key::Key, model::ColorModel};

/// Roughly one 8-bit quantization step.
pub const DEFAULT_TOLERANCE: f32 = 4.0 / 255.0;
pub const DEFAULT_COUNT: usize = 4;
pub const DEFAULT_STOP_DISTANCE: f32 = 0.2;

/// A policy deciding which interior keys of a sequence survive.
pub trait Strategy<C: ColorModel>: Send + Sync {
  /// Indices of the interior keys to keep, ascending. The two endpoints are
  /// never included; the builder always adds them.
  fn extract(&self, keys: &[Key<C>], distance: &dyn DistanceOperator<C>) -> Vec<usize>;
}
