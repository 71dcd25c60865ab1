use std::path::Path;

use image::{Rgba, RgbaImage};
use log::info;

use super::ToSrgb;
use crate::{Result, key::Key, model::ColorModel};

/// A horizontal strip painting the gradient described by a list of stops.
pub struct Preview {
  image: RgbaImage,
}

impl Preview {
  /// Stops must be sorted by position; the strip spans from the first to the
  /// last one.
  pub fn new<C: ColorModel + ToSrgb>(keys: &[Key<C>], width: u32, height: u32) -> Self {
    let mut image = RgbaImage::new(width, height);

    if let [first, .., last] = keys {
      let span = last.position - first.position;
      let denominator = width.saturating_sub(1).max(1) as f32;

      for x in 0..width {
        let position = first.position + span * (x as f32 / denominator);
        let pixel = to_rgba8(&color_at(keys, position));
        for y in 0..height {
          image.put_pixel(x, y, pixel);
        }
      }
    } else if let [only] = keys {
      let pixel = to_rgba8(&only.color);
      image.pixels_mut().for_each(|p| *p = pixel);
    }

    Preview { image }
  }

  pub fn image(&self) -> &RgbaImage { &self.image }

  pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
    self.image.save(path.as_ref())?;
    info!("wrote preview to {}", path.as_ref().display());
    Ok(())
  }
}

/// Color of the piecewise linear gradient through `keys` at `position`.
fn color_at<C: ColorModel>(keys: &[Key<C>], position: f32) -> C {
  let next = keys.partition_point(|key| key.position <= position);
  match (next.checked_sub(1).map(|i| &keys[i]), keys.get(next)) {
    (Some(lo), Some(hi)) => {
      let u = (position - lo.position) / (hi.position - lo.position);
      lo.color.lerp(&hi.color, u)
    }
    (Some(lo), None) => lo.color,
    (None, Some(hi)) => hi.color,
    (None, None) => unreachable!("keys is never empty here"),
  }
}

fn to_rgba8<C: ToSrgb>(color: &C) -> Rgba<u8> {
  let rgba = color.to_srgb().to_rgba8();
  Rgba([rgba.r, rgba.g, rgba.b, rgba.a])
}
