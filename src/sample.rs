//! Reading colors off an image along a straight line.

use std::path::Path;

use image::{DynamicImage, GenericImageView, Pixel, Rgba32FImage};
use kurbo::{Line, ParamCurve, Point};
use log::{trace, warn};

use crate::{
  Result,
  bounds::Bounds,
  key::{Key, Linear},
  model::{ColorModel, Gray, GrayA, Rgb, Rgba},
};

/// A channel layout that can be read from a normalized RGBA pixel.
pub trait FromPixel: ColorModel {
  fn from_pixel(pixel: image::Rgba<f32>) -> Self;
}

impl FromPixel for Gray {
  fn from_pixel(pixel: image::Rgba<f32>) -> Self { [pixel.to_luma()[0]] }
}

impl FromPixel for GrayA {
  fn from_pixel(pixel: image::Rgba<f32>) -> Self {
    let luma = pixel.to_luma_alpha();
    [luma[0], luma[1]]
  }
}

impl FromPixel for Rgb {
  fn from_pixel(pixel: image::Rgba<f32>) -> Self { [pixel[0], pixel[1], pixel[2]] }
}

impl FromPixel for Rgba {
  fn from_pixel(pixel: image::Rgba<f32>) -> Self { pixel.0 }
}

pub fn load(path: impl AsRef<Path>) -> Result<DynamicImage> { Ok(image::open(path)?) }

/// Nearest pixel index for a unit coordinate, clamped into the image.
pub fn unit_to_pixel(u: f64, size: u32) -> u32 { clamp_pixel(f64::from(size) * u, size) }

fn clamp_pixel(v: f64, size: u32) -> u32 { (v.round() as i64).clamp(0, i64::from(size) - 1) as u32 }

/// Converts a whole image to normalized float channels once, for sampling.
struct Sampler {
  pixels:    Rgba32FImage,
  transform: kurbo::Affine,
}

impl Sampler {
  fn new(image: &DynamicImage) -> Option<Self> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
      warn!("cannot sample an empty {width}x{height} image");
      return None;
    }

    Some(Sampler {
      pixels:    image.to_rgba32f(),
      transform: Bounds::UNIT.transform_to(Bounds::pixels(width, height)),
    })
  }

  fn pixel_of(&self, point: Point) -> (i64, i64) {
    if !Bounds::UNIT.contains(point) {
      trace!("clamping {point:?} into the image");
    }

    let (width, height) = self.pixels.dimensions();
    let scaled = self.transform * point;
    (i64::from(clamp_pixel(scaled.x, width)), i64::from(clamp_pixel(scaled.y, height)))
  }

  fn color<C: FromPixel>(&self, x: i64, y: i64) -> C {
    C::from_pixel(*self.pixels.get_pixel(x as u32, y as u32))
  }
}

/// Every pixel crossed by `line`, which is given in unit coordinates
/// (`(0, 0)` is the top left corner, `(1, 1)` the bottom right).
///
/// The line is walked one pixel at a time along its longer axis; positions
/// run from 0 at the start pixel to 1 at the end pixel. Lines shorter than
/// three pixels produce just their two end pixels.
pub fn sample_line<C: FromPixel>(image: &DynamicImage, line: Line) -> Linear<C> {
  let Some(sampler) = Sampler::new(image) else { return vec![] };

  let (x1, y1) = sampler.pixel_of(line.p0);
  let (x2, y2) = sampler.pixel_of(line.p1);
  let (dx, dy) = (x2 - x1, y2 - y1);
  let extent = dx.abs().max(dy.abs());

  if extent < 3 {
    return vec![Key::new(sampler.color(x1, y1), 0.0), Key::new(sampler.color(x2, y2), 1.0)];
  }

  let keys: Linear<C> = (0..=extent)
    .map(|step| {
      let t = step as f64 / extent as f64;
      let (x, y) = if dx.abs() >= dy.abs() {
        (x1 + step * dx.signum(), y1 + (dy as f64 * t) as i64)
      } else {
        (x1 + (dx as f64 * t) as i64, y1 + step * dy.signum())
      };
      Key::new(sampler.color(x, y), t as f32)
    })
    .collect();

  trace!("sampled {} pixels from ({x1}, {y1}) to ({x2}, {y2})", keys.len());
  keys
}

/// `count` evenly spaced samples between the ends of `line`, in unit
/// coordinates.
pub fn sample_count<C: FromPixel>(image: &DynamicImage, line: Line, count: usize) -> Linear<C> {
  let Some(sampler) = Sampler::new(image) else { return vec![] };

  let last = count.saturating_sub(1).max(1) as f64;
  (0..count)
    .map(|i| {
      let t = i as f64 / last;
      let (x, y) = sampler.pixel_of(line.eval(t));
      Key::new(sampler.color(x, y), t as f32)
    })
    .collect()
}
