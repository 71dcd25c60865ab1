//! Turning extracted stops into something a renderer can draw.

use std::fmt::Write;

use color::{AlphaColor, DynamicColor, Srgb};
use kurbo::Line;
use peniko::{ColorStop, Gradient};

use crate::{
  key::Key,
  model::{Cmyk, Cmyka, Gray, GrayA, Rgb, Rgba},
};

mod texture;

pub use texture::Preview;

/// Display color of a channel layout.
pub trait ToSrgb {
  fn to_srgb(&self) -> AlphaColor<Srgb>;
}

impl ToSrgb for Gray {
  fn to_srgb(&self) -> AlphaColor<Srgb> { AlphaColor::new([self[0], self[0], self[0], 1.0]) }
}

impl ToSrgb for GrayA {
  fn to_srgb(&self) -> AlphaColor<Srgb> { AlphaColor::new([self[0], self[0], self[0], self[1]]) }
}

impl ToSrgb for Rgb {
  fn to_srgb(&self) -> AlphaColor<Srgb> { AlphaColor::new([self[0], self[1], self[2], 1.0]) }
}

impl ToSrgb for Rgba {
  fn to_srgb(&self) -> AlphaColor<Srgb> { AlphaColor::new(*self) }
}

impl ToSrgb for Cmyk {
  fn to_srgb(&self) -> AlphaColor<Srgb> { AlphaColor::new(from_cmyk(self)) }
}

impl ToSrgb for Cmyka {
  fn to_srgb(&self) -> AlphaColor<Srgb> {
    let [r, g, b, _] = from_cmyk(&Cmyk([self[0], self[1], self[2], self[3]]));
    AlphaColor::new([r, g, b, self[4]])
  }
}

/// Naive CMYK to RGBA, without any color profile.
pub fn from_cmyk(cmyk: &Cmyk) -> Rgba {
  let Cmyk([c, m, y, k]) = *cmyk;
  [(1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k), 1.0]
}

/// A CSS `linear-gradient(...)` with one stop per key. Positions are
/// expected in `[0, 1]` and printed as percentages.
pub fn css<C: ToSrgb>(keys: &[Key<C>], angle: f32) -> String {
  let mut css = format!("linear-gradient({angle}deg");
  for key in keys {
    let [r, g, b, a] = key.color.to_srgb().components;
    let _ = write!(
      css,
      ", rgba({}, {}, {}, {}%) {}%",
      r * 255.0,
      g * 255.0,
      b * 255.0,
      a * 100.0,
      key.position * 100.0
    );
  }
  css.push(')');
  css
}

/// A linear gradient brush running along `line`, with one stop per key.
pub fn brush<C: ToSrgb>(keys: &[Key<C>], line: Line) -> Gradient {
  let stops: Vec<ColorStop> = keys
    .iter()
    .map(|key| ColorStop {
      offset: key.position,
      color:  DynamicColor::from_alpha_color(key.color.to_srgb()),
    })
    .collect();

  Gradient::new_linear(line.p0, line.p1).with_stops(stops.as_slice())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn css_black_to_white() {
    let keys = [Key::new([0.0, 0.0, 0.0, 1.0], 0.0), Key::new([1.0, 1.0, 1.0, 1.0], 1.0)];
    assert_eq!(
      css(&keys, 90.0),
      "linear-gradient(90deg, rgba(0, 0, 0, 100%) 0%, rgba(255, 255, 255, 100%) 100%)"
    );
  }

  #[test]
  fn css_gray_and_alpha() {
    let keys = [Key::new([1.0, 0.5], 0.5)];
    assert_eq!(css(&keys, 45.0), "linear-gradient(45deg, rgba(255, 255, 255, 50%) 50%)");
  }

  #[test]
  fn css_empty() {
    assert_eq!(css::<Rgb>(&[], 0.0), "linear-gradient(0deg)");
  }

  #[test]
  fn cmyk() {
    assert_eq!(from_cmyk(&Cmyk([0.0, 0.0, 0.0, 0.0])), [1.0, 1.0, 1.0, 1.0]);
    assert_eq!(from_cmyk(&Cmyk([0.0, 0.0, 0.0, 1.0])), [0.0, 0.0, 0.0, 1.0]);
    assert_eq!(from_cmyk(&Cmyk([1.0, 0.0, 1.0, 0.0])), [0.0, 1.0, 0.0, 1.0]);

    let cmyka: Cmyka = [0.0, 1.0, 1.0, 0.0, 0.25];
    assert_eq!(cmyka.to_srgb().components, [1.0, 0.0, 0.0, 0.25]);
  }

  #[test]
  fn cmyk_keys_render_as_cmyk() {
    // Zero ink is white, even though the channels read as transparent black
    // in RGBA.
    let keys =
      [Key::new(Cmyk([0.0, 0.0, 0.0, 0.0]), 0.0), Key::new(Cmyk([0.0, 0.0, 0.0, 1.0]), 1.0)];
    assert_eq!(
      css(&keys, 90.0),
      "linear-gradient(90deg, rgba(255, 255, 255, 100%) 0%, rgba(0, 0, 0, 100%) 100%)"
    );
  }

  #[test]
  fn brush_has_a_stop_per_key() {
    let keys = [
      Key::new([0.0, 0.0, 0.0], 0.0),
      Key::new([1.0, 0.0, 0.0], 0.3),
      Key::new([1.0, 1.0, 1.0], 1.0),
    ];
    let gradient = brush(&keys, Line::new((0.0, 0.0), (100.0, 0.0)));
    let offsets: Vec<f32> = gradient.stops.iter().map(|stop| stop.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.3, 1.0]);
  }
}
