use kurbo::{Affine, Point};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
  pub x: Range,
  pub y: Range,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
  pub min: f64,
  pub max: f64,
}

impl Bounds {
  pub const UNIT: Bounds = Bounds::new(Range::UNIT, Range::UNIT);

  pub const fn new(x: Range, y: Range) -> Self { Bounds { x, y } }

  /// Pixel space of an image, `[0, width] x [0, height]`.
  pub fn pixels(width: u32, height: u32) -> Self {
    Bounds::new(Range::new(0.0, f64::from(width)), Range::new(0.0, f64::from(height)))
  }

  pub const fn contains(&self, point: Point) -> bool {
    self.x.contains(&point.x) && self.y.contains(&point.y)
  }

  pub(crate) fn transform_to(&self, viewport: Bounds) -> Affine {
    let scale_x = viewport.x.size() / self.x.size();
    let scale_y = viewport.y.size() / self.y.size();
    let translate_x = viewport.x.min - self.x.min * scale_x;
    let translate_y = viewport.y.min - self.y.min * scale_y;

    Affine::new([scale_x, 0.0, 0.0, scale_y, translate_x, translate_y])
  }
}

impl Default for Range {
  fn default() -> Self { Range::UNIT }
}

impl Range {
  pub const UNIT: Range = Range::new(0.0, 1.0);

  pub const fn new(min: f64, max: f64) -> Self { Range { min, max } }
  pub const fn size(&self) -> f64 { self.max - self.min }

  pub const fn is_unit(&self) -> bool { self.min == 0.0 && self.max == 1.0 }

  pub const fn contains(&self, value: &f64) -> bool {
    (*value >= self.min && *value <= self.max) || (*value <= self.min && *value >= self.max)
  }

  /// Maps a position in `[0, 1]` onto this range.
  pub fn remap(&self, position: f32) -> f32 {
    position * self.size() as f32 + self.min as f32
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn remap() {
    let range = Range::new(0.25, 0.75);
    assert_eq!(range.remap(0.0), 0.25);
    assert_eq!(range.remap(0.5), 0.5);
    assert_eq!(range.remap(1.0), 0.75);

    let reversed = Range::new(100.0, 0.0);
    assert_eq!(reversed.remap(0.25), 75.0);
  }

  #[test]
  fn unit() {
    assert!(Range::default().is_unit());
    assert!(!Range::new(0.0, 100.0).is_unit());
    assert_eq!(Range::UNIT.remap(0.3), 0.3);
  }

  #[test]
  fn unit_to_pixels() {
    let transform = Bounds::UNIT.transform_to(Bounds::pixels(200, 50));
    assert_eq!(transform * Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    assert_eq!(transform * Point::new(0.5, 0.5), Point::new(100.0, 25.0));
    assert_eq!(transform * Point::new(1.0, 1.0), Point::new(200.0, 50.0));
  }

  #[test]
  fn contains() {
    assert!(Bounds::UNIT.contains(Point::new(0.5, 1.0)));
    assert!(!Bounds::UNIT.contains(Point::new(1.5, 0.5)));
  }
}
