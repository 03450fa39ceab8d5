use {
  euclid::Point2D,
  crate::geometry::{PixelSpace, Point, Shape, Triangle, Circle}
};

/// Width of a triangle outline, in pixels.
pub const STROKE_WIDTH: f32 = 1.0;

/// Signed distance function, in pixels. Negative inside.
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    pixel.distance_to(self.center_f32()) - self.radius as f32
  }
}

/// Distance to the outline only; the interior is outside of the stroke.
impl SDF<f32> for Triangle {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    let [v0, v1, v2] = self.vertices;
    [(v0, v1), (v1, v2), (v2, v0)].iter()
      .map(|&(a, b)| segment(pixel, a, b))
      .fold(f32::MAX, f32::min)
      - STROKE_WIDTH / 2.0
  }
}

impl SDF<f32> for Shape {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    match self {
      Shape::Triangle(triangle) => triangle.sdf(pixel),
      Shape::Circle(circle) => circle.sdf(pixel),
    }
  }
}

/// Unsigned distance from `pixel` to the segment `ab`.
pub fn segment(pixel: Point2D<f32, PixelSpace>, a: Point, b: Point) -> f32 {
  let (a, b) = (a.to_f32(), b.to_f32());
  let ab = b - a;
  let len2 = ab.square_length();
  if len2 == 0.0 {
    return pixel.distance_to(a);
  }
  // relative to `a`, so the result doesn't depend on where the segment sits on screen
  let pa = pixel - a;
  let t = (pa.dot(ab) / len2).clamp(0.0, 1.0);
  (pa - ab * t).length()
}
