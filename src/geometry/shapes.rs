use {
  super::{BoundingBox, PixelSpace, Point, Offset, midpoint, side_lengths},
  euclid::{Box2D, Point2D, Vector2D as V2},
  image::Rgba
};

/// Triangle outline, drawn with a one pixel stroke.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
  pub vertices: [Point; 3],
  pub color: Rgba<u8>,
}

/// Filled disc. Opacity lives in the alpha channel of `color`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: Point,
  pub radius: u32,
  pub color: Rgba<u8>,
}

impl Triangle {
  pub fn new(vertices: [Point; 3], color: Rgba<u8>) -> Self {
    Self { vertices, color }
  }

  /// Vertices of the medial triangle: midpoints of `V0V1`, `V1V2`, `V2V0`.
  pub fn medial(&self) -> [Point; 3] {
    let [v0, v1, v2] = self.vertices;
    [midpoint(v0, v1), midpoint(v1, v2), midpoint(v2, v0)]
  }

  /// The three corner sub-triangles, in `V0`, `V1`, `V2` order.
  pub fn corners(&self) -> [[Point; 3]; 3] {
    let [v0, v1, v2] = self.vertices;
    let [m01, m12, m20] = self.medial();
    [
      [v0, m01, m20],
      [m01, v1, m12],
      [m20, m12, v2],
    ]
  }

  /// Side lengths `[a, b, c]`, each one opposite to the vertex with the same index.
  pub fn side_lengths(&self) -> [f64; 3] {
    side_lengths(self.vertices.map(|v| v.to_f64()))
  }

  pub fn translate(self, offset: Offset) -> Self {
    Self {
      vertices: self.vertices.map(|v| v + offset),
      ..self
    }
  }
}

impl BoundingBox<i32, PixelSpace> for Triangle {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    Box2D::from_points(self.vertices)
  }
}

impl Circle {
  pub fn new(center: Point, radius: u32, color: Rgba<u8>) -> Self {
    Self { center, radius, color }
  }

  pub fn translate(self, offset: Offset) -> Self {
    Self {
      center: self.center + offset,
      ..self
    }
  }

  /// Center as a floating point coordinate, for distance computations.
  pub fn center_f32(&self) -> Point2D<f32, PixelSpace> {
    self.center.to_f32()
  }
}

impl BoundingBox<i32, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    let r = V2::splat(self.radius as i32);
    Box2D::new(self.center - r, self.center + r)
  }
}
