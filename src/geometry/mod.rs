//! .
//!
//! The origin of coordinate system is in top-left corner, `y` grows downwards. All shapes live in
//! pixel space with integer coordinates, the way they are handed to the rasterizer.

use {
  euclid::{Point2D, Box2D, Vector2D as V2},
  image::Rgba
};

pub mod shapes;
pub use shapes::*;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;

/// Integer screen coordinate.
pub type Point = Point2D<i32, PixelSpace>;
pub type Offset = V2<i32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A drawable element of the fractal.
///
/// The set of variants is closed, so a plain enum replaces `Box<dyn Draw<_>>` here: the generator
/// owns a `Vec<Shape>` and the renderer dispatches with a single match.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Shape {
  Triangle(Triangle),
  Circle(Circle),
}

impl Shape {
  pub fn color(&self) -> Rgba<u8> {
    match self {
      Shape::Triangle(triangle) => triangle.color,
      Shape::Circle(circle) => circle.color,
    }
  }

  /// Returns a copy moved by `offset`.
  pub fn translate(self, offset: Offset) -> Self {
    match self {
      Shape::Triangle(triangle) => Shape::Triangle(triangle.translate(offset)),
      Shape::Circle(circle) => Shape::Circle(circle.translate(offset)),
    }
  }

  pub fn as_triangle(&self) -> Option<&Triangle> {
    match self {
      Shape::Triangle(triangle) => Some(triangle),
      _ => None
    }
  }

  pub fn as_circle(&self) -> Option<&Circle> {
    match self {
      Shape::Circle(circle) => Some(circle),
      _ => None
    }
  }
}

impl From<Triangle> for Shape {
  fn from(triangle: Triangle) -> Self { Shape::Triangle(triangle) } }
impl From<Circle> for Shape {
  fn from(circle: Circle) -> Self { Shape::Circle(circle) } }

impl BoundingBox<i32, PixelSpace> for Shape {
  fn bounding_box(&self) -> Box2D<i32, PixelSpace> {
    match self {
      Shape::Triangle(triangle) => triangle.bounding_box(),
      Shape::Circle(circle) => circle.bounding_box(),
    }
  }
}

/// Midpoint of a segment, rounded towards zero like integer division.
pub fn midpoint(a: Point, b: Point) -> Point {
  // widened, the sum of two coordinates may not fit in i32
  let half = |a: i32, b: i32| ((a as i64 + b as i64) / 2) as i32;
  Point::new(half(a.x, b.x), half(a.y, b.y))
}

/// Side lengths `[a, b, c]`, each one opposite to the vertex with the same index.
pub fn side_lengths(vertices: [Point2D<f64, PixelSpace>; 3]) -> [f64; 3] {
  let [p1, p2, p3] = vertices;
  [p2.distance_to(p3), p3.distance_to(p1), p1.distance_to(p2)]
}
