//! Sierpinski subdivision with inscribed circles.
//!
//! Each call on a triangle `V0 V1 V2` with depth `D` appends, in order:
//! - the outline of `V0 V1 V2`;
//! - if `D == 1`, its incircle;
//! - otherwise the output of the three corner sub-triangles at depth `D - 1`
//!   (`V0`, `V1`, `V2` corner in this order), followed by the incircle of the medial triangle.
//!
//! Later shapes are painted over earlier ones, so this order is also the z-order.

use {
  std::rc::Rc,
  euclid::Point2D,
  image::{Rgb, Rgba},
  tracing::debug,
  crate::{
    error::Result,
    geometry::{Circle, PixelSpace, Point, Shape, Triangle, side_lengths},
    observer::{Observer, ObserverRegistry, Subject},
    options::FractalOptions
  }
};

#[cfg(test)] mod tests;

/// Result of one complete generation pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Generation {
  pub options: FractalOptions,
  pub shapes: Vec<Shape>,
}

impl Generation {
  /// Runs the subdivision on `base` and collects every shape.
  pub fn new(base: [Point; 3], options: FractalOptions) -> Self {
    let mut shapes = Vec::with_capacity(shape_count(options.depth));
    subdivide(base, options.depth, &options, &mut shapes);
    Self { options, shapes }
  }
}

/// The subject: owns the current options, the generated shapes and the registered observers.
#[derive(Debug)]
pub struct FractalGenerator {
  base: [Point; 3],
  generation: Generation,
  observers: ObserverRegistry,
}

impl Default for FractalGenerator {
  fn default() -> Self {
    Self::new()
  }
}

impl FractalGenerator {
  /// Outer triangle, sized for an 800x800 canvas.
  pub const BASE: [Point; 3] = [
    Point2D::new(450, 50),
    Point2D::new(250, 450),
    Point2D::new(650, 450),
  ];

  /// No shapes are generated until the first [`set_options`](Self::set_options).
  pub fn new() -> Self {
    Self {
      base: Self::BASE,
      generation: Generation::default(),
      observers: ObserverRegistry::new()
    }
  }

  /// Use a different outer triangle.
  pub fn with_base(mut self, base: [Point; 3]) -> Self {
    self.base = base;
    self
  }

  pub fn base(&self) -> [Point; 3] {
    self.base
  }

  /// Replaces the options, regenerates every shape, then notifies all observers.
  ///
  /// On error nothing is changed and nobody is notified.
  pub fn set_options(&mut self, depth: u32, opacity: f32, color: Rgb<u8>) -> Result<()> {
    self.apply(FractalOptions::new(depth, opacity, color)?)
  }

  /// Same as [`set_options`](Self::set_options), taking a prepared value.
  pub fn apply(&mut self, options: FractalOptions) -> Result<()> {
    options.validate()?;
    self.generation = Generation::new(self.base, options);
    debug!(
      depth = options.depth,
      opacity = options.opacity,
      shapes = self.generation.shapes.len(),
      "fractal regenerated"
    );
    self.notify_all_observers();
    Ok(())
  }

  /// Shapes of the last generation pass, in drawing order.
  pub fn shapes(&self) -> &[Shape] {
    &self.generation.shapes
  }

  pub fn options(&self) -> FractalOptions {
    self.generation.options
  }

  pub fn generation(&self) -> &Generation {
    &self.generation
  }
}

impl Subject for FractalGenerator {
  fn attach<O: Observer + 'static>(&mut self, observer: &Rc<O>) {
    self.observers.attach(observer);
  }

  fn detach<O: Observer + ?Sized>(&mut self, observer: &Rc<O>) {
    self.observers.detach(observer);
  }

  fn notify_all_observers(&self) {
    self.observers.notify_all();
  }
}

/// Number of shapes produced for `depth`: `(3^depth - 1) / 2` triangles and as many circles.
pub fn shape_count(depth: u32) -> usize {
  3usize.checked_pow(depth)
    .map(|n| n - 1)
    .unwrap_or(0)
}

fn subdivide(vertices: [Point; 3], depth: u32, options: &FractalOptions, out: &mut Vec<Shape>) {
  let triangle = Triangle::new(vertices, options.triangle_color());
  out.push(triangle.into());

  if depth <= 1 {
    out.push(incircle(vertices, options.circle_color()).into());
    return;
  }

  triangle.corners()
    .into_iter()
    .for_each(|corner| subdivide(corner, depth - 1, options, out));
  out.push(incircle(triangle.medial(), options.circle_color()).into());
}

/// Inscribed circle of a triangle, snapped to the pixel grid.
///
/// The center is truncated towards zero and the radius floored. The radius never exceeds half of
/// the shortest side; a degenerate triangle gets a zero radius.
pub fn incircle(vertices: [Point; 3], color: Rgba<u8>) -> Circle {
  let (center, r) = incircle_exact(vertices.map(|v| v.to_f64()));
  Circle::new(
    Point::new(center.x as i32, center.y as i32),
    r.floor() as u32,
    color
  )
}

/// Incenter and inradius, in floating point.
///
/// The incenter is the average of the vertices weighted by the length of the opposite side; the
/// radius comes from Heron's formula, `r = 2 * area / perimeter`.
pub fn incircle_exact(vertices: [Point2D<f64, PixelSpace>; 3]) -> (Point2D<f64, PixelSpace>, f64) {
  let [p1, p2, p3] = vertices;
  let [a, b, c] = side_lengths(vertices);
  let perimeter = a + b + c;
  if perimeter == 0.0 {
    return (p1, 0.0);
  }

  let center = Point2D::new(
    (a * p1.x + b * p2.x + c * p3.x) / perimeter,
    (a * p1.y + b * p2.y + c * p3.y) / perimeter
  );

  let s = perimeter / 2.0;
  // rounding can push the product of a flat triangle slightly below zero
  let area = (s * (s - a) * (s - b) * (s - c)).max(0.0).sqrt();
  let r = (2.0 * area / perimeter)
    .min(a.min(b).min(c) / 2.0);
  (center, r)
}
