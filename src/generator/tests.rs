use {
  super::*,
  crate::error::ErrorKind,
  std::cell::Cell,
};

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

fn count(shapes: &[Shape]) -> (usize, usize) {
  let triangles = shapes.iter().filter(|s| s.as_triangle().is_some()).count();
  (triangles, shapes.len() - triangles)
}

#[derive(Default)]
struct Redraws(Cell<u32>);

impl Observer for Redraws {
  fn update(&self) {
    self.0.set(self.0.get() + 1);
  }
}

#[test] fn depth_one() -> Result<()> {
  let mut generator = FractalGenerator::new();
  generator.set_options(1, 50.0, WHITE)?;
  let shapes = generator.shapes();
  assert_eq!(shapes.len(), 2);
  assert_eq!(
    shapes[0].as_triangle().map(|t| t.vertices),
    Some([Point::new(450, 50), Point::new(250, 450), Point::new(650, 450)])
  );
  assert!(shapes[1].as_circle().is_some());
  Ok(())
}

#[test] fn shape_counts() -> Result<()> {
  let mut generator = FractalGenerator::new();
  for (depth, expected) in [(1, 1), (2, 4), (3, 13)] {
    generator.set_options(depth, 50.0, WHITE)?;
    assert_eq!(count(generator.shapes()), (expected, expected), "depth {depth}");
    assert_eq!(generator.shapes().len(), shape_count(depth));
  }
  Ok(())
}

#[test] fn traversal_order() -> Result<()> {
  let mut generator = FractalGenerator::new();
  generator.set_options(2, 50.0, WHITE)?;
  let shapes = generator.shapes();
  let base = Triangle::new(FractalGenerator::BASE, Rgba([255; 4]));

  // outer, then (corner triangle, its incircle) x3, then the medial incircle
  assert_eq!(shapes[0].as_triangle().map(|t| t.vertices), Some(base.vertices));
  for (i, corner) in base.corners().into_iter().enumerate() {
    assert_eq!(shapes[1 + 2 * i].as_triangle().map(|t| t.vertices), Some(corner));
    assert_eq!(
      shapes[2 + 2 * i].as_circle().copied(),
      Some(incircle(corner, shapes[2 + 2 * i].color()))
    );
  }
  let last = shapes.last().and_then(Shape::as_circle).copied();
  assert_eq!(last, Some(incircle(base.medial(), generator.options().circle_color())));
  Ok(())
}

#[test] fn medial_midpoints() {
  let base = Triangle::new(FractalGenerator::BASE, Rgba([255; 4]));
  assert_eq!(base.medial(), [Point::new(350, 250), Point::new(450, 450), Point::new(550, 250)]);
}

#[test] fn colors_follow_options() -> Result<()> {
  let mut generator = FractalGenerator::new();
  generator.set_options(2, 100.0, Rgb([200, 10, 20]))?;
  generator.shapes().iter().for_each(|shape| match shape {
    Shape::Triangle(t) => assert_eq!(t.color, Rgba([200, 10, 20, 255])),
    Shape::Circle(c) => assert_eq!(c.color, Rgba([200, 10, 20, 255])),
  });
  generator.set_options(2, 0.0, Rgb([200, 10, 20]))?;
  assert!(generator.shapes().iter()
    .filter_map(Shape::as_circle)
    .all(|c| c.color.0[3] == 0));
  Ok(())
}

#[test] fn no_accumulation() -> Result<()> {
  let mut generator = FractalGenerator::new();
  generator.set_options(4, 20.0, Rgb([1, 2, 3]))?;
  generator.set_options(2, 80.0, Rgb([4, 5, 6]))?;
  assert_eq!(generator.shapes().len(), 8);
  assert_eq!(generator.options(), FractalOptions::new(2, 80.0, Rgb([4, 5, 6]))?);
  assert!(generator.shapes().iter().all(|s| s.color().0[..3] == [4, 5, 6]));
  assert_eq!(generator.generation(), &Generation::new(FractalGenerator::BASE, generator.options()));
  Ok(())
}

#[test] fn empty_until_first_options() {
  let generator = FractalGenerator::default();
  assert!(generator.shapes().is_empty());
  assert_eq!(generator.options(), FractalOptions::default());
}

#[test] fn invalid_depth_keeps_state() -> Result<()> {
  let redraws = Rc::new(Redraws::default());
  let mut generator = FractalGenerator::new();
  generator.attach(&redraws);
  generator.set_options(2, 50.0, WHITE)?;
  let before = generator.generation().clone();

  let err = generator.set_options(0, 50.0, WHITE).unwrap_err();
  assert!(matches!(err.kind(), ErrorKind::InvalidDepth(0)));
  assert_eq!(generator.generation(), &before);
  assert_eq!(redraws.0.get(), 1);
  Ok(())
}

#[test] fn observers_see_finished_pass() -> Result<()> {
  let redraws = Rc::new(Redraws::default());
  let other = Rc::new(Redraws::default());
  let mut generator = FractalGenerator::new();
  generator.attach(&redraws);
  generator.attach(&other);

  generator.set_options(3, 50.0, WHITE)?;
  assert_eq!((redraws.0.get(), other.0.get()), (1, 1));

  generator.detach(&other);
  generator.set_options(1, 50.0, WHITE)?;
  assert_eq!((redraws.0.get(), other.0.get()), (2, 1));

  // detaching something never attached
  generator.detach(&Rc::new(Redraws::default()));
  generator.notify_all_observers();
  assert_eq!(redraws.0.get(), 3);
  Ok(())
}

#[test] fn custom_base() -> Result<()> {
  let base = [Point::new(0, 0), Point::new(30, 0), Point::new(0, 40)];
  let mut generator = FractalGenerator::new().with_base(base);
  generator.set_options(1, 50.0, WHITE)?;
  assert_eq!(generator.base(), base);
  let circle = generator.shapes()[1].as_circle().copied();
  assert_eq!(circle.map(|c| (c.center, c.radius)), Some((Point::new(10, 10), 10)));
  Ok(())
}

#[test] fn incircle_right_triangle() {
  let circle = incircle(
    [Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)],
    Rgba([0; 4])
  );
  assert_eq!((circle.center, circle.radius), (Point::new(1, 1), 1));
}

#[test] fn incircle_equilateral() {
  let (center, r) = incircle_exact([
    Point2D::new(0.0, 0.0),
    Point2D::new(10.0, 0.0),
    Point2D::new(5.0, 8.66),
  ]);
  assert!((center.x - 5.0).abs() < 1e-3, "{center:?}");
  assert!((center.y - 2.89).abs() < 1e-2, "{center:?}");
  assert!((r - 2.89).abs() < 1e-2, "{r}");
}

#[test] fn incircle_degenerate() {
  // collinear
  let circle = incircle(
    [Point::new(0, 0), Point::new(4, 0), Point::new(10, 0)],
    Rgba([0; 4])
  );
  assert_eq!((circle.center, circle.radius), (Point::new(4, 0), 0));

  // a single point
  let circle = incircle([Point::new(7, 3); 3], Rgba([0; 4]));
  assert_eq!((circle.center, circle.radius), (Point::new(7, 3), 0));
}

#[test] fn incircle_radius_clamped() {
  use rand::prelude::*;

  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let mut checked = 0;
  while checked < 10_000 {
    let vertices = [(); 3].map(|_| Point::new(rng.gen_range(-500..500), rng.gen_range(-500..500)));
    let triangle = Triangle::new(vertices, Rgba([0; 4]));
    let [a, b, c] = triangle.side_lengths();
    let cross = (vertices[1] - vertices[0]).cross(vertices[2] - vertices[0]);
    if cross == 0 {
      continue;
    }
    let (_, r) = incircle_exact(vertices.map(|v| v.to_f64()));
    assert!(r <= a.min(b).min(c) / 2.0, "{vertices:?}");
    assert!(incircle(vertices, Rgba([0; 4])).radius as f64 <= r);
    checked += 1;
  }
}

#[test] fn huge_coordinates() -> Result<()> {
  let base = [
    Point::new(i32::MAX - 10, 0),
    Point::new(i32::MAX - 2, 100),
    Point::new(i32::MAX, 50),
  ];
  let mut generator = FractalGenerator::new().with_base(base);
  generator.set_options(2, 50.0, WHITE)?;
  assert_eq!(generator.shapes().len(), shape_count(2));
  let corner = generator.shapes()[1].as_triangle().map(|t| t.vertices);
  assert_eq!(corner, Some([base[0], Point::new(i32::MAX - 6, 50), Point::new(i32::MAX - 5, 25)]));
  Ok(())
}

#[test] fn side_lengths_feed_incircle() {
  let triangle = Triangle::new([Point::new(0, 0), Point::new(30, 0), Point::new(0, 40)], Rgba([0; 4]));
  assert_eq!(triangle.side_lengths(), [50.0, 40.0, 30.0]);
  let (_, r) = incircle_exact(triangle.vertices.map(|v| v.to_f64()));
  let [a, b, c] = triangle.side_lengths();
  assert_eq!(r, 2.0 * 600.0 / (a + b + c));
}

#[test] fn shape_count_overflow() {
  assert_eq!(shape_count(1), 2);
  assert_eq!(shape_count(8), 6560);
  assert_eq!(shape_count(200), 0);
}
