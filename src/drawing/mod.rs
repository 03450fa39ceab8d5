use {
  crate::{
    geometry::{BoundingBox, Circle, Offset, PixelSpace, Shape, Triangle},
    sdf::SDF
  },
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  image::{ImageBuffer, Pixel, Rgba, RgbaImage},
  std::ops::DerefMut
};

mod canvas;
pub use canvas::Canvas;

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

impl<C> Draw<ImageBuffer<Rgba<u8>, C>> for Circle
  where C: DerefMut<Target = [u8]>
{
  fn draw(&self, image: &mut ImageBuffer<Rgba<u8>, C>) {
    if self.radius == 0 {
      return;
    }
    fill_sdf(image, self.bounding_box(), self.color, |p| self.sdf(p));
  }
}

impl<C> Draw<ImageBuffer<Rgba<u8>, C>> for Triangle
  where C: DerefMut<Target = [u8]>
{
  fn draw(&self, image: &mut ImageBuffer<Rgba<u8>, C>) {
    fill_sdf(image, self.bounding_box(), self.color, |p| self.sdf(p));
  }
}

impl<C> Draw<ImageBuffer<Rgba<u8>, C>> for Shape
  where C: DerefMut<Target = [u8]>
{
  fn draw(&self, image: &mut ImageBuffer<Rgba<u8>, C>) {
    match self {
      Shape::Triangle(triangle) => triangle.draw(image),
      Shape::Circle(circle) => circle.draw(image),
    }
  }
}

/// Output settings of the rasterizer.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
  pub resolution: Size2D<u32, PixelSpace>,
  pub background: Rgba<u8>,
  /// Rows per band handed to a single rayon task.
  pub band_height: u32,
}

impl Default for RenderConfig {
  fn default() -> Self {
    Self {
      resolution: Size2D::new(800, 800),
      background: Rgba([0, 0, 0, 255]),
      band_height: 32
    }
  }
}

/// Draw every shape onto a fresh frame filled with the background color.
pub fn render(shapes: &[Shape], config: &RenderConfig) -> RgbaImage {
  let mut frame = RgbaImage::from_pixel(
    config.resolution.width,
    config.resolution.height,
    config.background
  );
  draw_parallel(shapes, &mut frame, config.band_height);
  frame
}

/// Draw shapes, parallel over horizontal bands of `band_height` rows.
/// Every band paints all shapes in sequence order, so the result equals a sequential draw.
pub fn draw_parallel(shapes: &[Shape], framebuffer: &mut RgbaImage, band_height: u32) {
  use rayon::prelude::*;

  let (width, height) = framebuffer.dimensions();
  if width == 0 || height == 0 {
    return;
  }
  let row_len = width as usize * 4;
  let band_height = band_height.max(1);

  framebuffer.par_chunks_mut(row_len * band_height as usize)
    .enumerate()
    .for_each(|(i, band)| {
      let rows = (band.len() / row_len) as u32;
      let offset = Offset::new(0, -((i as u32 * band_height) as i32));
      if let Some(mut band) = ImageBuffer::<Rgba<u8>, &mut [u8]>::from_raw(width, rows, band) {
        shapes.iter()
          .for_each(|shape| shape.translate(offset).draw(&mut band));
      }
    });
}

/// Coverage-weighted blend of `color` wherever `sdf` is negative, limited to `bounding_box`
/// (inclusive) grown by one pixel for antialiasing.
fn fill_sdf<C>(
  image: &mut ImageBuffer<Rgba<u8>, C>,
  bounding_box: Box2D<i32, PixelSpace>,
  color: Rgba<u8>,
  sdf: impl Fn(Point2D<f32, PixelSpace>) -> f32
) where C: DerefMut<Target = [u8]> {
  let (width, height) = image.dimensions();
  let screen = Box2D::from_size(Size2D::new(width as i32, height as i32));
  let bounding_box = match Box2D::new(
    bounding_box.min - V2::splat(1),
    bounding_box.max + V2::splat(2)
  ).intersection(&screen) {
    Some(x) => x,
    None => return // bounding box has no intersection with screen at all
  };

  itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
    .for_each(|(y, x)| {
      let sdf = sdf(Point2D::new(x as f32, y as f32));
      let pixel = image.get_pixel_mut(x as u32, y as u32);
      *pixel = sdf_overlay_aa(sdf, *pixel, color);
    });
}

fn sdf_overlay_aa(sdf: f32, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  // one pixel wide antialiasing band around the edge
  let coverage = (0.5 - sdf).clamp(0.0, 1.0);
  if coverage == 0.0 {
    return col1;
  }
  col2.0[3] = ((col2.0[3] as f32) * coverage).round() as u8;
  col1.blend(&col2);
  col1
}

/// Pack a frame into `0x00RRGGBB` words, the layout expected by window framebuffers.
pub fn to_rgb_u32(image: &RgbaImage) -> Vec<u32> {
  image.pixels()
    .map(|&Rgba([r, g, b, _])| ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    .collect()
}
