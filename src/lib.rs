//! Sierpinski triangle fractal, with a circle inscribed at every level.
//!
//! The crate is split into [`generator`] which produces an ordered list of
//! [`Shape`](geometry::Shape)s, and [`drawing`] which rasterizes them onto an `image::RgbaImage`.
//! Renderers are connected to the generator through the [`observer`] channel: every call to
//! [`set_options`](generator::FractalGenerator::set_options) runs one complete generation pass,
//! then notifies every attached observer.
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   std::rc::Rc,
//! #   sierpinski::{
//! #     error::Result,
//! #     generator::FractalGenerator,
//! #     observer::Subject,
//! #     drawing::{Canvas, RenderConfig}
//! #   },
//! #   image::Rgb
//! # };
//! # fn main() -> Result<()> {
//! let mut generator = FractalGenerator::new();
//! // 800x800, black background
//! let canvas = Rc::new(Canvas::new(RenderConfig::default()));
//! // the generator only keeps a weak reference
//! generator.attach(&canvas);
//!
//! // depth 5, circles at 50% opacity, white
//! generator.set_options(5, 50.0, Rgb([255, 255, 255]))?;
//!
//! // `update` only marked the canvas as stale, redraw now
//! canvas.refresh(generator.shapes());
//! canvas.frame().save("out.png")?;
//! #   Ok(())
//! # }
//! ```
//!
//! Shapes can be drawn one by one as well:
//! ```
//! # use sierpinski::{generator::FractalGenerator, drawing::Draw};
//! # use image::{Rgb, RgbaImage};
//! let mut generator = FractalGenerator::new();
//! generator.set_options(1, 100.0, Rgb([255, 0, 0])).unwrap();
//! let mut image = RgbaImage::new(800, 800);
//! // later shapes paint over earlier ones
//! generator.shapes().iter().for_each(|shape| shape.draw(&mut image));
//! ```

pub mod error;
pub mod geometry;
pub mod sdf;
pub mod options;
pub mod observer;
pub mod generator;
pub mod drawing;
