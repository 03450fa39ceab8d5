use {
  std::cell::{Cell, Ref, RefCell},
  image::RgbaImage,
  tracing::debug,
  crate::{
    geometry::Shape,
    observer::Observer
  },
  super::{RenderConfig, render}
};

/// Renderer observing a fractal generator.
///
/// `update` only marks the frame stale, since it runs while the generator is still borrowed. The
/// owner then calls [`refresh`](Canvas::refresh) with the generator's shapes.
pub struct Canvas {
  config: RenderConfig,
  frame: RefCell<RgbaImage>,
  dirty: Cell<bool>,
}

impl Canvas {
  pub fn new(config: RenderConfig) -> Self {
    let frame = RgbaImage::from_pixel(
      config.resolution.width,
      config.resolution.height,
      config.background
    );
    Self {
      config,
      frame: RefCell::new(frame),
      dirty: Cell::new(false)
    }
  }

  pub fn config(&self) -> &RenderConfig {
    &self.config
  }

  /// Whether a notification arrived since the last refresh.
  pub fn is_dirty(&self) -> bool {
    self.dirty.get()
  }

  /// Redraw from `shapes` if the canvas was notified. Returns `true` if the frame changed.
  pub fn refresh(&self, shapes: &[Shape]) -> bool {
    if !self.dirty.replace(false) {
      return false;
    }
    let t0 = std::time::Instant::now();
    *self.frame.borrow_mut() = render(shapes, &self.config);
    debug!(shapes = shapes.len(), elapsed_ms = t0.elapsed().as_millis() as u64, "canvas redrawn");
    true
  }

  pub fn frame(&self) -> Ref<'_, RgbaImage> {
    self.frame.borrow()
  }
}

impl Observer for Canvas {
  fn update(&self) {
    self.dirty.set(true);
  }
}
