// Interactive front end.
// Up/Down: recursion depth, Left/Right: circle opacity, C: next preset color,
// R/G/B: raise a color channel (with Shift: lower it),
// Enter or Space: draw with the chosen options, S: save the frame, Esc: quit.

use {
  std::rc::Rc,
  anyhow::{Context, Result},
  image::Rgb,
  minifb::{Key, KeyRepeat, Window, WindowOptions},
  tracing::{info, warn},
  tracing_subscriber::EnvFilter,
  sierpinski::{
    drawing::{self, Canvas, RenderConfig},
    error::{Error, ErrorKind},
    generator::FractalGenerator,
    observer::Subject,
    options::FractalOptions
  }
};

const PALETTE: [Rgb<u8>; 7] = [
  Rgb([255, 255, 255]),
  Rgb([255, 64, 64]),
  Rgb([255, 160, 32]),
  Rgb([255, 230, 64]),
  Rgb([64, 220, 96]),
  Rgb([64, 200, 255]),
  Rgb([200, 96, 255]),
];
const OPACITY_STEP: f32 = 5.0;
const CHANNEL_STEP: i16 = 16;
const EXPORT_PATH: &str = "sierpinski.png";

/// Options being edited, not yet submitted to the generator.
#[derive(Default)]
struct Controls {
  pending: FractalOptions,
  palette_index: usize,
}

impl Controls {
  /// Applies key presses of this frame. Returns `true` if anything changed.
  fn handle(&mut self, window: &Window) -> bool {
    let depth = FractalOptions::DEPTH_RANGE;
    let opacity = FractalOptions::OPACITY_RANGE;
    let before = self.pending;

    if window.is_key_pressed(Key::Up, KeyRepeat::Yes) {
      self.pending.depth = (self.pending.depth + 1).min(*depth.end());
    }
    if window.is_key_pressed(Key::Down, KeyRepeat::Yes) {
      self.pending.depth = self.pending.depth.saturating_sub(1).max(*depth.start());
    }
    if window.is_key_pressed(Key::Right, KeyRepeat::Yes) {
      self.pending.opacity = (self.pending.opacity + OPACITY_STEP).min(*opacity.end());
    }
    if window.is_key_pressed(Key::Left, KeyRepeat::Yes) {
      self.pending.opacity = (self.pending.opacity - OPACITY_STEP).max(*opacity.start());
    }
    if window.is_key_pressed(Key::C, KeyRepeat::No) {
      self.palette_index = (self.palette_index + 1) % PALETTE.len();
      self.pending.color = PALETTE[self.palette_index];
    }

    let shift = window.is_key_down(Key::LeftShift) || window.is_key_down(Key::RightShift);
    let step = if shift { -CHANNEL_STEP } else { CHANNEL_STEP };
    [Key::R, Key::G, Key::B].into_iter()
      .enumerate()
      .filter(|&(_, key)| window.is_key_pressed(key, KeyRepeat::Yes))
      .for_each(|(channel, _)| self.pending.color = step_channel(self.pending.color, channel, step));

    self.pending != before
  }

  fn submitted(window: &Window) -> bool {
    window.is_key_pressed(Key::Enter, KeyRepeat::No)
      || window.is_key_pressed(Key::Space, KeyRepeat::No)
  }

  fn title(&self) -> String {
    let Rgb([r, g, b]) = self.pending.color;
    format!(
      "Sierpinski | depth {} | opacity {}% | color #{r:02x}{g:02x}{b:02x} | Enter: draw, S: save",
      self.pending.depth, self.pending.opacity
    )
  }
}

/// Moves one channel by `delta`, saturating at `0` and `255`.
fn step_channel(color: Rgb<u8>, channel: usize, delta: i16) -> Rgb<u8> {
  let mut color = color;
  let value = &mut color.0[channel];
  *value = (*value as i16 + delta).clamp(0, 255) as u8;
  color
}

fn window_error(e: minifb::Error) -> Error {
  ErrorKind::Window(e.to_string()).into()
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let config = RenderConfig::default();
  let (width, height) = (config.resolution.width as usize, config.resolution.height as usize);
  let mut controls = Controls::default();

  let mut window = Window::new(&controls.title(), width, height, WindowOptions::default())
    .map_err(window_error)
    .context("failed to open the fractal window")?;
  window.set_target_fps(60);

  let mut generator = FractalGenerator::new();
  let canvas = Rc::new(Canvas::new(config));
  generator.attach(&canvas);
  generator.apply(controls.pending)?;

  let mut buffer = drawing::to_rgb_u32(&canvas.frame());

  while window.is_open() && !window.is_key_down(Key::Escape) {
    if controls.handle(&window) {
      window.set_title(&controls.title());
    }

    if Controls::submitted(&window) {
      generator.apply(controls.pending)?;
      info!(
        depth = controls.pending.depth,
        opacity = controls.pending.opacity,
        shapes = generator.shapes().len(),
        "fractal drawn"
      );
    }

    if canvas.refresh(generator.shapes()) {
      buffer = drawing::to_rgb_u32(&canvas.frame());
    }

    if window.is_key_pressed(Key::S, KeyRepeat::No) {
      match canvas.frame().save(EXPORT_PATH) {
        Ok(()) => info!(path = EXPORT_PATH, "frame saved"),
        Err(e) => warn!(path = EXPORT_PATH, error = %e, "could not save frame"),
      }
    }

    window.update_with_buffer(&buffer, width, height)
      .map_err(window_error)?;
  }

  Ok(())
}
