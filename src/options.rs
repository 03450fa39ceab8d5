use {
  std::ops::RangeInclusive,
  image::{Rgb, Rgba},
  crate::error::{ErrorKind, Result}
};

/// User choices for a single generation pass. Replaced as a whole, never patched.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FractalOptions {
  /// Number of subdivision levels, `1` draws a single triangle with its incircle.
  pub depth: u32,
  /// Circle opacity in percent, `0.0..=100.0`. Values outside are clamped when converted to alpha.
  pub opacity: f32,
  pub color: Rgb<u8>,
}

impl Default for FractalOptions {
  fn default() -> Self {
    Self {
      depth: 5,
      opacity: 50.0,
      color: Rgb([255, 255, 255])
    }
  }
}

impl FractalOptions {
  /// Depths offered by the interactive front end. The generator itself only rejects `0`.
  pub const DEPTH_RANGE: RangeInclusive<u32> = 1..=8;
  pub const OPACITY_RANGE: RangeInclusive<f32> = 0.0..=100.0;

  pub fn new(depth: u32, opacity: f32, color: Rgb<u8>) -> Result<Self> {
    let options = Self { depth, opacity, color };
    options.validate()?;
    Ok(options)
  }

  pub fn validate(&self) -> Result<()> {
    if self.depth < 1 {
      return Err(ErrorKind::InvalidDepth(self.depth).into());
    }
    Ok(())
  }

  pub fn alpha(&self) -> u8 {
    opacity_to_alpha(self.opacity)
  }

  /// Outline color, always opaque.
  pub fn triangle_color(&self) -> Rgba<u8> {
    let Rgb([r, g, b]) = self.color;
    Rgba([r, g, b, 255])
  }

  /// Fill color, translucent according to `opacity`.
  pub fn circle_color(&self) -> Rgba<u8> {
    let Rgb([r, g, b]) = self.color;
    Rgba([r, g, b, self.alpha()])
  }
}

/// Maps a percentage onto an 8-bit alpha channel, rounding to nearest. NaN maps to `0`.
pub fn opacity_to_alpha(percent: f32) -> u8 {
  // `as` saturates, and NaN casts to 0
  (percent / 100.0 * 255.0).round().clamp(0.0, 255.0) as u8
}
