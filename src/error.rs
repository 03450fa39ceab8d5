//! .
//!
//! Kept close to what `error_chain!` would expand to, minus the backtrace state:
//! ```ignore
//! error_chain! {
//!   foreign_links {
//!     ImageError(image::ImageError);
//!   }
//!
//!   errors {
//!     InvalidDepth(depth: u32)
//!     Window(msg: String)
//!   }
//! }
//! ```

#[derive(Debug)]
pub struct Error(pub ErrorKind);

#[derive(Debug)]
pub enum ErrorKind {
  /// Recursion depth must be at least 1.
  InvalidDepth(u32),
  ImageError(image::ImageError),
  /// Window creation or presentation failed.
  Window(String),

  Msg(String),
}

impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::from_kind(
      ErrorKind::ImageError(e)
    )
  }
}

impl ::std::fmt::Display for ErrorKind {
  fn fmt(&self, fmt: &mut ::std::fmt::Formatter)
         -> ::std::fmt::Result
  {
    use ErrorKind::*;
    match *self {
      InvalidDepth(depth) => write!(fmt, "invalid recursion depth {depth}, must be at least 1"),
      ImageError(ref err) => write!(fmt, "{}", err),
      Window(ref msg) => write!(fmt, "window error: {}", msg),

      Msg(ref s) => write!(fmt, "{}", s),
    }
  }
}

impl Error {
  pub fn from_kind(kind: ErrorKind) -> Error {
    Error(kind)
  }

  pub fn kind(&self) -> &ErrorKind {
    &self.0
  }
}

impl ::std::error::Error for Error {
  fn source(&self) -> Option<&(dyn ::std::error::Error + 'static)> {
    match self.0 {
      ErrorKind::ImageError(ref foreign_err) => Some(foreign_err),
      _ => None
    }
  }
}

impl ::std::fmt::Display for Error {
  fn fmt(&self, f: &mut ::std::fmt::Formatter) -> ::std::fmt::Result {
    ::std::fmt::Display::fmt(&self.0, f)
  }
}

impl From<ErrorKind> for Error {
  fn from(e: ErrorKind) -> Self {
    Error::from_kind(e)
  }
}

impl From<Error> for ErrorKind {
  fn from(e: Error) -> Self {
    e.0
  }
}

impl<'a> From<&'a str> for ErrorKind {
  fn from(s: &'a str) -> Self {
    ErrorKind::Msg(s.into())
  }
}
impl From<String> for ErrorKind {
  fn from(s: String) -> Self {
    ErrorKind::Msg(s)
  }
}
impl<'a> From<&'a str> for Error {
  fn from(s: &'a str) -> Self {
    Self::from_kind(s.into())
  }
}
impl From<String> for Error {
  fn from(s: String) -> Self {
    Self::from_kind(s.into())
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = ::std::result::Result<T, Error>;
