//! .
//!
//! A compact error chain; `PlacementExhausted` is the only failure the solver
//! itself produces, the rest are foreign links from the drawing path.

use std::fmt;

#[derive(Debug)]
pub enum Error {
  /// The retry budget for a single circle ran out before a candidate
  /// satisfied the separation threshold. Recoverable: the caller may
  /// lower the requested count, enlarge the canvas, or raise the budget.
  PlacementExhausted {
    /// Candidates drawn for the failing circle.
    attempted: usize,
    /// Circles successfully placed before the failure.
    placed: usize
  },
  IoError(std::io::Error),
  #[cfg(feature = "drawing")]
  ImageError(image::ImageError),
}

impl fmt::Display for Error {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match self {
      PlacementExhausted { attempted, placed } => fmt.write_fmt(format_args!(
        "placement exhausted: no admissible candidate after {} attempts, {} circles placed",
        attempted, placed
      )),
      IoError(err) => fmt.write_fmt(format_args!("{}", err)),
      #[cfg(feature = "drawing")]
      ImageError(err) => fmt.write_fmt(format_args!("{}", err)),
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Error::IoError(err) => Some(err),
      #[cfg(feature = "drawing")]
      Error::ImageError(err) => Some(err),
      _ => None
    }
  }
}

impl From<std::io::Error> for Error {
  fn from(e: std::io::Error) -> Self {
    Error::IoError(e)
  }
}

#[cfg(feature = "drawing")]
impl From<image::ImageError> for Error {
  fn from(e: image::ImageError) -> Self {
    Error::ImageError(e)
  }
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
