//! .
//!
//! The origin of the coordinate system is in the top-left corner. Placement
//! happens inside the canvas rectangle `[0, 100) × [0, 40)`; the viewing frame
//! adds a 5-unit margin on every side but takes no part in placement.

use {
  euclid::{Point2D, Size2D},
  crate::color::Hsl
};

/// Canvas coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct CanvasSpace;

pub type P2 = Point2D<f64, CanvasSpace>;

/// Placement extent, in canvas units.
pub const CANVAS_WIDTH: f64 = 100.0;
pub const CANVAS_HEIGHT: f64 = 40.0;
/// Margin added by the viewing frame on the origin side; the viewport
/// spans `[-5, 105] × [-5, 45]`.
pub const FRAME_MARGIN: f64 = 5.0;
/// Shared circle radius; constant across a generation run.
pub const RADIUS: f64 = 2.0;

pub fn canvas_extent() -> Size2D<f64, CanvasSpace> {
  Size2D::new(CANVAS_WIDTH, CANVAS_HEIGHT)
}

/// A placed circle. `fill` is present only when color randomization
/// was enabled for the run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2,
  pub radius: f64,
  pub fill: Option<Hsl>
}

impl Circle {
  /// Whether `candidate` violates the separation threshold of `2 × radius`
  /// around this circle. Exactly the threshold is admissible.
  pub fn too_near(&self, candidate: P2) -> bool {
    self.center.distance_to(candidate) < self.radius * 2.0
  }
}
