//! Rejection-sampling placement engine.
//!
//! Candidates are drawn uniformly over the canvas and rejected while they land
//! within the separation threshold of an already-placed circle. The original
//! trainer retried by unbounded recursion; here the retry loop is iterative and
//! carries an explicit budget, so a canvas too dense to admit another circle
//! surfaces [`Error::PlacementExhausted`] instead of hanging.

use {
  euclid::Size2D,
  itertools::Itertools,
  rand::Rng,
  crate::{
    color::Hsl,
    error::{Error, Result},
    geometry::{self, CanvasSpace, Circle, P2}
  }
};

#[cfg(test)] mod tests;

/// Candidates drawn per circle before giving up. Generous: under trainer-like
/// densities a candidate is accepted within a handful of draws.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// An ordered sequence of placed circles. Order is placement order; it has no
/// meaning beyond display and is not reproducible across runs unless the RNG
/// is seeded.
#[derive(Debug, Clone, Default)]
pub struct Layout(pub Vec<Circle>);

impl Layout {
  pub fn iter(&self) -> std::slice::Iter<'_, Circle> {
    self.0.iter()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Smallest center-to-center distance over all pairs; `None` below
  /// two circles. Every layout the solver returns keeps this at or above
  /// twice the run's radius.
  pub fn min_pairwise_distance(&self) -> Option<f64> {
    self.0.iter()
      .tuple_combinations()
      .map(|(a, b)| a.center.distance_to(b.center))
      .fold(None, |min: Option<f64>, d| Some(min.map_or(d, |m| m.min(d))))
  }
}

#[derive(Debug, Copy, Clone)]
pub struct Rejection2D {
  /// Placement extent; centers are drawn over `[0, w) × [0, h)`. Centers may
  /// land arbitrarily close to an edge, the extent does not inset by radius.
  pub extent: Size2D<f64, CanvasSpace>,
  /// Shared radius for every circle of a run. The separation threshold
  /// is twice this.
  pub radius: f64,
  pub max_attempts: usize
}

/// The fixed trainer canvas: 100×40 units, radius 2.
impl Default for Rejection2D {
  fn default() -> Self {
    Self::new(geometry::canvas_extent(), geometry::RADIUS)
  }
}

impl Rejection2D {
  pub fn new(extent: Size2D<f64, CanvasSpace>, radius: f64) -> Self {
    Rejection2D { extent, radius, max_attempts: DEFAULT_MAX_ATTEMPTS }
  }

  pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
    self.max_attempts = max_attempts;
    self
  }

  /// Generate a fresh layout of *around* `requested` circles.
  ///
  /// `requested` below 1 is silently clamped up to 1. The actual count is
  /// randomized, uniform over `[floor(requested/2) + 1, requested]` — i.e.
  /// generally *less than* the request. The off-by-half formula is inherited
  /// from the original trainer and kept bit-for-bit as documented behavior;
  /// do not "fix" it without product confirmation.
  ///
  /// When `colorize` is set each circle receives an independent random
  /// [`Hsl`] fill, drawn right after its placement is accepted.
  ///
  /// Pure per invocation: nothing leaks between calls, and a new layout
  /// wholesale replaces any previous one at the caller.
  pub fn generate(&self, rng: &mut impl Rng, requested: i32, colorize: bool) -> Result<Layout> {
    let requested = f64::from(requested.max(1));
    let count = (rng.gen::<f64>() * requested / 2.0 + requested / 2.0).floor() as usize + 1;

    let mut circles = Vec::with_capacity(count);
    for _ in 0..count {
      let center = self.place(rng, &circles)?;
      let fill = if colorize { Some(Hsl::random(rng)) } else { None };
      circles.push(Circle { center, radius: self.radius, fill });
    }
    Ok(Layout(circles))
  }

  /// One circle: draw candidates until one clears the separation threshold
  /// against everything in `placed`, or the attempt budget runs out.
  fn place(&self, rng: &mut impl Rng, placed: &[Circle]) -> Result<P2> {
    for _ in 0..self.max_attempts {
      let candidate = P2::new(
        rng.gen::<f64>() * self.extent.width,
        rng.gen::<f64>() * self.extent.height
      );
      if !placed.iter().any(|c| c.too_near(candidate)) {
        return Ok(candidate);
      }
    }
    Err(Error::PlacementExhausted {
      attempted: self.max_attempts,
      placed: placed.len()
    })
  }
}
