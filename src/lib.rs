//! Random non-overlapping circle layouts in ℝ², for a subitizing
//! (rapid count perception) training exercise.
//!
//! The crate is split into [`solver`] for generating a [`Layout`](solver::Layout)
//! of circles by rejection sampling, and [`drawing`] for rasterizing it
//! (requires `drawing` feature). A layout satisfies a minimum pairwise
//! separation: no two circle centers are closer than twice the shared radius.
//!
//! # Basic usage
//! ```
//! use subitize::{error::Result, solver::Rejection2D};
//! use rand::thread_rng;
//!
//! fn main() -> Result<()> {
//!   // Canvas of 100x40 units, circle radius 2, finite retry budget.
//!   let solver = Rejection2D::default();
//!
//!   /* Request *around* 6 circles, with randomized fill colors.
//!    * The actual count is itself randomized, uniform over
//!    * [floor(6/2) + 1, 6] — generally below the request. This mirrors
//!    * the original trainer and is kept as documented behavior. */
//!   let layout = solver.generate(&mut thread_rng(), 6, true)?;
//!
//!   for circle in layout.iter() {
//!     println!("({:.1}, {:.1})", circle.center.x, circle.center.y);
//!   }
//!   Ok(())
//! }
//! ```
//! Placement runs candidate-at-a-time: each circle is drawn uniformly over the
//! canvas and rejected while it lands within the separation threshold of any
//! already-placed circle. The retry loop is iterative and bounded; when the
//! budget runs out (the canvas cannot fit another circle at the requested
//! density), [`generate`](solver::Rejection2D::generate) returns
//! [`PlacementExhausted`](error::Error::PlacementExhausted) instead of looping
//! forever. The caller may lower the count and retry.
//!
//! The [`console`] and [`fullscreen`] modules carry the trainer's panel
//! collaborators as explicit interfaces: an injectable log sink with a
//! line-capturing tee, and first-available fullscreen capability probing.

pub mod error;
pub mod geometry;
pub mod color;
pub mod solver;
pub mod console;
pub mod fullscreen;
#[cfg(feature = "drawing")]
pub mod drawing;

use crate::{error::Result, solver::{Layout, Rejection2D}};

/// One-shot layout generation with the fixed trainer canvas and
/// a thread-local RNG. See [`Rejection2D::generate`].
pub fn generate_layout(requested: i32, colorize: bool) -> Result<Layout> {
  Rejection2D::default()
    .generate(&mut rand::thread_rng(), requested, colorize)
}
