//! # u-numkit
//!
//! Small numeric helpers for scoring simulations.
//!
//! The crate is domain-agnostic about what is being scored. It provides
//! plain arithmetic over `f64` slices, decimal rounding and formatting,
//! and a synthetic "expert score" generator backed by an injectable
//! random source.
//!
//! ## Modules
//!
//! - [`stats`] — Sum and average over numeric slices
//! - [`rounding`] — Decimal rounding and ceiling-to-significance
//! - [`format`] — Number and percentage rendering
//! - [`random`] — Seeded RNG construction and the [`random::IntegerSource`] seam
//! - [`scores`] — Expert score generation with defaulted options
//! - [`error`] — Crate error type
//!
//! ## Quick start
//!
//! ```
//! use u_numkit::{
//!     average, ceiling, create_rng, format_number, format_percentage, random_integer,
//!     round_to, shift_decimal, sum, try_expert_scores_with, IntegerSource, ScoreOptions,
//! };
//!
//! assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
//! assert_eq!(average(&[2.0, 4.0, 6.0]), 4.0);
//! assert_eq!(ceiling(7.0, 5.0), 10.0);
//! assert_eq!(round_to(shift_decimal(0.00085, 2), 2), 0.09);
//! assert_eq!(format_number(100.0), "100");
//! assert_eq!(format_percentage(0.4567), "45.67%");
//!
//! let mut rng = create_rng(42);
//! let source: &mut dyn IntegerSource = &mut rng;
//! assert_eq!(random_integer(source, 4, 4), 4);
//! let scores = try_expert_scores_with(5, &ScoreOptions::new(3, 9), source).unwrap();
//! assert!(scores.iter().all(|s| (3..=9).contains(s)));
//! ```
//!
//! ## Design Philosophy
//!
//! - **Floating-point semantics are preserved**: degenerate inputs
//!   (division by zero, NaN) produce IEEE results rather than errors
//! - **Randomness is injected**: every random operation has a `_with`
//!   variant taking an [`random::IntegerSource`], so tests stay deterministic
//! - **Property-based testing**: arithmetic invariants verified via proptest

pub mod error;
pub mod format;
pub mod random;
pub mod rounding;
pub mod scores;
pub mod stats;

pub use error::NumkitError;
pub use format::{format_number, format_percentage};
pub use random::{create_rng, random_integer, IntegerSource};
pub use rounding::{ceiling, round_to, shift_decimal};
pub use scores::{
    expert_scores, expert_scores_with, try_expert_scores_with, ScoreOptions, ScoreRange,
};
pub use stats::{average, sum};
