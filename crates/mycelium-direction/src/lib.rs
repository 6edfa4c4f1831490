//! Worm headings and turning-bias profiles for the mycelium texture engine.
//!
//! This crate defines [`Direction`], one of the 8 cardinal/diagonal
//! headings a worm can move along on an 8-connected pixel grid, together
//! with the [`Squirminess`] profile that controls how much a heading may
//! change per step.
//!
//! All randomness is injected: stochastic operations take any
//! [`rand::Rng`], so callers seed their own generator and identical seeds
//! reproduce identical walks.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod squirminess;

pub use direction::Direction;
pub use error::DirectionError;
pub use squirminess::Squirminess;
