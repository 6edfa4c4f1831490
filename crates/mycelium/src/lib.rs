//! Mycelium: a worm heading engine for grid-based texture generation.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the mycelium sub-crates. For most users, adding `mycelium` as a single
//! dependency is sufficient.
//!
//! A worm wanders an 8-connected pixel grid. Each step its heading is
//! tweaked under a [`Squirminess`](prelude::Squirminess) turning-bias
//! profile, its position advances by the heading's unit offset, and the
//! 3-cell swath abreast of the direction of travel is handed to the host's
//! pixel-painting routine. The host owns the pixel buffer, the worm
//! population, and the random generator; this crate owns only the heading
//! logic.
//!
//! # Quick start
//!
//! ```rust
//! use mycelium::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! // One profile per run, selected by host parameter and shared by
//! // every worm. A seeded generator reproduces the same texture.
//! let squirminess = Squirminess::from_selector(0); // Relaxed
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//!
//! let mut heading = Direction::random(&mut rng);
//! let mut position = Coord::new(64, 64);
//!
//! for _ in 0..100 {
//!     heading.tweak(squirminess, &mut rng);
//!     position = position + heading.unit_coord();
//!     for offset in heading.swath_coords() {
//!         let _cell = position + offset; // hand to the pixel painter
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `mycelium-core` | [`Coord`](types::Coord) positions and offsets |
//! | [`direction`] | `mycelium-direction` | Headings, squirminess profiles, errors |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core coordinate types (`mycelium-core`).
///
/// [`types::Coord`] is the 2D integer pair used both as an absolute pixel
/// position and as a relative offset.
pub use mycelium_core as types;

/// Headings and turning-bias profiles (`mycelium-direction`).
///
/// [`direction::Direction`] is a worm's heading;
/// [`direction::Squirminess`] controls how much it may change per step.
pub use mycelium_direction as direction;

/// Common imports for typical mycelium usage.
///
/// ```rust
/// use mycelium::prelude::*;
/// ```
pub mod prelude {
    pub use mycelium_core::Coord;
    pub use mycelium_direction::{Direction, DirectionError, Squirminess};
}
