//! Worm headings on the 8-connected pixel grid.

use crate::error::DirectionError;
use crate::squirminess::Squirminess;
use mycelium_core::Coord;
use rand::Rng;
use std::fmt;

/// Unit offsets for each heading, one per adjacent pixel.
///
/// Index 0 is NE; successive indices advance 45° through N, NW, W, SW, S,
/// SE, E, wrapping back to NE modulo 8. Opposite headings sit 4 apart,
/// perpendicular headings 2 apart.
const UNIT_COORDS: [Coord; 8] = [
    Coord::new(1, -1),  // NE
    Coord::new(0, -1),  // N
    Coord::new(-1, -1), // NW
    Coord::new(-1, 0),  // W
    Coord::new(-1, 1),  // SW
    Coord::new(0, 1),   // S
    Coord::new(1, 1),   // SE
    Coord::new(1, 0),   // E
];

/// Compass names, in table order.
const NAMES: [&str; 8] = ["NE", "N", "NW", "W", "SW", "S", "SE", "E"];

/// A heading a worm can move along: one of the 8 cardinal and diagonal
/// directions to an adjacent pixel.
///
/// Wraps an index into the fixed unit-offset table. All index arithmetic
/// is reduced modulo 8 immediately, so a `Direction` always names a valid
/// heading. The type is `Copy` and one byte; automata hold their heading
/// by value and mutate it in place with [`tweak`](Direction::tweak) or
/// [`set_opposite`](Direction::set_opposite).
///
/// Stochastic operations take the caller's [`Rng`], so a seeded generator
/// reproduces an identical walk.
///
/// # Examples
///
/// ```
/// use mycelium_direction::{Direction, Squirminess};
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(7);
/// let mut heading = Direction::new(1).unwrap(); // N
/// heading.tweak(Squirminess::Relaxed, &mut rng);
/// assert!(heading.index() < Direction::COUNT);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Direction {
    index: u8,
}

impl Direction {
    /// Number of discrete headings on the 45°-step compass.
    pub const COUNT: u8 = 8;

    /// Create a heading from an explicit cardinal index.
    ///
    /// # Errors
    ///
    /// Returns [`DirectionError::CardinalOutOfRange`] if `cardinal` is not
    /// in `0..8`. Out-of-range values are rejected, never clamped.
    pub fn new(cardinal: u8) -> Result<Self, DirectionError> {
        if cardinal >= Self::COUNT {
            return Err(DirectionError::CardinalOutOfRange { value: cardinal });
        }
        Ok(Self { index: cardinal })
    }

    /// Create a heading drawn uniformly from all eight cardinals.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            index: rng.gen_range(0..Self::COUNT),
        }
    }

    /// The cardinal index of this heading, always in `0..8`.
    pub fn index(self) -> u8 {
        self.index
    }

    /// Turn by a delta drawn uniformly from `squirminess`'s delta set.
    ///
    /// Negative sums wrap: a heading of N (index 1) tweaked by -2 becomes
    /// E (index 7).
    pub fn tweak<R: Rng + ?Sized>(&mut self, squirminess: Squirminess, rng: &mut R) {
        let deltas = squirminess.deltas();
        let delta = deltas[rng.gen_range(0..deltas.len())];
        self.index = (self.index as i8 + delta).rem_euclid(8) as u8;
    }

    /// The unit offset that advances a position one pixel along this
    /// heading.
    pub fn unit_coord(self) -> Coord {
        UNIT_COORDS[self.index as usize]
    }

    /// Offsets for the swath a worm paints at one step: the current cell
    /// plus the two cells 90° to either side of the direction of travel.
    ///
    /// Order is fixed: `[center, left, right]`.
    pub fn swath_coords(self) -> [Coord; 3] {
        let left = UNIT_COORDS[((self.index + 6) % 8) as usize];
        let right = UNIT_COORDS[((self.index + 2) % 8) as usize];
        [Coord::ZERO, left, right]
    }

    /// Point this heading directly opposite `other`'s.
    pub fn set_opposite(&mut self, other: Direction) {
        self.index = (other.index + 4) % 8;
    }

    /// Two fresh headings one 45° step to either side of this one, as
    /// `(left, right)`, for a worm splitting into diverging paths.
    ///
    /// Does not change this heading.
    pub fn fork(self) -> (Direction, Direction) {
        let left = Self {
            index: (self.index + 7) % 8,
        };
        let right = Self {
            index: (self.index + 1) % 8,
        };
        (left, right)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(NAMES[self.index as usize])
    }
}
