//! Turning-bias profiles for worm headings.

/// How much a worm's heading may change per step.
///
/// A profile is selected once per run (host parameter collection maps its
/// integer selector through [`Squirminess::from_selector`]) and the same
/// value is passed to every [`tweak`](crate::Direction::tweak) for the
/// run's duration. Each variant fixes the set of index deltas a tweak may
/// draw from; a delta of 0 keeps the heading, ±1 is a 45° turn, ±2 a 90°
/// turn, and 4 a full reversal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Squirminess {
    /// Straight ahead or a slight turn to either side.
    Relaxed,
    /// Always a slight turn, never straight.
    Curly,
    /// Straight ahead or a hard turn, no gentle turns.
    Kinky,
    /// Mostly relaxed, with an occasional reversal.
    Plodding,
    /// Any of the eight headings, uniformly.
    Unbiased,
    /// Straight ahead or a turn biased toward one side.
    Circling,
}

impl Squirminess {
    /// Map a host-supplied integer selector to a profile.
    ///
    /// Selectors 0 through 4 choose `Relaxed`, `Curly`, `Kinky`, `Plodding`
    /// and `Unbiased` respectively. Every other value, negatives included,
    /// falls back to [`Squirminess::Circling`]. The fallback is documented
    /// host behavior, not an error.
    pub fn from_selector(selector: i32) -> Self {
        match selector {
            0 => Self::Relaxed,
            1 => Self::Curly,
            2 => Self::Kinky,
            3 => Self::Plodding,
            4 => Self::Unbiased,
            _ => Self::Circling,
        }
    }

    /// The index deltas a tweak may draw from under this profile.
    ///
    /// Every delta set is non-empty and each entry is drawn with equal
    /// probability.
    pub fn deltas(self) -> &'static [i8] {
        match self {
            Self::Relaxed => &[-1, 0, 1],
            Self::Curly => &[1, -1],
            Self::Kinky => &[-2, 0, 2],
            Self::Plodding => &[-1, 0, 1, 4],
            Self::Unbiased => &[-4, -3, -2, -1, 0, 1, 2, 3],
            Self::Circling => &[-2, -1, 0],
        }
    }
}
