use core::fmt;

use crate::geom::Coord;

/// Failures that make a map unusable for loop extraction.
///
/// All variants are unrecoverable for the current grid; there is no retry
/// or partial-result semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A character outside the allowed map alphabet.
    InvalidSymbol { symbol: char, at: Coord },
    /// The map has no start tile.
    MissingStart,
    /// The start tile's neighbor signature does not name exactly two
    /// openings.
    AmbiguousStart { signature: u8 },
    /// The crawler entered a tile with no opening facing back.
    BrokenLoop { at: Coord },
    /// Traversal stepped off the grid.
    OutOfBounds { at: Coord },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSymbol { symbol, at } => {
                write!(f, "invalid map symbol {symbol:?} at {at}")
            }
            Self::MissingStart => write!(f, "map has no start tile"),
            Self::AmbiguousStart { signature } => write!(
                f,
                "start neighbor signature {signature:#06b} does not match a two-opening shape"
            ),
            Self::BrokenLoop { at } => write!(f, "pipe has no continuation at {at}"),
            Self::OutOfBounds { at } => write!(f, "traversal left the grid at {at}"),
        }
    }
}

impl std::error::Error for Error {}
