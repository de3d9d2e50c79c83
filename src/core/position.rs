//! Board position identifiers.
//!
//! The board has 24 intersections, numbered row by row over a 7×7 grid:
//!
//! ```text
//!  0-----------1-----------2
//!  |   3-------4-------5   |
//!  |   |   6---7---8   |   |
//!  9--10--11       12--13--14
//!  |   |  15--16--17   |   |
//!  |  18------19------20   |
//! 21----------22----------23
//! ```
//!
//! ## Usage
//!
//! ```
//! use rust_mill::core::Position;
//!
//! let corner = Position::new(0).unwrap();
//! assert_eq!(corner.coords(), (0, 0));
//!
//! assert!(Position::new(24).is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Number of intersections on the board.
pub const POSITION_COUNT: usize = 24;

/// (row, col) of each position on the 7×7 grid.
#[rustfmt::skip]
const COORDS: [(u8, u8); POSITION_COUNT] = [
    (0, 0), (0, 3), (0, 6),
    (1, 1), (1, 3), (1, 5),
    (2, 2), (2, 3), (2, 4),
    (3, 0), (3, 1), (3, 2), (3, 4), (3, 5), (3, 6),
    (4, 2), (4, 3), (4, 4),
    (5, 1), (5, 3), (5, 5),
    (6, 0), (6, 3), (6, 6),
];

/// One of the 24 board intersections.
///
/// Always in `0..24`; construct with `Position::new` or `TryFrom<u8>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

impl Position {
    /// Create a position, or `None` if `index` is off the board.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < POSITION_COUNT {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Build a position from a table literal. Only used for the static tables.
    pub(crate) const fn at(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index (0-23).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Get the raw index as a `u8`.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// (row, col) of this position on the 7×7 grid.
    #[must_use]
    pub const fn coords(self) -> (u8, u8) {
        COORDS[self.0 as usize]
    }

    /// Iterate over all 24 positions in index order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..POSITION_COUNT as u8).map(Position)
    }
}

/// Error for an index outside `0..24`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("position index {index} is off the board")]
pub struct OffBoard {
    /// The rejected index.
    pub index: u8,
}

impl TryFrom<u8> for Position {
    type Error = OffBoard;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Position::new(index).ok_or(OffBoard { index })
    }
}

impl From<Position> for u8 {
    fn from(position: Position) -> Self {
        position.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
