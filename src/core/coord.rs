//! Board coordinates with validated construction.
//!
//! ## Coord
//!
//! A row/column pair, each in `0..=2`. Row 0 is the top row, column 0 the
//! left column. Construction is the single validation gate: a `Coord` that
//! exists is always on the board, so everything downstream of `Coord::new`
//! is total.
//!
//! ## InvalidCoordinate
//!
//! Out-of-range input is a caller contract violation, never a game event.
//! The engine reports it and leaves the state untouched; it never clamps
//! or wraps. Negative coordinates are unrepresentable (`usize` inputs).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::board::BOARD_SIZE;

/// Error for a coordinate outside the 3×3 board.
///
/// Carries the offending pair for diagnostics. Occupied-cell and post-game
/// moves are not errors; see `GameState::apply_move`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("coordinate ({row}, {col}) is outside the 3x3 board")]
pub struct InvalidCoordinate {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

/// A validated board coordinate.
///
/// Serde representation is a `(row, col)` tuple; deserialization runs the
/// same bounds check as `Coord::new`, so out-of-range coordinates cannot
/// enter through serialized state either.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Create a coordinate, rejecting anything off the board.
    ///
    /// ```
    /// use tictactoe_engine::Coord;
    ///
    /// let center = Coord::new(1, 1)?;
    /// assert_eq!(center.row(), 1);
    /// assert_eq!(center.col(), 1);
    ///
    /// assert!(Coord::new(3, 0).is_err());
    /// assert!(Coord::new(0, 7).is_err());
    /// # Ok::<(), tictactoe_engine::InvalidCoordinate>(())
    /// ```
    pub fn new(row: usize, col: usize) -> Result<Self, InvalidCoordinate> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(InvalidCoordinate { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Crate-internal constructor for coordinates known to be in range
    /// (the `ALL` table, the winning-line tables).
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        assert!(
            row < BOARD_SIZE as u8 && col < BOARD_SIZE as u8,
            "coordinate off the board"
        );
        Self { row, col }
    }

    /// Get the row (0-based, top to bottom).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Get the column (0-based, left to right).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl TryFrom<(u8, u8)> for Coord {
    type Error = InvalidCoordinate;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Coord::new(row as usize, col as usize)
    }
}

impl From<Coord> for (u8, u8) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}
