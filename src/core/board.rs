//! The 3×3 board.
//!
//! ## Cell
//!
//! A cell is empty or occupied; occupied cells never change again. Nothing
//! erases a single mark — the only way back to an empty cell is a full
//! reset.
//!
//! ## Board
//!
//! A fixed 3×3 grid of cells, `Copy`, with read accessors. Placement is
//! crate-internal: external callers go through `GameState::apply_move`,
//! which enforces turn order and rejection rules before any cell is
//! written.

use serde::{Deserialize, Serialize};

use super::coord::Coord;
use super::player::Player;

/// Board side length. The game is defined on a 3×3 grid only.
pub const BOARD_SIZE: usize = 3;

/// Contents of a single board cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by the given player.
    Occupied(Player),
}

impl Cell {
    /// Check whether the cell has no mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Get the occupying player, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// The 3×3 grid of cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn cell(&self, at: Coord) -> Cell {
        self.cells[at.row()][at.col()]
    }

    /// Check whether the cell at a coordinate is empty.
    #[must_use]
    pub fn is_empty(&self, at: Coord) -> bool {
        self.cell(at).is_empty()
    }

    /// Check whether every cell is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Count the occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// Iterate over all cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.iter().map(move |&at| (at, self.cell(at)))
    }

    /// Place a mark on an empty cell.
    ///
    /// Callers must have checked emptiness; occupied cells are immutable.
    pub(crate) fn place(&mut self, at: Coord, player: Player) {
        let cell = &mut self.cells[at.row()][at.col()];
        assert!(cell.is_empty(), "cell {at} is already occupied");
        *cell = Cell::Occupied(player);
    }
}

/// Renders the grid one row per line, `.` for empty cells:
///
/// ```text
/// X . O
/// . X .
/// . . O
/// ```
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row_index, row) in self.cells.iter().enumerate() {
            if row_index > 0 {
                writeln!(f)?;
            }
            for (col_index, cell) in row.iter().enumerate() {
                if col_index > 0 {
                    write!(f, " ")?;
                }
                match cell.player() {
                    Some(player) => write!(f, "{}", player.mark())?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
