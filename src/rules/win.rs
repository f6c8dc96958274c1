//! Win detection.
//!
//! A win is any of the eight fixed lines fully occupied by one player:
//! three rows, three columns, the main diagonal, and the anti-diagonal.
//! The scan visits the lines in that order and reports the first match,
//! so the reported line is deterministic even when a single move completes
//! two lines at once.
//!
//! The scan runs for one player only — in practice the player who just
//! moved, since the opponent's lines cannot complete on someone else's
//! move. Draw detection is not here: it is the board-full check in
//! `GameState::apply_move`, applied only after the win scan misses.

use crate::core::board::{Board, Cell};
use crate::core::coord::Coord;
use crate::core::player::Player;

/// A winning line: three coordinates, in the order they appear in the
/// line table (left to right for rows, top to bottom for columns and
/// diagonals).
pub type Line = [Coord; 3];

/// The eight lines, in scan order. The order is part of the contract:
/// the first fully-occupied line is the one reported.
const LINES: [Line; 8] = [
    // Rows, top to bottom.
    [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
    [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
    [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
    // Columns, left to right.
    [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
    [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
    [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
    // Main diagonal, then anti-diagonal.
    [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
    [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
];

/// Find the first line fully occupied by `player`, if any.
#[must_use]
pub fn winning_line(board: &Board, player: Player) -> Option<Line> {
    LINES
        .iter()
        .copied()
        .find(|line| {
            line.iter()
                .all(|&at| board.cell(at) == Cell::Occupied(player))
        })
}
