//! Core domain types: players, coordinates, the board, and game state.
//!
//! Everything here is a small value type. The only state-changing entry
//! point is `GameState::apply_move`, which returns a successor value
//! rather than mutating in place.

pub mod player;
pub mod coord;
pub mod board;
pub mod state;

pub use player::Player;
pub use coord::{Coord, InvalidCoordinate};
pub use board::{Board, Cell, BOARD_SIZE};
pub use state::{GameState, GameStatus};
