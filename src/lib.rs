//! # tictactoe-engine
//!
//! A pure tic-tac-toe engine: board, turn order, win/draw detection, and
//! reset. No I/O, no UI assumptions — rendering, input wiring, and styling
//! belong to whatever hosts the engine.
//!
//! ## Design Principles
//!
//! 1. **State as a value**: `GameState` is a small `Copy` value. Every
//!    transition returns a successor state and the caller replaces its
//!    copy wholesale. No interior mutability, no hidden framework state.
//!
//! 2. **Rejection is not an error**: moves on occupied cells, or after the
//!    game has ended, return the state unchanged. Adapters may forward raw
//!    click events without pre-validation.
//!
//! 3. **Contract violations fail fast**: a coordinate outside the 3×3
//!    board is a caller bug, reported as `InvalidCoordinate` before any
//!    game logic runs. The engine never clamps.
//!
//! ## Modules
//!
//! - `core`: players, coordinates, the board, game state and transitions
//! - `rules`: the eight winning lines and the ordered win scan

pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, GameState, GameStatus, InvalidCoordinate, Player, BOARD_SIZE,
};

pub use crate::rules::{winning_line, Line};
