//! Win rules.
//!
//! The eight winning lines and the scan that checks them in a fixed order.
//! Draw detection lives with the move transition (a board-full check that
//! runs only after the win scan misses), so this module stays a pure board
//! predicate.

pub mod win;

pub use win::{winning_line, Line};
