//! Player identification.
//!
//! Tic-tac-toe is strictly two-player: `X` and `O`, with `X` always moving
//! first. The engine tracks whose turn it is; callers never pass a player
//! alongside a move.

use serde::{Deserialize, Serialize};

/// One of the two players. `X` always moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the other player.
    ///
    /// ```
    /// use tictactoe_engine::Player;
    ///
    /// assert_eq!(Player::X.opponent(), Player::O);
    /// assert_eq!(Player::O.opponent(), Player::X);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Get the player's mark character (`'X'` or `'O'`).
    #[must_use]
    pub const fn mark(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.mark())
    }
}
