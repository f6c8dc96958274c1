//! Game state and the move transition.
//!
//! ## GameStatus
//!
//! Where the game stands: in progress (with the player to move), won (with
//! the winner and the completed line), or drawn. `Won` and `Draw` are
//! terminal — no move changes a terminal state; only a reset replaces it.
//!
//! ## GameState
//!
//! The complete session state: board, current player, status. It is a
//! small `Copy` value with no interior mutability. `apply_move` returns the
//! successor state and never mutates in place; callers hold exactly one
//! current state and replace it wholesale, so a rendering layer can keep a
//! plain copy as its read-only snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::board::{Board, Cell};
use super::coord::{Coord, InvalidCoordinate};
use super::player::Player;
use crate::rules::{winning_line, Line};

/// Current standing of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// The game continues; `active` moves next.
    InProgress { active: Player },
    /// `winner` completed `line`. Terminal.
    Won { winner: Player, line: Line },
    /// The board filled with no winner. Terminal.
    Draw,
}

impl GameStatus {
    /// Check whether the game has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Get the winner, if the game has been won.
    #[must_use]
    pub const fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won { winner, .. } => Some(winner),
            _ => None,
        }
    }
}

/// Renders the status line shown to players: `Player X's turn`,
/// `Player O wins`, or `Draw`.
impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress { active } => write!(f, "Player {active}'s turn"),
            GameStatus::Won { winner, .. } => write!(f, "Player {winner} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

/// Complete state of one tic-tac-toe session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Start a new game: empty board, `X` to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress { active: Player::X },
        }
    }

    /// Start over. Behaviorally identical to `new`; named separately
    /// because resetting an existing session is its own user action.
    #[must_use]
    pub fn reset(&self) -> Self {
        debug!("game reset");
        Self::new()
    }

    // === Transitions ===

    /// Apply the current player's move at a coordinate, returning the
    /// successor state.
    ///
    /// Two kinds of move are rejected by returning `*self` unchanged —
    /// rejection is a designed no-op, not an error, so adapters may forward
    /// raw click events without pre-validation:
    ///
    /// - any move once the game is over (terminal states are sinks), and
    /// - a move on an occupied cell.
    ///
    /// Otherwise the mover's mark is placed, the win scan runs for the
    /// mover only, a full board with no win is a draw, and in all other
    /// cases the turn passes to the opponent. On `Won` and `Draw` the
    /// current player stays the mover.
    ///
    /// ```
    /// use tictactoe_engine::{Coord, GameState, Player};
    ///
    /// let state = GameState::new();
    /// let state = state.apply_move(Coord::new(0, 0)?);
    /// assert_eq!(state.current_player(), Player::O);
    ///
    /// // Occupied cell: nothing happens.
    /// let same = state.apply_move(Coord::new(0, 0)?);
    /// assert_eq!(same, state);
    /// # Ok::<(), tictactoe_engine::InvalidCoordinate>(())
    /// ```
    #[must_use]
    pub fn apply_move(&self, at: Coord) -> Self {
        if self.status.is_terminal() {
            debug!(%at, status = %self.status, "move ignored: game already over");
            return *self;
        }
        if !self.board.is_empty(at) {
            debug!(%at, mover = %self.current_player, "move ignored: cell occupied");
            return *self;
        }

        let mover = self.current_player;
        let mut board = self.board;
        board.place(at, mover);

        // Win scan for the mover only; the opponent's lines cannot have
        // completed on this move. Draw is checked after the win scan, so a
        // move that fills the board and completes a line is a win.
        let status = if let Some(line) = winning_line(&board, mover) {
            GameStatus::Won { winner: mover, line }
        } else if board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress {
                active: mover.opponent(),
            }
        };

        // On terminal states the mover stays current.
        let current_player = match status {
            GameStatus::InProgress { active } => active,
            GameStatus::Won { .. } | GameStatus::Draw => mover,
        };

        debug!(%at, %mover, status = %status, "move applied");
        Self {
            board,
            current_player,
            status,
        }
    }

    /// Apply a move given raw row/column indices.
    ///
    /// Validates the coordinate first: out-of-range input is a caller
    /// contract violation and returns `InvalidCoordinate` with the state
    /// untouched. In-range moves behave exactly like `apply_move`.
    pub fn apply_move_at(&self, row: usize, col: usize) -> Result<Self, InvalidCoordinate> {
        let at = Coord::new(row, col)?;
        Ok(self.apply_move(at))
    }

    // === Accessors ===

    /// Get the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get the cell at a coordinate.
    #[must_use]
    pub fn cell_at(&self, at: Coord) -> Cell {
        self.board.cell(at)
    }

    /// Get the game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get the player whose turn it is. After the game ends this stays on
    /// the player who moved last (the winner, when there is one).
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Check whether a coordinate is part of the winning line. Always
    /// false while the game is in progress or drawn.
    #[must_use]
    pub fn is_winning_cell(&self, at: Coord) -> bool {
        match self.status {
            GameStatus::Won { line, .. } => line.contains(&at),
            _ => false,
        }
    }

    /// Get the empty cells, in row-major order. Empty once the game has
    /// ended: terminal states accept no moves.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Coord; 9]> {
        if self.status.is_terminal() {
            return SmallVec::new();
        }
        self.board
            .cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(at, _)| at)
            .collect()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
