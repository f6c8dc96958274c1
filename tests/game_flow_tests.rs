//! End-to-end game flow tests.
//!
//! Full games driven through the public surface the way a presentation
//! adapter would drive them: raw (row, col) input, the returned state
//! replacing the held one after every call.

use tictactoe_engine::{Cell, Coord, GameState, GameStatus, InvalidCoordinate, Player};

fn at(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

/// Drive a move sequence through `apply_move_at`, as an adapter would.
fn play(moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(GameState::new(), |state, &(row, col)| {
        state
            .apply_move_at(row, col)
            .expect("test sequences use in-range coordinates")
    })
}

/// X takes the top row: X(0,0), O(1,1), X(0,1), O(2,2), X(0,2).
#[test]
fn test_x_wins_top_row() {
    let state = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert_eq!(
        state.status(),
        GameStatus::Won {
            winner: Player::X,
            line: [at(0, 0), at(0, 1), at(0, 2)],
        }
    );
    assert!(state.is_terminal());

    // The winning cells, and only the winning cells, are flagged.
    for coord in Coord::ALL {
        assert_eq!(state.is_winning_cell(coord), coord.row() == 0);
    }

    // O's marks are where O left them.
    assert_eq!(state.cell_at(at(1, 1)), Cell::Occupied(Player::O));
    assert_eq!(state.cell_at(at(2, 2)), Cell::Occupied(Player::O));
}

/// Nine moves, all cells fill, nobody completes a line. X ends with
/// (0,0), (0,1), (2,1), (1,2), (2,0): no row, column, or diagonal.
#[test]
fn test_full_board_draw() {
    let state = play(&[
        (0, 0),
        (0, 2),
        (0, 1),
        (1, 1),
        (2, 1),
        (1, 0),
        (1, 2),
        (2, 2),
        (2, 0),
    ]);

    assert_eq!(state.status(), GameStatus::Draw);
    assert!(state.board().is_full());
    for coord in Coord::ALL {
        assert!(!state.cell_at(coord).is_empty());
        assert!(!state.is_winning_cell(coord));
    }
}

/// Moves after a win change nothing at all.
#[test]
fn test_move_after_win_returns_identical_state() {
    let won = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    let after = won.apply_move_at(1, 0).unwrap();
    assert_eq!(after, won);
    assert_eq!(after.status(), won.status());
    assert_eq!(after.current_player(), won.current_player());
    for coord in Coord::ALL {
        assert_eq!(after.cell_at(coord), won.cell_at(coord));
    }
}

/// Out-of-range coordinates are a contract failure; the state is not
/// modified (negative input is unrepresentable at the type level).
#[test]
fn test_out_of_range_coordinate_fails_without_side_effects() {
    let state = GameState::new().apply_move_at(0, 0).unwrap();

    assert_eq!(
        state.apply_move_at(3, 0),
        Err(InvalidCoordinate { row: 3, col: 0 })
    );
    assert_eq!(
        state.apply_move_at(1, 3),
        Err(InvalidCoordinate { row: 1, col: 3 })
    );

    // `state` is a value; the failed calls never produced a successor.
    assert_eq!(state.current_player(), Player::O);
    assert_eq!(state.board().occupied_count(), 1);
    assert_eq!(state.status(), GameStatus::InProgress { active: Player::O });
}

/// A diagonal in progress is not a win until the third mark lands.
#[test]
fn test_no_premature_win_on_partial_diagonal() {
    let mut state = GameState::new();

    state = state.apply_move_at(0, 0).unwrap();
    assert_eq!(state.status(), GameStatus::InProgress { active: Player::O });

    state = state.apply_move_at(1, 1).unwrap();
    assert_eq!(state.status(), GameStatus::InProgress { active: Player::X });

    // X has (0,0) but O holds the center, so X's diagonal is dead; the
    // game simply continues.
    state = state.apply_move_at(2, 2).unwrap();
    assert_eq!(state.status(), GameStatus::InProgress { active: Player::O });
    assert!(!state.is_terminal());
}

/// X builds an uncontested diagonal; the win lands exactly on mark three.
#[test]
fn test_diagonal_win_lands_on_third_mark() {
    let partial = play(&[(0, 0), (0, 1), (1, 1), (0, 2)]);
    assert_eq!(
        partial.status(),
        GameStatus::InProgress { active: Player::X }
    );

    let won = partial.apply_move_at(2, 2).unwrap();
    assert_eq!(
        won.status(),
        GameStatus::Won {
            winner: Player::X,
            line: [at(0, 0), at(1, 1), at(2, 2)],
        }
    );
}

/// O can win too; the engine carries no first-player bias.
#[test]
fn test_o_wins_middle_column() {
    let state = play(&[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 1)]);

    assert_eq!(
        state.status(),
        GameStatus::Won {
            winner: Player::O,
            line: [at(0, 1), at(1, 1), at(2, 1)],
        }
    );
    assert_eq!(state.current_player(), Player::O);
}

/// Reset from every kind of state yields the same fresh game.
#[test]
fn test_reset_from_any_state() {
    let fresh = GameState::new();
    let mid_game = play(&[(0, 0), (1, 1), (2, 2)]);
    let won = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let drawn = play(&[
        (0, 0),
        (0, 2),
        (0, 1),
        (1, 1),
        (2, 1),
        (1, 0),
        (1, 2),
        (2, 2),
        (2, 0),
    ]);
    assert_eq!(drawn.status(), GameStatus::Draw);

    for state in [fresh, mid_game, won, drawn] {
        let reset = state.reset();
        assert_eq!(reset, GameState::new());
        assert_eq!(reset.current_player(), Player::X);
        assert_eq!(reset.status(), GameStatus::InProgress { active: Player::X });
        for coord in Coord::ALL {
            assert_eq!(reset.cell_at(coord), Cell::Empty);
        }
    }
}

/// A rejected click leaves the adapter's snapshot valid: the sequence
/// "click occupied, then click empty" plays out as if the bad click never
/// happened.
#[test]
fn test_adapter_can_forward_raw_clicks() {
    let mut state = GameState::new();

    state = state.apply_move_at(1, 1).unwrap();
    state = state.apply_move_at(1, 1).unwrap(); // O clicks X's cell
    state = state.apply_move_at(0, 0).unwrap(); // O's real move

    assert_eq!(state.cell_at(at(1, 1)), Cell::Occupied(Player::X));
    assert_eq!(state.cell_at(at(0, 0)), Cell::Occupied(Player::O));
    assert_eq!(state.current_player(), Player::X);
    assert_eq!(state.board().occupied_count(), 2);
}

/// Snapshots of a finished game survive a serialization boundary.
#[test]
fn test_state_snapshot_round_trips_through_json() {
    let won = play(&[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    let json = serde_json::to_string(&won).unwrap();
    let restored: GameState = serde_json::from_str(&json).unwrap();

    assert_eq!(restored, won);
    assert_eq!(restored.status().winner(), Some(Player::X));
}
