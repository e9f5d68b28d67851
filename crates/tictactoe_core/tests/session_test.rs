//! Tests for the game session state machine.

use tictactoe_core::{Board, Cell, GameSession, Outcome, Player};

/// Plays the given `(row, col)` selections in order.
fn play(session: &mut GameSession, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session.handle_cell_select(row, col);
    }
}

#[test]
fn test_initial_state() {
    let session = GameSession::new();
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.scoreboard().x_wins(), 0);
    assert_eq!(session.scoreboard().o_wins(), 0);
    assert_eq!(session.scoreboard().draws(), 0);
}

#[test]
fn test_turn_alternates_on_legal_moves() {
    let mut session = GameSession::new();
    assert_eq!(session.current_player(), Player::X);
    session.handle_cell_select(1, 1);
    assert_eq!(session.current_player(), Player::O);
    session.handle_cell_select(0, 0);
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_x_wins_top_row_scenario() {
    // X(0,0) O(1,1) X(0,1) O(2,2) X(0,2) - row 0 is all X.
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2)]);
    assert_eq!(session.outcome(), Outcome::InProgress);

    let outcome = session.handle_cell_select(0, 2);
    assert_eq!(outcome, Outcome::Won(Player::X));
    assert_eq!(session.outcome(), Outcome::Won(Player::X));
    assert_eq!(session.scoreboard().x_wins(), 1);
    assert_eq!(session.scoreboard().o_wins(), 0);
    assert_eq!(session.scoreboard().draws(), 0);
}

#[test]
fn test_selections_inert_after_win() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(session.outcome(), Outcome::Won(Player::X));

    let board_before = *session.board();
    session.handle_cell_select(2, 0);
    session.handle_cell_select(1, 0);
    assert_eq!(*session.board(), board_before);
    assert_eq!(session.outcome(), Outcome::Won(Player::X));
    assert_eq!(session.scoreboard().x_wins(), 1);
}

#[test]
fn test_draw_scenario() {
    // Fill the board as X O X / O X X / O X O - no line completed.
    // Selection order keeps strict X/O alternation.
    let mut session = GameSession::new();
    play(
        &mut session,
        &[
            (0, 0), // X
            (0, 1), // O
            (0, 2), // X
            (1, 0), // O
            (1, 1), // X
            (2, 0), // O
            (1, 2), // X
            (2, 2), // O
            (2, 1), // X
        ],
    );
    assert_eq!(session.outcome(), Outcome::Draw);
    assert_eq!(session.scoreboard().draws(), 1);
    assert_eq!(session.scoreboard().x_wins(), 0);
    assert_eq!(session.scoreboard().o_wins(), 0);
}

#[test]
fn test_occupied_cell_selection_is_inert() {
    let mut session = GameSession::new();
    session.handle_cell_select(1, 1); // X takes center
    let board_before = *session.board();

    session.handle_cell_select(1, 1); // O clicks the same cell
    assert_eq!(*session.board(), board_before);
    assert_eq!(session.current_player(), Player::O);
    assert_eq!(session.scoreboard().x_wins(), 0);
    assert_eq!(session.scoreboard().o_wins(), 0);
    assert_eq!(session.scoreboard().draws(), 0);
}

#[test]
fn test_out_of_range_selection_is_inert() {
    let mut session = GameSession::new();
    session.handle_cell_select(9, 9);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_reset_game_preserves_scoreboard() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(session.scoreboard().x_wins(), 1);

    session.reset_game();
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.outcome(), Outcome::InProgress);
    assert_eq!(session.scoreboard().x_wins(), 1);
}

#[test]
fn test_starting_player_alternates_across_resets() {
    let mut session = GameSession::new();

    // Counter parity picks the starter: even starts X, odd starts O.
    session.reset_game();
    assert_eq!(session.current_player(), Player::X);
    session.reset_game();
    assert_eq!(session.current_player(), Player::O);
    session.reset_game();
    assert_eq!(session.current_player(), Player::X);
    assert_eq!(session.games_started(), 3);
}

#[test]
fn test_alternation_ignores_who_won() {
    let mut session = GameSession::new();
    session.reset_game(); // counter 0 -> X starts
    // O wins: X(0,0) O(1,0) X(0,1) O(1,1) X(2,2) O(1,2).
    play(
        &mut session,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)],
    );
    assert_eq!(session.outcome(), Outcome::Won(Player::O));

    session.reset_game(); // counter 1 -> O starts, winner irrelevant
    assert_eq!(session.current_player(), Player::O);
}

#[test]
fn test_reset_scoreboard_zeroes_counts_and_resets_game() {
    let mut session = GameSession::new();
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    assert_eq!(session.scoreboard().x_wins(), 1);

    session.reset_scoreboard();
    assert_eq!(session.scoreboard().x_wins(), 0);
    assert_eq!(session.scoreboard().o_wins(), 0);
    assert_eq!(session.scoreboard().draws(), 0);
    assert_eq!(*session.board(), Board::new());
    assert_eq!(session.outcome(), Outcome::InProgress);
    // The scoreboard reset also advances the alternation counter.
    assert_eq!(session.games_started(), 1);
}

#[test]
fn test_scoreboard_reset_counts_toward_alternation() {
    let mut session = GameSession::new();
    session.reset_game(); // counter 0 -> X
    session.reset_scoreboard(); // counter 1 -> O
    assert_eq!(session.current_player(), Player::O);
    session.reset_game(); // counter 2 -> X
    assert_eq!(session.current_player(), Player::X);
}

#[test]
fn test_win_for_o_increments_o_score() {
    let mut session = GameSession::new();
    // X(0,0) O(1,0) X(0,1) O(1,1) X(2,2) O(1,2) - middle row is all O.
    play(
        &mut session,
        &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)],
    );
    assert_eq!(session.outcome(), Outcome::Won(Player::O));
    assert_eq!(session.scoreboard().o_wins(), 1);
    assert_eq!(session.scoreboard().wins(Player::O), 1);
    assert_eq!(session.scoreboard().wins(Player::X), 0);
}

#[test]
fn test_scores_accumulate_across_games() {
    let mut session = GameSession::new();
    // Game 1: X wins.
    play(&mut session, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    session.reset_game();
    // Game 2 (X starts again, counter was even): X wins the left column.
    play(&mut session, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);

    assert_eq!(session.scoreboard().x_wins(), 2);
    assert_eq!(session.scoreboard().o_wins(), 0);
}

#[test]
fn test_session_snapshot_serializes() {
    let mut session = GameSession::new();
    session.handle_cell_select(1, 1);

    let json = serde_json::to_string(&session).unwrap();
    let restored: GameSession = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.board().get(1, 1), Some(Cell::Occupied(Player::X)));
    assert_eq!(restored.current_player(), Player::O);
}
