//! Game session management: one ongoing game plus the cumulative scoreboard.

use crate::rules;
use crate::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Cumulative win/draw counts across games in one session.
///
/// Counts only move forward; [`Scoreboard::reset`] is the single way to
/// bring them back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Games won by player X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by player O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games ended in a draw.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games won by the given player.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    fn record_win(&mut self, player: Player) {
        match player {
            Player::X => self.x_wins += 1,
            Player::O => self.o_wins += 1,
        }
    }

    fn record_draw(&mut self) {
        self.draws += 1;
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The mutable container tracking one ongoing (or just-finished) game.
///
/// A session owns exactly one [`Board`] and one [`Scoreboard`] and
/// sequences all calls into the rules engine. Every transition runs to
/// completion before returning; the session assumes a single caller at a
/// time. Presentation layers drive it through [`handle_cell_select`],
/// [`reset_game`] and [`reset_scoreboard`] and read it back through the
/// accessors.
///
/// [`handle_cell_select`]: GameSession::handle_cell_select
/// [`reset_game`]: GameSession::reset_game
/// [`reset_scoreboard`]: GameSession::reset_scoreboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: Outcome,
    scoreboard: Scoreboard,
    /// Incremented on every reset; its parity before the increment picks
    /// the next starting player (even starts X, odd starts O).
    games_started: u32,
}

impl GameSession {
    /// Creates a new session: empty board, X to move, all scores zero.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            outcome: Outcome::InProgress,
            scoreboard: Scoreboard::default(),
            games_started: 0,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// Once the game has ended this stays at the player who moved last's
    /// opponent until the next reset, but no further moves are accepted.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Number of resets performed so far.
    pub fn games_started(&self) -> u32 {
        self.games_started
    }

    /// Handles a cell selection for the current player.
    ///
    /// Illegal selections are inert rather than errors: when the game has
    /// already ended, the target cell is occupied, or the coordinates are
    /// out of range, the session state is left untouched. Otherwise the
    /// move is applied, the outcome recomputed, the scoreboard updated on
    /// a terminal outcome, and the turn passed on a non-terminal one.
    ///
    /// Returns the outcome after the call for caller convenience.
    #[instrument(skip(self))]
    pub fn handle_cell_select(&mut self, row: usize, col: usize) -> Outcome {
        if self.outcome.is_terminal() {
            debug!(row, col, "Selection ignored: game is over");
            return self.outcome;
        }

        let board = match rules::apply_move(&self.board, row, col, self.current_player) {
            Ok(board) => board,
            Err(err) => {
                debug!(row, col, %err, "Selection ignored");
                return self.outcome;
            }
        };
        self.board = board;
        self.outcome = rules::outcome(&self.board);

        match self.outcome {
            Outcome::Won(player) => {
                self.scoreboard.record_win(player);
                info!(%player, "Game won");
            }
            Outcome::Draw => {
                self.scoreboard.record_draw();
                info!("Game drawn");
            }
            Outcome::InProgress => {
                self.current_player = self.current_player.opponent();
            }
        }

        self.outcome
    }

    /// Starts the next game, preserving the scoreboard.
    ///
    /// The board and outcome are cleared and the starting player
    /// alternates strictly across successive resets, regardless of who
    /// won: even reset counter starts X, odd starts O.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.outcome = Outcome::InProgress;
        self.current_player = if self.games_started % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        self.games_started += 1;
        info!(starter = %self.current_player, game = self.games_started, "Game reset");
    }

    /// Zeroes the scoreboard, then starts the next game as
    /// [`reset_game`](GameSession::reset_game) would.
    #[instrument(skip(self))]
    pub fn reset_scoreboard(&mut self) {
        self.scoreboard.reset();
        info!("Scoreboard reset");
        self.reset_game();
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
