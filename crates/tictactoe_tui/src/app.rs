//! Application state and logic.

use tictactoe_core::{GameSession, Outcome};
use tracing::debug;

/// Main application state: the game session plus a derived status line.
pub struct App {
    session: GameSession,
    status_message: String,
}

impl App {
    /// Creates a new application.
    pub fn new() -> Self {
        let session = GameSession::new();
        let status_message = turn_message(&session);
        Self {
            session,
            status_message,
        }
    }

    /// Gets the current game session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Selects the cell at the given coordinates for the current player.
    ///
    /// Selections on occupied cells or after game end are inert; the
    /// status line simply keeps showing the current turn or outcome.
    pub fn select_cell(&mut self, row: usize, col: usize) {
        debug!(row, col, "Cell selected");
        self.session.handle_cell_select(row, col);
        self.status_message = turn_message(&self.session);
    }

    /// Starts the next game, keeping the scoreboard.
    pub fn next_game(&mut self) {
        debug!("Starting next game");
        self.session.reset_game();
        self.status_message = turn_message(&self.session);
    }

    /// Resets the scoreboard and starts the next game.
    pub fn reset_scoreboard(&mut self) {
        debug!("Resetting scoreboard");
        self.session.reset_scoreboard();
        self.status_message = turn_message(&self.session);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn turn_message(session: &GameSession) -> String {
    match session.outcome() {
        Outcome::InProgress => {
            format!(
                "Player {}'s turn. Press 1-9 to place a mark.",
                session.current_player()
            )
        }
        Outcome::Won(player) => {
            format!("Player {player} wins! Press 'n' for the next game.")
        }
        Outcome::Draw => "It's a draw! Press 'n' for the next game.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Player;

    #[test]
    fn test_status_tracks_turn() {
        let mut app = App::new();
        assert!(app.status_message().contains("Player X"));
        app.select_cell(1, 1);
        assert!(app.status_message().contains("Player O"));
    }

    #[test]
    fn test_status_announces_winner() {
        let mut app = App::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            app.select_cell(row, col);
        }
        assert_eq!(app.session().outcome(), Outcome::Won(Player::X));
        assert!(app.status_message().contains("Player X wins"));
    }

    #[test]
    fn test_next_game_restores_turn_status() {
        let mut app = App::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            app.select_cell(row, col);
        }
        app.next_game();
        assert!(app.status_message().contains("turn"));
        assert_eq!(app.session().scoreboard().x_wins(), 1);
    }
}
