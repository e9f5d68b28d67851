//! Pure tic-tac-toe game logic: rules engine and session state machine.
//!
//! # Architecture
//!
//! - **Rules** ([`rules`]): pure functions over immutable [`Board`]
//!   values - applying a validated move and evaluating the [`Outcome`].
//! - **Session** ([`GameSession`]): the single mutable container holding
//!   the current board, active player, outcome and [`Scoreboard`], and
//!   sequencing calls into the rules engine.
//!
//! No I/O happens in this crate; presentation layers own a
//! [`GameSession`], drive it with cell selections and resets, and render
//! the state read back through its accessors.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Outcome, Player};
//!
//! let mut session = GameSession::new();
//! session.handle_cell_select(0, 0); // X
//! session.handle_cell_select(1, 1); // O
//! session.handle_cell_select(0, 1); // X
//! session.handle_cell_select(2, 2); // O
//! let outcome = session.handle_cell_select(0, 2); // X completes row 0
//! assert_eq!(outcome, Outcome::Won(Player::X));
//! assert_eq!(session.scoreboard().x_wins(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod rules;
mod session;
mod types;

pub use error::IllegalMove;
pub use session::{GameSession, Scoreboard};
pub use types::{Board, Cell, Outcome, Player, BOARD_SIZE};
