//! Rules engine for a 3×3 tic-tac-toe game with an optional computer opponent.
//!
//! [`game::GameEngine`] is the synchronous state machine: it owns the board,
//! turn, score and the pending AI move, and drives the AI delay from a virtual
//! clock. [`session::TicTacToeSession`] wraps it for async callers, running the
//! delay on a tokio timer and pushing snapshots to a broadcaster.

pub mod config;
pub mod error;
pub mod game;
pub mod logger;
pub mod session;

pub use error::{ConfigError, GameError};
pub use game::{GameEngine, GameMode, SessionSnapshot};
pub use session::{SnapshotBroadcaster, TicTacToeSession};
