mod board;
mod bot_controller;
mod game_state;
mod snapshot;
mod types;
mod win_detector;

pub use board::{Board, CELL_COUNT};
pub use bot_controller::{BotMove, MoveReason, PREFERRED_MOVES, select_ai_move};
pub use game_state::{AI_MOVE_DELAY, AI_PLAYER, GameEngine, PendingAiMove};
pub use snapshot::{GameStatus, SessionSnapshot};
pub use types::{GameMode, LineKind, Mark, Outcome, Player, Score, WinningLine};
pub use win_detector::{WINNING_LINES, evaluate};
