mod broadcaster;
mod tictactoe_session;

pub use broadcaster::{ChannelBroadcaster, SnapshotBroadcaster};
pub use tictactoe_session::TicTacToeSession;
