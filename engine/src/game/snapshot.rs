use std::fmt;

use serde::Serialize;

use super::board::Board;
use super::types::{GameMode, Outcome, Player, Score};

/// Read-only copy of the session handed to the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SessionSnapshot {
    pub board: Board,
    pub current_player: Player,
    pub mode: GameMode,
    pub outcome: Outcome,
    pub score: Score,
    pub ai_thinking: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Tie,
    Won { player: Player, mode: GameMode },
    AiThinking,
    YourTurn,
    PlayerTurn(Player),
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Tie => write!(f, "It's a tie!"),
            GameStatus::Won { player: Player::X, mode: GameMode::PlayerVsAi } => write!(f, "You win!"),
            GameStatus::Won { player: Player::O, mode: GameMode::PlayerVsAi } => write!(f, "AI wins!"),
            GameStatus::Won { player, .. } => write!(f, "Player {} wins!", player),
            GameStatus::AiThinking => write!(f, "AI thinking..."),
            GameStatus::YourTurn => write!(f, "Your turn"),
            GameStatus::PlayerTurn(player) => write!(f, "Player {}'s turn", player),
        }
    }
}

impl SessionSnapshot {
    pub fn status(&self) -> GameStatus {
        match (self.outcome, self.mode) {
            (Outcome::Tie, _) => GameStatus::Tie,
            (Outcome::Win { player, .. }, mode) => GameStatus::Won { player, mode },
            (Outcome::None, GameMode::PlayerVsAi) => {
                if self.ai_thinking || self.current_player == Player::O {
                    GameStatus::AiThinking
                } else {
                    GameStatus::YourTurn
                }
            }
            (Outcome::None, GameMode::PlayerVsPlayer) => GameStatus::PlayerTurn(self.current_player),
        }
    }

    pub fn player_label(&self, player: Player) -> String {
        match (self.mode, player) {
            (GameMode::PlayerVsAi, Player::X) => "You".to_string(),
            (GameMode::PlayerVsAi, Player::O) => "AI".to_string(),
            (GameMode::PlayerVsPlayer, player) => format!("Player {}", player),
        }
    }

    /// Whether a click on `index` could be accepted right now.
    pub fn is_cell_enabled(&self, index: usize) -> bool {
        self.board.is_empty_at(index)
            && !self.outcome.is_decided()
            && !(self.mode == GameMode::PlayerVsAi && self.current_player == Player::O)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::WinningLine;

    fn snapshot(mode: GameMode) -> SessionSnapshot {
        SessionSnapshot {
            board: Board::new(),
            current_player: Player::X,
            mode,
            outcome: Outcome::None,
            score: Score::default(),
            ai_thinking: false,
        }
    }

    #[test]
    fn test_status_text_player_vs_player() {
        let mut snap = snapshot(GameMode::PlayerVsPlayer);
        assert_eq!(snap.status().to_string(), "Player X's turn");
        snap.current_player = Player::O;
        assert_eq!(snap.status().to_string(), "Player O's turn");
        snap.outcome = Outcome::Win { player: Player::O, line: WinningLine([2, 4, 6]) };
        assert_eq!(snap.status().to_string(), "Player O wins!");
        snap.outcome = Outcome::Tie;
        assert_eq!(snap.status().to_string(), "It's a tie!");
    }

    #[test]
    fn test_status_text_player_vs_ai() {
        let mut snap = snapshot(GameMode::PlayerVsAi);
        assert_eq!(snap.status().to_string(), "Your turn");
        snap.current_player = Player::O;
        snap.ai_thinking = true;
        assert_eq!(snap.status().to_string(), "AI thinking...");
        snap.outcome = Outcome::Win { player: Player::X, line: WinningLine([0, 1, 2]) };
        assert_eq!(snap.status().to_string(), "You win!");
        snap.outcome = Outcome::Win { player: Player::O, line: WinningLine([0, 1, 2]) };
        assert_eq!(snap.status().to_string(), "AI wins!");
    }

    #[test]
    fn test_player_labels() {
        let pvp = snapshot(GameMode::PlayerVsPlayer);
        assert_eq!(pvp.player_label(Player::X), "Player X");
        let ai = snapshot(GameMode::PlayerVsAi);
        assert_eq!(ai.player_label(Player::X), "You");
        assert_eq!(ai.player_label(Player::O), "AI");
    }

    #[test]
    fn test_cells_disabled_on_ai_turn_and_after_outcome() {
        let mut snap = snapshot(GameMode::PlayerVsAi);
        assert!(snap.is_cell_enabled(0));
        snap.current_player = Player::O;
        assert!(!snap.is_cell_enabled(0));

        let mut snap = snapshot(GameMode::PlayerVsPlayer);
        snap.board = snap.board.with_mark(3, Player::X);
        assert!(!snap.is_cell_enabled(3));
        assert!(!snap.is_cell_enabled(9));
        snap.outcome = Outcome::Tie;
        assert!(!snap.is_cell_enabled(0));
    }
}
