use std::time::Duration;

use crate::config::EngineConfig;
use crate::error::GameError;
use crate::{log, log_debug};
use super::board::{Board, CELL_COUNT};
use super::bot_controller::select_ai_move;
use super::snapshot::SessionSnapshot;
use super::types::{GameMode, Mark, Outcome, Player, Score};
use super::win_detector::evaluate;

pub const AI_MOVE_DELAY: Duration = Duration::from_millis(500);

/// The computer always plays O.
pub const AI_PLAYER: Player = Player::O;

/// An AI move waiting for its delay to run out.
///
/// `generation` is the engine generation at scheduling time; every game reset
/// bumps the generation so a timer armed before the reset can be recognised
/// and dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingAiMove {
    pub generation: u64,
    pub due_at: Duration,
}

/// One game session: board, turn, mode, score and the pending AI move.
///
/// The engine keeps its own virtual clock. Callers either drive it with
/// [`GameEngine::advance`] or run a real timer for [`AI_MOVE_DELAY`] and then
/// call [`GameEngine::resolve_ai_move`].
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    mode: GameMode,
    outcome: Outcome,
    score: Score,
    pending_ai_move: Option<PendingAiMove>,
    generation: u64,
    clock: Duration,
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

impl GameEngine {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            mode,
            outcome: Outcome::None,
            score: Score::default(),
            pending_ai_move: None,
            generation: 0,
            clock: Duration::ZERO,
        }
    }

    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.initial_mode)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: self.board,
            current_player: self.current_player,
            mode: self.mode,
            outcome: self.outcome,
            score: self.score,
            ai_thinking: self.ai_thinking(),
        }
    }

    pub fn ai_thinking(&self) -> bool {
        self.pending_ai_move.is_some()
    }

    pub fn pending_ai_move(&self) -> Option<PendingAiMove> {
        self.pending_ai_move
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn elapsed(&self) -> Duration {
        self.clock
    }

    /// Places the current player's mark at `index`.
    ///
    /// Occupied cells, decided games and moves while the AI is thinking are
    /// ignored and return the unchanged snapshot. Only an index outside the
    /// board is an error.
    pub fn apply_move(&mut self, index: usize) -> Result<SessionSnapshot, GameError> {
        if index >= CELL_COUNT {
            return Err(GameError::InvalidCell { index });
        }

        if self.ai_thinking() {
            log_debug!("Ignoring move at {}: AI is thinking", index);
            return Ok(self.snapshot());
        }

        self.place_mark(index);
        Ok(self.snapshot())
    }

    pub fn reset_game(&mut self) -> SessionSnapshot {
        self.board = Board::new();
        self.current_player = Player::X;
        self.outcome = Outcome::None;
        self.pending_ai_move = None;
        self.generation += 1;
        log!("New game started ({}, generation {})", self.mode, self.generation);
        self.snapshot()
    }

    pub fn reset_score(&mut self) -> SessionSnapshot {
        self.score = Score::default();
        log!("Score reset");
        self.snapshot()
    }

    pub fn switch_game_mode(&mut self, mode: GameMode) -> SessionSnapshot {
        log!("Switching game mode to {}", mode);
        self.mode = mode;
        self.reset_game()
    }

    /// Moves the virtual clock forward and plays the AI move once it is due.
    ///
    /// Returns the new snapshot if the AI moved.
    pub fn advance(&mut self, elapsed: Duration) -> Option<SessionSnapshot> {
        self.clock += elapsed;
        match self.pending_ai_move {
            Some(pending) if pending.due_at <= self.clock => {
                self.resolve_ai_move(pending.generation)
            }
            _ => None,
        }
    }

    /// Plays the pending AI move now, provided it was scheduled in `generation`.
    ///
    /// A stale generation or an engine with nothing pending leaves the state
    /// untouched and returns `None`.
    pub fn resolve_ai_move(&mut self, generation: u64) -> Option<SessionSnapshot> {
        let Some(pending) = self.pending_ai_move else {
            log_debug!("No AI move pending for generation {}", generation);
            return None;
        };

        if pending.generation != generation {
            log_debug!(
                "Discarding stale AI move from generation {} (current {})",
                generation,
                pending.generation
            );
            return None;
        }

        self.pending_ai_move = None;

        let bot_move = select_ai_move(&self.board, self.current_player)?;
        log_debug!("AI plays {} ({:?})", bot_move.index, bot_move.reason);
        self.place_mark(bot_move.index);
        Some(self.snapshot())
    }

    fn place_mark(&mut self, index: usize) {
        if self.outcome.is_decided() {
            log_debug!("Ignoring move at {}: game is already over", index);
            return;
        }

        if !self.board.is_empty_at(index) {
            log_debug!("Ignoring move at {}: cell is already marked", index);
            return;
        }

        self.board.place(index, self.current_player);
        debug_assert!(matches!(
            self.board.count(Mark::X) as isize - self.board.count(Mark::O) as isize,
            0 | 1
        ));

        self.outcome = evaluate(&self.board);
        match self.outcome {
            Outcome::None => self.current_player = self.current_player.opponent(),
            Outcome::Win { player, line } => {
                self.score.record(&self.outcome);
                log!("Player {} wins with {:?}", player, line.cells());
            }
            Outcome::Tie => {
                self.score.record(&self.outcome);
                log!("Game ended in a tie");
            }
        }

        if self.mode == GameMode::PlayerVsAi
            && self.current_player == AI_PLAYER
            && !self.outcome.is_decided()
        {
            let pending = PendingAiMove {
                generation: self.generation,
                due_at: self.clock + AI_MOVE_DELAY,
            };
            log_debug!("AI move scheduled for {:?}", pending.due_at);
            self.pending_ai_move = Some(pending);
        }
    }
}
