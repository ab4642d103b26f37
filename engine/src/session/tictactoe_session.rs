use std::sync::Arc;

use tokio::sync::Mutex;

use crate::error::GameError;
use crate::game::{AI_MOVE_DELAY, GameEngine, GameMode, PendingAiMove, SessionSnapshot};
use crate::log_debug;
use super::broadcaster::SnapshotBroadcaster;

/// Shares a [`GameEngine`] between the presentation layer and the AI timer.
///
/// Every state change is pushed to the broadcaster. When a move leaves the AI
/// to play, a tokio task sleeps for [`AI_MOVE_DELAY`] and then resolves the
/// move against the generation it was scheduled in; a game reset in between
/// makes that task a no-op.
#[derive(Clone)]
pub struct TicTacToeSession<B: SnapshotBroadcaster> {
    engine: Arc<Mutex<GameEngine>>,
    broadcaster: B,
}

impl<B: SnapshotBroadcaster> TicTacToeSession<B> {
    pub fn new(engine: GameEngine, broadcaster: B) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            broadcaster,
        }
    }

    pub async fn snapshot(&self) -> SessionSnapshot {
        self.engine.lock().await.snapshot()
    }

    pub async fn apply_move(&self, index: usize) -> Result<SessionSnapshot, GameError> {
        let (before, after, scheduled) = {
            let mut engine = self.engine.lock().await;
            let before = engine.snapshot();
            let was_pending = engine.pending_ai_move().is_some();
            let after = engine.apply_move(index)?;
            let scheduled = engine.pending_ai_move().filter(|_| !was_pending);
            (before, after, scheduled)
        };

        if before != after {
            self.broadcaster.broadcast_snapshot(after).await;
        }

        if let Some(pending) = scheduled {
            self.schedule_ai_move(pending);
        }

        Ok(after)
    }

    pub async fn reset_game(&self) -> SessionSnapshot {
        let snapshot = self.engine.lock().await.reset_game();
        self.broadcaster.broadcast_snapshot(snapshot).await;
        snapshot
    }

    pub async fn reset_score(&self) -> SessionSnapshot {
        let snapshot = self.engine.lock().await.reset_score();
        self.broadcaster.broadcast_snapshot(snapshot).await;
        snapshot
    }

    pub async fn switch_game_mode(&self, mode: GameMode) -> SessionSnapshot {
        let snapshot = self.engine.lock().await.switch_game_mode(mode);
        self.broadcaster.broadcast_snapshot(snapshot).await;
        snapshot
    }

    fn schedule_ai_move(&self, pending: PendingAiMove) {
        log_debug!("Scheduling AI move for generation {}", pending.generation);

        let engine = Arc::clone(&self.engine);
        let broadcaster = self.broadcaster.clone();
        tokio::spawn(async move {
            tokio::time::sleep(AI_MOVE_DELAY).await;
            let resolved = engine.lock().await.resolve_ai_move(pending.generation);
            if let Some(snapshot) = resolved {
                broadcaster.broadcast_snapshot(snapshot).await;
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::config::LogConfig;
    use crate::logger::LogLevel;
    use crate::game::{Board, Mark, Outcome, Player};
    use crate::session::ChannelBroadcaster;

    fn ai_session() -> (
        TicTacToeSession<ChannelBroadcaster>,
        tokio::sync::mpsc::UnboundedReceiver<SessionSnapshot>,
    ) {
        LogConfig {
            prefix: Some("Session".to_string()),
            level: LogLevel::Debug,
        }
        .init_logger();

        let (broadcaster, receiver) = ChannelBroadcaster::new();
        (
            TicTacToeSession::new(GameEngine::new(GameMode::PlayerVsAi), broadcaster),
            receiver,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_ai_replies_after_delay() {
        let (session, mut rx) = ai_session();
        let start = Instant::now();

        let thinking = session.apply_move(0).await.unwrap();
        assert!(thinking.ai_thinking);
        assert_eq!(rx.recv().await, Some(thinking));

        let answered = rx.recv().await.unwrap();
        assert!(start.elapsed() >= AI_MOVE_DELAY);
        assert_eq!(answered.board.get(4), Ok(Mark::O));
        assert_eq!(answered.current_player, Player::X);
        assert!(!answered.ai_thinking);
        assert_eq!(session.snapshot().await, answered);
    }

    #[tokio::test(start_paused = true)]
    async fn test_moves_during_ai_delay_are_ignored() {
        let (session, mut rx) = ai_session();

        let thinking = session.apply_move(0).await.unwrap();
        let ignored = session.apply_move(8).await.unwrap();
        assert_eq!(thinking, ignored);

        assert_eq!(rx.recv().await, Some(thinking));
        let answered = rx.recv().await.unwrap();
        assert_eq!(answered.board.count(Mark::O), 1);
        assert_eq!(answered.board.get(8), Ok(Mark::Empty));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_discards_scheduled_ai_move() {
        let (session, mut rx) = ai_session();
        let start = Instant::now();

        session.apply_move(0).await.unwrap();
        let reset = session.reset_game().await;
        assert_eq!(reset.board, Board::new());
        assert!(!reset.ai_thinking);

        tokio::time::sleep(Duration::from_millis(300)).await;
        session.apply_move(8).await.unwrap();

        let mut last = None;
        for _ in 0..4 {
            last = rx.recv().await;
        }
        let answered = last.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(300) + AI_MOVE_DELAY);
        assert_eq!(answered.board.get(8), Ok(Mark::X));
        assert_eq!(answered.board.get(4), Ok(Mark::O));
        assert_eq!(answered.board.count(Mark::O), 1);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_switch_mode_while_thinking_cancels_ai() {
        let (session, mut rx) = ai_session();

        session.apply_move(0).await.unwrap();
        let snap = session.switch_game_mode(GameMode::PlayerVsPlayer).await;
        assert_eq!(snap.mode, GameMode::PlayerVsPlayer);

        tokio::time::sleep(AI_MOVE_DELAY * 2).await;
        assert_eq!(session.snapshot().await.board, Board::new());

        let mut received = Vec::new();
        while let Ok(snapshot) = rx.try_recv() {
            received.push(snapshot);
        }
        assert_eq!(received.len(), 2);
        assert_eq!(received[1], snap);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_index_is_reported_and_not_broadcast() {
        let (session, mut rx) = ai_session();
        assert_eq!(
            session.apply_move(9).await,
            Err(GameError::InvalidCell { index: 9 })
        );
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_game_against_ai_is_scored() {
        let (session, mut rx) = ai_session();

        for index in [0, 8, 1] {
            session.apply_move(index).await.unwrap();
            rx.recv().await.unwrap();
            rx.recv().await.unwrap();
        }

        let snap = session.snapshot().await;
        assert_eq!(snap.outcome.winner(), Some(Player::O));
        assert_eq!(snap.score.o_wins, 1);

        let cleared = session.reset_score().await;
        assert_eq!(cleared.score.o_wins, 0);
        assert!(matches!(cleared.outcome, Outcome::Win { .. }));
    }
}
