use super::board::Board;
use super::types::Player;
use super::win_detector::evaluate;

/// Centre, corners, then edges.
pub const PREFERRED_MOVES: [usize; 9] = [4, 0, 2, 6, 8, 1, 3, 5, 7];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveReason {
    Win,
    Block,
    Positional,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BotMove {
    pub index: usize,
    pub reason: MoveReason,
}

/// Picks a cell for `bot`. Returns `None` only when the board is full.
pub fn select_ai_move(board: &Board, bot: Player) -> Option<BotMove> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    if let Some(index) = find_winning_move(board, bot, &available_moves) {
        return Some(BotMove { index, reason: MoveReason::Win });
    }

    if let Some(index) = find_winning_move(board, bot.opponent(), &available_moves) {
        return Some(BotMove { index, reason: MoveReason::Block });
    }

    PREFERRED_MOVES
        .iter()
        .copied()
        .find(|index| available_moves.contains(index))
        .map(|index| BotMove { index, reason: MoveReason::Positional })
}

fn find_winning_move(board: &Board, player: Player, moves: &[usize]) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| evaluate(&board.with_mark(index, player)).winner() == Some(player))
}
