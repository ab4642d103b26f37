use super::board::Board;
use super::types::{Outcome, WinningLine};

/// Rows top to bottom, columns left to right, then the two diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// Scans the whole board. The first completed line in table order wins.
pub fn evaluate(board: &Board) -> Outcome {
    let cells = board.cells();

    for line in WINNING_LINES {
        let [a, b, c] = line.cells();
        if let Some(player) = cells[a].player()
            && cells[a] == cells[b]
            && cells[a] == cells[c]
        {
            return Outcome::Win { player, line };
        }
    }

    if board.is_full() {
        Outcome::Tie
    } else {
        Outcome::None
    }
}
