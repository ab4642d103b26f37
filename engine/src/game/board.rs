use serde::Serialize;

use crate::error::GameError;
use super::types::{Mark, Player};

pub const CELL_COUNT: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
pub struct Board {
    cells: [Mark; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Result<Mark, GameError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(GameError::InvalidCell { index })
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cells.get(index).is_some_and(Mark::is_empty)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    /// Empty cell indices in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = player.into();
    }

    /// Copy of the board with `player` placed at `index`, used for what-if checks.
    pub fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut board = *self;
        board.place(index, player);
        board
    }
}
