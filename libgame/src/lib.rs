use std::mem;

use board::GameBoard;

pub mod board;
pub mod pos;
pub mod rule;

/// A board plus the scratch buffer its next generation is written into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: GameBoard,
    next_board: GameBoard,
    generation: u64,
}

impl Game {
    pub fn new(board: GameBoard) -> Self {
        let next_board = GameBoard::new(board.width, board.height);

        Self {
            board,
            next_board,
            generation: 0,
        }
    }

    pub fn new_random(width: usize, height: usize) -> Self {
        Self::new(GameBoard::new_random(width, height))
    }

    pub fn tick(&mut self) {
        self.board.next_generation_into(&mut self.next_board);
        mem::swap(&mut self.board, &mut self.next_board);
        self.generation += 1;
    }

    pub fn board(&self) -> &GameBoard {
        &self.board
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
