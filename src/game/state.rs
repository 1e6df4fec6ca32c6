use crate::board::{Board, Coordinate, Mark};

use super::config::GameConfig;
use super::win;

/// A snapshot of a match between two moves. States are never modified once
/// built; playing a move produces a new state and leaves this one valid.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    to_move: Mark,
    utility: i32,
    board: Board,
    moves: Vec<Coordinate>,
}

impl GameState {
    pub(crate) fn new(to_move: Mark, utility: i32, board: Board, moves: Vec<Coordinate>) -> Self {
        Self {
            to_move,
            utility,
            board,
            moves,
        }
    }

    /// The opening position: empty board, `First` to move, every cell open.
    pub fn initial(config: &GameConfig) -> Self {
        let board = Board::new(config.height, config.width);
        let moves = board.empty_cells();
        Self::new(Mark::First, 0, board, moves)
    }

    /// Builds a mid-game position from a board. The utility is computed by
    /// scanning the whole board, so positions that are already won are
    /// recognised as terminal.
    pub fn from_board(config: &GameConfig, board: Board, to_move: Mark) -> Self {
        let utility = win::board_utility(&board, config.k);
        let moves = board.empty_cells();
        Self::new(to_move, utility, board, moves)
    }

    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// +1 if `First` has completed a line, -1 if `Second` has, 0 otherwise.
    pub fn utility(&self) -> i32 {
        self.utility
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Unfilled cells in row-major order, before any legality rule is
    /// applied.
    pub fn moves(&self) -> &[Coordinate] {
        &self.moves
    }
}
