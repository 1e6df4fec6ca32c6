use log::trace;

use crate::alpha_beta_searcher::Game;
use crate::board::{Coordinate, Mark};

use super::config::{GameConfig, Legality};
use super::state::GameState;
use super::win;

/// Builds a k-in-a-row game on an `h`×`v` grid; `gravity` selects the
/// Connect-Four drop rule.
pub fn create_game(height: u8, width: u8, k: u8, gravity: bool) -> KInARow {
    let legality = if gravity {
        Legality::Gravity
    } else {
        Legality::Anywhere
    };
    KInARow::new(GameConfig::new(height, width, k, legality))
}

/// The k-in-a-row family. The two variants differ only in which unfilled
/// cells `actions` offers, which `Legality` decides.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KInARow {
    config: GameConfig,
}

impl KInARow {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn tic_tac_toe() -> Self {
        Self::new(GameConfig::tic_tac_toe())
    }

    pub fn connect_four() -> Self {
        Self::new(GameConfig::connect_four())
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn initial_state(&self) -> GameState {
        GameState::initial(&self.config)
    }

    fn is_legal(&self, state: &GameState, coordinate: Coordinate) -> bool {
        match self.config.legality {
            Legality::Anywhere => true,
            Legality::Gravity => {
                coordinate.x == self.config.height
                    || coordinate
                        .below()
                        .map_or(false, |below| state.board().is_occupied(below))
            }
        }
    }
}

impl Default for KInARow {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl Game for KInARow {
    type State = GameState;
    type Move = Coordinate;
    type Player = Mark;

    fn actions(&self, state: &GameState) -> Vec<Coordinate> {
        state
            .moves()
            .iter()
            .copied()
            .filter(|coordinate| self.is_legal(state, *coordinate))
            .collect()
    }

    fn result(&self, state: &GameState, game_move: &Coordinate) -> GameState {
        let coordinate = *game_move;
        if !state.moves().contains(&coordinate) || !self.is_legal(state, coordinate) {
            trace!("ignoring illegal move {}", coordinate);
            return state.clone();
        }

        let mark = state.to_move();
        let board = match state.board().with_mark(coordinate, mark) {
            Ok(board) => board,
            Err(error) => {
                trace!("ignoring move {}: {}", coordinate, error);
                return state.clone();
            }
        };
        let moves = state
            .moves()
            .iter()
            .copied()
            .filter(|open| *open != coordinate)
            .collect();
        let utility = win::compute_utility(&board, coordinate, mark, self.config.k);

        GameState::new(mark.opposite(), utility, board, moves)
    }

    fn utility(&self, state: &GameState, player: Mark) -> i32 {
        state.utility() * player.sign()
    }

    fn terminal_test(&self, state: &GameState) -> bool {
        state.utility() != 0 || state.moves().is_empty()
    }

    fn to_move(&self, state: &GameState) -> Mark {
        state.to_move()
    }
}
