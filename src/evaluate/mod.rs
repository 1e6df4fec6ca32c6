//! Heuristic scoring of positions where the search stops before the game is
//! decided.
//!
//! A position is scored by counting runs: for every cell holding a mark, four
//! half-scans start at that cell (down, across, diagonally down-right and
//! diagonally up-right) and each scan whose run of consecutive marks reaches
//! 2, 3 or 4 scores that tier's weight. Together the four half-scans cover
//! every line through the board, so each run is counted once from its first
//! cell in scan order. The opponent's runs are subtracted.

use crate::alpha_beta_searcher::{Evaluator, Game};
use crate::board::{Board, Direction, Mark};
use crate::game::{win, GameState, KInARow};

mod weights;

pub use weights::{Weights, WIN_SCORE};

const HALF_SCANS: [Direction; 4] = [
    Direction::DOWN,
    Direction::ACROSS,
    Direction::DIAGONAL,
    Direction::RISING,
];

/// Number of half-scans, over every cell holding `mark`, whose run is at
/// least `streak` long. Scans end at the board edge, so the result is exact
/// for any grid size.
pub fn connect_count(board: &Board, mark: Mark, streak: u32) -> u32 {
    board
        .cells_of(mark)
        .into_iter()
        .map(|anchor| {
            HALF_SCANS
                .iter()
                .filter(|direction| win::run_length(board, anchor, mark, **direction) >= streak)
                .count() as u32
        })
        .sum()
}

fn weighted_runs(board: &Board, mark: Mark, weights: &Weights) -> i32 {
    weights
        .tiers()
        .iter()
        .map(|(streak, weight)| connect_count(board, mark, *streak) as i32 * weight)
        .sum()
}

/// Run score of `mark` minus the run score of its opponent.
pub fn score_for(board: &Board, mark: Mark, weights: &Weights) -> i32 {
    weighted_runs(board, mark, weights) - weighted_runs(board, mark.opposite(), weights)
}

/// Scores `state` for the side to move with the default weights.
pub fn evaluation_function(state: &GameState) -> i32 {
    score_for(state.board(), state.to_move(), &Weights::DEFAULT)
}

/// Evaluator used by the computer players: decided positions are worth
/// `±WIN_SCORE`, anything else is scored by its runs from the searching
/// player's point of view.
///
/// Unlike `evaluation_function`, which scores for whichever side is to move,
/// every leaf is scored for the same player, so leaves at odd and even plies
/// compare on one scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeuristicEvaluator {
    weights: Weights,
}

impl HeuristicEvaluator {
    pub fn new(weights: Weights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }
}

impl Evaluator<KInARow> for HeuristicEvaluator {
    fn evaluate(&self, game: &KInARow, state: &GameState, player: Mark) -> i32 {
        if game.terminal_test(state) {
            return game.utility(state, player) * WIN_SCORE;
        }
        score_for(state.board(), player, &self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameConfig;
    use crate::grid_position;

    #[test]
    fn test_empty_board_scores_zero() {
        let game = KInARow::connect_four();
        let state = game.initial_state();
        assert_eq!(evaluation_function(&state), 0);
        for mark in Mark::ALL.iter() {
            for streak in 2..=4 {
                assert_eq!(connect_count(state.board(), *mark, streak), 0);
            }
            assert_eq!(HeuristicEvaluator::default().evaluate(&game, &state, *mark), 0);
        }
    }

    #[test]
    fn test_horizontal_three() {
        let board = grid_position! { 6, 7;
            .......
            .......
            .......
            .......
            .......
            XXX....
        };
        assert_eq!(connect_count(&board, Mark::First, 2), 2);
        assert_eq!(connect_count(&board, Mark::First, 3), 1);
        assert_eq!(connect_count(&board, Mark::First, 4), 0);
        assert_eq!(score_for(&board, Mark::First, &Weights::DEFAULT), 9);
        assert_eq!(score_for(&board, Mark::Second, &Weights::DEFAULT), -9);
    }

    #[test]
    fn test_every_line_family_scores_alike() {
        let vertical = grid_position! { 6, 7;
            .......
            .......
            .......
            ...X...
            ...X...
            ...X...
        };
        let diagonal = grid_position! { 6, 7;
            .......
            .......
            .......
            X......
            .X.....
            ..X....
        };
        let rising = grid_position! { 6, 7;
            .......
            .......
            .......
            ..X....
            .X.....
            X......
        };
        for board in [vertical, diagonal, rising].iter() {
            assert_eq!(score_for(board, Mark::First, &Weights::DEFAULT), 9, "\n{}", board);
        }
    }

    #[test]
    fn test_four_counts_in_every_tier() {
        let board = grid_position! { 6, 7;
            .......
            .......
            .......
            .......
            .......
            XXXX...
        };
        assert_eq!(connect_count(&board, Mark::First, 4), 1);
        assert_eq!(connect_count(&board, Mark::First, 3), 2);
        assert_eq!(connect_count(&board, Mark::First, 2), 3);
        assert_eq!(score_for(&board, Mark::First, &Weights::DEFAULT), 116);
    }

    #[test]
    fn test_opponent_runs_are_subtracted() {
        let board = grid_position! { 6, 7;
            .......
            .......
            .......
            .......
            OO.....
            XXX....
        };
        let config = GameConfig::connect_four();
        let state = GameState::from_board(&config, board.clone(), Mark::Second);
        assert_eq!(score_for(&board, Mark::First, &Weights::DEFAULT), 7);
        assert_eq!(evaluation_function(&state), -7);
    }

    #[test]
    fn test_scans_reach_the_far_edges() {
        let board = grid_position! { 7, 9;
            .........
            .........
            .........
            .........
            .........
            .........
            .....XXXX
        };
        assert_eq!(connect_count(&board, Mark::First, 4), 1);
        assert_eq!(score_for(&board, Mark::First, &Weights::DEFAULT), 116);
    }

    #[test]
    fn test_custom_weights() {
        let board = grid_position! { 6, 7;
            .......
            .......
            .......
            .......
            .......
            XXX....
        };
        let weights = Weights::new(10, 5, 2);
        assert_eq!(score_for(&board, Mark::First, &weights), 9);
        let weights = Weights::new(0, 0, 1);
        assert_eq!(score_for(&board, Mark::First, &weights), 2);
        assert_eq!(HeuristicEvaluator::new(weights).weights(), &weights);
    }

    #[test]
    fn test_decided_positions_score_win_score() {
        let game = KInARow::connect_four();
        let board = grid_position! { 6, 7;
            .......
            .......
            .......
            .......
            OOO....
            XXXX...
        };
        let state = GameState::from_board(game.config(), board, Mark::Second);
        let evaluator = HeuristicEvaluator::default();
        assert!(game.terminal_test(&state));
        assert_eq!(evaluator.evaluate(&game, &state, Mark::First), WIN_SCORE);
        assert_eq!(evaluator.evaluate(&game, &state, Mark::Second), -WIN_SCORE);
    }

    #[test]
    fn test_heuristic_scores_for_the_searching_player() {
        let game = KInARow::connect_four();
        let board = grid_position! { 6, 7;
            .......
            .......
            .......
            .......
            .......
            XXX.O..
        };
        let state = GameState::from_board(game.config(), board, Mark::Second);
        let evaluator = HeuristicEvaluator::default();

        assert_eq!(evaluation_function(&state), -9);
        assert_eq!(evaluator.evaluate(&game, &state, Mark::First), 9);
        assert_eq!(evaluator.evaluate(&game, &state, Mark::Second), -9);
    }
}
