//! Common types re-exported for convenience.

pub use crate::alpha_beta_searcher::{alpha_beta_search, search_best_move, Game};
pub use crate::board::{Board, Coordinate, Mark};
pub use crate::evaluate::HeuristicEvaluator;
pub use crate::game::{create_game, GameState, KInARow};
pub use crate::player::Player;
pub use common::grid::CellSet;
