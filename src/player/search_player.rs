use log::info;

use crate::alpha_beta_searcher::{
    alpha_beta_search, CancellationToken, DepthCutoff, SearchContext, SearchStats,
    DEFAULT_SEARCH_DEPTH,
};
use crate::board::Coordinate;
use crate::evaluate::HeuristicEvaluator;
use crate::game::{GameState, KInARow};

use super::{Player, PlayerError};

/// The computer player: an alpha-beta search to a fixed depth, scoring the
/// positions where it stops with a `HeuristicEvaluator`.
#[derive(Debug)]
pub struct SearchPlayer {
    cutoff: DepthCutoff,
    evaluator: HeuristicEvaluator,
    context: SearchContext,
}

impl SearchPlayer {
    pub fn new(depth: u8) -> Self {
        Self::with_evaluator(depth, HeuristicEvaluator::default())
    }

    pub fn with_evaluator(depth: u8, evaluator: HeuristicEvaluator) -> Self {
        Self {
            cutoff: DepthCutoff::new(depth),
            evaluator,
            context: SearchContext::new(),
        }
    }

    /// Lets another thread abort this player's searches through `token`.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.context = SearchContext::with_cancellation(token);
        self
    }

    pub fn depth(&self) -> u8 {
        self.cutoff.depth()
    }
}

impl Default for SearchPlayer {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DEPTH)
    }
}

impl Player for SearchPlayer {
    fn choose_move(
        &mut self,
        game: &KInARow,
        state: &GameState,
    ) -> Result<Option<Coordinate>, PlayerError> {
        let best_move =
            alpha_beta_search(&mut self.context, game, state, &self.cutoff, &self.evaluator)?;
        if best_move.is_none() {
            info!("{} has no legal moves: passing", state.to_move());
        }
        Ok(best_move)
    }

    fn last_search_stats(&self) -> Option<&SearchStats> {
        Some(self.context.stats())
    }
}
