//! Alpha-beta search with a cutoff test and an evaluation function.
//!
//! # Core Algorithm
//!
//! Alpha-beta pruning is an optimization of minimax search that maintains a window [alpha, beta]
//! representing the range of scores that matter. Moves that fall outside this window can be
//! pruned without affecting the final result. The algorithm guarantees finding the same value as
//! minimax but explores fewer nodes.
//!
//! `max_value` scores positions where the root player moves and `min_value` positions where the
//! opponent moves. Both stop descending wherever the `CutoffTest` says so and score the position
//! with the `Evaluator` instead, always from the root player's perspective.
//!
//! # Determinism
//!
//! Every call searches from scratch: there is no move ordering beyond the order of
//! `Game::actions`, no iterative deepening and no transposition table. Among root moves of equal
//! value the first one listed wins.
//!
//! # Cancellation
//!
//! A `CancellationToken` attached to the `SearchContext` is sampled at every node. Raising it
//! aborts the search with `SearchError::Cancelled`; it never changes which branches are pruned.

use std::cmp::{max, min};
use std::time::{Duration, Instant};

use log::{debug, trace, warn};
use thiserror::Error;
#[cfg(feature = "instrumentation")]
use tracing::instrument;

use super::{CancellationToken, CutoffTest, DepthCutoff, Evaluator, Game};

pub const DEFAULT_SEARCH_DEPTH: u8 = 4;

const NEG_INFINITY: i32 = i32::MIN;
const POS_INFINITY: i32 = i32::MAX;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SearchError {
    #[error("search was cancelled")]
    Cancelled,
}

/// Statistics collected during the most recent search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub positions_searched: usize,
    pub evaluations: usize,
    pub cutoffs: usize,
    pub last_score: Option<i32>,
    pub last_duration: Option<Duration>,
}

impl SearchStats {
    fn reset(&mut self) {
        *self = Self::default();
    }

    fn record_result(&mut self, score: Option<i32>, duration: Duration) {
        self.last_score = score;
        self.last_duration = Some(duration);
    }
}

/// Per-search bookkeeping: statistics and the optional cancellation token.
#[derive(Debug, Default)]
pub struct SearchContext {
    stats: SearchStats,
    cancellation: Option<CancellationToken>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancellation(cancellation: CancellationToken) -> Self {
        Self {
            stats: SearchStats::default(),
            cancellation: Some(cancellation),
        }
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn searched_position_count(&self) -> usize {
        self.stats.positions_searched
    }

    pub fn cutoff_count(&self) -> usize {
        self.stats.cutoffs
    }

    pub fn last_score(&self) -> Option<i32> {
        self.stats.last_score
    }

    pub fn last_search_duration(&self) -> Option<Duration> {
        self.stats.last_duration
    }

    pub fn reset_stats(&mut self) {
        self.stats.reset();
    }

    /// Counts a node and checks for cancellation.
    fn visit(&mut self) -> Result<(), SearchError> {
        self.stats.positions_searched += 1;
        match &self.cancellation {
            Some(token) if token.is_cancelled() => Err(SearchError::Cancelled),
            _ => Ok(()),
        }
    }
}

/// The default evaluation: the game's true utility for the root player.
#[derive(Clone, Copy, Debug, Default)]
pub struct UtilityEvaluator;

impl<G: Game + ?Sized> Evaluator<G> for UtilityEvaluator {
    #[inline]
    fn evaluate(&self, game: &G, state: &G::State, player: G::Player) -> i32 {
        game.utility(state, player)
    }
}

/// Everything the recursion needs that does not change from node to node.
struct SearchParams<'a, G: Game + ?Sized, C: ?Sized, E: ?Sized> {
    game: &'a G,
    cutoff: &'a C,
    evaluator: &'a E,
    player: G::Player,
}

impl<'a, G, C, E> SearchParams<'a, G, C, E>
where
    G: Game + ?Sized,
    C: CutoffTest<G> + ?Sized,
    E: Evaluator<G> + ?Sized,
{
    fn leaf_score(
        &self,
        context: &mut SearchContext,
        state: &G::State,
        ply: u8,
    ) -> Option<i32> {
        if !self.cutoff.cutoff(self.game, state, ply) {
            return None;
        }
        context.stats.evaluations += 1;
        let score = self.evaluator.evaluate(self.game, state, self.player);
        trace!("eval score at ply {}: {}", ply, score);
        Some(score)
    }
}

fn max_value<G, C, E>(
    params: &SearchParams<G, C, E>,
    context: &mut SearchContext,
    state: &G::State,
    mut alpha: i32,
    beta: i32,
    ply: u8,
) -> Result<i32, SearchError>
where
    G: Game + ?Sized,
    C: CutoffTest<G> + ?Sized,
    E: Evaluator<G> + ?Sized,
{
    context.visit()?;
    if let Some(score) = params.leaf_score(context, state, ply) {
        return Ok(score);
    }

    let mut value = NEG_INFINITY;
    for action in params.game.actions(state) {
        let child = params.game.result(state, &action);
        value = max(
            value,
            min_value(params, context, &child, alpha, beta, ply.saturating_add(1))?,
        );
        if value >= beta {
            context.stats.cutoffs += 1;
            return Ok(value);
        }
        alpha = max(alpha, value);
    }

    Ok(value)
}

fn min_value<G, C, E>(
    params: &SearchParams<G, C, E>,
    context: &mut SearchContext,
    state: &G::State,
    alpha: i32,
    mut beta: i32,
    ply: u8,
) -> Result<i32, SearchError>
where
    G: Game + ?Sized,
    C: CutoffTest<G> + ?Sized,
    E: Evaluator<G> + ?Sized,
{
    context.visit()?;
    if let Some(score) = params.leaf_score(context, state, ply) {
        return Ok(score);
    }

    let mut value = POS_INFINITY;
    for action in params.game.actions(state) {
        let child = params.game.result(state, &action);
        value = min(
            value,
            max_value(params, context, &child, alpha, beta, ply.saturating_add(1))?,
        );
        if value <= alpha {
            context.stats.cutoffs += 1;
            return Ok(value);
        }
        beta = min(beta, value);
    }

    Ok(value)
}

/// Searches for the best move for the side to move in `state`.
///
/// Each root action is scored by `min_value` of its result (ply 1) with the window
/// `(best score so far, +inf)`. The first action with the strictly highest score is returned.
///
/// # Returns
///
/// - `Ok(Some(best_move))` - The best move found
/// - `Ok(None)` - The root has no legal actions; the caller should pass
/// - `Err(SearchError::Cancelled)` - The context's cancellation token was raised
///
/// # Examples
///
/// ```ignore
/// let mut context = SearchContext::new();
/// let best_move = alpha_beta_search(
///     &mut context,
///     &game,
///     &state,
///     &DepthCutoff::new(4),
///     &HeuristicEvaluator::default(),
/// )?;
/// ```
#[must_use = "search returns the best move found"]
#[cfg_attr(feature = "instrumentation", instrument(skip_all))]
pub fn alpha_beta_search<G, C, E>(
    context: &mut SearchContext,
    game: &G,
    state: &G::State,
    cutoff: &C,
    evaluator: &E,
) -> Result<Option<G::Move>, SearchError>
where
    G: Game + ?Sized,
    C: CutoffTest<G> + ?Sized,
    E: Evaluator<G> + ?Sized,
{
    context.reset_stats();
    let start = Instant::now();

    let params = SearchParams {
        game,
        cutoff,
        evaluator,
        player: game.to_move(state),
    };
    debug!("alpha-beta search for {:?}", params.player);
    context.visit()?;

    let mut best: Option<(i32, G::Move)> = None;
    for action in game.actions(state) {
        let best_score = best.as_ref().map_or(NEG_INFINITY, |(score, _)| *score);
        let child = game.result(state, &action);
        let score = min_value(&params, context, &child, best_score, POS_INFINITY, 1)?;
        debug!("root move {:?} scored {}", action, score);

        let improves = match &best {
            Some((best_score, _)) => score > *best_score,
            None => true,
        };
        if improves {
            best = Some((score, action));
        }
    }

    let duration = start.elapsed();
    context
        .stats
        .record_result(best.as_ref().map(|(score, _)| *score), duration);

    match &best {
        Some((score, best_move)) => debug!(
            "best move {:?} (score {}, {} positions, {} cutoffs, {:?})",
            best_move, score, context.stats.positions_searched, context.stats.cutoffs, duration
        ),
        None => debug!("no legal moves at the root"),
    }

    Ok(best.map(|(_, best_move)| best_move))
}

/// Convenience entry point: a fresh, uncancellable search to `depth` plies.
/// Without an `evaluator` the root player's true utility is used, which only
/// distinguishes positions the search can see to the end.
pub fn search_best_move<G>(
    state: &G::State,
    game: &G,
    depth: u8,
    evaluator: Option<&dyn Evaluator<G>>,
) -> Option<G::Move>
where
    G: Game,
{
    let mut context = SearchContext::new();
    let cutoff = DepthCutoff::new(depth);
    let result = match evaluator {
        Some(evaluator) => alpha_beta_search(&mut context, game, state, &cutoff, evaluator),
        None => alpha_beta_search(&mut context, game, state, &cutoff, &UtilityEvaluator),
    };

    result.unwrap_or_else(|error| {
        warn!("search failed: {}", error);
        None
    })
}
