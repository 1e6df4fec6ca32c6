//! Generic depth-limited alpha-beta search over the `Game` contract.

mod cancellation;
mod cutoff;
mod search;
mod traits;


pub use cancellation::CancellationToken;
pub use cutoff::DepthCutoff;
pub use search::{
    alpha_beta_search, search_best_move, SearchContext, SearchError, SearchStats,
    UtilityEvaluator, DEFAULT_SEARCH_DEPTH,
};
pub use traits::{CutoffTest, Evaluator, Game};
