//! Strategies that pick a move for one side of a match.
//!
//! A player is anything that, given the game and the current state, returns a
//! move to play or `None` to pass. Closures with that shape are players too.

use thiserror::Error;

use crate::alpha_beta_searcher::{SearchError, SearchStats};
use crate::board::Coordinate;
use crate::game::{GameState, KInARow};
use crate::input_handler::InputError;

mod human;
mod random;
mod search_player;

pub use human::HumanPlayer;
pub use random::RandomPlayer;
pub use search_player::SearchPlayer;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlayerError {
    #[error("input error: {0}")]
    Input(#[from] InputError),
    #[error("search error: {0}")]
    Search(#[from] SearchError),
}

pub trait Player {
    /// Picks a move for the side to move in `state`. `Ok(None)` means the
    /// player passes, which only happens when there is nothing to play.
    fn choose_move(
        &mut self,
        game: &KInARow,
        state: &GameState,
    ) -> Result<Option<Coordinate>, PlayerError>;

    /// Statistics of the player's most recent search, for players that search.
    fn last_search_stats(&self) -> Option<&SearchStats> {
        None
    }
}

impl<F> Player for F
where
    F: FnMut(&KInARow, &GameState) -> Result<Option<Coordinate>, PlayerError>,
{
    fn choose_move(
        &mut self,
        game: &KInARow,
        state: &GameState,
    ) -> Result<Option<Coordinate>, PlayerError> {
        self(game, state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alpha_beta_searcher::Game;

    #[test]
    fn test_closure_is_a_player() {
        let mut first_action = |game: &KInARow, state: &GameState| {
            Ok::<_, PlayerError>(game.actions(state).first().copied())
        };
        let game = KInARow::connect_four();
        let chosen = first_action.choose_move(&game, &game.initial_state());
        assert_eq!(chosen, Ok(Some(Coordinate::new(6, 1))));
        assert!(first_action.last_search_stats().is_none());
    }

    #[test]
    fn test_error_conversions() {
        let error: PlayerError = InputError::UserExit.into();
        assert_eq!(error, PlayerError::Input(InputError::UserExit));
        let error: PlayerError = SearchError::Cancelled.into();
        assert_eq!(error.to_string(), "search error: search was cancelled");
    }
}
