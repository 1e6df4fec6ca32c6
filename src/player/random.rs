use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::alpha_beta_searcher::Game;
use crate::board::Coordinate;
use crate::game::{GameState, KInARow};

use super::{Player, PlayerError};

/// Plays a uniformly random legal move. Seeded players are reproducible.
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn choose_move(
        &mut self,
        game: &KInARow,
        state: &GameState,
    ) -> Result<Option<Coordinate>, PlayerError> {
        Ok(game.actions(state).choose(&mut self.rng).copied())
    }
}
