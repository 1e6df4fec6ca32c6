use log::{info, warn};
use thiserror::Error;

use crate::alpha_beta_searcher::{Game, DEFAULT_SEARCH_DEPTH};
use crate::board::{Coordinate, Mark};
use crate::player::{Player, PlayerError, SearchPlayer};

use super::k_in_a_row::KInARow;
use super::renderer::GameRenderer;
use super::state::GameState;

/// What a match is played on and how deep the computer players search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    pub game: KInARow,
    pub depth: u8,
}

impl MatchConfig {
    pub fn new(game: KInARow, depth: u8) -> Self {
        Self { game, depth }
    }

    /// A computer player searching to this match's depth.
    pub fn search_player(&self) -> SearchPlayer {
        SearchPlayer::new(self.depth)
    }

    /// A loop over this match's game, starting from the empty board.
    pub fn game_loop<R: GameRenderer>(&self, renderer: R) -> GameLoop<R> {
        GameLoop::new(self.game.clone(), renderer)
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            game: KInARow::connect_four(),
            depth: DEFAULT_SEARCH_DEPTH,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum MatchError {
    #[error("player {mark} failed: {source}")]
    Player { mark: Mark, source: PlayerError },
    #[error("player {mark} chose illegal move {coordinate}")]
    IllegalMove { mark: Mark, coordinate: Coordinate },
    #[error("player {mark} passed with legal moves available")]
    UnexpectedPass { mark: Mark },
}

/// Drives a match: asks the player whose mark is to move for a move, applies
/// it and renders the result, until the game is over.
pub struct GameLoop<R: GameRenderer> {
    game: KInARow,
    state: GameState,
    history: Vec<Coordinate>,
    renderer: R,
}

impl<R: GameRenderer> GameLoop<R> {
    pub fn new(game: KInARow, renderer: R) -> Self {
        let state = game.initial_state();
        Self::from_state(game, state, renderer)
    }

    /// Starts the match from a position other than the empty board.
    pub fn from_state(game: KInARow, state: GameState, renderer: R) -> Self {
        Self {
            game,
            state,
            history: Vec::new(),
            renderer,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Moves played so far, in order.
    pub fn history(&self) -> &[Coordinate] {
        &self.history
    }

    /// Plays until the game is over. `players` is indexed by `Mark::index`.
    /// Returns the final utility for `First`, the mark that opens the game.
    pub fn run(&mut self, players: [&mut dyn Player; 2]) -> Result<i32, MatchError> {
        info!("starting match: {}", self.game.config());

        while !self.game.terminal_test(&self.state) {
            let mark = self.state.to_move();
            let last_move = self.history.last().copied();
            let stats = players[mark.opposite().index()].last_search_stats();
            self.renderer
                .render(&self.game, &self.state, last_move, stats);

            let chosen = players[mark.index()]
                .choose_move(&self.game, &self.state)
                .map_err(|source| MatchError::Player { mark, source })?;

            match chosen {
                Some(coordinate) if self.game.actions(&self.state).contains(&coordinate) => {
                    self.state = self.game.result(&self.state, &coordinate);
                    self.history.push(coordinate);
                    if let Some(delay) = self.renderer.frame_delay() {
                        std::thread::sleep(delay);
                    }
                }
                Some(coordinate) => {
                    warn!("{} submitted illegal move {}", mark, coordinate);
                    return Err(MatchError::IllegalMove { mark, coordinate });
                }
                None => {
                    warn!("{} passed in a position with legal moves", mark);
                    return Err(MatchError::UnexpectedPass { mark });
                }
            }
        }

        let last_move = self.history.last().copied();
        self.renderer.game_over(&self.game, &self.state, last_move);

        let utility = self.game.utility(&self.state, Mark::First);
        info!(
            "match over after {} moves: utility {} for {}",
            self.history.len(),
            utility,
            Mark::First
        );
        Ok(utility)
    }
}

/// Plays a full match from the initial position of `game`.
pub fn play_game<R: GameRenderer>(
    game: &KInARow,
    players: [&mut dyn Player; 2],
    renderer: R,
) -> Result<i32, MatchError> {
    GameLoop::new(game.clone(), renderer).run(players)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::renderer::SilentRenderer;
    use crate::player::RandomPlayer;

    fn first_action(game: &KInARow, state: &GameState) -> Result<Option<Coordinate>, PlayerError> {
        Ok(game.actions(state).first().copied())
    }

    #[test]
    fn test_first_action_players_on_tic_tac_toe() {
        let game = KInARow::tic_tac_toe();
        let mut first = first_action;
        let mut second = first_action;
        let mut game_loop = GameLoop::new(game, SilentRenderer);

        // X: (1,1) (1,3) (2,2) (3,1); O: (1,2) (2,1) (2,3)
        assert_eq!(game_loop.run([&mut first, &mut second]), Ok(1));
        assert_eq!(game_loop.history().len(), 7);
        assert_eq!(game_loop.history().last(), Some(&Coordinate::new(3, 1)));
    }

    #[test]
    fn test_search_never_loses_to_random_at_tic_tac_toe() {
        let game = KInARow::tic_tac_toe();
        for seed in 0..5 {
            let mut engine = SearchPlayer::new(9);
            let mut random = RandomPlayer::seeded(seed);
            let utility = play_game(&game, [&mut engine, &mut random], SilentRenderer).unwrap();
            assert!(utility >= 0, "seed {} lost as X", seed);

            let mut engine = SearchPlayer::new(9);
            let mut random = RandomPlayer::seeded(seed);
            let utility = play_game(&game, [&mut random, &mut engine], SilentRenderer).unwrap();
            assert!(utility <= 0, "seed {} lost as O", seed);
        }
    }

    #[test]
    fn test_illegal_move_is_reported() {
        let game = KInARow::connect_four();
        let mut floating = |_: &KInARow, _: &GameState| {
            Ok::<_, PlayerError>(Some(Coordinate::new(1, 1)))
        };
        let mut random = RandomPlayer::seeded(1);
        assert_eq!(
            play_game(&game, [&mut floating, &mut random], SilentRenderer),
            Err(MatchError::IllegalMove {
                mark: Mark::First,
                coordinate: Coordinate::new(1, 1)
            })
        );
    }

    #[test]
    fn test_pass_with_moves_is_reported() {
        let game = KInARow::tic_tac_toe();
        let mut random = RandomPlayer::seeded(3);
        let mut passer = |_: &KInARow, _: &GameState| Ok::<Option<Coordinate>, PlayerError>(None);
        assert_eq!(
            play_game(&game, [&mut random, &mut passer], SilentRenderer),
            Err(MatchError::UnexpectedPass { mark: Mark::Second })
        );
    }

    #[test]
    fn test_default_match_config() {
        let config = MatchConfig::default();
        assert_eq!(config.game, KInARow::connect_four());
        assert_eq!(config.depth, 4);
        assert_eq!(config.search_player().depth(), 4);
    }

    #[test]
    fn test_match_config_drives_a_match() {
        let config = MatchConfig::new(KInARow::tic_tac_toe(), 9);
        let mut first = config.search_player();
        let mut second = config.search_player();
        assert_eq!(first.depth(), 9);

        let mut game_loop = config.game_loop(SilentRenderer);
        assert_eq!(game_loop.run([&mut first, &mut second]), Ok(0));
        assert_eq!(game_loop.history().len(), 9);
    }
}
