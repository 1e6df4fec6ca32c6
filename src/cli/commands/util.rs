//! Shared utilities for CLI commands.

use std::process;

use kinrow::alpha_beta_searcher::DEFAULT_SEARCH_DEPTH;
use kinrow::game::renderer::GameRenderer;
use kinrow::game::{ConfigError, GameConfig, KInARow, Legality, MatchConfig, MatchError};
use kinrow::input_handler::InputError;
use kinrow::player::{Player, PlayerError};
use structopt::StructOpt;

/// Board shape and rules shared by every command. The defaults are Connect
/// Four.
#[derive(StructOpt)]
pub struct GameArgs {
    #[structopt(long, default_value = "6", help = "Number of rows")]
    pub height: u8,
    #[structopt(long, default_value = "7", help = "Number of columns")]
    pub width: u8,
    #[structopt(short, long, default_value = "4", help = "Length of a winning line")]
    pub k: u8,
    #[structopt(
        short,
        long,
        default_value = "gravity",
        help = "`gravity` to drop marks down columns, `anywhere` for free placement"
    )]
    pub rules: Legality,
}

impl GameArgs {
    /// Builds the match configuration, searching to `depth` plies when one is
    /// given and to the default depth otherwise.
    pub fn create_config(&self, depth: Option<u8>) -> Result<MatchConfig, ConfigError> {
        let config = GameConfig::new(self.height, self.width, self.k, self.rules);
        config.validate()?;
        Ok(MatchConfig::new(
            KInARow::new(config),
            depth.unwrap_or(DEFAULT_SEARCH_DEPTH),
        ))
    }
}

pub(crate) fn create_config_or_exit(args: &GameArgs, depth: Option<u8>) -> MatchConfig {
    match args.create_config(depth) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid game: {}", error);
            process::exit(2);
        }
    }
}

pub(crate) fn run_game_loop<R: GameRenderer>(
    config: &MatchConfig,
    players: [&mut dyn Player; 2],
    renderer: R,
) {
    match config.game_loop(renderer).run(players) {
        Ok(_) => {}
        Err(MatchError::Player {
            source: PlayerError::Input(InputError::UserExit),
            ..
        }) => println!("\nGoodbye!"),
        Err(error) => {
            eprintln!("match aborted: {}", error);
            process::exit(1);
        }
    }
}
