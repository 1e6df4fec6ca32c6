pub mod config;
pub mod display;
pub mod game_loop;
pub mod k_in_a_row;
pub mod renderer;
pub mod state;
pub mod win;

pub use config::{ConfigError, GameConfig, Legality};
pub use game_loop::{play_game, GameLoop, MatchConfig, MatchError};
pub use k_in_a_row::{create_game, KInARow};
pub use state::GameState;
