//! Watch command - watch the computer play against itself.

use std::time::Duration;

use kinrow::game::renderer::TerminalRenderer;
use structopt::StructOpt;

use super::util::{create_config_or_exit, run_game_loop, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let config = create_config_or_exit(&self.game, Some(self.depth));
        let mut first = config.search_player();
        let mut second = config.search_player();
        let renderer = TerminalRenderer::new(true, Some(Duration::from_millis(self.delay_ms)));
        run_game_loop(&config, [&mut first, &mut second], renderer);
    }
}
