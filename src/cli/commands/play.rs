//! Play command - play a game against the computer.

use kinrow::board::Mark;
use kinrow::game::renderer::TerminalRenderer;
use kinrow::player::{HumanPlayer, Player};
use structopt::StructOpt;

use super::util::{create_config_or_exit, run_game_loop, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PlayArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(short = "m", long = "mark", default_value = "random")]
    pub mark: Mark,
    #[structopt(long = "no-hints", help = "Do not show the engine's suggested move")]
    pub no_hints: bool,
}

impl Command for PlayArgs {
    fn execute(self) {
        let config = create_config_or_exit(&self.game, Some(self.depth));
        let hint_depth = if self.no_hints { None } else { Some(config.depth) };
        let mut human = HumanPlayer::stdin(hint_depth);
        let mut engine = config.search_player();
        let human: &mut dyn Player = &mut human;
        let engine: &mut dyn Player = &mut engine;

        let players = match self.mark {
            Mark::First => [human, engine],
            Mark::Second => [engine, human],
        };
        run_game_loop(&config, players, TerminalRenderer::new(true, None));
    }
}
