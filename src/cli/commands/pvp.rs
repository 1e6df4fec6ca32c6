//! PvP command - play a game against another human.

use kinrow::game::renderer::TerminalRenderer;
use kinrow::player::HumanPlayer;
use structopt::StructOpt;

use super::util::{create_config_or_exit, run_game_loop, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct PvpArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
}

impl Command for PvpArgs {
    fn execute(self) {
        let config = create_config_or_exit(&self.game, None);
        let mut first = HumanPlayer::stdin(None);
        let mut second = HumanPlayer::stdin(None);
        run_game_loop(
            &config,
            [&mut first, &mut second],
            TerminalRenderer::new(false, None),
        );
    }
}
