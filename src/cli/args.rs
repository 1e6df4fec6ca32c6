//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{
    best_move::BestMoveArgs, play::PlayArgs, pvp::PvpArgs, watch::WatchArgs, Command,
};

#[derive(StructOpt)]
#[structopt(
    name = "kinrow",
    about = "k-in-a-row games (Connect Four, tic-tac-toe and friends) with an alpha-beta engine"
)]
pub enum Kinrow {
    #[structopt(
        name = "play",
        about = "Play a game against the computer, which will search for the best move using alpha-beta pruning at the given `--depth` (default: 4). Your mark will be chosen at random unless you specify it with `--mark`. Before each of your moves the engine's suggestion is shown, unless `--no-hints` is given. The board is Connect Four unless `--height`, `--width`, `--k` and `--rules` say otherwise."
    )]
    Play(PlayArgs),
    #[structopt(
        name = "pvp",
        about = "Play a game against another human on this local machine. Moves are entered as `row,column`."
    )]
    Pvp(PvpArgs),
    #[structopt(
        name = "watch",
        about = "Watch the computer play against itself at the given `--depth` (default: 4)."
    )]
    Watch(WatchArgs),
    #[structopt(
        name = "best-move",
        about = "Print the engine's move for the position reached by playing the given moves from the empty board, e.g. `best-move 6,4 5,4 6,3`. The search depth is set with `--depth` (default: 4)."
    )]
    BestMove(BestMoveArgs),
}

impl Command for Kinrow {
    fn execute(self) {
        macro_rules! execute_command {
            ($($variant:ident($cmd:ident)),+ $(,)?) => {
                match self {
                    $(Self::$variant($cmd) => $cmd.execute(),)+
                }
            };
        }

        execute_command! {
            Play(cmd),
            Pvp(cmd),
            Watch(cmd),
            BestMove(cmd),
        }
    }
}
