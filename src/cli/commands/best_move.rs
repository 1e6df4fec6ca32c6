//! Best move command - determine the engine's move for a position.

use kinrow::alpha_beta_searcher::{alpha_beta_search, DepthCutoff, Game, SearchContext};
use kinrow::board::Coordinate;
use kinrow::evaluate::HeuristicEvaluator;
use kinrow::game::renderer::format_stats;
use structopt::StructOpt;

use super::util::{create_config_or_exit, GameArgs};
use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(flatten)]
    pub game: GameArgs,
    #[structopt(short, long, default_value = "4")]
    pub depth: u8,
    #[structopt(long, help = "Also print the search statistics")]
    pub stats: bool,
    #[structopt(help = "Moves played so far, as `row,column`, alternating from X")]
    pub moves: Vec<Coordinate>,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        let config = create_config_or_exit(&self.game, Some(self.depth));
        let game = &config.game;

        let mut state = game.initial_state();
        for coordinate in &self.moves {
            if game.terminal_test(&state) || !game.actions(&state).contains(coordinate) {
                eprintln!("{} is not a legal move in this position:\n{}", coordinate, state.board());
                std::process::exit(2);
            }
            state = game.result(&state, coordinate);
        }

        if game.terminal_test(&state) {
            eprintln!("The game is already over:\n{}", state.board());
            return;
        }

        let mut context = SearchContext::new();
        let cutoff = DepthCutoff::new(config.depth);
        match alpha_beta_search(&mut context, game, &state, &cutoff, &HeuristicEvaluator::default()) {
            Ok(Some(best_move)) => {
                println!("{}", best_move);
                if self.stats {
                    eprintln!("{}", format_stats(context.stats()));
                }
            }
            Ok(None) => eprintln!("There are no valid moves in the given position."),
            Err(err) => eprintln!("Failed to calculate best move: {}", err),
        }
    }
}
