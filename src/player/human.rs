use std::io::{self, BufRead, Write};

use log::debug;

use crate::alpha_beta_searcher::{search_best_move, Evaluator, Game};
use crate::board::Coordinate;
use crate::evaluate::HeuristicEvaluator;
use crate::game::{GameState, KInARow, Legality};
use crate::input_handler::{read_move_input, InputError, MoveInput, StdinLines};

use super::{Player, PlayerError};

/// A person at the keyboard. Before each prompt the player is shown the
/// legal moves and, when `hint_depth` is set, the move the engine would pick.
pub struct HumanPlayer<R: BufRead> {
    input: R,
    hint_depth: Option<u8>,
}

impl HumanPlayer<StdinLines> {
    pub fn stdin(hint_depth: Option<u8>) -> Self {
        Self::new(StdinLines::new(), hint_depth)
    }
}

impl<R: BufRead> HumanPlayer<R> {
    pub fn new(input: R, hint_depth: Option<u8>) -> Self {
        Self { input, hint_depth }
    }

    fn show_hint(&self, game: &KInARow, state: &GameState) {
        let depth = match self.hint_depth {
            Some(depth) => depth,
            None => return,
        };
        let evaluator = HeuristicEvaluator::default();
        let hint = search_best_move(
            state,
            game,
            depth,
            Some(&evaluator as &dyn Evaluator<KInARow>),
        );
        if let Some(hint) = hint {
            println!("suggested move: {}", hint);
        }
    }
}

/// Turns typed input into a cell. A bare column only names a cell when marks
/// drop under gravity, where it means the lowest empty cell of that column.
fn resolve_input(game: &KInARow, actions: &[Coordinate], input: MoveInput) -> Option<Coordinate> {
    match input {
        MoveInput::Cell { coordinate } => Some(coordinate),
        MoveInput::Column { column } => match game.config().legality {
            Legality::Gravity => actions.iter().copied().find(|action| action.y == column),
            Legality::Anywhere => None,
        },
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    fn choose_move(
        &mut self,
        game: &KInARow,
        state: &GameState,
    ) -> Result<Option<Coordinate>, PlayerError> {
        let actions = game.actions(state);
        if actions.is_empty() {
            println!("no legal moves: passing");
            return Ok(None);
        }

        self.show_hint(game, state);
        let listed: Vec<String> = actions.iter().map(|action| action.to_string()).collect();
        println!("available moves: {}", listed.join(" "));

        loop {
            print!("your move? ");
            io::stdout().flush().map_err(InputError::from)?;

            match read_move_input(&mut self.input) {
                Ok(input) => match resolve_input(game, &actions, input) {
                    Some(coordinate) if actions.contains(&coordinate) => {
                        return Ok(Some(coordinate))
                    }
                    Some(coordinate) => println!("illegal move: {}", coordinate),
                    None => match (input, game.config().legality) {
                        (MoveInput::Column { column }, Legality::Gravity) => {
                            println!("column {} is full or off the board", column)
                        }
                        _ => println!("enter a move as row,column"),
                    },
                },
                Err(InputError::InvalidInput { input }) => {
                    debug!("rejected input {:?}", input);
                    println!("could not read {:?}; enter a move as row,column", input);
                }
                Err(error) => return Err(error.into()),
            }
        }
    }
}
