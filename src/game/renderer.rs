use std::time::Duration;

use crate::alpha_beta_searcher::{Game, SearchStats};
use crate::board::{Coordinate, Mark};
use crate::game::display::GameDisplay;
use crate::game::state::GameState;
use crate::game::{win, KInARow};

pub trait GameRenderer {
    /// Shows `state` before the side to move is asked for a move.
    /// `stats` belongs to the search that produced `last_move`, if any.
    fn render(
        &mut self,
        game: &KInARow,
        state: &GameState,
        last_move: Option<Coordinate>,
        stats: Option<&SearchStats>,
    );

    /// Shows the final position and the outcome.
    fn game_over(&mut self, game: &KInARow, state: &GameState, last_move: Option<Coordinate>);

    fn frame_delay(&self) -> Option<Duration> {
        None
    }
}

/// Renders nothing. Used for headless matches and tests.
pub struct SilentRenderer;

impl GameRenderer for SilentRenderer {
    fn render(
        &mut self,
        _game: &KInARow,
        _state: &GameState,
        _last_move: Option<Coordinate>,
        _stats: Option<&SearchStats>,
    ) {
    }

    fn game_over(&mut self, _game: &KInARow, _state: &GameState, _last_move: Option<Coordinate>) {}
}

pub struct TerminalRenderer {
    ui: GameDisplay,
    pub show_stats: bool,
    /// The engine can calculate moves very quickly, so adding a slight delay
    /// between moves makes the game easier to observe.
    pub delay_between_moves: Option<Duration>,
}

impl TerminalRenderer {
    pub fn new(show_stats: bool, delay_between_moves: Option<Duration>) -> Self {
        Self {
            ui: GameDisplay::new(),
            show_stats,
            delay_between_moves,
        }
    }
}

impl GameRenderer for TerminalRenderer {
    fn render(
        &mut self,
        _game: &KInARow,
        state: &GameState,
        last_move: Option<Coordinate>,
        stats: Option<&SearchStats>,
    ) {
        let stats_display = match stats {
            Some(stats) if self.show_stats => Some(format_stats(stats)),
            _ => None,
        };
        self.ui.render_game_state(
            state.board(),
            state.to_move(),
            last_move,
            stats_display.as_deref(),
        );
    }

    fn game_over(&mut self, game: &KInARow, state: &GameState, last_move: Option<Coordinate>) {
        let outcome = describe_outcome(game, state, last_move);
        self.ui
            .render_game_state(state.board(), state.to_move(), last_move, Some(&outcome));
    }

    fn frame_delay(&self) -> Option<Duration> {
        self.delay_between_moves
    }
}

pub fn format_stats(stats: &SearchStats) -> String {
    format!(
        "* Score: {}\n* Positions searched: {} (cutoffs: {})\n* Move took: {}",
        stats.last_score.map_or("-".to_string(), |s| s.to_string()),
        stats.positions_searched,
        stats.cutoffs,
        stats
            .last_duration
            .map_or("-".to_string(), |d| format!("{:?}", d))
    )
}

/// One line summing up how a finished match ended, naming the completed line
/// when the deciding move is known.
pub fn describe_outcome(game: &KInARow, state: &GameState, last_move: Option<Coordinate>) -> String {
    let winner = Mark::ALL
        .iter()
        .copied()
        .find(|mark| game.utility(state, *mark) > 0);

    let winner = match winner {
        Some(winner) => winner,
        None => return "Draw!".to_string(),
    };

    let line = last_move.and_then(|last_move| {
        win::winning_line(state.board(), last_move, winner, game.config().k)
            .map(|direction| (last_move, direction))
    });
    match line {
        Some((last_move, direction)) => format!(
            "{} wins with {} in a row {} through {}!",
            winner,
            game.config().k,
            direction.line_name(),
            last_move
        ),
        None => format!("{} wins!", winner),
    }
}
