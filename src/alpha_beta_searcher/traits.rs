//! Core traits for generic alpha-beta search.

use std::fmt::Debug;

/// A two-player, zero-sum, perfect-information game.
///
/// Implementations must treat states as values: `result` returns a new state
/// and never changes the one it was given, because sibling branches of the
/// search share their parent.
pub trait Game {
    type State: Clone;
    type Move: Clone + PartialEq + Debug;
    type Player: Copy + PartialEq + Debug;

    /// Legal moves in a stable, reproducible order.
    fn actions(&self, state: &Self::State) -> Vec<Self::Move>;

    /// The state reached by playing `game_move`. An illegal move has no
    /// effect and yields a copy of `state`.
    fn result(&self, state: &Self::State, game_move: &Self::Move) -> Self::State;

    /// The final value of `state` for `player`; 0 for non-terminal states.
    fn utility(&self, state: &Self::State, player: Self::Player) -> i32;

    fn terminal_test(&self, state: &Self::State) -> bool;

    fn to_move(&self, state: &Self::State) -> Self::Player;
}

/// Scores a position where the search stops descending. Higher is better for
/// `player`, the side to move at the root of the search.
pub trait Evaluator<G: Game + ?Sized> {
    fn evaluate(&self, game: &G, state: &G::State, player: G::Player) -> i32;
}

impl<G, F> Evaluator<G> for F
where
    G: Game + ?Sized,
    F: Fn(&G, &G::State, G::Player) -> i32,
{
    #[inline]
    fn evaluate(&self, game: &G, state: &G::State, player: G::Player) -> i32 {
        self(game, state, player)
    }
}

/// Decides whether the search stops at `state`, `ply` moves below the root.
pub trait CutoffTest<G: Game + ?Sized> {
    fn cutoff(&self, game: &G, state: &G::State, ply: u8) -> bool;
}
