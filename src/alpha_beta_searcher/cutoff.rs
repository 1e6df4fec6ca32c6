use super::{CutoffTest, Game};

/// The default cutoff: stop below `depth` plies or at a terminal state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepthCutoff {
    depth: u8,
}

impl DepthCutoff {
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }
}

impl<G: Game + ?Sized> CutoffTest<G> for DepthCutoff {
    #[inline]
    fn cutoff(&self, game: &G, state: &G::State, ply: u8) -> bool {
        ply > self.depth || game.terminal_test(state)
    }
}
