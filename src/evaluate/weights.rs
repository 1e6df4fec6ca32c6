/// Added to (or subtracted from) the score of a decided position, far above
/// anything the run counts can reach, so a forced win always beats a good
/// looking position and a forced loss is avoided at almost any cost.
pub const WIN_SCORE: i32 = 1_000_000;

/// Points awarded per run of at least four, three and two marks.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Weights {
    pub four: i32,
    pub three: i32,
    pub two: i32,
}

impl Weights {
    pub const DEFAULT: Weights = Weights::new(100, 5, 2);

    pub const fn new(four: i32, three: i32, two: i32) -> Self {
        Self { four, three, two }
    }

    /// Pairs each run length with its weight, longest first.
    pub fn tiers(&self) -> [(u32, i32); 3] {
        [(4, self.four), (3, self.three), (2, self.two)]
    }
}

impl Default for Weights {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longer_runs_dominate() {
        let weights = Weights::default();
        assert!(weights.four > 10 * weights.three);
        assert!(weights.three > weights.two);
        assert_eq!(weights.tiers()[0], (4, 100));
    }
}
