use rand::seq::SliceRandom;
use std::fmt;
use std::str::FromStr;

/// The token a player places on the grid. `First` always opens the game and
/// is the mark utilities are measured against.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord, Hash)]
pub enum Mark {
    First = 0,
    Second = 1,
}

impl Mark {
    pub const ALL: [Mark; 2] = [Mark::First, Mark::Second];

    pub fn opposite(&self) -> Self {
        match self {
            Mark::First => Mark::Second,
            Mark::Second => Mark::First,
        }
    }

    /// +1 for `First`, -1 for `Second`. Multiplying a utility by the sign
    /// converts it to this mark's perspective.
    pub fn sign(&self) -> i32 {
        match self {
            Mark::First => 1,
            Mark::Second => -1,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::First => 'X',
            Mark::Second => 'O',
        }
    }

    pub fn random() -> Self {
        *Self::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&Mark::First)
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Mark {
    type Err = ParseError;
    fn from_str(mark: &str) -> Result<Self, Self::Err> {
        match mark.to_lowercase().as_str() {
            "x" | "first" => Ok(Mark::First),
            "o" | "second" => Ok(Mark::Second),
            "random" => Ok(Mark::random()),
            _ => Err("invalid mark; options are: x, o, random"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random() {
        assert!(Mark::ALL.contains(&Mark::random()));
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Mark::First.opposite(), Mark::Second);
        assert_eq!(Mark::Second.opposite(), Mark::First);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Mark::First, Mark::from_str("x").unwrap());
        assert_eq!(Mark::First, Mark::from_str("X").unwrap());
        assert_eq!(Mark::Second, Mark::from_str("second").unwrap());
        assert!(Mark::from_str("z").is_err());
    }

    #[test]
    fn test_parse_random() {
        let mark = Mark::from_str("random").unwrap();
        assert!(Mark::ALL.contains(&mark));
    }

    #[test]
    fn test_sign_and_index() {
        assert_eq!(Mark::First.sign(), 1);
        assert_eq!(Mark::Second.sign(), -1);
        assert_eq!(Mark::First.index(), 0);
        assert_eq!(Mark::Second.index(), 1);
    }
}
