use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which empty cells may be played.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Legality {
    /// Any unfilled cell (tic-tac-toe, gomoku).
    Anywhere,
    /// A cell on the floor (`x == h`) or directly on top of a filled cell
    /// (Connect Four).
    Gravity,
}

impl fmt::Display for Legality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Legality::Anywhere => write!(f, "anywhere"),
            Legality::Gravity => write!(f, "gravity"),
        }
    }
}

// used for parsing cli args
impl FromStr for Legality {
    type Err = &'static str;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.to_lowercase().as_str() {
            "anywhere" | "free" => Ok(Legality::Anywhere),
            "gravity" | "drop" => Ok(Legality::Gravity),
            _ => Err("invalid rules; options are: gravity, anywhere"),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board dimensions must be at least 1x1, got {height}x{width}")]
    EmptyBoard { height: u8, width: u8 },
    #[error("the winning run length must be at least 1")]
    ZeroRunLength,
    #[error("a run of {k} can never fit on a {height}x{width} board")]
    UnreachableRunLength { k: u8, height: u8, width: u8 },
}

/// The immutable `(h, v, k)` triple plus the legality rule of a match.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct GameConfig {
    pub height: u8,
    pub width: u8,
    pub k: u8,
    pub legality: Legality,
}

impl GameConfig {
    pub fn new(height: u8, width: u8, k: u8, legality: Legality) -> Self {
        Self {
            height,
            width,
            k,
            legality,
        }
    }

    pub fn tic_tac_toe() -> Self {
        Self::new(3, 3, 3, Legality::Anywhere)
    }

    pub fn connect_four() -> Self {
        Self::new(6, 7, 4, Legality::Gravity)
    }

    /// Checks that the configuration can produce a win at all. The engine
    /// itself never calls this: an unwinnable game is legal, it just always
    /// ends in a draw.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 || self.width == 0 {
            return Err(ConfigError::EmptyBoard {
                height: self.height,
                width: self.width,
            });
        }
        if self.k == 0 {
            return Err(ConfigError::ZeroRunLength);
        }
        if self.k > self.height.max(self.width) {
            return Err(ConfigError::UnreachableRunLength {
                k: self.k,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }

    pub fn cell_count(&self) -> usize {
        self.height as usize * self.width as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::connect_four()
    }
}

impl fmt::Display for GameConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} board, {} in a row, {} rules",
            self.height, self.width, self.k, self.legality
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        assert_eq!(GameConfig::tic_tac_toe().validate(), Ok(()));
        assert_eq!(GameConfig::connect_four().validate(), Ok(()));
        assert_eq!(GameConfig::default(), GameConfig::connect_four());
    }

    #[test]
    fn test_validate_rejects_empty_board() {
        let config = GameConfig::new(0, 7, 4, Legality::Gravity);
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyBoard {
                height: 0,
                width: 7
            })
        );
    }

    #[test]
    fn test_validate_rejects_zero_run_length() {
        let config = GameConfig::new(3, 3, 0, Legality::Anywhere);
        assert_eq!(config.validate(), Err(ConfigError::ZeroRunLength));
    }

    #[test]
    fn test_validate_rejects_unreachable_run_length() {
        let config = GameConfig::new(3, 4, 5, Legality::Anywhere);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnreachableRunLength {
                k: 5,
                height: 3,
                width: 4
            })
        );
    }

    #[test]
    fn test_parse_legality() {
        assert_eq!(Legality::from_str("gravity"), Ok(Legality::Gravity));
        assert_eq!(Legality::from_str("Anywhere"), Ok(Legality::Anywhere));
        assert!(Legality::from_str("sideways").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GameConfig::connect_four().to_string(),
            "6x7 board, 4 in a row, gravity rules"
        );
    }
}
