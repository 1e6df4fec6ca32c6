use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::BoardError;

static COORDINATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\(?\s*(\d{1,3})\s*[,\s]\s*(\d{1,3})\s*\)?$")
        .expect("COORDINATE_RE regex should be valid")
});

/// A 1-based grid address. `x` runs along the gravity axis (row 1 is the
/// top, row `h` the floor) and `y` along the columns.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Moves one step along `direction`. Returns `None` when the step would
    /// leave the representable (positive) range; bounds against a specific
    /// grid are the board's business.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let x = self.x.checked_add_signed(direction.dx)?;
        let y = self.y.checked_add_signed(direction.dy)?;
        if x == 0 || y == 0 {
            return None;
        }
        Some(Self { x, y })
    }

    /// The cell one step closer to the floor.
    pub fn below(&self) -> Option<Self> {
        self.step(Direction::DOWN)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(u8, u8)> for Coordinate {
    fn from((x, y): (u8, u8)) -> Self {
        Self::new(x, y)
    }
}

impl FromStr for Coordinate {
    type Err = BoardError;

    /// Accepts `3,4`, `3 4` and `(3, 4)`.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidCoordinateError {
            input: input.to_string(),
        };
        let caps = COORDINATE_RE.captures(input.trim()).ok_or_else(invalid)?;
        let x: u8 = caps[1].parse().map_err(|_| invalid())?;
        let y: u8 = caps[2].parse().map_err(|_| invalid())?;
        if x == 0 || y == 0 {
            return Err(invalid());
        }
        Ok(Self::new(x, y))
    }
}

/// A unit step on the grid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    /// Along a row, column to column.
    pub const ACROSS: Direction = Direction::new(0, 1);
    /// Down a column, toward the floor.
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const DIAGONAL: Direction = Direction::new(1, 1);
    pub const ANTI_DIAGONAL: Direction = Direction::new(1, -1);
    /// Toward the top-right, the mirror of `ANTI_DIAGONAL`.
    pub const RISING: Direction = Direction::new(-1, 1);

    /// The four canonical line directions. Each line is also walked in
    /// reverse, so these cover every orientation.
    pub const LINES: [Direction; 4] = [
        Direction::ACROSS,
        Direction::DOWN,
        Direction::ANTI_DIAGONAL,
        Direction::DIAGONAL,
    ];

    pub const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }

    pub const fn reverse(&self) -> Self {
        Self {
            dx: -self.dx,
            dy: -self.dy,
        }
    }

    /// A human-readable name for the line this direction runs along; a
    /// direction and its reverse share a name.
    pub fn line_name(&self) -> &'static str {
        match (self.dx.signum() * self.dy.signum(), self.dx, self.dy) {
            (_, 0, _) => "across",
            (_, _, 0) => "down",
            (1, _, _) => "diagonal",
            _ => "anti-diagonal",
        }
    }
}
