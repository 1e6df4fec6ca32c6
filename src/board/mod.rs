pub mod coordinate;
pub mod error;
pub mod mark;

mod display;

pub use coordinate::{Coordinate, Direction};
pub use error::BoardError;
pub use mark::Mark;

use common::grid::CellSet;

/// An `h`×`v` grid mapping coordinates to marks; a missing entry is an empty
/// cell. Each mark's cells are held in a `CellSet`, so a board is a small
/// value: cloning it never shares state with the original.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    height: u8,
    width: u8,
    first: CellSet,
    second: CellSet,
}

impl Board {
    pub fn new(height: u8, width: u8) -> Self {
        let cells = height as usize * width as usize;
        Self {
            height,
            width,
            first: CellSet::with_capacity(cells),
            second: CellSet::with_capacity(cells),
        }
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    /// True if `coordinate` addresses a cell of this grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        (1..=self.height).contains(&coordinate.x) && (1..=self.width).contains(&coordinate.y)
    }

    fn index(&self, coordinate: Coordinate) -> Option<usize> {
        if !self.contains(coordinate) {
            return None;
        }
        Some((coordinate.x as usize - 1) * self.width as usize + (coordinate.y as usize - 1))
    }

    /// Returns the mark on `coordinate`, or `None` for an empty or
    /// off-grid cell.
    pub fn get(&self, coordinate: Coordinate) -> Option<Mark> {
        let index = self.index(coordinate)?;
        if self.first.contains(index) {
            Some(Mark::First)
        } else if self.second.contains(index) {
            Some(Mark::Second)
        } else {
            None
        }
    }

    /// Cells holding either mark.
    fn occupied(&self) -> CellSet {
        &self.first | &self.second
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.index(coordinate)
            .map_or(false, |index| self.occupied().contains(index))
    }

    /// Places `mark` on an empty cell of this board.
    pub fn put(&mut self, coordinate: Coordinate, mark: Mark) -> Result<(), BoardError> {
        let index = self
            .index(coordinate)
            .ok_or(BoardError::OutOfBoundsBoardPutError {
                coordinate,
                height: self.height,
                width: self.width,
            })?;

        if self.occupied().contains(index) {
            return Err(BoardError::CellOccupiedBoardPutError { coordinate });
        }

        match mark {
            Mark::First => self.first.insert(index),
            Mark::Second => self.second.insert(index),
        };
        Ok(())
    }

    /// Returns a new board with `mark` placed on `coordinate`. `self` is left
    /// exactly as it was.
    pub fn with_mark(&self, coordinate: Coordinate, mark: Mark) -> Result<Board, BoardError> {
        let mut board = self.clone();
        board.put(coordinate, mark)?;
        Ok(board)
    }

    /// Every cell of the grid in row-major order starting at `(1, 1)`.
    pub fn coordinates(&self) -> impl Iterator<Item = Coordinate> {
        let width = self.width;
        (1..=self.height).flat_map(move |x| (1..=width).map(move |y| Coordinate::new(x, y)))
    }

    /// Unfilled cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coordinate> {
        let occupied = self.occupied();
        self.coordinates()
            .enumerate()
            .filter(|(index, _)| !occupied.contains(*index))
            .map(|(_, coordinate)| coordinate)
            .collect()
    }

    /// Cells holding `mark`, in row-major order.
    pub fn cells_of(&self, mark: Mark) -> Vec<Coordinate> {
        let cells = match mark {
            Mark::First => &self.first,
            Mark::Second => &self.second,
        };
        let width = self.width as usize;
        cells
            .iter()
            .map(|index| Coordinate::new((index / width + 1) as u8, (index % width + 1) as u8))
            .collect()
    }

    pub fn occupied_count(&self) -> u32 {
        self.occupied().count_ones()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() as usize == self.height as usize * self.width as usize
    }
}
