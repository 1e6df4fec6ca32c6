use super::{Board, Coordinate};
use std::fmt;

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for x in 1..=self.height() {
            let row: String = (1..=self.width())
                .map(|y| match self.get(Coordinate::new(x, y)) {
                    Some(mark) => mark.symbol(),
                    None => '.',
                })
                .collect();
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}

/// Builds a `Board` from a text picture: `X` and `O` are marks, `.` is an
/// empty cell. Rows are read top (`x = 1`) to bottom (`x = height`).
#[macro_export]
macro_rules! grid_position {
    ($height:expr, $width:expr; $($cell:tt)*) => {{
        let height: u8 = $height;
        let width: u8 = $width;
        let mut board = $crate::board::Board::new(height, width);
        // Convert all input tokens to a string and filter out whitespace characters.
        let cells: Vec<_> = stringify!($($cell)*)
            .chars()
            .filter(|&c| !c.is_whitespace())
            .collect();
        assert_eq!(
            cells.len(),
            height as usize * width as usize,
            "Invalid number of cells. Expected {}, got {}",
            height as usize * width as usize,
            cells.len()
        );
        for (i, &c) in cells.iter().enumerate() {
            let mark = match c {
                'X' => $crate::board::Mark::First,
                'O' => $crate::board::Mark::Second,
                '.' => continue,
                _ => panic!("Invalid character in grid position: {:?}", c),
            };
            let coordinate = $crate::board::Coordinate::new(
                (i / width as usize + 1) as u8,
                (i % width as usize + 1) as u8,
            );
            board.put(coordinate, mark).unwrap();
        }
        board
    }};
}
