use thiserror::Error;

use super::coordinate::Coordinate;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BoardError {
    #[error("Cannot put a mark on {coordinate}, it is outside the {height}x{width} grid")]
    OutOfBoundsBoardPutError {
        coordinate: Coordinate,
        height: u8,
        width: u8,
    },
    #[error("Cannot put a mark on {coordinate}, the cell is already occupied")]
    CellOccupiedBoardPutError { coordinate: Coordinate },
    #[error("Invalid coordinate {input:?}, expected `x,y` with both parts starting at 1")]
    InvalidCoordinateError { input: String },
}
