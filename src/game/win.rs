//! Win detection around the most recent move.
//!
//! Only lines through the cell just played can have been completed by it, so
//! each check walks outward from that cell instead of scanning the board.

use crate::board::{Board, Coordinate, Direction, Mark};

/// Counts consecutive cells holding `mark`, starting at `from` (inclusive)
/// and stepping along `direction` until the first mismatch.
pub(crate) fn run_length(board: &Board, from: Coordinate, mark: Mark, direction: Direction) -> u32 {
    let mut count = 0;
    let mut cursor = Some(from);
    while let Some(coordinate) = cursor {
        if board.get(coordinate) != Some(mark) {
            break;
        }
        count += 1;
        cursor = coordinate.step(direction);
    }
    count
}

/// True if the line through `last_move` along `direction` holds at least `k`
/// consecutive `mark`s.
pub fn k_in_row(
    board: &Board,
    last_move: Coordinate,
    mark: Mark,
    direction: Direction,
    k: u8,
) -> bool {
    let forward = run_length(board, last_move, mark, direction);
    let backward = run_length(board, last_move, mark, direction.reverse());
    // both walks counted `last_move`
    let run = (forward + backward).saturating_sub(1);
    run >= k as u32
}

/// The first canonical direction in which `last_move` completed a line.
pub fn winning_line(
    board: &Board,
    last_move: Coordinate,
    mark: Mark,
    k: u8,
) -> Option<Direction> {
    Direction::LINES
        .iter()
        .copied()
        .find(|direction| k_in_row(board, last_move, mark, *direction, k))
}

/// The utility of the position reached when `mark` played `last_move`:
/// +1 if that completed a line for `First`, -1 for `Second`, 0 otherwise.
pub fn compute_utility(board: &Board, last_move: Coordinate, mark: Mark, k: u8) -> i32 {
    match winning_line(board, last_move, mark, k) {
        Some(_) => mark.sign(),
        None => 0,
    }
}

/// Utility of an arbitrary position, scanning every occupied cell. Used when
/// a state is built from a board rather than reached move by move. If both
/// marks somehow have a line, `First` takes precedence.
pub fn board_utility(board: &Board, k: u8) -> i32 {
    Mark::ALL
        .iter()
        .find(|mark| {
            board
                .cells_of(**mark)
                .into_iter()
                .any(|cell| winning_line(board, cell, **mark, k).is_some())
        })
        .map_or(0, |mark| mark.sign())
}
