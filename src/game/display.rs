use crate::board::{Board, Coordinate, Mark};
use termion::{clear, cursor};

/// Draws a board into a reusable text buffer. Rows are numbered down the left
/// edge and columns along the top, matching the `row,column` input format.
pub struct GameDisplay {
    buffer: String,
}

impl GameDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(2048),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.buffer
            .push_str(&format!("{}{}", cursor::Goto(1, 1), clear::All));
    }

    /// Appends the board and the status lines to the buffer without
    /// clearing the screen first.
    pub fn compose(
        &mut self,
        board: &Board,
        to_move: Mark,
        last_move: Option<Coordinate>,
        status: Option<&str>,
    ) {
        let width = board.width() as usize;

        // Board header
        self.buffer.push_str("    ");
        for y in 1..=board.width() {
            self.buffer.push_str(&format!(" {:<3}", y));
        }
        self.buffer.push('\n');
        self.buffer.push_str(&border('┌', '┬', '┐', width));

        // Board cells
        for x in 1..=board.height() {
            self.buffer.push_str(&format!("{:>2} │", x));
            for y in 1..=board.width() {
                let coordinate = Coordinate::new(x, y);
                let symbol = board.get(coordinate).map_or('·', |mark| mark.symbol());
                if last_move == Some(coordinate) {
                    self.buffer.push_str(&format!("({})│", symbol));
                } else {
                    self.buffer.push_str(&format!(" {} │", symbol));
                }
            }
            self.buffer.push('\n');

            if x < board.height() {
                self.buffer.push_str(&border('├', '┼', '┤', width));
            } else {
                self.buffer.push_str(&border('└', '┴', '┘', width));
            }
        }
        self.buffer.push('\n');

        // Game info
        self.buffer.push_str(&format!("Turn: {}\n", to_move));

        if let Some(last_move) = last_move {
            self.buffer.push_str(&format!("Last move: {}\n", last_move));
        }

        if let Some(status) = status {
            self.buffer.push_str(&format!("\n{}\n", status));
        }
    }

    pub fn render_game_state(
        &mut self,
        board: &Board,
        to_move: Mark,
        last_move: Option<Coordinate>,
        status: Option<&str>,
    ) {
        self.clear();
        self.compose(board, to_move, last_move, status);

        // Print the complete frame
        print!("{}", self.buffer);
    }

    pub fn buffer(self) -> String {
        self.buffer
    }
}

impl Default for GameDisplay {
    fn default() -> Self {
        Self::new()
    }
}

fn border(left: char, middle: char, right: char, width: usize) -> String {
    let mut line = String::from("   ");
    line.push(left);
    for column in 0..width {
        line.push_str("───");
        line.push(if column + 1 < width { middle } else { right });
    }
    line.push('\n');
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid_position;

    #[test]
    fn test_compose_draws_every_row() {
        let board = grid_position! { 2, 3;
            ...
            XO.
        };
        let mut display = GameDisplay::new();
        display.compose(&board, Mark::First, Some(Coordinate::new(2, 2)), Some("* Score: 3"));
        let text = display.buffer();

        assert!(text.starts_with("     1   2   3"));
        assert!(text.contains(" 1 │ · │ · │ · │\n"));
        assert!(text.contains(" 2 │ X │(O)│ · │\n"));
        assert!(text.contains("   └───┴───┴───┘\n"));
        assert!(text.contains("Turn: X\n"));
        assert!(text.contains("Last move: (2, 2)\n"));
        assert!(text.ends_with("* Score: 3\n"));
    }

    #[test]
    fn test_clear_resets_buffer() {
        let mut display = GameDisplay::new();
        display.compose(&Board::new(1, 1), Mark::Second, None, None);
        display.clear();
        let text = display.buffer();
        assert!(!text.contains("Turn"));
    }
}
