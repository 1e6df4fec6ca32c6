//! Move input typed by a human player.

use std::cmp::min;
use std::io::{self, BufRead, Read};

use thiserror::Error;

use crate::board::Coordinate;

const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("io error: {error:?}")]
    IOError { error: String },
    #[error("invalid input: {input:?}")]
    InvalidInput { input: String },
    #[error("user exit")]
    UserExit,
}

/// A move as typed: a full `row,column` cell, or a bare column number for
/// games where marks drop down the columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveInput {
    Cell { coordinate: Coordinate },
    Column { column: u8 },
}

impl From<io::Error> for InputError {
    fn from(error: io::Error) -> Self {
        InputError::IOError {
            error: error.to_string(),
        }
    }
}

/// Parses one line of input: a coordinate such as `3,4`, `(3, 4)` or `3 4`,
/// a single column number such as `5`, or one of the quit commands.
pub fn parse_move_input(input: &str) -> Result<MoveInput, InputError> {
    let raw = input.trim();
    if QUIT_COMMANDS.contains(&raw.to_lowercase().as_str()) {
        return Err(InputError::UserExit);
    }

    if let Ok(column) = raw.parse::<u8>() {
        if column > 0 {
            return Ok(MoveInput::Column { column });
        }
    }

    raw.parse()
        .map(|coordinate| MoveInput::Cell { coordinate })
        .map_err(|_| InputError::InvalidInput {
            input: raw.to_string(),
        })
}

/// Reads and parses the next line from `reader`. End of input counts as the
/// user leaving.
pub fn read_move_input<R: BufRead>(reader: &mut R) -> Result<MoveInput, InputError> {
    let mut input = String::new();
    if reader.read_line(&mut input)? == 0 {
        return Err(InputError::UserExit);
    }
    parse_move_input(&input)
}

/// Standard input, read one line at a time through the process-wide stdin
/// buffer. Several readers can be alive at once (one per human player)
/// without holding the stdin lock or losing buffered input to each other.
#[derive(Debug, Default)]
pub struct StdinLines {
    line: Vec<u8>,
    position: usize,
}

impl StdinLines {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Read for StdinLines {
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let count = min(available.len(), out.len());
        out[..count].copy_from_slice(&available[..count]);
        self.consume(count);
        Ok(count)
    }
}

impl BufRead for StdinLines {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        if self.position >= self.line.len() {
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            self.line = line.into_bytes();
            self.position = 0;
        }
        Ok(&self.line[self.position..])
    }

    fn consume(&mut self, amount: usize) {
        self.position = min(self.position + amount, self.line.len());
    }
}
