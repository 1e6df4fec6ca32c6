pub mod cell_set;

pub use cell_set::CellSet;
