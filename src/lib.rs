pub mod alpha_beta_searcher;
pub mod board;
pub mod evaluate;
pub mod game;
pub mod input_handler;
#[cfg(feature = "instrumentation")]
pub mod instrumentation;
pub mod player;
pub mod prelude;
