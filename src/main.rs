mod cli;

use cli::commands::Command;
use cli::Kinrow;
use structopt::StructOpt;

fn main() {
    #[cfg(feature = "instrumentation")]
    kinrow::instrumentation::init_tracing();
    #[cfg(not(feature = "instrumentation"))]
    env_logger::init();

    Kinrow::from_args().execute();
}
