mod cli;

use cli::commands::Command;
use cli::Mancala;
use structopt::StructOpt;

fn main() {
    env_logger::init();

    #[cfg(feature = "instrumentation")]
    {
        if let Err(error) = mancala::instrumentation::init_tracing() {
            eprintln!("failed to install tracing subscriber: {}", error);
        }
    }

    Mancala::from_args().execute();

    #[cfg(feature = "instrumentation")]
    mancala::instrumentation::print_timing_statistics();
}
