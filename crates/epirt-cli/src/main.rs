use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    analyse::{self, AnalyseArgs},
    replay::{self, ReplayArgs},
    track::{self, TrackArgs},
};

mod commands;
mod io;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "epirt", about = "Reproduction-number estimation for epidemic runs")]
struct Cli {
    /// Log at debug level unless RUST_LOG is set.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Track a recorded population trace and emit the per-day estimator panel.
    Track(TrackArgs),
    /// Replay a CSV contact log into per-day Rt estimates.
    Replay(ReplayArgs),
    /// Track a trace, then replay its contact log with the settled tau.
    Analyse(AnalyseArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match cli.command {
        Command::Track(args) => track::run(&args),
        Command::Replay(args) => replay::run(&args),
        Command::Analyse(args) => analyse::run(&args),
    }
}
