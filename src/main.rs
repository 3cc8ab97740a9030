use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use pagesim::common::config::DEFAULT_REPORT_PATH;
use pagesim::report::{self, SweepConfig};
use pagesim::{PolicyKind, Simulator, Trace};

/// Command-line options. `run` replays one trace under one policy and
/// prints the frames after every reference; `stats` sweeps every policy over
/// a range of frame counts and writes the miss-rate table.
#[derive(Parser, Debug)]
#[command(name = "pagesim", version, about = "Page replacement simulator")]
struct CmdOptions {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Simulate one policy and print the frames after every reference
    Run {
        /// Number of physical frames (1 to 100)
        frames: usize,
        /// File of whitespace-separated page numbers
        trace: PathBuf,
        /// Replacement policy: fifo, lru or random
        policy: PolicyKind,
    },
    /// Sweep every policy over a range of frame counts
    Stats {
        /// Smallest number of frames
        min: usize,
        /// Largest number of frames
        max: usize,
        /// Frame count increment
        step: usize,
        /// File of whitespace-separated page numbers
        trace: PathBuf,
        /// Where to write the miss-rate table
        #[arg(short, long, default_value = DEFAULT_REPORT_PATH)]
        output: PathBuf,
    },
}

fn main() {
    // Logs go to stderr so they never mix with the simulation output.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = CmdOptions::parse();
    if let Err(err) = execute(options.command) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn execute(command: Command) -> pagesim::Result<()> {
    match command {
        Command::Run {
            frames,
            trace,
            policy,
        } => {
            let mut simulator = Simulator::new(policy, frames)?;
            let trace = Trace::from_path(&trace)?;
            let stats = simulator.run_with_observer(trace.as_slice(), |step| println!("{}", step));
            println!("{}", stats);
        }
        Command::Stats {
            min,
            max,
            step,
            trace,
            output,
        } => {
            let config = SweepConfig::new(min, max, step);
            config.validate()?;
            let trace = Trace::from_path(&trace)?;
            let rows = report::sweep(trace.as_slice(), &config)?;
            for row in &rows {
                for (capacity, stats) in &row.runs {
                    println!("{}", report::describe(row.kind, *capacity, stats));
                }
                println!();
            }
            report::write_report_file(&rows, &output)?;
        }
    }
    Ok(())
}
