//! Command-line entry points for the Thoughtful Solitaire solver: a
//! batch benchmark driver and a single-deal interactive driver.

mod benchmark;
mod display;
mod interactive;

use benchmark::BenchmarkArgs;
use clap::{Parser, Subcommand};
use interactive::InteractiveArgs;
use std::time::Duration;

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(name = "thoughtful", about = "Thoughtful Solitaire solver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the solver over a range of seeds and print a summary.
    Bench {
        #[arg(long, default_value_t = 0)]
        start_seed: u64,
        #[arg(long, default_value_t = 200)]
        total: usize,
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
        #[arg(long, default_value_t = 1)]
        n0: i32,
        #[arg(long, default_value_t = 1)]
        n1: i32,
        #[arg(long)]
        output_json: Option<String>,
    },
    /// Solve a single seed and print the board and move list.
    Play {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 60)]
        timeout_secs: u64,
        #[arg(long, default_value_t = 1)]
        n0: i32,
        #[arg(long, default_value_t = 1)]
        n1: i32,
    },
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Bench { start_seed, total, timeout_secs, n0, n1, output_json } => {
            benchmark::run(BenchmarkArgs {
                start_seed,
                total,
                time_budget: Duration::from_secs(timeout_secs),
                n0,
                n1,
                output_json,
            });
        }
        Command::Play { seed, timeout_secs, n0, n1 } => {
            interactive::run(InteractiveArgs { seed, time_budget: Duration::from_secs(timeout_secs), n0, n1 });
        }
    }
}
