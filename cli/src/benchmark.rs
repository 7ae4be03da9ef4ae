//! Batch benchmark driver: iterates seeds, runs the solver on each,
//! prints a per-seed line, then an aggregate summary. Line format and
//! aggregate statistics follow the original Python driver's
//! `bench200.py`, with a JSON results file alongside it in the
//! teacher's `save_results_to_json` style.

use serde::{Deserialize, Serialize};
use std::fs;
use std::time::{Duration, Instant};
use thoughtful_engine::{deal, Move};
use thoughtful_solver::{Solver, SolverConfig};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResult {
    pub seed: u64,
    pub win: bool,
    pub elapsed_secs: f64,
    pub foundation_count: u32,
    pub nodes_searched: u64,
    pub timestamp: String,
    /// The winning line, when one was found — `None` on a loss, mirroring
    /// the original driver's `DetailedGameResult.solution_moves`.
    pub solution_moves: Option<Vec<Move>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkSummary {
    pub total: usize,
    pub wins: usize,
    pub win_rate_pct: f64,
    pub avg_time_secs: f64,
    pub avg_win_time_secs: Option<f64>,
    pub avg_loss_time_secs: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub results: Vec<SeedResult>,
    pub summary: BenchmarkSummary,
}

pub struct BenchmarkArgs {
    pub start_seed: u64,
    pub total: usize,
    pub time_budget: Duration,
    pub n0: i32,
    pub n1: i32,
    pub output_json: Option<String>,
}

pub fn run(args: BenchmarkArgs) {
    let mut results = Vec::with_capacity(args.total);
    let mut times = Vec::with_capacity(args.total);
    let mut win_times = Vec::new();
    let mut loss_times = Vec::new();
    let mut wins = 0usize;

    for offset in 0..args.total {
        let seed = args.start_seed + offset as u64;
        let initial = deal(seed);
        let config = SolverConfig { n0: args.n0, n1: args.n1, time_budget: args.time_budget, seed };
        let mut solver = Solver::new(config);

        let started = Instant::now();
        let report = solver.solve(initial);
        let elapsed = started.elapsed().as_secs_f64();

        times.push(elapsed);
        if report.win {
            wins += 1;
            win_times.push(elapsed);
        } else {
            loss_times.push(elapsed);
        }

        let foundation_count: u32 =
            thoughtful_engine::Suit::ALL.iter().map(|&s| report.final_state.foundations().len(s) as u32).sum();
        let status = if report.win { "WIN" } else { "LOSS" };
        println!(
            "Seed {seed:3}: {status} {elapsed:5.1}s  fc={foundation_count:2}  nodes={nodes}",
            seed = seed,
            status = status,
            elapsed = elapsed,
            foundation_count = foundation_count,
            nodes = report.nodes_searched,
        );

        results.push(SeedResult {
            seed,
            win: report.win,
            elapsed_secs: elapsed,
            foundation_count,
            nodes_searched: report.nodes_searched,
            timestamp: chrono::Utc::now().to_rfc3339(),
            solution_moves: report.win.then_some(report.moves),
        });
    }

    let avg = |xs: &[f64]| -> f64 { xs.iter().sum::<f64>() / xs.len() as f64 };
    println!();
    println!("Result: {}/{} = {:.1}%", wins, args.total, wins as f64 / args.total as f64 * 100.0);
    println!("Avg time: {:.1}s", avg(&times));
    if !win_times.is_empty() {
        println!("Avg win time: {:.1}s", avg(&win_times));
    }
    if !loss_times.is_empty() {
        println!("Avg loss time: {:.1}s", avg(&loss_times));
    }

    let summary = BenchmarkSummary {
        total: args.total,
        wins,
        win_rate_pct: wins as f64 / args.total as f64 * 100.0,
        avg_time_secs: avg(&times),
        avg_win_time_secs: (!win_times.is_empty()).then(|| avg(&win_times)),
        avg_loss_time_secs: (!loss_times.is_empty()).then(|| avg(&loss_times)),
    };

    if let Some(path) = args.output_json {
        let report = BenchmarkReport { results, summary };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => {
                if let Err(e) = fs::write(&path, json) {
                    eprintln!("Failed to write benchmark summary to {path}: {e}");
                }
            }
            Err(e) => eprintln!("Failed to serialize benchmark summary: {e}"),
        }
    }
}
