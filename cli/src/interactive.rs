//! Interactive driver: deals a single seed, runs the solver, and prints
//! the initial board, the final board, and the move list.

use crate::display::render;
use std::time::Duration;
use thoughtful_engine::deal;
use thoughtful_solver::{Solver, SolverConfig};

pub struct InteractiveArgs {
    pub seed: u64,
    pub time_budget: Duration,
    pub n0: i32,
    pub n1: i32,
}

pub fn run(args: InteractiveArgs) {
    let initial = deal(args.seed);
    println!("Initial deal (seed {}):", args.seed);
    println!("{}", render(&initial));

    let config = SolverConfig { n0: args.n0, n1: args.n1, time_budget: args.time_budget, seed: args.seed };
    let mut solver = Solver::new(config);
    let report = solver.solve(initial);

    println!("Final board:");
    println!("{}", render(&report.final_state));
    println!(
        "{} in {} move(s), {} node(s) searched",
        if report.win { "Solved" } else { "Not solved" },
        report.moves.len(),
        report.nodes_searched
    );
    for (i, mv) in report.moves.iter().enumerate() {
        println!("{:4}: {}", i + 1, mv);
    }
}
