//! Multistage Nested Rollout search — component G, §4.G/§5/§9.

use crate::cache::TranspositionCache;
use crate::evaluators::{evaluate, Heuristic};
use fxhash::FxHashSet;
use std::time::{Duration, Instant};
use thoughtful_engine::{apply_move, generate_moves, relaxed_solvable, reverse_move, GameState, Move};

impl Heuristic {
    fn cache_index(self) -> usize {
        match self {
            Heuristic::H1 => 0,
            Heuristic::H2 => 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub n0: i32,
    pub n1: i32,
    pub time_budget: Duration,
    /// Base seed for the move-ordering tie-break shuffle. Mixed with
    /// each state's hash, never with the clock, per §9's determinism
    /// note.
    pub seed: u64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self { n0: 1, n1: 1, time_budget: Duration::from_secs(60), seed: 0 }
    }
}

/// Outcome of a solve invocation, exposing everything §6's interface
/// and the original benchmark driver (`solver.nodes_searched`,
/// `solver.final_state`) need to inspect from outside the solve call.
#[derive(Debug)]
pub struct SolveReport {
    pub win: bool,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub nodes_searched: u64,
}

pub struct Solver {
    config: SolverConfig,
    caches: [TranspositionCache; 2],
    nodes_searched: u64,
    deadline: Instant,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        let deadline = Instant::now() + config.time_budget;
        Self { config, caches: [TranspositionCache::new(), TranspositionCache::new()], nodes_searched: 0, deadline }
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Runs the solver to completion (win, time budget exhaustion, or
    /// root-level relaxed-domain pruning) against `initial`.
    pub fn solve(&mut self, initial: GameState) -> SolveReport {
        if !relaxed_solvable(&initial) {
            return SolveReport { win: false, moves: Vec::new(), final_state: initial, nodes_searched: self.nodes_searched };
        }
        let mut state = initial;
        let root_n = self.config.n0;
        let (value, moves) = self.search(&mut state, Heuristic::H1, root_n, &FxHashSet::default(), None);
        SolveReport { win: value == f64::INFINITY, moves, final_state: state, nodes_searched: self.nodes_searched }
    }

    fn depth_for(&self, h: Heuristic) -> i32 {
        match h {
            Heuristic::H1 => self.config.n0,
            Heuristic::H2 => self.config.n1,
        }
    }

    fn candidate_moves(&self, state: &GameState, hash: u64, last_reverse: Option<Move>) -> Vec<Move> {
        let mut moves = generate_moves(state, hash ^ self.config.seed);
        if let Some(reverse) = last_reverse {
            if moves.len() > 1 {
                if let Some(pos) = moves.iter().position(|m| *m == reverse) {
                    moves.remove(pos);
                }
            }
        }
        moves
    }

    /// Procedure `search` of §4.G. `top_level` from the spec is not a
    /// parameter here: it only distinguishes the outermost call (the
    /// one operating on the solver's live state) for reporting, and
    /// `solve` already is that call — the recursion itself never
    /// branches on it.
    fn search(
        &mut self,
        state: &mut GameState,
        h: Heuristic,
        n: i32,
        path: &FxHashSet<u64>,
        mut last_reverse: Option<Move>,
    ) -> (f64, Vec<Move>) {
        self.nodes_searched += 1;

        if state.is_win() {
            return (f64::INFINITY, Vec::new());
        }
        let mut hash = state.state_hash();
        if path.contains(&hash) {
            return (f64::NEG_INFINITY, Vec::new());
        }
        if Instant::now() >= self.deadline {
            return (evaluate(state, h), Vec::new());
        }

        let mut moves = self.candidate_moves(state, hash, last_reverse);
        if moves.is_empty() {
            return (evaluate(state, h), Vec::new());
        }
        if n == -1 {
            return (evaluate(state, h), Vec::new());
        }

        let cache_idx = h.cache_index();
        if self.caches[cache_idx].contains(hash, n) {
            return self.escalate(state, h, path, last_reverse);
        }
        self.caches[cache_idx].insert(hash, n);

        let mut current_path = path.clone();
        current_path.insert(hash);
        let mut solution = Vec::new();

        loop {
            let local_eval = evaluate(state, h);
            let Some(child) = self.best_child(state, h, n, &current_path, &moves) else {
                return (local_eval, solution);
            };

            if child.value == f64::INFINITY {
                commit(state, child.mv, child.sub_moves, &mut solution);
                if state.is_win() {
                    return (f64::INFINITY, solution);
                }
                last_reverse = child.reverse;
                hash = state.state_hash();
                current_path.insert(hash);
                moves = self.candidate_moves(state, hash, last_reverse);
                if moves.is_empty() {
                    return (evaluate(state, h), solution);
                }
                continue;
            }

            let should_escalate = (child.value < local_eval && h.next().is_some()) || child.value == f64::NEG_INFINITY;
            if should_escalate {
                if h.next().is_none() {
                    return (child.value, solution);
                }
                let mut escalate_path = current_path.clone();
                escalate_path.remove(&hash);
                let (value, mut sub) = self.escalate(state, h, &escalate_path, last_reverse);
                solution.append(&mut sub);
                return (value, solution);
            }

            commit(state, child.mv, child.sub_moves, &mut solution);
            last_reverse = child.reverse;
            let new_hash = state.state_hash();
            if current_path.contains(&new_hash) {
                return (evaluate(state, h), solution);
            }
            current_path.insert(new_hash);
            hash = new_hash;
            moves = self.candidate_moves(state, hash, last_reverse);
            if moves.is_empty() {
                return (evaluate(state, h), solution);
            }
        }
    }

    /// Used both for a transposition-cache hit (§4.G step 6) and for
    /// mid-rollout heuristic escalation (step 7c): hands control to the
    /// next heuristic level at its configured depth, or — if already at
    /// the innermost heuristic — evaluates in place.
    fn escalate(
        &mut self,
        state: &mut GameState,
        h: Heuristic,
        path: &FxHashSet<u64>,
        last_reverse: Option<Move>,
    ) -> (f64, Vec<Move>) {
        match h.next() {
            Some(next_h) => {
                let next_n = self.depth_for(next_h);
                self.search(state, next_h, next_n, path, last_reverse)
            }
            None => (evaluate(state, h), Vec::new()),
        }
    }

    fn best_child(
        &mut self,
        state: &GameState,
        h: Heuristic,
        n: i32,
        path: &FxHashSet<u64>,
        moves: &[Move],
    ) -> Option<BestChild> {
        let mut best: Option<BestChild> = None;
        for mv in moves {
            let reverse = reverse_move(state, mv);
            let mut child_state = state.clone();
            if apply_move(&mut child_state, mv).is_err() {
                continue;
            }
            let (value, sub_moves) = self.search(&mut child_state, h, n - 1, path, reverse);
            let is_better = match &best {
                None => true,
                Some(current) => value > current.value,
            };
            if is_better {
                best = Some(BestChild { value, mv: *mv, sub_moves, reverse });
            }
            if value == f64::INFINITY {
                break;
            }
        }
        best
    }
}

struct BestChild {
    value: f64,
    mv: Move,
    sub_moves: Vec<Move>,
    reverse: Option<Move>,
}

/// Replays a move and its already-resolved continuation onto the real
/// (non-speculative) state being advanced by the solver.
fn commit(state: &mut GameState, mv: Move, sub_moves: Vec<Move>, solution: &mut Vec<Move>) {
    apply_move(state, &mv).expect("move legal against a clone of this exact state must be legal here too");
    solution.push(mv);
    for sub in sub_moves {
        apply_move(state, &sub).expect("sub-move legal against a clone of this exact state must be legal here too");
        solution.push(sub);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thoughtful_engine::{Card, Foundations, Suit, Talon, Tableau};

    fn empty_state() -> GameState {
        GameState::new(Tableau::new(), Foundations::new(), Talon::new(Vec::new()))
    }

    #[test]
    fn one_move_win_is_found() {
        let mut state = empty_state();
        for suit in [Suit::Diamonds, Suit::Clubs, Suit::Spades] {
            for rank in 1..=13u8 {
                state.foundations_mut().place(Card::new(rank, suit, true)).unwrap();
            }
        }
        for rank in 1..=12u8 {
            state.foundations_mut().place(Card::new(rank, Suit::Hearts, true)).unwrap();
        }
        state.tableau_mut().push_unchecked(0, Card::new(13, Suit::Hearts, true));

        let mut solver = Solver::new(SolverConfig::default());
        let report = solver.solve(state);
        assert!(report.win);
        assert_eq!(report.moves.len(), 1);
        assert!(report.final_state.is_win());
    }

    #[test]
    fn unsolvable_root_reports_loss_without_searching() {
        let mut state = empty_state();
        state.tableau_mut().push_unchecked(0, Card::new(2, Suit::Hearts, false));
        let mut solver = Solver::new(SolverConfig::default());
        let report = solver.solve(state);
        assert!(!report.win);
        assert_eq!(report.nodes_searched, 0);
    }

    #[test]
    fn same_seed_reports_consistent_node_counts_across_runs() {
        let deal = thoughtful_engine::deal(42);
        let config = SolverConfig { time_budget: Duration::from_millis(50), ..SolverConfig::default() };
        let mut solver_a = Solver::new(config.clone());
        let report_a = solver_a.solve(deal.clone());
        let mut solver_b = Solver::new(config);
        let report_b = solver_b.solve(deal);
        assert_eq!(report_a.nodes_searched, report_b.nodes_searched);
    }
}
