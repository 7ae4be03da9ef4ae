//! Evaluators and the multistage nested-rollout search engine built on
//! top of `thoughtful_engine`'s domain model.

pub mod cache;
pub mod evaluators;
pub mod rollout;

pub use cache::TranspositionCache;
pub use evaluators::{evaluate, Heuristic};
pub use rollout::{SolveReport, Solver, SolverConfig};
