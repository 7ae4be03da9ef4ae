//! Domain model for Thoughtful Solitaire: cards, the three piles, legal
//! moves, deterministic deals, and the pruning oracles the search
//! engine relies on. Nothing in this crate knows about search or
//! heuristics — that lives in the solver crate.

pub mod card;
pub mod deal;
pub mod foundations;
pub mod moves;
pub mod pruning;
pub mod rules;
pub mod state;
pub mod tableau;
pub mod talon;

pub use card::{Card, Color, Suit};
pub use deal::deal;
pub use foundations::{FoundationError, Foundations};
pub use moves::{apply_move, generate_moves, reverse_move, ApplyError, Move};
pub use pruning::{can_foundation_return, relaxed_solvable};
pub use state::{GameState, MAX_DRAW_CYCLES};
pub use tableau::{Tableau, TableauError, N_COLUMNS};
pub use talon::Talon;
