//! Legal move generation — component C, §4.C.

use super::Move;
use crate::foundations::Foundations;
use crate::pruning::can_foundation_return;
use crate::rules::{can_place_on_empty_column, can_stack_on_tableau};
use crate::state::{GameState, MAX_DRAW_CYCLES};
use crate::tableau::N_COLUMNS;
use fxhash::FxHashSet;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::HashSet;

/// Produces the ordered list of legal moves from `state`, including the
/// K+ macro for waste-origin moves. Ties in priority are broken by a
/// deterministic shuffle seeded from `tie_break_seed` (per the design
/// notes, this should be derived from the state hash or an explicit
/// solver seed, never a wall-clock source), then a stable sort on
/// priority.
pub fn generate_moves(state: &GameState, tie_break_seed: u64) -> Vec<Move> {
    let mut moves = Vec::new();
    tableau_to_foundation(state, &mut moves);
    tableau_to_tableau(state, &mut moves);
    waste_origin_moves(state, &mut moves);
    foundation_to_tableau(state, &mut moves);

    let mut rng = SmallRng::seed_from_u64(tie_break_seed);
    moves.shuffle(&mut rng);
    moves.sort_by_key(|m| m.priority(m.reveals_face_down(state)));
    moves
}

fn tableau_to_foundation(state: &GameState, out: &mut Vec<Move>) {
    for from in 0..N_COLUMNS {
        if let Some(&card) = state.tableau().top(from) {
            if card.face_up && state.foundations().accepts(&card) {
                out.push(Move::TableauToFoundation { from, card });
            }
        }
    }
}

fn tableau_to_tableau(state: &GameState, out: &mut Vec<Move>) {
    let first_empty = state.tableau().first_empty_column();
    for from in 0..N_COLUMNS {
        let len = state.tableau().len(from);
        if len == 0 {
            continue;
        }
        for start in state.tableau().face_down_count(from)..len {
            let Some(sequence) = state.tableau().build_sequence_from(from, start) else { continue };
            let moving = sequence[0];
            for to in 0..N_COLUMNS {
                if to == from {
                    continue;
                }
                if let Some(&target) = state.tableau().top(to) {
                    if can_stack_on_tableau(&moving, &target) {
                        out.push(Move::TableauToTableau {
                            from,
                            to,
                            num_cards: sequence.len() as u8,
                            card: moving,
                        });
                    }
                } else if can_place_on_empty_column(&moving) {
                    // Moving a lone King already alone at the bottom of
                    // an otherwise-empty column anywhere is a no-op;
                    // only the canonical first empty column is offered
                    // as a destination (empty-column economy).
                    let is_noop_relocation = from_is_solo_king(state, from, start);
                    if !is_noop_relocation && Some(to) == first_empty {
                        out.push(Move::TableauToTableau {
                            from,
                            to,
                            num_cards: sequence.len() as u8,
                            card: moving,
                        });
                    }
                }
            }
        }
    }
}

/// True if `column` already holds nothing but a lone King (so the
/// candidate move would just swap one empty column for another).
fn from_is_solo_king(state: &GameState, column: usize, start: usize) -> bool {
    start == 0 && state.tableau().len(column) == 1
}

fn waste_origin_moves(state: &GameState, out: &mut Vec<Move>) {
    let mut seen: FxHashSet<(u8, (u8, crate::card::Suit), Option<usize>)> = HashSet::default();
    let first_empty = state.tableau().first_empty_column();
    for (turns, card) in state.talon().simulate_draws(MAX_DRAW_CYCLES) {
        if state.foundations().accepts(&card) {
            let m = Move::WasteToFoundation { stock_turns: turns, card };
            if seen.insert(m.dedup_key()) {
                out.push(m);
            }
        }
        for to in 0..N_COLUMNS {
            if let Some(&target) = state.tableau().top(to) {
                if can_stack_on_tableau(&card, &target) {
                    let m = Move::WasteToTableau { stock_turns: turns, to, card };
                    if seen.insert(m.dedup_key()) {
                        out.push(m);
                    }
                }
            } else if can_place_on_empty_column(&card) && Some(to) == first_empty {
                let m = Move::WasteToTableau { stock_turns: turns, to, card };
                if seen.insert(m.dedup_key()) {
                    out.push(m);
                }
            }
        }
    }
}

fn foundation_to_tableau(state: &GameState, out: &mut Vec<Move>) {
    let foundations: &Foundations = state.foundations();
    let first_empty = state.tableau().first_empty_column();
    for suit in crate::card::Suit::ALL {
        let Some(card) = foundations.top(suit) else { continue };
        if !can_foundation_return(card.rank, foundations) {
            continue;
        }
        for to in 0..N_COLUMNS {
            if let Some(&target) = state.tableau().top(to) {
                if can_stack_on_tableau(&card, &target) {
                    out.push(Move::FoundationToTableau { suit, to, card });
                }
            } else if can_place_on_empty_column(&card) && Some(to) == first_empty {
                out.push(Move::FoundationToTableau { suit, to, card });
            }
        }
    }
}
