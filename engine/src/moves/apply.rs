//! Move application — component D, §4.D.

use super::Move;
use crate::state::GameState;
use crate::tableau::TableauError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    Tableau(TableauError),
    Foundation(crate::foundations::FoundationError),
    EmptyWaste,
    EmptyFoundation,
}

impl fmt::Display for ApplyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApplyError::Tableau(e) => write!(f, "{e}"),
            ApplyError::Foundation(e) => write!(f, "{e}"),
            ApplyError::EmptyWaste => write!(f, "waste pile is empty, cannot draw from it"),
            ApplyError::EmptyFoundation => write!(f, "foundation pile is empty, cannot return a card from it"),
        }
    }
}

impl std::error::Error for ApplyError {}

impl From<TableauError> for ApplyError {
    fn from(e: TableauError) -> Self {
        ApplyError::Tableau(e)
    }
}

impl From<crate::foundations::FoundationError> for ApplyError {
    fn from(e: crate::foundations::FoundationError) -> Self {
        ApplyError::Foundation(e)
    }
}

/// Applies `mv` to `state` in place. Waste-origin moves first perform
/// their `stock_turns` draws (each a three-card draw with redeal, per
/// §4.B), then the move itself executes. Any tableau card exposed by a
/// departing sequence is flipped face-up, matching the real game's rule
/// that the new column top is always revealed immediately.
pub fn apply_move(state: &mut GameState, mv: &Move) -> Result<(), ApplyError> {
    match *mv {
        Move::TableauToFoundation { from, card } => {
            state.tableau_mut().pop_one(from)?;
            state.foundations_mut().place(card)?;
            state.tableau_mut().reveal_top(from);
        }
        Move::TableauToTableau { from, to, num_cards, .. } => {
            let sequence = state.tableau_mut().pop_n(from, num_cards as usize)?;
            for card in sequence {
                state.tableau_mut().push_unchecked(to, card);
            }
            state.tableau_mut().reveal_top(from);
        }
        Move::WasteToFoundation { stock_turns, card } => {
            perform_draws(state, stock_turns);
            let drawn = state.talon_mut().waste_mut().pop().ok_or(ApplyError::EmptyWaste)?;
            debug_assert_eq!(drawn.identity(), card.identity());
            state.foundations_mut().place(drawn)?;
        }
        Move::WasteToTableau { stock_turns, to, card } => {
            perform_draws(state, stock_turns);
            let drawn = state.talon_mut().waste_mut().pop().ok_or(ApplyError::EmptyWaste)?;
            debug_assert_eq!(drawn.identity(), card.identity());
            state.tableau_mut().push_unchecked(to, drawn);
        }
        Move::FoundationToTableau { suit, to, .. } => {
            let card = state.foundations_mut().remove_top(suit).ok_or(ApplyError::EmptyFoundation)?;
            state.tableau_mut().push_unchecked(to, card);
        }
    }
    Ok(())
}

fn perform_draws(state: &mut GameState, turns: u32) {
    for _ in 0..turns {
        state.talon_mut().draw_three();
    }
}
