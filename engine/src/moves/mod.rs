//! Move representation, generation, and application — §4.C/§4.D.

mod apply;
mod generate;

pub use apply::{apply_move, ApplyError};
pub use generate::generate_moves;

use crate::card::{Card, Suit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single legal transition between two `GameState`s. Each move
/// carries everything the applier and the solver need: which cards
/// move, how many (for tableau sequences), how many stock cycles
/// precede a waste-origin move (the "K+" macro, §4.C), and a priority
/// used for move ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    TableauToFoundation { from: usize, card: Card },
    TableauToTableau { from: usize, to: usize, num_cards: u8, card: Card },
    WasteToFoundation { stock_turns: u32, card: Card },
    WasteToTableau { stock_turns: u32, to: usize, card: Card },
    FoundationToTableau { suit: Suit, to: usize, card: Card },
}

impl Move {
    pub fn card(&self) -> Card {
        match self {
            Move::TableauToFoundation { card, .. }
            | Move::TableauToTableau { card, .. }
            | Move::WasteToFoundation { card, .. }
            | Move::WasteToTableau { card, .. }
            | Move::FoundationToTableau { card, .. } => *card,
        }
    }

    pub fn stock_turns(&self) -> u32 {
        match self {
            Move::WasteToFoundation { stock_turns, .. } | Move::WasteToTableau { stock_turns, .. } => *stock_turns,
            _ => 0,
        }
    }

    /// The destination tableau column, if this move targets the
    /// tableau. Used by the empty-column-economy rule and by move
    /// deduplication.
    pub fn destination_column(&self) -> Option<usize> {
        match self {
            Move::TableauToTableau { to, .. } | Move::WasteToTableau { to, .. } | Move::FoundationToTableau { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// A key over (kind-tag, card identity, destination) used by the
    /// K+ macro's deduplication rule.
    pub(crate) fn dedup_key(&self) -> (u8, (u8, Suit), Option<usize>) {
        let tag = match self {
            Move::TableauToFoundation { .. } => 0,
            Move::TableauToTableau { .. } => 1,
            Move::WasteToFoundation { .. } => 2,
            Move::WasteToTableau { .. } => 3,
            Move::FoundationToTableau { .. } => 4,
        };
        (tag, self.card().identity(), self.destination_column())
    }

    /// Whether applying this move, as generated (pre-application), will
    /// reveal a face-down tableau card. Only tableau-sourced moves can
    /// reveal anything.
    pub fn reveals_face_down(&self, state: &crate::state::GameState) -> bool {
        match *self {
            Move::TableauToFoundation { from, .. } => reveals(state, from, 1),
            Move::TableauToTableau { from, num_cards, .. } => reveals(state, from, num_cards as usize),
            _ => false,
        }
    }

    /// §4.C's priority table: lower numbers are searched first.
    pub fn priority(&self, reveals_face_down: bool) -> u8 {
        match self {
            Move::TableauToFoundation { .. } => {
                if reveals_face_down {
                    1
                } else {
                    2
                }
            }
            Move::WasteToFoundation { .. } => 2,
            Move::TableauToTableau { .. } => {
                if reveals_face_down {
                    3
                } else {
                    6
                }
            }
            Move::WasteToTableau { .. } => 4,
            Move::FoundationToTableau { .. } => 5,
        }
    }
}

/// The move that would undo `mv`, computed against the state *before*
/// `mv` is applied (per §4.G and §9's "Reverse-move detection" note —
/// once a face-down flip has happened, there is no way back, so this
/// can only be answered looking at the pre-move column contents).
/// Waste-origin moves never have a reverse; a tableau move that would
/// reveal a face-down card is irreversible.
pub fn reverse_move(state: &crate::state::GameState, mv: &Move) -> Option<Move> {
    match *mv {
        Move::TableauToTableau { from, to, num_cards, card } => {
            if mv.reveals_face_down(state) {
                None
            } else {
                Some(Move::TableauToTableau { from: to, to: from, num_cards, card })
            }
        }
        Move::TableauToFoundation { from, card } => {
            if mv.reveals_face_down(state) {
                None
            } else {
                Some(Move::FoundationToTableau { suit: card.suit, to: from, card })
            }
        }
        Move::FoundationToTableau { to, card, .. } => {
            Some(Move::TableauToFoundation { from: to, card })
        }
        Move::WasteToFoundation { .. } | Move::WasteToTableau { .. } => None,
    }
}

fn reveals(state: &crate::state::GameState, column: usize, num_cards: usize) -> bool {
    let len = state.tableau().len(column);
    if num_cards >= len {
        return false;
    }
    let below_index = len - num_cards - 1;
    !state.tableau().column(column).unwrap()[below_index].face_up
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::TableauToFoundation { from, card } => write!(f, "Tableau {from} -> Foundation ({card:?})"),
            Move::TableauToTableau { from, to, num_cards, card } => {
                write!(f, "Tableau {from} -> Tableau {to} ({num_cards} card(s), top {card:?})")
            }
            Move::WasteToFoundation { stock_turns, card } => {
                write!(f, "Waste -> Foundation ({card:?}, after {stock_turns} turn(s))")
            }
            Move::WasteToTableau { stock_turns, to, card } => {
                write!(f, "Waste -> Tableau {to} ({card:?}, after {stock_turns} turn(s))")
            }
            Move::FoundationToTableau { suit, to, card } => {
                write!(f, "Foundation({suit:?}) -> Tableau {to} ({card:?})")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn priority_table_matches_spec() {
        let card = Card::new(5, Suit::Hearts, true);
        assert_eq!(Move::TableauToFoundation { from: 0, card }.priority(true), 1);
        assert_eq!(Move::TableauToFoundation { from: 0, card }.priority(false), 2);
        assert_eq!(Move::WasteToFoundation { stock_turns: 0, card }.priority(false), 2);
        assert_eq!(
            Move::TableauToTableau { from: 0, to: 1, num_cards: 1, card }.priority(true),
            3
        );
        assert_eq!(Move::WasteToTableau { stock_turns: 1, to: 0, card }.priority(false), 4);
        assert_eq!(
            Move::FoundationToTableau { suit: Suit::Hearts, to: 0, card }.priority(false),
            5
        );
        assert_eq!(
            Move::TableauToTableau { from: 0, to: 1, num_cards: 1, card }.priority(false),
            6
        );
    }

    #[test]
    fn foundation_to_tableau_is_always_reversible() {
        use crate::foundations::Foundations;
        use crate::talon::Talon;
        use crate::tableau::Tableau;

        let state = crate::state::GameState::new(Tableau::new(), Foundations::new(), Talon::new(Vec::new()));
        let card = Card::new(5, Suit::Hearts, true);
        let mv = Move::FoundationToTableau { suit: Suit::Hearts, to: 2, card };
        let reverse = reverse_move(&state, &mv).unwrap();
        assert_eq!(reverse, Move::TableauToFoundation { from: 2, card });
    }

    #[test]
    fn waste_origin_moves_have_no_reverse() {
        use crate::foundations::Foundations;
        use crate::talon::Talon;
        use crate::tableau::Tableau;

        let state = crate::state::GameState::new(Tableau::new(), Foundations::new(), Talon::new(Vec::new()));
        let card = Card::new(5, Suit::Hearts, true);
        assert!(reverse_move(&state, &Move::WasteToFoundation { stock_turns: 0, card }).is_none());
        assert!(reverse_move(&state, &Move::WasteToTableau { stock_turns: 0, to: 0, card }).is_none());
    }

    #[test]
    fn tableau_to_tableau_reverse_only_when_no_reveal() {
        use crate::foundations::Foundations;
        use crate::talon::Talon;
        use crate::tableau::Tableau;

        let mut t = Tableau::new();
        t.push_unchecked(0, Card::new(9, Suit::Clubs, false));
        t.push_unchecked(0, Card::new(8, Suit::Hearts, true));
        let state = crate::state::GameState::new(t, Foundations::new(), Talon::new(Vec::new()));
        let card = Card::new(8, Suit::Hearts, true);
        let mv = Move::TableauToTableau { from: 0, to: 1, num_cards: 1, card };
        // moving the lone face-up 8H away exposes a face-down 9C: irreversible.
        assert!(reverse_move(&state, &mv).is_none());
    }
}
