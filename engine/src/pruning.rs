//! Pruning oracles — component E, §4.E.

use crate::card::Suit;
use crate::foundations::Foundations;
use crate::state::GameState;
use fxhash::{FxHashMap, FxHashSet};
use std::collections::{HashMap, HashSet};

/// False if `rank <= 2` (an Ace or Two never needs to come back), or if
/// every foundation already has length `>= rank - 2`. Otherwise true:
/// some lower card of the opposite color could still need this one,
/// so returning it to the tableau is legal.
pub fn can_foundation_return(rank: u8, foundations: &Foundations) -> bool {
    if rank <= 2 {
        return false;
    }
    !Suit::ALL.iter().all(|&suit| foundations.len(suit) >= rank - 2)
}

/// Relaxed-domain unsolvability filter: under a model where playing a
/// card to a foundation does not consume it, determine whether every
/// suit's foundation can reach rank 13. Stock and waste cards are
/// accessible from the start (the real game can always reach them via
/// redeals); a tableau card is accessible once it sits in its column's
/// face-up suffix, or once the real card it is stacked on is "played"
/// in this relaxed sense. Returns `false` only when the real game is
/// provably unsolvable; a `true` result is not a solvability proof.
pub fn relaxed_solvable(state: &GameState) -> bool {
    let mut accessible: FxHashSet<(u8, Suit)> = HashSet::default();
    for card in state.talon().stock() {
        accessible.insert(card.identity());
    }
    for card in state.talon().waste() {
        accessible.insert(card.identity());
    }

    // Maps a card identity to the identity of the card it sits directly
    // atop, when that card is currently face-down. Playing the key in
    // the relaxed model reveals the value.
    let mut reveals: FxHashMap<(u8, Suit), (u8, Suit)> = HashMap::default();
    for column_index in 0..crate::tableau::N_COLUMNS {
        let column = state.tableau().column(column_index).expect("valid column index");
        for (i, card) in column.iter().enumerate() {
            if card.face_up {
                accessible.insert(card.identity());
            }
            if i > 0 && !column[i - 1].face_up {
                reveals.insert(card.identity(), column[i - 1].identity());
            }
        }
    }

    // Cards already on a foundation are already played; start each
    // counter there rather than from zero, so mid-game checks do not
    // forget progress the real game has already banked.
    let mut lens = [0u8; 4];
    for suit in Suit::ALL {
        lens[suit.index()] = state.foundations().len(suit);
    }

    loop {
        let mut changed = false;
        for suit in Suit::ALL {
            let idx = suit.index();
            while lens[idx] < 13 {
                let next = lens[idx] + 1;
                if !accessible.contains(&(next, suit)) {
                    break;
                }
                lens[idx] = next;
                changed = true;
                if let Some(&revealed) = reveals.get(&(next, suit)) {
                    accessible.insert(revealed);
                }
            }
        }
        if !changed {
            break;
        }
    }
    lens.iter().all(|&len| len == 13)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Card;
    use crate::talon::Talon;
    use crate::tableau::Tableau;
    use rstest::rstest;

    #[rstest]
    #[case(1, [0, 0, 0, 0], false)]
    #[case(2, [0, 0, 0, 0], false)]
    #[case(3, [0, 0, 0, 0], true)]
    #[case(3, [1, 1, 1, 1], false)] // all foundations already at 1 >= 3-2
    #[case(5, [3, 0, 0, 0], true)]
    fn foundation_return_oracle(#[case] rank: u8, #[case] lens: [u8; 4], #[case] expected: bool) {
        let mut f = Foundations::new();
        for suit in Suit::ALL {
            for r in 1..=lens[suit.index()] {
                f.place(Card::new(r, suit, true)).unwrap();
            }
        }
        assert_eq!(can_foundation_return(rank, &f), expected);
    }

    fn empty_state() -> GameState {
        GameState::new(Tableau::new(), Foundations::new(), Talon::new(Vec::new()))
    }

    #[test]
    fn all_cards_in_stock_is_relaxed_solvable() {
        let mut deck = Vec::new();
        for suit in Suit::ALL {
            for rank in 1..=13u8 {
                deck.push(Card::new(rank, suit, false));
            }
        }
        let state = GameState::new(Tableau::new(), Foundations::new(), Talon::new(deck));
        assert!(relaxed_solvable(&state));
    }

    #[test]
    fn ace_buried_under_nothing_reachable_is_unsolvable() {
        // A single tableau column holding only a face-down 2 of Hearts,
        // with every Ace missing from stock/waste/tableau entirely is an
        // invalid game, so instead bury the Ace under a permanently
        // face-down card with no other occurrence of that card's rank
        // reachable: a column of [2H down, ... ] with no Ace anywhere.
        let mut state = empty_state();
        state.tableau_mut().push_unchecked(0, Card::new(2, Suit::Hearts, false));
        assert!(!relaxed_solvable(&state));
    }

    #[test]
    fn playing_a_card_reveals_the_one_beneath_it() {
        let mut state = empty_state();
        state.tableau_mut().push_unchecked(0, Card::new(2, Suit::Hearts, false));
        state.tableau_mut().push_unchecked(0, Card::new(1, Suit::Hearts, true));
        let mut stock = Vec::new();
        for suit in Suit::ALL {
            for rank in 1..=13u8 {
                if suit == Suit::Hearts && rank <= 2 {
                    continue;
                }
                stock.push(Card::new(rank, suit, false));
            }
        }
        *state.talon_mut() = Talon::new(stock);
        assert!(relaxed_solvable(&state));
    }
}
