//! Deterministic deal generation from an integer seed, per §4.A/§6.

use crate::card::{Card, Suit};
use crate::foundations::Foundations;
use crate::state::GameState;
use crate::talon::Talon;
use crate::tableau::{Tableau, N_COLUMNS};
use rand::rngs::SmallRng;
use rand::{seq::SliceRandom, SeedableRng};

/// Builds the 52-card deck in the deterministic order §6 specifies:
/// suits Hearts, Diamonds, Clubs, Spades outer loop, ranks 1..=13 inner.
fn standard_deck() -> Vec<Card> {
    let mut deck = Vec::with_capacity(52);
    for suit in Suit::ALL {
        for rank in 1..=13u8 {
            deck.push(Card::new(rank, suit, false));
        }
    }
    deck
}

/// Deals a fresh Thoughtful Solitaire layout from `seed`: a Fisher-Yates
/// shuffle driven by a PRNG seeded with `seed`, then dealt into seven
/// tableau columns of sizes 1..=7 (only each column's top card face-up),
/// with the remaining 24 cards becoming the stock in shuffle order.
/// Identical seeds always produce identical deals within this process.
pub fn deal(seed: u64) -> GameState {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut deck = standard_deck();
    deck.shuffle(&mut rng);

    let mut tableau = Tableau::new();
    let mut cursor = deck.into_iter();
    for column in 0..N_COLUMNS {
        for position in 0..=column {
            let mut card = cursor.next().expect("52-card deck covers all columns");
            card.face_up = position == column;
            tableau.push_unchecked(column, card);
        }
    }
    let stock: Vec<Card> = cursor.collect();
    debug_assert_eq!(stock.len(), 24);

    GameState::new(tableau, Foundations::new(), Talon::new(stock))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deal_distributes_fifty_two_distinct_cards() {
        let state = deal(42);
        let cards = state.all_cards();
        assert_eq!(cards.len(), 52);
        let mut seen = std::collections::HashSet::new();
        for card in &cards {
            assert!(seen.insert(card.identity()), "duplicate card {card:?}");
        }
    }

    #[test]
    fn deal_column_sizes_and_face_up_tops() {
        let state = deal(7);
        for column in 0..N_COLUMNS {
            assert_eq!(state.tableau().len(column), column + 1);
            let cards = state.tableau().column(column).unwrap();
            for (i, card) in cards.iter().enumerate() {
                assert_eq!(card.face_up, i == column);
            }
        }
        assert_eq!(state.talon().stock().len(), 24);
        assert!(state.talon().waste().is_empty());
    }

    #[test]
    fn same_seed_deals_identically() {
        assert_eq!(deal(123), deal(123));
    }

    #[test]
    fn different_seeds_usually_differ() {
        assert_ne!(deal(1), deal(2));
    }
}
