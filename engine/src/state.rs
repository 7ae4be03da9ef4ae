//! GameState: the complete state of a Thoughtful Solitaire deal.

use crate::card::{Card, Suit};
use crate::foundations::Foundations;
use crate::talon::Talon;
use crate::tableau::Tableau;
use fxhash::FxHashSet;

/// How many draw cycles the K+ macro and the talon-reachability feature
/// are willing to simulate before giving up, per §4.B/§4.C.
pub const MAX_DRAW_CYCLES: u32 = 60;

/// The complete state of a deal: tableau, foundations, and talon
/// (stock + waste). Cloning is a deep copy; the derived `Hash`/`Eq`
/// implementations already satisfy §3's canonical-hash requirement
/// (two states are equal iff their tableau content including face-up
/// bits, foundation lengths, and stock/waste sequences all match).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    tableau: Tableau,
    foundations: Foundations,
    talon: Talon,
}

impl GameState {
    pub fn new(tableau: Tableau, foundations: Foundations, talon: Talon) -> Self {
        Self { tableau, foundations, talon }
    }

    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    pub fn tableau_mut(&mut self) -> &mut Tableau {
        &mut self.tableau
    }

    pub fn foundations(&self) -> &Foundations {
        &self.foundations
    }

    pub fn foundations_mut(&mut self) -> &mut Foundations {
        &mut self.foundations
    }

    pub fn talon(&self) -> &Talon {
        &self.talon
    }

    pub fn talon_mut(&mut self) -> &mut Talon {
        &mut self.talon
    }

    pub fn is_win(&self) -> bool {
        self.foundations.total() == 52
    }

    /// A deterministic 64-bit fingerprint of this state, stable across
    /// runs within a process and used for transposition caching and
    /// cycle detection. Built from the whole, derived `Hash` impl, which
    /// already covers every field the canonical hash is required to:
    /// per-column tableau content (face-up bits included), per-suit
    /// foundation length, and the ordered stock/waste sequences.
    pub fn state_hash(&self) -> u64 {
        fxhash::hash64(self)
    }

    /// Card identities reachable on the waste top within
    /// `MAX_DRAW_CYCLES` three-card draws (with redeal), per §4.B.
    pub fn reachable_talon_cards(&self) -> FxHashSet<(u8, Suit)> {
        self.talon.reachable_top_identities(MAX_DRAW_CYCLES)
    }

    /// All 52 cards and their current location, used by the evaluators
    /// and the relaxed-domain pruning oracle.
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards = Vec::with_capacity(52);
        for column in self.tableau.columns() {
            cards.extend(column.iter().copied());
        }
        for suit in Suit::ALL {
            for rank in 1..=self.foundations.len(suit) {
                cards.push(Card::new(rank, suit, true));
            }
        }
        cards.extend(self.talon.stock().iter().copied());
        cards.extend(self.talon.waste().iter().copied());
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn fresh() -> GameState {
        GameState::new(Tableau::new(), Foundations::new(), Talon::new(Vec::new()))
    }

    #[test]
    fn empty_state_is_not_win() {
        assert!(!fresh().is_win());
    }

    #[test]
    fn full_foundations_is_win() {
        let mut state = fresh();
        for suit in Suit::ALL {
            for rank in 1..=13u8 {
                state.foundations_mut().place(Card::new(rank, suit, true)).unwrap();
            }
        }
        assert!(state.is_win());
    }

    #[test]
    fn state_hash_is_deterministic_and_sensitive_to_face_up() {
        let mut a = fresh();
        a.tableau_mut().push_unchecked(0, Card::new(5, Suit::Hearts, false));
        let mut b = fresh();
        b.tableau_mut().push_unchecked(0, Card::new(5, Suit::Hearts, false));
        assert_eq!(a.state_hash(), b.state_hash());

        let mut c = fresh();
        c.tableau_mut().push_unchecked(0, Card::new(5, Suit::Hearts, true));
        assert_ne!(a.state_hash(), c.state_hash());
    }

    #[test]
    fn clone_then_diff_shows_no_difference() {
        let mut a = fresh();
        a.tableau_mut().push_unchecked(1, Card::new(9, Suit::Clubs, true));
        let b = a.clone();
        assert_eq!(a, b);
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn all_cards_counts_every_location() {
        let mut state = fresh();
        state.tableau_mut().push_unchecked(0, Card::new(1, Suit::Hearts, true));
        state.foundations_mut().place(Card::new(1, Suit::Spades, true)).unwrap();
        *state.talon_mut() = Talon::new(vec![Card::new(2, Suit::Clubs, false)]);
        assert_eq!(state.all_cards().len(), 3);
    }
}
