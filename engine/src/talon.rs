//! Stock and waste, collectively "the talon".

use crate::card::Card;
use fxhash::FxHashSet;
use std::collections::HashSet;

/// Stock (face-down, undrawn) and waste (face-up, drawn) piles. Both are
/// stored top-last: `stock.last()` / `waste.last()` is the pile's top
/// card.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Talon {
    stock: Vec<Card>,
    waste: Vec<Card>,
}

impl Talon {
    pub fn new(stock: Vec<Card>) -> Self {
        Self { stock, waste: Vec::new() }
    }

    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    /// Mutable access to the waste pile, used by the move applier to
    /// pop the card a `WASTE->...` move actually consumes.
    pub fn waste_mut(&mut self) -> &mut Vec<Card> {
        &mut self.waste
    }

    pub fn is_exhausted(&self) -> bool {
        self.stock.is_empty() && self.waste.is_empty()
    }

    /// Draw up to three cards from the stock onto the waste, redealing
    /// (reversing waste back into stock) first if the stock is empty.
    /// Drawn cards become face-up. Returns `false` if there was nothing
    /// left to draw at all (empty stock and empty waste).
    pub fn draw_three(&mut self) -> bool {
        if self.stock.is_empty() {
            if self.waste.is_empty() {
                return false;
            }
            self.waste.reverse();
            std::mem::swap(&mut self.stock, &mut self.waste);
        }
        let n = self.stock.len().min(3);
        for _ in 0..n {
            let mut card = self.stock.pop().expect("checked len above");
            card.face_up = true;
            self.waste.push(card);
        }
        true
    }

    /// Simulate up to `max_cycles` draws (each a `draw_three`, with
    /// redeal), recording the waste-top card identity and the number of
    /// accumulated draws at each step where the waste is non-empty —
    /// starting from the current waste top at `stock_turns = 0` (§4.D:
    /// a waste-origin move first performs `stock_turns` draws, and zero
    /// is a legal turn count), then each subsequent draw. Stops early
    /// if a `(stock, waste)` pair repeats, per §4.B/§4.C.
    pub fn simulate_draws(&self, max_cycles: u32) -> Vec<(u32, Card)> {
        let mut sim = self.clone();
        let mut seen: FxHashSet<(Vec<Card>, Vec<Card>)> = HashSet::default();
        let mut out = Vec::new();
        if let Some(&top) = sim.waste.last() {
            out.push((0, top));
        }
        seen.insert((sim.stock.clone(), sim.waste.clone()));
        for turn in 1..=max_cycles {
            if !sim.draw_three() {
                break;
            }
            let key = (sim.stock.clone(), sim.waste.clone());
            if !seen.insert(key) {
                break;
            }
            if let Some(&top) = sim.waste.last() {
                out.push((turn, top));
            }
        }
        out
    }

    /// All card identities that would appear on the waste top within
    /// `max_cycles` draw cycles, including the current waste top right
    /// now. Feeds H2's talon-availability feature.
    pub fn reachable_top_identities(&self, max_cycles: u32) -> FxHashSet<(u8, crate::card::Suit)> {
        let mut ids: FxHashSet<(u8, crate::card::Suit)> =
            self.simulate_draws(max_cycles).into_iter().map(|(_, card)| card.identity()).collect();
        if let Some(top) = self.waste_top() {
            ids.insert(top.identity());
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    fn deck(n: u8) -> Vec<Card> {
        (1..=n).map(|r| Card::new(r, Suit::Hearts, false)).collect()
    }

    #[test]
    fn draw_three_takes_up_to_three_in_pop_order() {
        let mut t = Talon::new(deck(5));
        assert!(t.draw_three());
        // stock was [1,2,3,4,5] (top = 5); popping three gives 5,4,3 in
        // that order, pushed onto waste so waste top ends up 3.
        assert_eq!(t.waste_top().map(|c| c.rank), Some(3));
        assert_eq!(t.stock().len(), 2);
    }

    #[test]
    fn redeal_reverses_waste_into_stock() {
        let mut t = Talon::new(deck(2));
        assert!(t.draw_three()); // stock empty, waste = [2,1] (top=1)
        assert!(t.stock().is_empty());
        assert!(t.draw_three()); // redeal: stock becomes [1,2] reversed from waste
        assert_eq!(t.waste().len(), 2);
        assert!(t.stock().is_empty());
    }

    #[test]
    fn draw_three_on_fully_exhausted_talon_returns_false() {
        let mut t = Talon::new(Vec::new());
        assert!(!t.draw_three());
    }

    #[test]
    fn simulate_draws_halts_on_repetition() {
        let t = Talon::new(deck(3));
        let sim = t.simulate_draws(60);
        // 3 cards: one draw exhausts stock, one redeal cycle repeats
        // forever after that — must terminate well before 60.
        assert!(sim.len() < 60);
    }

    #[test]
    fn reachable_top_identities_includes_all_cards_for_small_talon() {
        let t = Talon::new(deck(3));
        let ids = t.reachable_top_identities(60);
        assert!(ids.contains(&(3, Suit::Hearts)));
    }

    #[test]
    fn simulate_draws_includes_current_waste_top_at_zero_turns() {
        let mut t = Talon::new(vec![Card::new(2, Suit::Spades, false)]);
        t.waste_mut().push(Card::new(1, Suit::Hearts, true));
        let sim = t.simulate_draws(60);
        assert_eq!(sim.first(), Some(&(0, Card::new(1, Suit::Hearts, true))));
    }

    #[test]
    fn reachable_top_identities_includes_current_waste_top() {
        let mut t = Talon::new(vec![Card::new(2, Suit::Spades, false)]);
        t.waste_mut().push(Card::new(1, Suit::Hearts, true));
        let ids = t.reachable_top_identities(60);
        assert!(ids.contains(&(1, Suit::Hearts)));
    }
}
