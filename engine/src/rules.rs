//! Low-level legality predicates shared by move generation and
//! validation. Grounded on the teacher's `rules.rs` free functions.

use crate::card::Card;

/// True if `moving` may be placed directly on top of `target` in a
/// tableau build sequence: one rank lower, opposite color.
pub fn can_stack_on_tableau(moving: &Card, target: &Card) -> bool {
    target.face_up && moving.rank + 1 == target.rank && moving.color() != target.color()
}

/// True if `card` may be placed into an empty tableau column. Only
/// Kings may start a new pile.
pub fn can_place_on_empty_column(card: &Card) -> bool {
    card.rank == 13
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;
    use rstest::rstest;

    #[rstest]
    #[case(7, Suit::Hearts, 8, Suit::Spades, true)] // red 7 on black 8
    #[case(6, Suit::Clubs, 7, Suit::Diamonds, true)] // black 6 on red 7
    #[case(8, Suit::Hearts, 7, Suit::Spades, false)] // wrong direction
    #[case(7, Suit::Hearts, 8, Suit::Diamonds, false)] // same color
    #[case(7, Suit::Hearts, 9, Suit::Spades, false)] // rank gap
    fn stacking_rule(
        #[case] moving_rank: u8,
        #[case] moving_suit: Suit,
        #[case] target_rank: u8,
        #[case] target_suit: Suit,
        #[case] expected: bool,
    ) {
        let moving = Card::new(moving_rank, moving_suit, true);
        let target = Card::new(target_rank, target_suit, true);
        assert_eq!(can_stack_on_tableau(&moving, &target), expected);
    }

    #[test]
    fn stacking_requires_face_up_target() {
        let moving = Card::new(7, Suit::Hearts, true);
        let target = Card::new(8, Suit::Spades, false);
        assert!(!can_stack_on_tableau(&moving, &target));
    }

    #[rstest]
    #[case(13, true)]
    #[case(12, false)]
    fn only_kings_start_empty_columns(#[case] rank: u8, #[case] expected: bool) {
        assert_eq!(can_place_on_empty_column(&Card::new(rank, Suit::Hearts, true)), expected);
    }
}
