//! Card identity for Thoughtful Solitaire.

use serde::{Deserialize, Serialize};

/// One of the four French suits, ordered the way the deterministic deck
/// builder lays them out: Hearts, Diamonds, Clubs, Spades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// The foundation pile index for this suit (0..=3).
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    pub const fn from_index(index: usize) -> Option<Suit> {
        match index {
            0 => Some(Suit::Hearts),
            1 => Some(Suit::Diamonds),
            2 => Some(Suit::Clubs),
            3 => Some(Suit::Spades),
            _ => None,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Clubs | Suit::Spades => Color::Black,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// A single playing card: rank (1 = Ace .. 13 = King), suit, and whether
/// it is currently face-up. All three fields participate in equality and
/// hashing, matching §3's "Immutable triple" definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: u8,
    pub suit: Suit,
    pub face_up: bool,
}

impl Card {
    pub const fn new(rank: u8, suit: Suit, face_up: bool) -> Self {
        Self { rank, suit, face_up }
    }

    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    pub const fn is_valid_rank(&self) -> bool {
        self.rank >= 1 && self.rank <= 13
    }

    /// The card's identity ignoring face-up state — used anywhere two
    /// cards are compared as "the same card" regardless of orientation
    /// (pruning's relaxed-domain reachability set, in particular).
    pub const fn identity(&self) -> (u8, Suit) {
        (self.rank, self.suit)
    }

    pub fn flipped_up(&self) -> Self {
        Self { face_up: true, ..*self }
    }
}
