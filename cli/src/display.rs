//! Illustrative board pretty-printing. Format is non-essential per the
//! interface notes — this exists so the interactive driver has
//! something readable to print, not as a committed wire format.

use std::fmt::Write as _;
use thoughtful_engine::{GameState, Suit};

fn suit_glyph(suit: Suit) -> char {
    match suit {
        Suit::Hearts => 'H',
        Suit::Diamonds => 'D',
        Suit::Clubs => 'C',
        Suit::Spades => 'S',
    }
}

fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        r => r.to_string(),
    }
}

pub fn render(state: &GameState) -> String {
    let mut out = String::new();
    writeln!(out, "Foundations:").unwrap();
    for suit in Suit::ALL {
        let len = state.foundations().len(suit);
        let top = if len == 0 { "--".to_string() } else { format!("{}{}", rank_label(len), suit_glyph(suit)) };
        write!(out, " {top}").unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "Stock: {} card(s)  Waste top: {}", state.talon().stock().len(), {
        match state.talon().waste_top() {
            Some(card) => format!("{}{}", rank_label(card.rank), suit_glyph(card.suit)),
            None => "--".to_string(),
        }
    })
    .unwrap();

    writeln!(out, "Tableau:").unwrap();
    for (i, column) in state.tableau().columns().iter().enumerate() {
        write!(out, " {i}:").unwrap();
        for card in column {
            let label = format!("{}{}", rank_label(card.rank), suit_glyph(card.suit));
            let shown = if card.face_up { label } else { "[]".to_string() };
            write!(out, " {shown}").unwrap();
        }
        writeln!(out).unwrap();
    }
    out
}
