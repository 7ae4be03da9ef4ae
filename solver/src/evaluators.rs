//! Position evaluators H1 (opening) and H2 (endgame) — §4.F.

use thoughtful_engine::{Card, GameState, Suit};

/// Which evaluator a search level uses. H1 favors uncovering and
/// emptying the tableau; H2 rewards raw foundation progress and talon
/// availability once the opening has settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    H1,
    H2,
}

impl Heuristic {
    pub fn next(self) -> Option<Heuristic> {
        match self {
            Heuristic::H1 => Some(Heuristic::H2),
            Heuristic::H2 => None,
        }
    }
}

/// Sum of per-card features F1-F6 over `state`, per `h`. A win state is
/// `f64::INFINITY` regardless of heuristic.
pub fn evaluate(state: &GameState, h: Heuristic) -> f64 {
    if state.is_win() {
        return f64::INFINITY;
    }
    let mut score = 0.0;
    score += foundation_score(state, h);
    score += face_down_score(state, h);
    score += talon_availability_score(state, h);
    score += same_rank_pair_score(state, h);
    score += suit_blocker_score(state, h);
    score += build_blocker_score(state, h);
    score
}

fn foundation_score(state: &GameState, h: Heuristic) -> f64 {
    let mut total = 0.0;
    for suit in Suit::ALL {
        for rank in 1..=state.foundations().len(suit) {
            let rv = (rank - 1) as f64;
            total += match h {
                Heuristic::H1 => 5.0 - rv,
                Heuristic::H2 => 5.0,
            };
        }
    }
    total
}

fn face_down_score(state: &GameState, _h: Heuristic) -> f64 {
    let mut total = 0.0;
    for column in state.tableau().columns() {
        for card in column {
            if !card.face_up {
                let rv = (card.rank - 1) as f64;
                total += rv - 13.0;
            }
        }
    }
    total
}

fn talon_availability_score(state: &GameState, h: Heuristic) -> f64 {
    if h == Heuristic::H1 {
        return 0.0;
    }
    state.reachable_talon_cards().len() as f64
}

/// F4: a same-rank, same-color pair both face-down in the tableau
/// blocks each other from ever stacking together; penalized once per
/// unordered pair.
fn same_rank_pair_score(state: &GameState, h: Heuristic) -> f64 {
    let weight = match h {
        Heuristic::H1 => -5.0,
        Heuristic::H2 => -1.0,
    };
    let mut face_down: Vec<Card> = Vec::new();
    for column in state.tableau().columns() {
        face_down.extend(column.iter().filter(|c| !c.face_up).copied());
    }
    let mut pairs = 0.0;
    for i in 0..face_down.len() {
        for j in (i + 1)..face_down.len() {
            let (a, b) = (face_down[i], face_down[j]);
            if a.rank == b.rank && a.color() == b.color() {
                pairs += 1.0;
            }
        }
    }
    pairs * weight
}

/// A card `x` is a blocker for `y` if `x` sits above `y` in the same
/// column and `x` is not resting directly on a face-up card: `x` is
/// either face-down itself, or it is the first face-up card above the
/// face-down prefix.
fn is_blocker(column: &[Card], index: usize) -> bool {
    if !column[index].face_up {
        return true;
    }
    index > 0 && !column[index - 1].face_up
}

fn suit_blocker_score(state: &GameState, h: Heuristic) -> f64 {
    let weight = match h {
        Heuristic::H1 => -5.0,
        Heuristic::H2 => -1.0,
    };
    let mut total = 0.0;
    for column in state.tableau().columns() {
        for i in 0..column.len() {
            if !is_blocker(column, i) {
                continue;
            }
            let x = column[i];
            for y in column.iter().take(i) {
                if y.suit == x.suit && y.rank < x.rank {
                    total += weight;
                }
            }
        }
    }
    total
}

fn build_blocker_score(state: &GameState, h: Heuristic) -> f64 {
    let weight = match h {
        Heuristic::H1 => -10.0,
        Heuristic::H2 => -5.0,
    };
    let mut total = 0.0;
    for column in state.tableau().columns() {
        for i in 0..column.len() {
            if !is_blocker(column, i) {
                continue;
            }
            let x = column[i];
            for y in column.iter().take(i) {
                if y.color() != x.color() && y.rank == x.rank + 1 {
                    total += weight;
                }
            }
        }
    }
    total
}
