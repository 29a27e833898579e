/// Who took the round. Doubles as the match verdict.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Outcome {
    One,
    Two,
    Tie,
}

impl Outcome {
    pub fn of(one: Move, two: Move) -> Self {
        match (one.beats(two), two.beats(one)) {
            (true, _) => Outcome::One,
            (_, true) => Outcome::Two,
            _ => Outcome::Tie,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Outcome::One => write!(f, "** Player one wins **"),
            Outcome::Two => write!(f, "** Player two wins **"),
            Outcome::Tie => write!(f, "** Tied game **"),
        }
    }
}

/// One simultaneous exchange, resolved.
#[derive(Debug, Clone, Copy)]
pub struct Round {
    pub one: Move,
    pub two: Move,
    pub outcome: Outcome,
}

use crate::moves::Move;
