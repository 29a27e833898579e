/// Walks the fixed rotation, one step past its own last throw.
#[derive(Debug)]
pub struct Cycle {
    last: Option<Move>,
}

impl Cycle {
    pub fn new() -> Self {
        Cycle { last: None }
    }
}

impl Player for Cycle {
    fn act(&mut self) -> Move {
        match self.last {
            Some(own) => own.next(),
            None => Move::Rock,
        }
    }
    fn observe(&mut self, own: Move, _: Move) {
        self.last = Some(own);
    }
}

use super::Player;
use crate::moves::Move;
