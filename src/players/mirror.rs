/// Throws whatever the opponent threw last round. Until a round has been
/// seen, falls back on one random guess fixed at construction.
#[derive(Debug)]
pub struct Mirror {
    seen: Move,
}

impl Mirror {
    pub fn new() -> Self {
        Mirror {
            seen: Move::random(),
        }
    }
}

impl Player for Mirror {
    fn act(&mut self) -> Move {
        self.seen
    }
    fn observe(&mut self, _: Move, seen: Move) {
        self.seen = seen;
    }
}

use super::Player;
use crate::moves::Move;
