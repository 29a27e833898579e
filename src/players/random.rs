/// Uniform draw over the five moves, no memory between rounds.
#[derive(Debug)]
pub struct Random;

impl Player for Random {
    fn act(&mut self) -> Move {
        Move::random()
    }
}

use super::Player;
use crate::moves::Move;
