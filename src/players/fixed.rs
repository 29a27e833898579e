/// Throws rock. Every time.
#[derive(Debug)]
pub struct Fixed;

impl Player for Fixed {
    fn act(&mut self) -> Move {
        Move::Rock
    }
}

use super::Player;
use crate::moves::Move;
