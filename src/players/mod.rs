pub mod cycle;
pub mod fixed;
pub mod human;
pub mod mirror;
pub mod random;

/// A move-selection policy. Both committed moves are fed back through
/// observe exactly once per round; stateless players keep the no-op default.
pub trait Player: Debug {
    fn act(&mut self) -> Move;
    fn observe(&mut self, _own: Move, _seen: Move) {}
}

/// Drafts the machine opponent, once per process. Replays keep whatever
/// was drafted here, memory included.
pub fn draft() -> Box<dyn Player> {
    let player: Box<dyn Player> = match rand::rng().random_range(0..4) {
        0 => Box::new(mirror::Mirror::new()),
        1 => Box::new(random::Random),
        2 => Box::new(cycle::Cycle::new()),
        _ => Box::new(fixed::Fixed),
    };
    log::info!("drafted {:?}", player);
    player
}

use crate::moves::Move;
use rand::Rng;
use std::fmt::Debug;
