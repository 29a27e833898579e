//! Interactive Binary
//!
//! Human versus a randomly drafted machine opponent.
//! Five rounds per game, replay until the human walks away.

use rpsls::*;

fn main() {
    log();
    let mut game = engine::game::Game::new(Box::new(players::human::Human), players::draft());
    loop {
        game.play();
        if console::replay() {
            continue;
        }
        console::say("Ok, Goodbye!");
        break;
    }
}
