pub const ROUNDS: usize = 5;

pub struct Game {
    one: Box<dyn Player>,
    two: Box<dyn Player>,
    wins: (Score, Score),
}

impl Game {
    pub fn new(one: Box<dyn Player>, two: Box<dyn Player>) -> Self {
        Game {
            one,
            two,
            wins: (0, 0),
        }
    }

    /// One full presented match. Safe to call again for a rematch: counters
    /// come back to zero, player memory does not.
    pub fn play(&mut self) {
        self.reset();
        console::title();
        console::rules();
        for k in 1..=ROUNDS {
            console::round(k);
            let round = self.exchange();
            console::say(&format!("Player 1: {}  Player 2: {}", round.one, round.two));
            console::say(&format!("{}", round.outcome));
            console::say(&format!(
                "Score: Player One - {}, Player two - {}\n",
                self.wins.0, self.wins.1
            ));
        }
        console::say(&format!("Player One won {} time(s)", self.wins.0));
        console::say(&format!("Player Two won {} time(s)", self.wins.1));
        console::verdict(self.verdict());
        log::info!(
            "final score {}-{} -> {:?}",
            self.wins.0,
            self.wins.1,
            self.verdict()
        );
    }

    /// One round. Both players commit before either observes the other;
    /// observe runs exactly once each, after the outcome is settled.
    pub fn exchange(&mut self) -> Round {
        let one = self.one.act();
        let two = self.two.act();
        let outcome = Outcome::of(one, two);
        match outcome {
            Outcome::One => self.wins.0 += 1,
            Outcome::Two => self.wins.1 += 1,
            Outcome::Tie => (),
        }
        self.one.observe(one, two);
        self.two.observe(two, one);
        log::info!("{:?} vs {:?} -> {:?}", one, two, outcome);
        Round { one, two, outcome }
    }

    pub fn score(&self) -> (Score, Score) {
        self.wins
    }

    /// Strictly more round wins takes the match; equal counters tie.
    pub fn verdict(&self) -> Outcome {
        match self.wins {
            (one, two) if one > two => Outcome::One,
            (one, two) if two > one => Outcome::Two,
            _ => Outcome::Tie,
        }
    }

    pub fn reset(&mut self) {
        self.wins = (0, 0);
    }
}

use super::outcome::{Outcome, Round};
use crate::Score;
use crate::console;
use crate::players::Player;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::Move;
    use crate::players::cycle::Cycle;
    use crate::players::mirror::Mirror;

    #[derive(Debug)]
    struct Always(Move);

    impl Player for Always {
        fn act(&mut self) -> Move {
            self.0
        }
    }

    fn sweep(one: Move, two: Move) -> Game {
        let mut game = Game::new(Box::new(Always(one)), Box::new(Always(two)));
        for _ in 0..ROUNDS {
            game.exchange();
        }
        game
    }

    #[test]
    fn rock_sweeps_scissors() {
        let game = sweep(Move::Rock, Move::Scissors);
        assert_eq!(game.score(), (5, 0));
        assert_eq!(game.verdict(), Outcome::One);
    }

    #[test]
    fn scissors_swept_by_rock() {
        let game = sweep(Move::Scissors, Move::Rock);
        assert_eq!(game.score(), (0, 5));
        assert_eq!(game.verdict(), Outcome::Two);
    }

    #[test]
    fn spock_against_spock_ties() {
        let game = sweep(Move::Spock, Move::Spock);
        assert_eq!(game.score(), (0, 0));
        assert_eq!(game.verdict(), Outcome::Tie);
    }

    #[test]
    fn observe_feeds_both_players() {
        let mut game = Game::new(Box::new(Cycle::new()), Box::new(Always(Move::Spock)));
        assert_eq!(game.exchange().one, Move::Rock);
        assert_eq!(game.exchange().one, Move::Paper);
        assert_eq!(game.exchange().one, Move::Scissors);
    }

    #[test]
    fn reset_zeroes_counters_only() {
        let mut game = Game::new(Box::new(Mirror::new()), Box::new(Always(Move::Paper)));
        game.exchange();
        game.reset();
        assert_eq!(game.score(), (0, 0));
        // memory survives the rematch: the mirror replays what it saw before
        assert_eq!(game.exchange().one, Move::Paper);
    }
}
