use colored::*;
use rand::Rng;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Lizard,
    Spock,
}

impl Move {
    pub const ALL: [Move; 5] = [
        Move::Rock,
        Move::Paper,
        Move::Scissors,
        Move::Lizard,
        Move::Spock,
    ];

    /// Dominance relation. Each move beats exactly two of the other four.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissors)
                | (Move::Rock, Move::Lizard)
                | (Move::Paper, Move::Rock)
                | (Move::Paper, Move::Spock)
                | (Move::Scissors, Move::Paper)
                | (Move::Scissors, Move::Lizard)
                | (Move::Lizard, Move::Spock)
                | (Move::Lizard, Move::Paper)
                | (Move::Spock, Move::Rock)
                | (Move::Spock, Move::Scissors)
        )
    }

    /// Successor in the fixed rotation rock > paper > scissors > lizard > spock > rock.
    pub fn next(self) -> Move {
        match self {
            Move::Rock => Move::Paper,
            Move::Paper => Move::Scissors,
            Move::Scissors => Move::Lizard,
            Move::Lizard => Move::Spock,
            Move::Spock => Move::Rock,
        }
    }

    pub fn random() -> Move {
        match rand::rng().random_range(0..5) {
            0 => Move::Rock,
            1 => Move::Paper,
            2 => Move::Scissors,
            3 => Move::Lizard,
            _ => Move::Spock,
        }
    }
}

impl std::str::FromStr for Move {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rock" => Ok(Move::Rock),
            "paper" => Ok(Move::Paper),
            "scissors" => Ok(Move::Scissors),
            "lizard" => Ok(Move::Lizard),
            "spock" => Ok(Move::Spock),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Move::Rock => write!(f, "{}", "rock".white()),
            Move::Paper => write!(f, "{}", "paper".yellow()),
            Move::Scissors => write!(f, "{}", "scissors".cyan()),
            Move::Lizard => write!(f, "{}", "lizard".green()),
            Move::Spock => write!(f, "{}", "spock".magenta()),
        }
    }
}
