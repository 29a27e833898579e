/// Prints one line, a beat late. The whole transcript is paced this way.
pub fn say(line: &str) {
    pace(1);
    println!("{}", line);
}

fn slow(line: &str) {
    pace(2);
    println!("{}", line);
}

fn pace(secs: u64) {
    std::thread::sleep(std::time::Duration::from_secs(secs));
}

pub fn title() {
    say(&format!(
        "{}",
        "Rock Paper Scissors Lizard Spock, Go!".bright_green()
    ));
    pace(1);
    say("Can you beat the computer in 5 rounds?\n");
}

pub fn rules() {
    say(&format!("{}", "Rules:".bright_green()));
    slow("Rock     -> beats Scissors AND Lizard");
    slow("Paper    -> beats Rock AND Spock");
    slow("Scissors -> beats Paper AND Lizard");
    slow("Lizard   -> beats Spock AND Paper");
    slow("Spock    -> beats Rock AND Scissors\n");
}

pub fn round(k: usize) {
    say(&format!("{}", format!("Round -- {} --", k).bright_magenta()));
    pace(1);
}

pub fn verdict(outcome: Outcome) {
    match outcome {
        Outcome::One => say("** Player One Wins **\n"),
        Outcome::Two => say("** Player Two Wins **\n"),
        Outcome::Tie => say("** Tied Game **"),
    }
}

/// Game-over banner plus the rematch prompt. Accepts yes or no, any case,
/// re-prompting until one of them lands.
pub fn replay() -> bool {
    say(&format!("{}", "-->GAME OVER--<\n".bright_red()));
    pace(2);
    let answer = Input::<String>::new()
        .with_prompt("Play again? Yes or No")
        .report(false)
        .validate_with(|i: &String| -> Result<(), String> {
            match i.to_lowercase().as_str() {
                "yes" | "no" => Ok(()),
                _ => Err(format!("Sorry, I do not understand \"{}\".", i)),
            }
        })
        .interact()
        .unwrap()
        .to_lowercase();
    rematch(&answer)
}

/// Any accepted answer containing "no" ends the session.
fn rematch(answer: &str) -> bool {
    !answer.contains("no")
}

use crate::engine::outcome::Outcome;
use colored::*;
use dialoguer::Input;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_walks_away() {
        assert!(!rematch("no"));
    }

    #[test]
    fn yes_goes_again() {
        assert!(rematch("yes"));
    }
}
