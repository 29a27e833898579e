#[derive(Debug)]
pub struct Human;

impl Player for Human {
    fn act(&mut self) -> Move {
        Input::<String>::new()
            .with_prompt("Please Enter Rock, Paper, Scissors, Lizard or Spock")
            .report(false)
            .validate_with(|i: &String| -> Result<(), String> {
                match i.parse::<Move>() {
                    Ok(_) => Ok(()),
                    Err(_) => Err(format!("Sorry, I do not understand \"{}\".", i)),
                }
            })
            .interact()
            .unwrap()
            .parse::<Move>()
            .unwrap()
    }
}

use super::Player;
use crate::moves::Move;
use dialoguer::Input;
