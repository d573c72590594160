use std::io::{self, Write};

use crate::action::{AdoptAction, DiceAction, PlayerId};
use crate::adoption::RoundAdoptionState;
use crate::bot::Bot;
use crate::dice::Dice;
use crate::error::GameRuleViolation;
use crate::player::Player;
use crate::visualize::{format_dice, render_standings};

/// Interactive bot that queries a human via standard input.
pub struct HumanBot {
    name: String,
    own_id: Option<PlayerId>,
}

impl HumanBot {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            own_id: None,
        }
    }

    fn prompt(&self, question: &str) -> String {
        loop {
            print!("{question} ");
            if io::stdout().flush().is_err() {
                eprintln!("failed to flush stdout");
            }
            let mut input = String::new();
            if io::stdin().read_line(&mut input).is_err() {
                eprintln!("failed to read input");
                continue;
            }
            let trimmed = input.trim();
            if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
                println!("Exiting game at user's request.");
                std::process::exit(0);
            }
            return trimmed.to_string();
        }
    }
}

impl Default for HumanBot {
    fn default() -> Self {
        Self::new("Human")
    }
}

/// Parses `"1 5 5 r"` style input: faces to keep, then `r` (roll again) or `s` (stop).
pub fn parse_keep_input(input: &str) -> Option<DiceAction> {
    let mut faces = Vec::new();
    let mut continue_turn = None;
    for token in input.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "r" | "roll" => continue_turn = Some(true),
            "s" | "stop" => continue_turn = Some(false),
            other => faces.push(other.parse::<u8>().ok()?),
        }
    }
    Some(DiceAction {
        keep: Dice::from_faces(&faces)?,
        continue_turn: continue_turn?,
    })
}

impl Bot for HumanBot {
    fn on_game_start(&mut self, players: &[Player], own_id: PlayerId) {
        self.own_id = Some(own_id);
        println!("\n{} joins as player {own_id}.", self.name);
        println!("{}", render_standings(players, None));
    }

    fn on_turn_start(&mut self, adoption: &RoundAdoptionState, players: &[Player]) -> AdoptAction {
        println!("\n=== {}'s turn ===", self.name);
        println!("{}", render_standings(players, self.own_id));
        if !adoption.is_adoption_available() {
            return AdoptAction::Ignore;
        }
        loop {
            let answer = self.prompt(&format!(
                "Adopt {} points with {} dice left? [y/n]",
                adoption.adopted_points, adoption.adopted_dice_remaining
            ));
            match answer.to_ascii_lowercase().as_str() {
                "y" | "yes" => return AdoptAction::Adopt,
                "n" | "no" => return AdoptAction::Ignore,
                _ => println!("Please answer 'y' or 'n'."),
            }
        }
    }

    fn on_turn_dice_rolled(&mut self, rolled: &[Dice], points_so_far: u32) -> DiceAction {
        println!("Rolled {}  (turn so far: {points_so_far})", format_dice(rolled));
        loop {
            let answer = self.prompt("Faces to keep, then 'r' to roll again or 's' to stop:");
            if let Some(action) = parse_keep_input(&answer) {
                return action;
            }
            println!("Invalid input: '{answer}'. Example: 1 5 5 r");
        }
    }

    fn on_turn_end(&mut self, successful: bool, points_delta: i64) {
        if successful {
            println!("Turn banked {points_delta} points.");
        } else {
            println!("Turn failed ({points_delta} points).");
        }
    }

    fn on_game_end(&mut self, players: &[Player], winners: &[PlayerId]) {
        println!("\nGame over.");
        println!("{}", render_standings(players, self.own_id));
        if winners.is_empty() {
            println!("Nobody won.");
        } else if self.own_id.is_some_and(|id| winners.contains(&id)) {
            println!("You won!");
        }
    }

    fn on_error(&mut self, violation: &GameRuleViolation) {
        println!("Rule violation: {}", violation.kind);
    }
}
