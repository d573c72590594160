use crate::action::{AdoptAction, DiceAction};
use crate::adoption::RoundAdoptionState;
use crate::bot::Bot;
use crate::dice::Dice;
use crate::player::Player;

/// Never adopts, keeps every rolled die and always rolls again.
///
/// Keeping dead dice is illegal, so this bot loses almost every turn to a
/// rule violation. Useful as a punching bag and for exercising the error path.
#[derive(Clone, Copy, Debug, Default)]
pub struct DoNothingBot;

impl DoNothingBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for DoNothingBot {
    fn on_turn_start(&mut self, _adoption: &RoundAdoptionState, _players: &[Player]) -> AdoptAction {
        AdoptAction::Ignore
    }

    fn on_turn_dice_rolled(&mut self, rolled: &[Dice], _points_so_far: u32) -> DiceAction {
        DiceAction::keep_and_continue(rolled.to_vec())
    }
}
