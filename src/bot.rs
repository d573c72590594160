use crate::action::{AdoptAction, DiceAction, PlayerId};
use crate::adoption::RoundAdoptionState;
use crate::dice::Dice;
use crate::error::GameRuleViolation;
use crate::player::Player;

/// Interface for defining custom 10,000 bots.
///
/// The engine calls these hooks synchronously and only hands out shared
/// references or copies, so a bot can never touch the score sheet directly.
pub trait Bot {
    fn on_game_start(&mut self, _players: &[Player], _own_id: PlayerId) {}

    fn on_turn_start(&mut self, adoption: &RoundAdoptionState, players: &[Player]) -> AdoptAction;

    fn on_turn_dice_rolled(&mut self, rolled: &[Dice], points_so_far: u32) -> DiceAction;

    fn on_turn_end(&mut self, _successful: bool, _points_delta: i64) {}

    fn on_game_end(&mut self, _players: &[Player], _winners: &[PlayerId]) {}

    fn on_error(&mut self, _violation: &GameRuleViolation) {}
}
