use crate::action::{AdoptAction, DiceAction, PlayerId};
use crate::adoption::RoundAdoptionState;
use crate::bot::Bot;
use crate::dice::Dice;
use crate::player::Player;
use crate::scoring::ScoringTable;

pub const DEFAULT_TURN_TARGET: u32 = 350;
pub const DEFAULT_MIN_ADOPTED_DICE: usize = 2;

/// Rule-based bot that banks as soon as a turn target is reached.
///
/// In plain English:
/// - Keep every scoring die on every roll (no holding back for triples).
/// - Roll again until the turn is worth at least the target, then stop.
/// - Adopt the previous turn when it is allowed, affordable, and leaves
///   either a fresh pool or at least a couple of dice to roll.
pub struct GreedyBot {
    scoring: ScoringTable,
    turn_target: u32,
    min_adopted_dice: usize,
    own_id: Option<PlayerId>,
}

impl GreedyBot {
    pub fn new(turn_target: u32) -> Self {
        Self {
            scoring: ScoringTable::standard(),
            turn_target,
            min_adopted_dice: DEFAULT_MIN_ADOPTED_DICE,
            own_id: None,
        }
    }

    pub fn with_scoring(mut self, scoring: ScoringTable) -> Self {
        self.scoring = scoring;
        self
    }

    pub fn with_min_adopted_dice(mut self, dice: usize) -> Self {
        self.min_adopted_dice = dice;
        self
    }

    pub fn turn_target(&self) -> u32 {
        self.turn_target
    }

    fn can_afford(&self, adoption: &RoundAdoptionState, players: &[Player]) -> bool {
        self.own_id
            .and_then(|id| players.get(id))
            .is_some_and(|me| me.total_points() >= adoption.adopted_points)
    }
}

impl Default for GreedyBot {
    fn default() -> Self {
        Self::new(DEFAULT_TURN_TARGET)
    }
}

impl Bot for GreedyBot {
    fn on_game_start(&mut self, _players: &[Player], own_id: PlayerId) {
        self.own_id = Some(own_id);
    }

    fn on_turn_start(&mut self, adoption: &RoundAdoptionState, players: &[Player]) -> AdoptAction {
        let dice = adoption.adopted_dice_remaining;
        let enough_dice = dice == 0 || dice >= self.min_adopted_dice;
        if adoption.is_adoption_available() && enough_dice && self.can_afford(adoption, players) {
            AdoptAction::Adopt
        } else {
            AdoptAction::Ignore
        }
    }

    fn on_turn_dice_rolled(&mut self, rolled: &[Dice], points_so_far: u32) -> DiceAction {
        let keep = self.scoring.scoring_dice(rolled);
        let total = points_so_far + self.scoring.points_for(&keep);
        DiceAction {
            keep,
            continue_turn: total < self.turn_target,
        }
    }
}
