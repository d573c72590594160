use rand::Rng;
use rand::seq::SliceRandom;

use crate::action::{AdoptAction, DiceAction, PlayerId};
use crate::adoption::RoundAdoptionState;
use crate::bot::Bot;
use crate::dice::Dice;
use crate::player::Player;
use crate::scoring::ScoringTable;

/// Baseline bot that keeps a random, always legal, selection of scoring dice
/// and flips a coin to decide whether to roll again or adopt.
pub struct RandomBot<R: Rng> {
    rng: R,
    scoring: ScoringTable,
    own_id: Option<PlayerId>,
}

impl<R: Rng> RandomBot<R> {
    pub fn new(rng: R) -> Self {
        Self::with_scoring(rng, ScoringTable::standard())
    }

    pub fn with_scoring(rng: R, scoring: ScoringTable) -> Self {
        Self {
            rng,
            scoring,
            own_id: None,
        }
    }
}

impl<R: Rng> Bot for RandomBot<R> {
    fn on_game_start(&mut self, _players: &[Player], own_id: PlayerId) {
        self.own_id = Some(own_id);
    }

    fn on_turn_start(&mut self, adoption: &RoundAdoptionState, players: &[Player]) -> AdoptAction {
        let affordable = self
            .own_id
            .and_then(|id| players.get(id))
            .is_some_and(|me| me.total_points() >= adoption.adopted_points);
        if adoption.is_adoption_available() && affordable && self.rng.gen_bool(0.5) {
            AdoptAction::Adopt
        } else {
            AdoptAction::Ignore
        }
    }

    fn on_turn_dice_rolled(&mut self, rolled: &[Dice], _points_so_far: u32) -> DiceAction {
        let mut groups = self.scoring.scoring_groups(rolled);
        groups.shuffle(&mut self.rng);
        let take = if groups.is_empty() {
            0
        } else {
            self.rng.gen_range(1..=groups.len())
        };
        let keep = groups.into_iter().take(take).flatten().collect();
        DiceAction {
            keep,
            continue_turn: self.rng.gen_bool(0.5),
        }
    }
}
