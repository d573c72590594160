use serde::{Deserialize, Serialize};

use crate::dice::Dice;

/// Zero-based seat of a player within the game.
pub type PlayerId = usize;

/// Answer to the adoption offer made at the start of every turn.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum AdoptAction {
    /// Take over the previous player's points and remaining dice.
    Adopt,
    /// Start the turn from scratch with the full dice pool.
    Ignore,
}

/// Answer to a roll: which dice to set aside and whether to roll again.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DiceAction {
    pub keep: Vec<Dice>,
    pub continue_turn: bool,
}

impl DiceAction {
    pub fn keep_and_continue(keep: Vec<Dice>) -> Self {
        Self {
            keep,
            continue_turn: true,
        }
    }

    pub fn keep_and_stop(keep: Vec<Dice>) -> Self {
        Self {
            keep,
            continue_turn: false,
        }
    }
}
