use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::action::PlayerId;

/// Errors raised while building or driving the engine itself.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("expected at least one player, received {0}")]
    InvalidPlayerCount(usize),
    #[error("game is already over")]
    GameOver,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
}

/// Kinds of rule breaks a player can commit during a turn.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleViolation {
    #[error("adoption only possible if the previous player got points")]
    AdoptionUnavailable,
    #[error("adoption only possible with enough points ({available} of {required})")]
    AdoptionFloorNotMet { required: u32, available: u32 },
    #[error("at least one die must be kept")]
    NoDiceKept,
    #[error("not all kept dice are worth something")]
    NonScoringDiceKept,
    #[error("dice that were not rolled were selected to keep")]
    DiceNotRolled,
    #[error("enter game threshold not reached ({points} of {threshold})")]
    EntryThresholdNotReached { points: u32, threshold: u32 },
    #[error("round point threshold not reached ({points} of {threshold})")]
    RoundThresholdNotReached { points: u32, threshold: u32 },
}

/// A rule break attributed to the player who committed it.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("player {player}: {kind}")]
pub struct GameRuleViolation {
    pub player: PlayerId,
    pub kind: RuleViolation,
}
