use serde::{Deserialize, Serialize};

use crate::action::PlayerId;
use crate::error::RuleViolation;

/// Status of the entire game.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    /// Everyone tied at the highest qualifying total wins.
    Finished { winners: Vec<PlayerId> },
    /// Turn cap reached before anyone won.
    Aborted,
}

/// Phase of the turn state machine.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingAdoptionDecision,
    Rolling,
    AwaitingKeepDecision,
    Settled,
}

/// Why a turn ended without banking points.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum FailureReason {
    /// A roll without any scoring dice. Not a rule violation.
    Bust,
    Violation(RuleViolation),
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum TurnOutcome {
    Success { points: u32 },
    Failure { reason: FailureReason },
}

impl TurnOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TurnOutcome::Success { .. })
    }

    pub fn violation(&self) -> Option<&RuleViolation> {
        match self {
            TurnOutcome::Failure {
                reason: FailureReason::Violation(kind),
            } => Some(kind),
            _ => None,
        }
    }
}

/// Summary of one finished turn.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TurnReport {
    pub turn_index: usize,
    pub player: PlayerId,
    pub adopted: bool,
    pub rolls: usize,
    /// Running points at the moment the turn ended, adopted points included.
    pub points: u32,
    pub dice_remaining: usize,
    /// Delta handed to the bot's `on_turn_end`, not the change to the total.
    ///
    /// A failed adopting turn reports `-adopted` here while the player's total
    /// is unchanged; use the ledger to reconcile totals.
    pub points_delta: i64,
    pub outcome: TurnOutcome,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PointsReason {
    /// Adopted points, booked when the adopting turn settles.
    AdoptionCredit,
    /// Points newly scored in a successful turn.
    TurnGain,
    /// Adopted credit taken back after the adopting turn failed.
    AdoptionReverted,
}

/// One change to a player's total.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PointsEntry {
    pub turn_index: usize,
    pub player: PlayerId,
    pub delta: i64,
    pub reason: PointsReason,
}
