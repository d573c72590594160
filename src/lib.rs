//! 10,000 (Zehntausend) dice game engine for bot experimentation.

pub mod action;
pub mod adoption;
pub mod bot;
pub mod bots;
pub mod dice;
pub mod error;
pub mod game;
pub mod player;
pub mod scoring;
pub mod state;
pub mod visualize;

pub use crate::action::{AdoptAction, DiceAction, PlayerId};
pub use crate::adoption::RoundAdoptionState;
pub use crate::bot::Bot;
pub use crate::bots::registry::{create_bot_from_spec, label_for_spec};
pub use crate::bots::{DoNothingBot, GreedyBot, HumanBot, RandomBot};
pub use crate::dice::{Dice, is_subset_of_rolled};
pub use crate::error::{GameError, GameRuleViolation, RuleViolation};
pub use crate::game::{DiceCup, GameBuilder, GameConfig, GameEngine};
pub use crate::player::Player;
pub use crate::scoring::ScoringTable;
pub use crate::state::{
    FailureReason, GameStatus, PointsEntry, PointsReason, TurnOutcome, TurnPhase, TurnReport,
};
pub use crate::visualize::{describe_status, describe_turn, format_dice, render_standings};
