use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use crate::action::{AdoptAction, PlayerId};
use crate::adoption::RoundAdoptionState;
use crate::bot::Bot;
use crate::dice::{DEFAULT_DICE_COUNT, Dice, is_subset_of_rolled};
use crate::error::{GameError, GameRuleViolation, RuleViolation};
use crate::player::Player;
use crate::scoring::ScoringTable;
use crate::state::{
    FailureReason, GameStatus, PointsEntry, PointsReason, TurnOutcome, TurnPhase, TurnReport,
};

const DEFAULT_SEED: u64 = 0x1000_0D1C_E5EE_D000;

pub const DEFAULT_WIN_THRESHOLD: u32 = 10_000;
pub const DEFAULT_ENTRY_THRESHOLD: u32 = 350;
pub const DEFAULT_ROUND_THRESHOLD: u32 = 300;

/// Rules and limits of a game. Passed into the engine, never read from globals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub dice_count: usize,
    pub win_threshold: u32,
    pub entry_threshold: u32,
    pub round_threshold: u32,
    pub scoring: ScoringTable,
    pub seed: u64,
    pub max_turns: Option<usize>,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), GameError> {
        if self.dice_count == 0 {
            return Err(GameError::InvalidConfiguration("dice count must be positive"));
        }
        if self.win_threshold == 0 {
            return Err(GameError::InvalidConfiguration("win threshold must be positive"));
        }
        if !self.scoring.is_playable() {
            return Err(GameError::InvalidConfiguration(
                "scoring table does not score anything",
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dice_count: DEFAULT_DICE_COUNT,
            win_threshold: DEFAULT_WIN_THRESHOLD,
            entry_threshold: DEFAULT_ENTRY_THRESHOLD,
            round_threshold: DEFAULT_ROUND_THRESHOLD,
            scoring: ScoringTable::standard(),
            seed: DEFAULT_SEED,
            max_turns: None,
        }
    }
}

/// Builder that enables deterministic dice and score injection for testing.
pub struct GameBuilder {
    config: GameConfig,
    seats: Vec<(String, Box<dyn Bot>)>,
    scripted: Vec<Dice>,
    starting_points: Option<Vec<u32>>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            seats: Vec::new(),
            scripted: Vec::new(),
            starting_points: None,
        }
    }

    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_player(mut self, name: impl Into<String>, bot: Box<dyn Bot>) -> Self {
        self.seats.push((name.into(), bot));
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.config.max_turns = Some(max_turns);
        self
    }

    /// Dice handed out, in order, before the RNG takes over.
    pub fn with_scripted_dice(mut self, dice: Vec<Dice>) -> Self {
        self.scripted = dice;
        self
    }

    /// Start totals per seat, in seat order. A seat counts as entered only
    /// when its total reaches the entry threshold.
    pub fn with_starting_points(mut self, points: Vec<u32>) -> Self {
        self.starting_points = Some(points);
        self
    }

    pub fn build(self) -> Result<GameEngine, GameError> {
        GameEngine::from_builder(self)
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Source of rolled dice: scripted faces first, then the seeded RNG.
pub struct DiceCup {
    scripted: VecDeque<Dice>,
    rng: StdRng,
}

impl DiceCup {
    pub fn new(seed: u64, scripted: Vec<Dice>) -> Self {
        Self {
            scripted: scripted.into(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rolls `count` fresh dice, sorted by face.
    pub fn roll(&mut self, count: usize) -> Vec<Dice> {
        let mut dice = Vec::with_capacity(count);
        while dice.len() < count {
            match self.scripted.pop_front() {
                Some(die) => dice.push(die),
                None => break,
            }
        }
        let missing = count - dice.len();
        dice.extend(Dice::roll_sorted(&mut self.rng, missing));
        dice.sort();
        dice
    }
}

/// Running state of the turn being played.
#[derive(Clone, Copy, Debug)]
struct TurnProgress {
    phase: TurnPhase,
    points: u32,
    dice_remaining: usize,
    adopted_points: Option<u32>,
    rolls: usize,
}

impl TurnProgress {
    fn fresh() -> Self {
        Self {
            phase: TurnPhase::AwaitingAdoptionDecision,
            points: 0,
            dice_remaining: 0,
            adopted_points: None,
            rolls: 0,
        }
    }

    fn adopted(state: &RoundAdoptionState) -> Self {
        Self {
            points: state.adopted_points,
            dice_remaining: state.adopted_dice_remaining,
            adopted_points: Some(state.adopted_points),
            ..Self::fresh()
        }
    }
}

/// Core 10,000 game engine.
pub struct GameEngine {
    config: GameConfig,
    status: GameStatus,
    players: Vec<Player>,
    bots: Vec<Box<dyn Bot>>,
    turn_index: usize,
    adoption_state: RoundAdoptionState,
    ledger: Vec<PointsEntry>,
    cup: DiceCup,
}

impl GameEngine {
    pub fn builder() -> GameBuilder {
        GameBuilder::new()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    pub fn current_player(&self) -> PlayerId {
        self.turn_index % self.players.len()
    }

    pub fn adoption_state(&self) -> RoundAdoptionState {
        self.adoption_state
    }

    /// Every change applied to any player's total, in order.
    pub fn ledger(&self) -> &[PointsEntry] {
        &self.ledger
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.status, GameStatus::Ongoing)
    }

    /// The game goes on until someone reached the win threshold and the
    /// round has come back around to the first seat.
    pub fn should_continue(&self) -> bool {
        !self.has_a_player_won() || self.turn_index % self.players.len() != 0
    }

    /// All players tied at the highest total among those at or above the win threshold.
    pub fn winners(&self) -> Vec<PlayerId> {
        let threshold = self.config.win_threshold;
        let Some(max_points) = self
            .players
            .iter()
            .map(Player::total_points)
            .filter(|points| *points >= threshold)
            .max()
        else {
            return Vec::new();
        };
        self.players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.total_points() == max_points)
            .map(|(id, _)| id)
            .collect()
    }

    /// Plays the whole game and returns the winners (empty when aborted).
    pub fn run(&mut self) -> Result<Vec<PlayerId>, GameError> {
        self.run_observed(|_, _| {})
    }

    /// Like [`GameEngine::run`], handing every finished turn to `observer`.
    pub fn run_observed<F>(&mut self, mut observer: F) -> Result<Vec<PlayerId>, GameError>
    where
        F: FnMut(&TurnReport, &[Player]),
    {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        for (id, bot) in self.bots.iter_mut().enumerate() {
            bot.on_game_start(&self.players, id);
        }
        while self.should_continue() {
            if self.turn_cap_reached() {
                info!(turns = self.turn_index, "turn cap reached, aborting game");
                self.status = GameStatus::Aborted;
                break;
            }
            let report = self.play_turn()?;
            observer(&report, &self.players);
        }
        let winners = match self.status {
            GameStatus::Aborted => Vec::new(),
            _ => self.winners(),
        };
        if matches!(self.status, GameStatus::Ongoing) {
            self.status = GameStatus::Finished {
                winners: winners.clone(),
            };
            info!(?winners, turns = self.turn_index, "game finished");
        }
        for bot in self.bots.iter_mut() {
            bot.on_game_end(&self.players, &winners);
        }
        Ok(winners)
    }

    /// Plays exactly one turn for the current player.
    pub fn play_turn(&mut self) -> Result<TurnReport, GameError> {
        if self.is_finished() {
            return Err(GameError::GameOver);
        }
        let seat = self.current_player();
        let adoption = self.adoption_state;
        debug!(turn = self.turn_index, player = seat, ?adoption, "turn started");

        let mut turn = TurnProgress::fresh();
        let mut failure = None;
        let decision = self.bots[seat].on_turn_start(&adoption, &self.players);
        if decision == AdoptAction::Adopt {
            match self.check_adoption(seat, &adoption) {
                Ok(()) => {
                    turn = TurnProgress::adopted(&adoption);
                    debug!(player = seat, points = adoption.adopted_points, "adoption granted");
                }
                Err(kind) => failure = Some(FailureReason::Violation(kind)),
            }
        }

        if failure.is_none() {
            failure = self.roll_loop(seat, &mut turn).err();
        }
        if failure.is_none() {
            failure = self
                .check_thresholds(seat, turn.points)
                .err()
                .map(FailureReason::Violation);
        }

        let report = self.settle(seat, turn, failure);
        self.turn_index += 1;
        Ok(report)
    }

    fn check_adoption(
        &self,
        seat: PlayerId,
        adoption: &RoundAdoptionState,
    ) -> Result<(), RuleViolation> {
        if !adoption.is_adoption_available() {
            return Err(RuleViolation::AdoptionUnavailable);
        }
        let available = self.players[seat].total_points();
        if adoption.adopted_points > available {
            return Err(RuleViolation::AdoptionFloorNotMet {
                required: adoption.adopted_points,
                available,
            });
        }
        Ok(())
    }

    /// Rolls until the bot stops, busts or breaks a rule.
    fn roll_loop(&mut self, seat: PlayerId, turn: &mut TurnProgress) -> Result<(), FailureReason> {
        let scoring = self.config.scoring;
        loop {
            turn.phase = TurnPhase::Rolling;
            if turn.dice_remaining == 0 {
                turn.dice_remaining = self.config.dice_count;
            }
            let rolled = self.cup.roll(turn.dice_remaining);
            turn.rolls += 1;
            trace!(player = seat, ?rolled, "dice rolled");

            if !scoring.has_scoring_value(&rolled) {
                debug!(player = seat, points = turn.points, "bust");
                return Err(FailureReason::Bust);
            }

            turn.phase = TurnPhase::AwaitingKeepDecision;
            let action = self.bots[seat].on_turn_dice_rolled(&rolled, turn.points);
            if action.keep.is_empty() {
                return Err(FailureReason::Violation(RuleViolation::NoDiceKept));
            }
            if !scoring.all_have_scoring_value(&action.keep) {
                return Err(FailureReason::Violation(RuleViolation::NonScoringDiceKept));
            }
            if !is_subset_of_rolled(&rolled, &action.keep) {
                return Err(FailureReason::Violation(RuleViolation::DiceNotRolled));
            }

            turn.points = turn.points.saturating_add(scoring.points_for(&action.keep));
            turn.dice_remaining -= action.keep.len();
            trace!(
                player = seat,
                kept = action.keep.len(),
                points = turn.points,
                dice_remaining = turn.dice_remaining,
                "dice kept"
            );
            if !action.continue_turn {
                return Ok(());
            }
        }
    }

    fn check_thresholds(&self, seat: PlayerId, points: u32) -> Result<(), RuleViolation> {
        let player = &self.players[seat];
        if !player.has_entered_game() && points < self.config.entry_threshold {
            return Err(RuleViolation::EntryThresholdNotReached {
                points,
                threshold: self.config.entry_threshold,
            });
        }
        if points < self.config.round_threshold {
            return Err(RuleViolation::RoundThresholdNotReached {
                points,
                threshold: self.config.round_threshold,
            });
        }
        Ok(())
    }

    /// The only place player totals change.
    ///
    /// An adopted credit is booked here too, so a failed adopting turn shows
    /// up in the ledger as a credit directly followed by its revert.
    fn settle(
        &mut self,
        seat: PlayerId,
        mut turn: TurnProgress,
        failure: Option<FailureReason>,
    ) -> TurnReport {
        turn.phase = TurnPhase::Settled;
        let adopted = turn.adopted_points.unwrap_or(0);
        if turn.adopted_points.is_some() {
            self.record(seat, adopted as i64, PointsReason::AdoptionCredit);
        }
        let (outcome, points_delta) = match failure {
            None => {
                self.record(seat, (turn.points - adopted) as i64, PointsReason::TurnGain);
                self.players[seat].enter_game();
                self.adoption_state =
                    RoundAdoptionState::from_successful_turn(turn.points, turn.dice_remaining);
                self.bots[seat].on_turn_end(true, turn.points as i64);
                (TurnOutcome::Success { points: turn.points }, turn.points as i64)
            }
            Some(reason) => {
                let reverted = -(adopted as i64);
                if turn.adopted_points.is_some() {
                    self.record(seat, reverted, PointsReason::AdoptionReverted);
                }
                self.adoption_state = RoundAdoptionState::no_adoption();
                self.bots[seat].on_turn_end(false, reverted);
                if let FailureReason::Violation(kind) = &reason {
                    let violation = GameRuleViolation {
                        player: seat,
                        kind: kind.clone(),
                    };
                    debug!(%violation, "rule violation");
                    self.bots[seat].on_error(&violation);
                }
                (TurnOutcome::Failure { reason }, reverted)
            }
        };
        debug!(
            turn = self.turn_index,
            player = seat,
            phase = ?turn.phase,
            ?outcome,
            total = self.players[seat].total_points(),
            "turn settled"
        );
        TurnReport {
            turn_index: self.turn_index,
            player: seat,
            adopted: turn.adopted_points.is_some(),
            rolls: turn.rolls,
            points: turn.points,
            dice_remaining: turn.dice_remaining,
            points_delta,
            outcome,
        }
    }

    fn record(&mut self, seat: PlayerId, delta: i64, reason: PointsReason) {
        if delta == 0 {
            return;
        }
        self.players[seat].apply_delta(delta);
        self.ledger.push(PointsEntry {
            turn_index: self.turn_index,
            player: seat,
            delta,
            reason,
        });
    }

    fn has_a_player_won(&self) -> bool {
        self.players
            .iter()
            .any(|player| player.total_points() >= self.config.win_threshold)
    }

    fn turn_cap_reached(&self) -> bool {
        self.config
            .max_turns
            .is_some_and(|limit| self.turn_index >= limit)
    }

    fn from_builder(builder: GameBuilder) -> Result<Self, GameError> {
        let GameBuilder {
            config,
            seats,
            scripted,
            starting_points,
        } = builder;
        config.validate()?;
        if seats.is_empty() {
            return Err(GameError::InvalidPlayerCount(0));
        }
        if let Some(points) = &starting_points {
            if points.len() != seats.len() {
                return Err(GameError::InvalidConfiguration(
                    "starting points must list every player",
                ));
            }
        }

        let mut players = Vec::with_capacity(seats.len());
        let mut bots = Vec::with_capacity(seats.len());
        for (index, (name, bot)) in seats.into_iter().enumerate() {
            let points = starting_points
                .as_ref()
                .map(|points| points[index])
                .unwrap_or(0);
            players.push(Player::seeded(name, points, config.entry_threshold));
            bots.push(bot);
        }

        Ok(GameEngine {
            config,
            status: GameStatus::Ongoing,
            players,
            bots,
            turn_index: 0,
            adoption_state: RoundAdoptionState::no_adoption(),
            ledger: Vec::new(),
            cup: DiceCup::new(config.seed, scripted),
        })
    }
}
