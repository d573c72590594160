//! Scoring rules for kept dice.
//!
//! Dice are scored per face group:
//!   - three or more of a face score the triple value, doubled (by default)
//!     for every die beyond the third;
//!   - smaller groups score the single value per die (only 1s and 5s by default);
//!   - a full straight 1-6 scores its own value when the table defines one.
//!
//! A group that scores nothing is "dead". Keeping a dead die is a rule violation.

use serde::{Deserialize, Serialize};

use crate::dice::{DICE_FACES, Dice, face_counts};

/// Pluggable point table. Every lookup array is indexed by `face - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringTable {
    pub singles: [u32; DICE_FACES],
    pub triples: [u32; DICE_FACES],
    pub extra_die_multiplier: u32,
    pub straight: Option<u32>,
}

impl ScoringTable {
    /// Classic 10,000 table.
    pub const fn standard() -> Self {
        Self {
            singles: [100, 0, 0, 0, 50, 0],
            triples: [1000, 200, 300, 400, 500, 600],
            extra_die_multiplier: 2,
            straight: Some(2000),
        }
    }

    /// True if at least one face, group or the straight scores anything at all.
    pub fn is_playable(&self) -> bool {
        self.singles.iter().chain(self.triples.iter()).any(|v| *v > 0)
            || self.straight.is_some_and(|v| v > 0)
    }

    /// At least one die (or combination) in the roll has value.
    pub fn has_scoring_value(&self, dice: &[Dice]) -> bool {
        self.points_for(dice) > 0
    }

    /// Every die in `subset` contributes to the group's points.
    ///
    /// An empty subset is vacuously true; callers check emptiness separately.
    pub fn all_have_scoring_value(&self, subset: &[Dice]) -> bool {
        let counts = face_counts(subset);
        if self.straight_value(&counts).is_some() {
            return true;
        }
        counts
            .iter()
            .enumerate()
            .all(|(slot, &count)| count == 0 || self.group_points(slot, count) > 0)
    }

    pub fn points_for(&self, subset: &[Dice]) -> u32 {
        let counts = face_counts(subset);
        if let Some(value) = self.straight_value(&counts) {
            return value;
        }
        counts
            .iter()
            .enumerate()
            .map(|(slot, &count)| self.group_points(slot, count))
            .sum()
    }

    /// Largest part of a roll that can be kept without any dead dice.
    pub fn scoring_dice(&self, rolled: &[Dice]) -> Vec<Dice> {
        let mut dice: Vec<Dice> = self.scoring_groups(rolled).into_iter().flatten().collect();
        dice.sort();
        dice
    }

    /// Independently keepable units of a roll: the straight, whole multi-dice
    /// groups, or single scoring dice.
    pub fn scoring_groups(&self, rolled: &[Dice]) -> Vec<Vec<Dice>> {
        let counts = face_counts(rolled);
        if self.straight_value(&counts).is_some() {
            return vec![rolled.to_vec()];
        }
        let mut groups = Vec::new();
        for (slot, &count) in counts.iter().enumerate() {
            let Some(die) = rolled.iter().find(|die| die.index() == slot).copied() else {
                continue;
            };
            if count >= 3 && self.triples[slot] > 0 {
                groups.push(vec![die; count]);
            } else if self.singles[slot] > 0 {
                groups.extend(std::iter::repeat(vec![die]).take(count));
            }
        }
        groups
    }

    fn group_points(&self, slot: usize, count: usize) -> u32 {
        if count >= 3 && self.triples[slot] > 0 {
            let extra = (count - 3) as u32;
            self.triples[slot].saturating_mul(self.extra_die_multiplier.saturating_pow(extra))
        } else {
            self.singles[slot].saturating_mul(count as u32)
        }
    }

    fn straight_value(&self, counts: &[usize; DICE_FACES]) -> Option<u32> {
        let value = self.straight.filter(|v| *v > 0)?;
        counts.iter().all(|c| *c == 1).then_some(value)
    }
}

impl Default for ScoringTable {
    fn default() -> Self {
        Self::standard()
    }
}
