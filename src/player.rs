use serde::{Deserialize, Serialize};

/// Score sheet of one seat. Bots only ever see it by shared reference.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    total_points: u32,
    has_entered_game: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            total_points: 0,
            has_entered_game: false,
        }
    }

    /// A player resuming with `total_points`. They count as entered only
    /// when that total reaches `entry_threshold`.
    pub fn seeded(name: impl Into<String>, total_points: u32, entry_threshold: u32) -> Self {
        Self {
            name: name.into(),
            total_points,
            has_entered_game: total_points > 0 && total_points >= entry_threshold,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_points(&self) -> u32 {
        self.total_points
    }

    pub fn has_entered_game(&self) -> bool {
        self.has_entered_game
    }

    pub(crate) fn enter_game(&mut self) {
        self.has_entered_game = true;
    }

    /// Applies a signed delta, clamping at zero.
    pub(crate) fn apply_delta(&mut self, delta: i64) {
        let next = (self.total_points as i64 + delta).clamp(0, u32::MAX as i64);
        self.total_points = next as u32;
    }
}
