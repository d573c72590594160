use serde::{Deserialize, Serialize};

/// Outcome of the previous turn as offered to the next player.
///
/// Replaced wholesale after every turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundAdoptionState {
    pub adopted_points: u32,
    pub adopted_dice_remaining: usize,
    adoption_available: bool,
}

impl RoundAdoptionState {
    pub const NO_ADOPTION: Self = Self {
        adopted_points: 0,
        adopted_dice_remaining: 0,
        adoption_available: false,
    };

    pub const fn no_adoption() -> Self {
        Self::NO_ADOPTION
    }

    /// Adoption only opens up when the turn actually banked points.
    pub const fn from_successful_turn(points: u32, dice_remaining: usize) -> Self {
        Self {
            adopted_points: points,
            adopted_dice_remaining: dice_remaining,
            adoption_available: points > 0,
        }
    }

    #[inline]
    pub const fn is_adoption_available(&self) -> bool {
        self.adoption_available
    }
}

impl Default for RoundAdoptionState {
    fn default() -> Self {
        Self::NO_ADOPTION
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_adoption_is_unavailable() {
        assert!(!RoundAdoptionState::no_adoption().is_adoption_available());
        assert_eq!(RoundAdoptionState::default(), RoundAdoptionState::NO_ADOPTION);
    }

    #[test]
    fn successful_turn_needs_points() {
        let state = RoundAdoptionState::from_successful_turn(450, 2);
        assert!(state.is_adoption_available());
        assert_eq!(state.adopted_points, 450);
        assert_eq!(state.adopted_dice_remaining, 2);
        assert!(!RoundAdoptionState::from_successful_turn(0, 3).is_adoption_available());
    }
}
