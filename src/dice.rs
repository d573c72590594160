use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single rolled six-sided die.
///
/// Dice are plain values: a fresh set is produced for every roll and
/// nothing is ever re-rolled in place.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Dice {
    face: u8,
}

pub const MIN_FACE: u8 = 1;
pub const MAX_FACE: u8 = 6;
pub const DICE_FACES: usize = 6;
pub const DEFAULT_DICE_COUNT: usize = 6;

impl Dice {
    /// Returns `None` when the face lies outside `1..=6`.
    pub fn new(face: u8) -> Option<Self> {
        (MIN_FACE..=MAX_FACE).contains(&face).then_some(Self { face })
    }

    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        Self {
            face: rng.gen_range(MIN_FACE..=MAX_FACE),
        }
    }

    /// Rolls `count` dice and returns them sorted by face.
    pub fn roll_sorted<R: Rng>(rng: &mut R, count: usize) -> Vec<Self> {
        let mut dice: Vec<Self> = (0..count).map(|_| Self::roll(&mut *rng)).collect();
        dice.sort();
        dice
    }

    /// Builds dice from raw faces, failing on the first invalid face.
    pub fn from_faces(faces: &[u8]) -> Option<Vec<Self>> {
        faces.iter().map(|face| Self::new(*face)).collect()
    }

    #[inline]
    pub fn face(&self) -> u8 {
        self.face
    }

    /// Zero-based slot used by per-face lookup tables.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        (self.face - MIN_FACE) as usize
    }
}

/// Number of dice showing each face, indexed by `face - 1`.
pub fn face_counts(dice: &[Dice]) -> [usize; DICE_FACES] {
    let mut counts = [0usize; DICE_FACES];
    for die in dice {
        counts[die.index()] += 1;
    }
    counts
}

/// Every claimed die was actually present in the roll, counting duplicates.
pub fn is_subset_of_rolled(rolled: &[Dice], claimed: &[Dice]) -> bool {
    if claimed.len() > rolled.len() {
        return false;
    }
    let available = face_counts(rolled);
    let wanted = face_counts(claimed);
    wanted.iter().zip(available.iter()).all(|(w, a)| w <= a)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn rejects_out_of_range_faces() {
        assert!(Dice::new(0).is_none());
        assert!(Dice::new(7).is_none());
        assert_eq!(Dice::new(6).map(|d| d.face()), Some(6));
        assert!(Dice::from_faces(&[1, 2, 9]).is_none());
    }

    #[test]
    fn rolled_dice_are_sorted_and_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let dice = Dice::roll_sorted(&mut rng, 50);
        assert_eq!(dice.len(), 50);
        assert!(dice.windows(2).all(|w| w[0] <= w[1]));
        assert!(dice.iter().all(|d| (MIN_FACE..=MAX_FACE).contains(&d.face())));
    }

    #[test]
    fn counts_faces() {
        let dice = Dice::from_faces(&[1, 1, 5, 6]).unwrap();
        assert_eq!(face_counts(&dice), [2, 0, 0, 0, 1, 1]);
    }

    #[test]
    fn subset_respects_duplicates_and_size() {
        let rolled = Dice::from_faces(&[1, 2, 5, 5, 6]).unwrap();
        let claim = |faces: &[u8]| Dice::from_faces(faces).unwrap();
        assert!(is_subset_of_rolled(&rolled, &claim(&[1, 5, 5])));
        assert!(!is_subset_of_rolled(&rolled, &claim(&[1, 1])));
        assert!(!is_subset_of_rolled(&rolled, &claim(&[5, 5, 5])));
        assert!(!is_subset_of_rolled(&rolled, &claim(&[1, 2, 5, 5, 6, 6])));
        assert!(is_subset_of_rolled(&rolled, &[]));
    }
}
