use rand::SeedableRng;
use rand::rngs::StdRng;

use tenthousand::{
    AdoptAction, Bot, Dice, DoNothingBot, Player, RandomBot, RoundAdoptionState, ScoringTable,
    is_subset_of_rolled,
};

fn dice(faces: &[u8]) -> Vec<Dice> {
    Dice::from_faces(faces).expect("valid faces")
}

#[test]
fn random_keeps_are_always_legal() {
    let table = ScoringTable::standard();
    let mut bot = RandomBot::new(StdRng::seed_from_u64(5));
    let mut rng = StdRng::seed_from_u64(6);
    for _ in 0..500 {
        let rolled = Dice::roll_sorted(&mut rng, 6);
        if !table.has_scoring_value(&rolled) {
            continue;
        }
        let action = bot.on_turn_dice_rolled(&rolled, 0);
        assert!(!action.keep.is_empty());
        assert!(table.all_have_scoring_value(&action.keep));
        assert!(is_subset_of_rolled(&rolled, &action.keep));
    }
}

#[test]
fn random_never_adopts_unavailable_offers() {
    let mut bot = RandomBot::new(StdRng::seed_from_u64(1));
    let players = vec![Player::seeded("p0", 9000, 0)];
    bot.on_game_start(&players, 0);
    for _ in 0..50 {
        assert_eq!(
            bot.on_turn_start(&RoundAdoptionState::NO_ADOPTION, &players),
            AdoptAction::Ignore
        );
    }
    let expensive = RoundAdoptionState::from_successful_turn(9500, 2);
    for _ in 0..50 {
        assert_eq!(bot.on_turn_start(&expensive, &players), AdoptAction::Ignore);
    }
}

#[test]
fn do_nothing_keeps_everything_and_continues() {
    let mut bot = DoNothingBot::new();
    let rolled = dice(&[1, 2, 5]);
    let action = bot.on_turn_dice_rolled(&rolled, 0);
    assert_eq!(action.keep, rolled);
    assert!(action.continue_turn);
    assert_eq!(
        bot.on_turn_start(&RoundAdoptionState::from_successful_turn(300, 2), &[]),
        AdoptAction::Ignore
    );
}
