use std::error::Error;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::Bot;
use crate::bots::greedy::DEFAULT_TURN_TARGET;
use crate::{DoNothingBot, GreedyBot, HumanBot, RandomBot};

/// Returns a normalized label for a bot spec (the head token before any ':').
pub fn label_for_spec(spec: &str) -> String {
    spec.split(':')
        .next()
        .unwrap_or(spec)
        .trim()
        .to_ascii_lowercase()
}

/// Create a bot instance from a CLI-style spec.
/// Supported specs:
/// - human[:name]
/// - random[:seed]
/// - greedy[:target]
/// - nothing
pub fn create_bot_from_spec(
    spec: &str,
    index: usize,
    seed: u64,
) -> Result<Box<dyn Bot>, Box<dyn Error>> {
    let argument = spec.split_once(':').map(|(_, value)| value.trim());
    match label_for_spec(spec).as_str() {
        "human" => {
            let name = argument
                .map(str::to_string)
                .unwrap_or_else(|| format!("Human {index}"));
            Ok(Box::new(HumanBot::new(name)))
        }
        "random" => {
            let custom_seed = argument
                .and_then(|value| value.parse::<u64>().ok())
                .unwrap_or(seed ^ ((index as u64 + 1) * 0x9E37_79B9));
            Ok(Box::new(RandomBot::new(StdRng::seed_from_u64(custom_seed))))
        }
        "greedy" => {
            let target = match argument {
                Some(value) => value
                    .parse::<u32>()
                    .map_err(|_| format!("invalid greedy target: {value}"))?,
                None => DEFAULT_TURN_TARGET,
            };
            Ok(Box::new(GreedyBot::new(target)))
        }
        "nothing" => Ok(Box::new(DoNothingBot::new())),
        _ => Err(format!("unrecognized bot spec: {spec}").into()),
    }
}
