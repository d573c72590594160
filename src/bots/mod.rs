pub mod greedy;
pub mod human;
pub mod nothing;
pub mod random;
pub mod registry;

pub use greedy::GreedyBot;
pub use human::HumanBot;
pub use nothing::DoNothingBot;
pub use random::RandomBot;
