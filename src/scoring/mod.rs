pub mod engine;

pub use engine::{compute_leaderboard, LeaderboardRow};
