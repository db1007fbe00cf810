pub mod loader;
pub mod types;
pub mod validation;

pub use loader::load_snapshot;
pub use types::{NextFight, Snapshot};
pub use validation::validate_snapshot;
