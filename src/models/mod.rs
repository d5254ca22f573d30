pub mod milestone;
pub mod plan;
pub mod snapshot;
pub mod state;
pub mod tracker;

pub use milestone::{BarTier, Tone};
pub use plan::PlanConfig;
pub use snapshot::ProgressSnapshot;
pub use state::{Decoded, ProgressState, STATE_KEY};
pub use tracker::{VisitLog, WeekTracker};
