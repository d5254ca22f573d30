pub mod clock;
pub mod error;
pub mod model;
pub mod store;

pub use clock::{AppClock, Clock};
pub use model::ProgressModel;
pub use store::KeyValueStore;

#[cfg(test)]
pub use clock::FixedClock;
#[cfg(test)]
pub use store::MemoryStore;
