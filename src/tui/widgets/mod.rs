pub mod header;
pub mod milestones;
pub mod progress;
pub mod stats;
pub mod statusbar;
pub mod toast;
pub mod tracker;
