pub mod app;
pub mod confetti;
pub mod events;
pub mod theme;
pub mod widgets;
