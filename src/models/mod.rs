pub mod actions;
pub mod player;
