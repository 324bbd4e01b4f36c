pub mod cache;
pub mod modal;
pub mod roster;
