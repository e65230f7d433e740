pub mod messages;
pub mod strength;
