pub mod busyness;
pub mod places;
