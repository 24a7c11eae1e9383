//! Page components for the application.

pub mod travel_group;

pub use travel_group::{NotFound, TravelGroup};
