//! Reusable components.

pub mod travelogue;
pub mod ui;
