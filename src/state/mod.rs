//! Local UI state for the travelogue list.

pub mod delete_flow;
pub mod travelogue_list;

pub use delete_flow::DeleteFlow;
pub use travelogue_list::{TravelogueCard, TravelogueListState};
