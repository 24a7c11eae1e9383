pub mod travelogue_list;

pub use travelogue_list::{use_travelogue_list, TravelogueListController};
