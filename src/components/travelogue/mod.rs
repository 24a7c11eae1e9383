pub mod delete_confirm_modal;
pub mod travelogue_card;
pub mod travelogue_list_view;

pub use delete_confirm_modal::DeleteConfirmModal;
pub use travelogue_card::TravelogueCardItem;
pub use travelogue_list_view::{TravelogueList, TravelogueListProps, TravelogueListView};
