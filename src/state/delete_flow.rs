//! Confirmation step in front of deleting a travelogue.

use crate::models::Travelogue;

/// The confirmation modal is open exactly when a travelogue is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DeleteFlow {
    #[default]
    Idle,
    ConfirmPending { selected: Travelogue },
}

impl DeleteFlow {
    pub fn is_modal_open(&self) -> bool {
        matches!(self, DeleteFlow::ConfirmPending { .. })
    }

    pub fn selected(&self) -> Option<&Travelogue> {
        match self {
            DeleteFlow::Idle => None,
            DeleteFlow::ConfirmPending { selected } => Some(selected),
        }
    }

    /// Open the modal for `travelogue`, replacing any earlier selection.
    pub fn select(&mut self, travelogue: Travelogue) {
        *self = DeleteFlow::ConfirmPending {
            selected: travelogue,
        };
    }

    /// Close the modal and drop the selection.
    pub fn reset(&mut self) {
        *self = DeleteFlow::Idle;
    }
}
