//! View-model behind the travelogue list.
//!
//! Holds the displayed travelogues, the identity data read at mount and the
//! delete confirmation state. Components render [`TravelogueCard`]s from it
//! and forward clicks to it; the remote call itself is made by the caller
//! between [`TravelogueListState::pending_delete`] and
//! [`TravelogueListState::complete_delete`].

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::identity::{AuthorIdentity, IdentityCache};
use crate::models::{Travelogue, Visibility};

use super::DeleteFlow;

/// Everything a card needs to render one travelogue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelogueCard {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub image_url: String,
    pub author_name: String,
    pub avatar_url: String,
    pub visibility: Visibility,
    pub can_delete: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelogueListState {
    travelogues: Vec<Travelogue>,
    identity: IdentityCache,
    flow: DeleteFlow,
}

impl TravelogueListState {
    pub fn new(travelogues: Vec<Travelogue>, identity: IdentityCache) -> Self {
        Self {
            travelogues,
            identity,
            flow: DeleteFlow::Idle,
        }
    }

    pub fn travelogues(&self) -> &[Travelogue] {
        &self.travelogues
    }

    pub fn is_modal_open(&self) -> bool {
        self.flow.is_modal_open()
    }

    /// One card per travelogue, in list order.
    pub fn cards(&self, config: &ClientConfig) -> Vec<TravelogueCard> {
        self.travelogues
            .iter()
            .map(|t| {
                let AuthorIdentity { name, avatar } = self.identity.roster.resolve(t.author_id);
                TravelogueCard {
                    id: t.id,
                    title: t.title.clone(),
                    content: t.content.clone(),
                    image_url: config.asset_url(&t.image),
                    author_name: name,
                    avatar_url: config.asset_url(&avatar),
                    visibility: t.visibility(),
                    can_delete: self.identity.is_author(t),
                }
            })
            .collect()
    }

    /// Delete icon clicked on travelogue `id`. Ignored for ids that are no
    /// longer listed.
    pub fn request_delete(&mut self, id: i64) {
        if let Some(travelogue) = self.travelogues.iter().find(|t| t.id == id) {
            crate::log_debug!("travelogues: confirm delete of {}", id);
            self.flow.select(travelogue.clone());
        }
    }

    /// Cancel pressed in the modal.
    pub fn cancel_delete(&mut self) {
        self.flow.reset();
    }

    /// Id to send to the server when confirm is pressed. The selection stays
    /// in place until [`Self::complete_delete`] runs.
    pub fn pending_delete(&self) -> Option<i64> {
        self.flow.selected().map(|t| t.id)
    }

    /// Apply the server's answer for `id` and close the modal.
    pub fn complete_delete(&mut self, id: i64, result: Result<(), ApiError>) {
        self.flow.reset();
        match result {
            Ok(()) => {
                self.travelogues.retain(|t| t.id != id);
                crate::log_info!("travelogues: deleted {}", id);
            }
            Err(error) => {
                crate::log_error!("Error deleting travelogue {}: {}", id, error);
            }
        }
    }
}
