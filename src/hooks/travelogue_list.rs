use dioxus::prelude::*;

use crate::api_client::TravelogueApiHandle;
use crate::config::ClientConfig;
use crate::state::TravelogueListState;

/// Handle returned by [`use_travelogue_list`]. Copy it into event handlers.
#[derive(Clone, Copy)]
pub struct TravelogueListController {
    pub state: Signal<TravelogueListState>,
    api: Signal<TravelogueApiHandle>,
}

/// Hold a travelogue list view-model for the current component and wire its
/// delete flow to the API.
///
/// The API comes from the `TravelogueApiHandle` context when one is provided,
/// otherwise an `ApiClient` built from the `ClientConfig` context (or the
/// default config).
///
/// ```rust,ignore
/// let mut list = use_travelogue_list(|| TravelogueListState::new(items, identity));
///
/// rsx! {
///     button { onclick: move |_| list.request_delete(id), "Delete" }
///     button { onclick: move |_| list.confirm_delete(), "Confirm" }
/// }
/// ```
pub fn use_travelogue_list(
    seed: impl FnOnce() -> TravelogueListState,
) -> TravelogueListController {
    let api = use_hook(|| {
        try_consume_context::<TravelogueApiHandle>().unwrap_or_else(|| {
            let config = try_consume_context::<ClientConfig>().unwrap_or_default();
            TravelogueApiHandle::from_config(&config)
        })
    });
    let state = use_signal(seed);
    let api = use_signal(|| api);

    TravelogueListController { state, api }
}

impl TravelogueListController {
    pub fn request_delete(&mut self, id: i64) {
        self.state.write().request_delete(id);
    }

    pub fn cancel_delete(&mut self) {
        self.state.write().cancel_delete();
    }

    /// Delete the selected travelogue in the background. The modal stays open
    /// until the server answers. Does nothing when nothing is selected.
    pub fn confirm_delete(&self) {
        let Some(id) = self.state.peek().pending_delete() else {
            return;
        };
        let api = self.api.peek().clone();
        let mut state = self.state;
        spawn(async move {
            let result = api.api().delete_travelogue(id).await;
            state.write().complete_delete(id, result);
        });
    }
}
