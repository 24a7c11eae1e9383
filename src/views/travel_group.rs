//! Travel group page - hosts the travelogue feed.

use dioxus::prelude::*;

use crate::api_client::ApiClient;
use crate::components::travelogue::TravelogueListView;
use crate::config::ClientConfig;

#[component]
pub fn TravelGroup(group_id: i64) -> Element {
    let config = use_context::<ClientConfig>();

    // Track the prop so the resource reruns when the route switches groups
    let mut track_group_id = use_signal(|| group_id);
    if track_group_id() != group_id {
        track_group_id.set(group_id);
    }

    let travelogues = use_resource(move || {
        let gid = track_group_id();
        let client = ApiClient::new().with_base_url(config.api_base_url.clone());
        async move {
            match client.list_travelogues(gid).await {
                Ok(list) => Ok((gid, list)),
                Err(e) => {
                    crate::log_warn!("Failed to load travelogues for group {}: {}", gid, e);
                    Err(format!("Failed to load travelogues for group {gid}: {e}"))
                }
            }
        }
    });

    // Keyed by group so a different group mounts a fresh feed
    let body = match &*travelogues.read() {
        Some(Ok((gid, list))) => rsx! {
            TravelogueListView { key: "{gid}", travelogues: list.clone() }
        },
        Some(Err(e)) => rsx! {
            p { class: "travelgroups-error", "{e}" }
        },
        None => rsx! {
            p { class: "travelgroups-loading", "Loading..." }
        },
    };

    rsx! {
        div { class: "travelgroups-page", {body} }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        p { class: "travelgroups-error", "Nothing at /{path}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    /// Shows group 1, then switches the route prop to group 2.
    #[component]
    fn SwitchingHost() -> Element {
        use_context_provider(ClientConfig::default);
        let mut group = use_signal(|| 1_i64);
        use_hook(move || {
            spawn(async move { group.set(2) });
        });

        rsx! { TravelGroup { group_id: group() } }
    }

    #[tokio::test]
    async fn switching_groups_reloads_the_feed() {
        let mut dom = VirtualDom::new(SwitchingHost);
        dom.rebuild_in_place();

        let mut html = dioxus_ssr::render(&dom);
        for _ in 0..20 {
            if html.contains("group 2") {
                break;
            }
            let _ = tokio::time::timeout(Duration::from_millis(500), dom.wait_for_work()).await;
            dom.render_immediate_to_vec();
            html = dioxus_ssr::render(&dom);
        }

        // no base URL is configured, so each load fails fast and names its group
        assert!(html.contains("group 2"), "{html}");
        assert!(!html.contains("group 1"), "{html}");
    }
}
