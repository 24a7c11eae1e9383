//! Travelogue feed for a travel group.

use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::hooks::use_travelogue_list;
use crate::identity::IdentityCache;
use crate::models::Travelogue;
use crate::state::TravelogueListState;
use crate::storage::LocalStorage;

use super::{DeleteConfirmModal, TravelogueCardItem};

/// Entry point used by pages. Reads the member roster and signed-in user
/// from local storage once, on mount.
///
/// Later changes to `travelogues` are not picked up; the list keeps its own
/// copy from the first render.
#[component]
pub fn TravelogueListView(travelogues: Vec<Travelogue>) -> Element {
    let identity = use_hook(|| IdentityCache::load(&LocalStorage));

    rsx! {
        TravelogueList { seed: TravelogueListState::new(travelogues, identity) }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TravelogueListProps {
    /// Initial view-model; only read on the first render.
    pub seed: TravelogueListState,
}

/// Renders the view-model and drives the delete flow.
///
/// Uses the `ClientConfig` context when present, otherwise the default; the
/// API is resolved by [`use_travelogue_list`].
#[component]
pub fn TravelogueList(props: TravelogueListProps) -> Element {
    let config = use_hook(|| try_consume_context::<ClientConfig>().unwrap_or_default());
    let mut list = use_travelogue_list(|| props.seed.clone());

    let cards = list.state.read().cards(&config);
    let modal_open = list.state.read().is_modal_open();

    rsx! {
        div { class: "travelgroups-list-view-container",
            for card in cards {
                TravelogueCardItem {
                    key: "{card.id}",
                    card: card.clone(),
                    config: config.clone(),
                    on_delete: move |id: i64| list.request_delete(id),
                }
            }

            if modal_open {
                DeleteConfirmModal {
                    on_confirm: move |_: ()| list.confirm_delete(),
                    on_cancel: move |_: ()| list.cancel_delete(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::Roster;
    use crate::models::{CurrentUser, Member, MemberUser};

    fn travelogue(id: i64, author_id: i64, public_flag: i32) -> Travelogue {
        Travelogue {
            id,
            title: format!("Title {id}"),
            content: format!("Body {id}"),
            image: format!("img-{id}.jpg"),
            public_flag,
            author_id,
        }
    }

    fn identity(current_user: Option<i64>) -> IdentityCache {
        IdentityCache {
            roster: Roster::new(vec![Member {
                user_id: 7,
                user: Some(MemberUser {
                    name: Some("Dohyun".to_string()),
                    profile_image: Some("dohyun.png".to_string()),
                }),
            }]),
            current_user: current_user.map(|id| CurrentUser { id }),
        }
    }

    fn render(seed: TravelogueListState) -> String {
        let mut dom = VirtualDom::new_with_props(TravelogueList, TravelogueListProps { seed });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"travelgroups-list-view\"").count()
    }

    #[test]
    fn renders_one_card_per_travelogue_in_order() {
        let list = vec![
            travelogue(3, 7, 1),
            travelogue(1, 8, 0),
            travelogue(2, 7, 1),
        ];
        let html = render(TravelogueListState::new(list, identity(None)));

        assert_eq!(card_count(&html), 3);
        let positions: Vec<usize> = ["Title 3", "Title 1", "Title 2"]
            .iter()
            .map(|t| html.find(t).expect("title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn empty_list_renders_only_the_container() {
        let html = render(TravelogueListState::new(Vec::new(), identity(None)));
        assert_eq!(card_count(&html), 0);
        assert!(html.contains("travelgroups-list-view-container"));
    }

    #[test]
    fn delete_icon_only_for_the_signed_in_author() {
        let list = vec![travelogue(1, 7, 1), travelogue(2, 8, 1), travelogue(3, 7, 0)];

        let html = render(TravelogueListState::new(list.clone(), identity(Some(7))));
        assert_eq!(html.matches("alt=\"delete\"").count(), 2);

        let html = render(TravelogueListState::new(list, identity(None)));
        assert_eq!(html.matches("alt=\"delete\"").count(), 0);
    }

    #[test]
    fn author_identity_and_placeholders_are_rendered() {
        let list = vec![travelogue(1, 7, 1), travelogue(2, 99, 0)];
        let html = render(TravelogueListState::new(list, identity(None)));

        assert!(html.contains("Dohyun"));
        assert!(html.contains("/s3/dohyun.png"));
        assert!(html.contains("Unknown"));
        assert!(html.contains("/s3/default-profile.png"));
        assert!(html.contains("/s3/img-1.jpg"));
    }

    #[test]
    fn visibility_badges_follow_the_public_flag() {
        let list = vec![travelogue(1, 7, 1), travelogue(2, 7, 0)];
        let html = render(TravelogueListState::new(list, identity(None)));

        assert!(html.contains("/travelgroups/public-icon.svg"));
        assert!(html.contains("/travelgroups/private-icon.svg"));
        assert!(html.contains("공개"));
        assert!(html.contains("비공개"));
    }

    #[test]
    fn modal_renders_only_while_a_delete_is_pending() {
        let list = vec![travelogue(1, 7, 1)];
        let idle = TravelogueListState::new(list, identity(Some(7)));
        assert!(!render(idle.clone()).contains("modal-overlay"));

        let mut pending = idle;
        pending.request_delete(1);
        let html = render(pending);
        assert!(html.contains("modal-overlay"));
        assert!(html.contains("정말로 삭제하시겠어요?"));
        assert!(html.contains("삭제"));
        assert!(html.contains("취소"));
    }
}
