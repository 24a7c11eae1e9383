//! One travelogue post in the feed.

use dioxus::prelude::*;

use crate::config::ClientConfig;
use crate::state::TravelogueCard;

/// TravelogueCardItem - author header, post text and image.
///
/// ```text
/// +-------------------------------------------+
/// | (o) Haneul                                |
/// |     [globe] 공개                      [x] |
/// | Jeju day 1                                |
/// | Windy but lovely                          |
/// | +---------------------------------------+ |
/// | |                 image                 | |
/// | +---------------------------------------+ |
/// +-------------------------------------------+
/// ```
///
/// `[x]` only appears on the signed-in user's own posts.
#[component]
pub fn TravelogueCardItem(
    card: TravelogueCard,
    config: ClientConfig,
    on_delete: EventHandler<i64>,
) -> Element {
    let id = card.id;
    let visibility = card.visibility;
    let visibility_icon = config.icon_url(visibility.icon());
    let visibility_alt = visibility.icon_alt();
    let visibility_label = visibility.label();
    let delete_icon = config.icon_url("delete.svg");

    rsx! {
        div { class: "travelgroups-list-view",
            div { class: "travelgroups-list-view-profile",
                img {
                    class: "travelgroups-list-view-profile-img",
                    src: "{card.avatar_url}",
                    alt: "profile-img",
                }
                div { class: "travelgroups-list-view-profile-text",
                    span { class: "regular travelgroups-list-view-author", "{card.author_name}" }
                    div { class: "travelgroups-list-view-visibility",
                        img {
                            class: "travelgroups-list-view-visibility-icon",
                            src: "{visibility_icon}",
                            alt: "{visibility_alt}",
                        }
                        span { class: "regular travelgroups-list-view-visibility-label", "{visibility_label}" }
                        if card.can_delete {
                            img {
                                class: "travelgroups-list-view-delete",
                                src: "{delete_icon}",
                                alt: "delete",
                                onclick: move |_| on_delete.call(id),
                            }
                        }
                    }
                }
            }
            span { class: "regular travelgroups-list-view-text", "{card.title}" }
            span { class: "regular travelgroups-list-view-text", "{card.content}" }
            img {
                class: "travelgroups-list-view-content-img",
                src: "{card.image_url}",
                alt: "{card.title}",
            }
        }
    }
}
