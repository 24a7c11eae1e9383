use dioxus::prelude::*;

use crate::components::ui::{Button, ButtonVariant};

/// Overlay asking the author to confirm a delete. Clicking the backdrop does
/// nothing; only the two buttons leave the modal.
#[component]
pub fn DeleteConfirmModal(on_confirm: EventHandler<()>, on_cancel: EventHandler<()>) -> Element {
    rsx! {
        div { class: "modal-overlay",
            div { class: "modal",
                p { "정말로 삭제하시겠어요?" }
                div { class: "modal-actions",
                    Button {
                        variant: ButtonVariant::Normal,
                        onclick: move |_| on_confirm.call(()),
                        "삭제"
                    }
                    Button {
                        variant: ButtonVariant::Active,
                        class: "modal-cancel".to_string(),
                        onclick: move |_| on_cancel.call(()),
                        "취소"
                    }
                }
            }
        }
    }
}
