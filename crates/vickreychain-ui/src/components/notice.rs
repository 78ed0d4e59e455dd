//! Inline status notice.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct NoticeProps {
    pub message: String,
}

/// Green confirmation box with a leading check-circle icon
///
/// Announced to screen readers as a status update.
#[component]
pub fn Notice(props: NoticeProps) -> Element {
    rsx! {
        div { class: "notice", role: "status",
            div { class: "notice-icon",
                svg {
                    xmlns: "http://www.w3.org/2000/svg",
                    view_box: "0 0 20 20",
                    fill: "currentColor",
                    "aria-hidden": "true",
                    path {
                        fill_rule: "evenodd",
                        clip_rule: "evenodd",
                        d: "M10 18a8 8 0 100-16 8 8 0 000 16zm3.707-9.293a1 1 0 00-1.414-1.414L9 10.586 7.707 9.293a1 1 0 00-1.414 1.414l2 2a1 1 0 001.414 0l4-4z",
                    }
                }
            }
            p { class: "notice-message", "{props.message}" }
        }
    }
}
