use dioxus::prelude::*;

#[component]
pub fn Footer(notice: String) -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "container",
                p { class: "footer-notice", "{notice}" }
            }
        }
    }
}
