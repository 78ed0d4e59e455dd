use dioxus::prelude::*;
use vickreychain_core::PageMeta;

/// Document title, description, viewport and favicon.
#[component]
pub fn PageHead(meta: PageMeta) -> Element {
    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
        document::Meta { name: "viewport", content: "{meta.viewport}" }
        document::Link { rel: "icon", href: "{meta.favicon}" }
    }
}
