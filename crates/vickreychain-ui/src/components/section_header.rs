//! Centered header used by the titled page sections.

use dioxus::prelude::*;
use vickreychain_core::SectionCopy;

/// Eyebrow label, large heading and a muted lede paragraph.
///
/// ```rust,ignore
/// rsx! { SectionHeader { copy: *Section::Faq.copy() } }
/// ```
#[component]
pub fn SectionHeader(copy: SectionCopy) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-eyebrow", "{copy.eyebrow}" }
            p { class: "section-title", "{copy.heading}" }
            p { class: "section-lede", "{copy.lede}" }
        }
    }
}
