use dioxus::prelude::*;
use vickreychain_core::{content, Section};
use vickreychain_ui::SectionHeader;

/// Six feature cards, three per row on wide windows.
#[component]
pub fn FeatureGrid() -> Element {
    let section = Section::Features;

    rsx! {
        section { id: section.anchor(), class: "section section-gray",
            div { class: "container",
                SectionHeader { copy: *section.copy() }
                div { class: "feature-grid",
                    for feature in content::features() {
                        div { key: "{feature.title}", class: "feature-card",
                            div { class: "feature-icon", "{feature.icon}" }
                            h3 { class: "card-title", "{feature.title}" }
                            p { class: "card-text", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}
