use dioxus::prelude::*;
use vickreychain_core::{content, Section};
use vickreychain_ui::SectionHeader;

/// The three numbered steps of a Vickrey auction.
#[component]
pub fn HowItWorks() -> Element {
    let section = Section::HowItWorks;

    rsx! {
        section { id: section.anchor(), class: "section section-white",
            div { class: "container",
                SectionHeader { copy: *section.copy() }
                div { class: "step-grid",
                    for step in content::steps() {
                        div { key: "{step.number}", class: "step-card",
                            div { class: "step-number", span { "{step.number}" } }
                            h3 { class: "card-title", "{step.title}" }
                            p { class: "card-text", "{step.description}" }
                        }
                    }
                }
            }
        }
    }
}
