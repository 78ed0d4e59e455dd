use dioxus::prelude::*;
use vickreychain_core::{content, Section};
use vickreychain_ui::SectionHeader;

#[component]
pub fn FaqList() -> Element {
    let section = Section::Faq;

    rsx! {
        section { id: section.anchor(), class: "section section-white",
            div { class: "container",
                SectionHeader { copy: *section.copy() }
                dl { class: "faq-list",
                    for faq in content::faqs() {
                        div { key: "{faq.question}", class: "faq-item",
                            dt { class: "faq-question", "{faq.question}" }
                            dd { class: "faq-answer", "{faq.answer}" }
                        }
                    }
                }
            }
        }
    }
}
