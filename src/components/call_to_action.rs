use dioxus::prelude::*;
use vickreychain_core::content::{CTA_BUTTON, CTA_HEADLINE, CTA_SUBLINE};
use vickreychain_ui::{Button, ButtonVariant};

use crate::actions::focus_email;

/// Indigo band near the bottom; the button jumps back to the email field.
///
/// After the form has been submitted the field is gone and the button
/// does nothing.
#[component]
pub fn CallToAction() -> Element {
    rsx! {
        section { class: "cta",
            div { class: "container cta-inner",
                h2 { class: "cta-title",
                    span { class: "block", "{CTA_HEADLINE}" }
                    span { class: "block cta-subline", "{CTA_SUBLINE}" }
                }
                div { class: "cta-action",
                    Button {
                        variant: ButtonVariant::Inverse,
                        onclick: move |_| focus_email(),
                        "{CTA_BUTTON}"
                    }
                }
            }
        }
    }
}
