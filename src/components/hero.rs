//! Hero section - headline, early access form and the art card.

use dioxus::prelude::*;
use vickreychain_core::content::{
    ART_BADGE, ART_CAPTION, ART_CAPTION_TITLE, ART_SUBTITLE, ART_TITLE, EMAIL_LABEL,
    EMAIL_PLACEHOLDER, HERO_LEDE, HERO_TITLE, HERO_TITLE_ACCENT, SUBMIT_LABEL, SUCCESS_MESSAGE,
};
use vickreychain_core::sections::EMAIL_INPUT_ID;
use vickreychain_core::{EarlyAccessForm, FormView};
use vickreychain_ui::{Button, ButtonType, EmailInput, Notice};

use crate::theme::colors;

#[component]
pub fn Hero(form: Signal<EarlyAccessForm>) -> Element {
    rsx! {
        section { class: "hero",
            div { class: "container hero-grid",
                div { class: "hero-copy",
                    h1 { class: "hero-title",
                        span { class: "block", "{HERO_TITLE}" }
                        span { class: "block accent", "{HERO_TITLE_ACCENT}" }
                    }
                    p { class: "hero-lede", "{HERO_LEDE}" }
                    div { class: "hero-form",
                        EarlyAccess { form: form }
                    }
                }
                HeroArt {}
            }
        }
    }
}

/// The email form, or the thank-you notice once it has been submitted.
///
/// Empty and malformed input is stopped by the webview's own validation
/// of the `required` email field; the submit handler validates again and
/// keeps the form on screen if that ever lets something through.
#[component]
pub fn EarlyAccess(mut form: Signal<EarlyAccessForm>) -> Element {
    let view = form.read().view();
    let email = form.read().email().to_string();

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if let Err(e) = form.write().submit() {
            tracing::debug!("Early access form stays open: {}", e);
        }
    };

    match view {
        FormView::Form => rsx! {
            form { class: "early-access-form", onsubmit: on_submit,
                div { class: "early-access-row",
                    EmailInput {
                        id: EMAIL_INPUT_ID.to_string(),
                        label: EMAIL_LABEL.to_string(),
                        placeholder: EMAIL_PLACEHOLDER.to_string(),
                        value: email,
                        oninput: move |value: String| form.write().set_email(value),
                    }
                    Button { button_type: ButtonType::Submit, "{SUBMIT_LABEL}" }
                }
            }
        },
        FormView::Confirmation => rsx! {
            Notice { message: SUCCESS_MESSAGE.to_string() }
        },
    }
}

/// Decorative gradient card beside the headline.
#[component]
fn HeroArt() -> Element {
    let gradient = format!(
        "background: linear-gradient(to right, {}, {});",
        colors::INDIGO_500,
        colors::PURPLE_600
    );

    rsx! {
        div { class: "hero-art",
            div { class: "hero-art-card", style: "{gradient}",
                svg {
                    class: "hero-art-pattern",
                    view_box: "0 0 100 100",
                    xmlns: "http://www.w3.org/2000/svg",
                    "aria-hidden": "true",
                    path { d: "M30,20 L70,20 L80,40 L50,90 L20,40 Z", fill: "white" }
                    circle { cx: "50", cy: "35", r: "10", fill: "white" }
                    path {
                        d: "M25,30 L45,30 L45,60 L25,60 Z",
                        fill: "white",
                        opacity: "0.5",
                        transform: "translate(60, 0)",
                    }
                }
                span { class: "hero-art-badge", "{ART_BADGE}" }
                div { class: "hero-art-center",
                    h3 { "{ART_TITLE}" }
                    p { "{ART_SUBTITLE}" }
                }
                div { class: "hero-art-shade" }
                div { class: "hero-art-caption",
                    div { class: "hero-art-caption-title", "{ART_CAPTION_TITLE}" }
                    p { "{ART_CAPTION}" }
                }
            }
        }
    }
}
