//! Navigation Bar Component
//!
//! Sticky top bar with the brand and section links.
//! Wide windows: links inline. Narrow windows: hamburger toggle and a
//! drop-down menu that closes after an entry is chosen.

use dioxus::prelude::*;
use vickreychain_core::{MobileMenu, Section};
use vickreychain_ui::IconButton;

use crate::actions::scroll_to;

#[component]
pub fn NavBar(brand: String, mut menu: Signal<MobileMenu>) -> Element {
    let open = menu.read().is_open();
    let toggle_label = menu.read().toggle_label();

    rsx! {
        nav { class: "nav-bar",
            div { class: "container nav-inner",
                span { class: "brand", "{brand}" }

                // Narrow windows only
                IconButton {
                    class: "menu-toggle".to_string(),
                    aria_label: toggle_label.to_string(),
                    expanded: open,
                    onclick: move |_| menu.write().toggle(),
                    {render_menu_icon(open)}
                }

                div { class: "nav-links",
                    for section in Section::NAV_ORDER {
                        span {
                            key: "{section.anchor()}",
                            class: "nav-link",
                            onclick: move |_| scroll_to(section),
                            "{section.nav_label()}"
                        }
                    }
                }
            }

            if open {
                div { class: "mobile-menu",
                    for section in Section::NAV_ORDER {
                        span {
                            key: "{section.anchor()}",
                            class: "mobile-menu-item",
                            onclick: move |_| {
                                scroll_to(section);
                                menu.write().close();
                            },
                            "{section.nav_label()}"
                        }
                    }
                }
            }
        }
    }
}

/// Hamburger when closed, X when open
fn render_menu_icon(open: bool) -> Element {
    let d = if open {
        "M6 18L18 6M6 6l12 12"
    } else {
        "M4 6h16M4 12h16M4 18h16"
    };

    rsx! {
        svg {
            class: "menu-icon",
            xmlns: "http://www.w3.org/2000/svg",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            "aria-hidden": "true",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                stroke_width: "2",
                d: "{d}",
            }
        }
    }
}
