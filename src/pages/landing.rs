//! Landing page - the whole VickreyChain site.
//!
//! Owns the page's only state: the early access form and the mobile menu.
//! Both reset when the window is reopened.

use dioxus::prelude::*;
use vickreychain_core::{EarlyAccessForm, MobileMenu};

use crate::components::{
    CallToAction, FaqList, FeatureGrid, Footer, Hero, HowItWorks, NavBar, PageHead,
};
use crate::context::use_site_config;

/// Landing page component.
#[component]
pub fn Landing() -> Element {
    let config = use_site_config();

    let form = use_signal(EarlyAccessForm::new);
    let menu = use_signal(MobileMenu::new);

    rsx! {
        PageHead { meta: config.meta.clone() }

        div { class: "page",
            NavBar { brand: config.brand.clone(), menu: menu }
            Hero { form: form }
            HowItWorks {}
            FeatureGrid {}
            FaqList {}
            CallToAction {}
            Footer { notice: config.copyright_notice() }
        }
    }
}
