//! In-page actions that reach into the webview document.
//!
//! Both are fire-and-forget: a missing element is a no-op in the script
//! itself, and an eval failure is only logged.

use dioxus::prelude::*;
use vickreychain_core::sections::{focus_script, EMAIL_INPUT_ID};
use vickreychain_core::Section;

/// Smooth-scroll to a page section.
pub fn scroll_to(section: Section) {
    tracing::debug!(anchor = section.anchor(), "Scrolling to section");
    run_script(section.scroll_script());
}

/// Move focus to the early access email field.
pub fn focus_email() {
    run_script(focus_script(EMAIL_INPUT_ID));
}

fn run_script(script: String) {
    spawn(async move {
        if let Err(e) = document::eval(&script).await {
            tracing::debug!("Script eval failed: {:?}", e);
        }
    });
}
