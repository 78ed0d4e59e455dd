//! Page sections and in-page navigation.
//!
//! Navigation never changes routes; it evaluates a small script in the
//! webview that scrolls to an element id. A missing element is a no-op.

use crate::content::{SectionCopy, FAQ_COPY, FEATURES_COPY, HOW_IT_WORKS};

/// Id of the email input, focused by the call-to-action button.
pub const EMAIL_INPUT_ID: &str = "email";

/// A scroll target on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    HowItWorks,
    Features,
    Faq,
}

impl Section {
    /// Order of the entries in both nav menus.
    pub const NAV_ORDER: [Section; 3] = [Section::Features, Section::HowItWorks, Section::Faq];

    /// Element id the section is rendered with.
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::HowItWorks => "how-it-works",
            Section::Features => "features",
            Section::Faq => "faq",
        }
    }

    /// Label used in the nav bar.
    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::HowItWorks => "How It Works",
            Section::Features => "Features",
            Section::Faq => "FAQ",
        }
    }

    pub fn copy(&self) -> &'static SectionCopy {
        match self {
            Section::HowItWorks => &HOW_IT_WORKS,
            Section::Features => &FEATURES_COPY,
            Section::Faq => &FAQ_COPY,
        }
    }

    /// Reverse lookup from an element id, with or without a leading `#`.
    pub fn from_anchor(anchor: &str) -> Option<Section> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        [Section::HowItWorks, Section::Features, Section::Faq]
            .into_iter()
            .find(|s| s.anchor() == anchor)
    }

    /// Script that smooth-scrolls to this section.
    pub fn scroll_script(&self) -> String {
        scroll_into_view_script(self.anchor())
    }
}

/// Script that smooth-scrolls the element with `id` into view.
///
/// The lookup is optional-chained so an absent element does nothing.
pub fn scroll_into_view_script(id: &str) -> String {
    format!(
        "document.getElementById({})?.scrollIntoView({{ behavior: 'smooth' }});",
        js_string(id)
    )
}

/// Script that moves keyboard focus to the element with `id`, if present.
pub fn focus_script(id: &str) -> String {
    format!("document.getElementById({})?.focus();", js_string(id))
}

/// Quote `value` as a JS string literal.
fn js_string(value: &str) -> String {
    // JSON string literals are valid JS string literals.
    serde_json::to_string(value).unwrap_or_else(|_| "\"\"".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_round_trip() {
        for section in Section::NAV_ORDER {
            assert_eq!(Section::from_anchor(section.anchor()), Some(section));
        }
        assert_eq!(Section::from_anchor("#faq"), Some(Section::Faq));
    }

    #[test]
    fn unknown_anchor_is_none() {
        assert_eq!(Section::from_anchor("pricing"), None);
        assert_eq!(Section::from_anchor(""), None);
    }

    #[test]
    fn nav_order_matches_page_menu() {
        let labels: Vec<_> = Section::NAV_ORDER.iter().map(|s| s.nav_label()).collect();
        assert_eq!(labels, vec!["Features", "How It Works", "FAQ"]);
    }

    #[test]
    fn scroll_script_is_optional_chained() {
        let script = Section::Features.scroll_script();
        assert_eq!(
            script,
            "document.getElementById(\"features\")?.scrollIntoView({ behavior: 'smooth' });"
        );
    }

    #[test]
    fn scripts_escape_ids() {
        let script = focus_script("a\"b");
        assert_eq!(script, "document.getElementById(\"a\\\"b\")?.focus();");
    }

    #[test]
    fn section_copy_is_non_empty() {
        for section in Section::NAV_ORDER {
            let copy = section.copy();
            assert!(!copy.eyebrow.is_empty());
            assert!(!copy.heading.is_empty());
            assert!(!copy.lede.is_empty());
        }
    }
}
