//! Transient page state.
//!
//! None of this outlives the window: the form and the menu start fresh on
//! every launch and nothing is written anywhere.

use crate::email::EmailAddress;
use crate::error::LandingResult;

/// Which half of the early access block is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormView {
    /// Email input and submit button
    Form,
    /// Thank-you message after a successful submit
    Confirmation,
}

/// The "Get Early Access" form.
///
/// Holds the current input text and whether a submit has succeeded.
/// Once submitted there is no way back to the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EarlyAccessForm {
    email: String,
    submitted: bool,
}

impl EarlyAccessForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Replace the input text (the field's `oninput`).
    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn view(&self) -> FormView {
        if self.submitted {
            FormView::Confirmation
        } else {
            FormView::Form
        }
    }

    /// Handle a form submit.
    ///
    /// On success the address is logged, the form flips to the
    /// confirmation view and the input is cleared. On a validation error
    /// nothing changes.
    pub fn submit(&mut self) -> LandingResult<EmailAddress> {
        let address = match EmailAddress::parse(&self.email) {
            Ok(address) => address,
            Err(e) => {
                tracing::warn!(error = %e, "Early access submit rejected");
                return Err(e);
            }
        };

        tracing::info!(email = %address, "Submitted email");
        self.submitted = true;
        self.email.clear();
        Ok(address)
    }
}

/// Collapsible navigation shown on narrow windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// A closed menu.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Accessible label for the toggle button in its current state.
    pub fn toggle_label(&self) -> &'static str {
        if self.open {
            "Close main menu"
        } else {
            "Open main menu"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LandingError;

    #[test]
    fn valid_submit_shows_confirmation_and_clears_input() {
        let mut form = EarlyAccessForm::new();
        form.set_email("bidder@example.com");

        let addr = form.submit().unwrap();

        assert_eq!(addr.as_str(), "bidder@example.com");
        assert!(form.is_submitted());
        assert_eq!(form.view(), FormView::Confirmation);
        assert_eq!(form.email(), "");
    }

    #[test]
    fn empty_submit_keeps_form_visible() {
        let mut form = EarlyAccessForm::new();
        let err = form.submit().unwrap_err();

        assert!(matches!(err, LandingError::EmailRequired));
        assert_eq!(form.view(), FormView::Form);
    }

    #[test]
    fn malformed_submit_preserves_input() {
        let mut form = EarlyAccessForm::new();
        form.set_email("not-an-email");

        assert!(form.submit().is_err());
        assert!(!form.is_submitted());
        assert_eq!(form.email(), "not-an-email");
    }

    #[test]
    fn confirmation_is_terminal() {
        let mut form = EarlyAccessForm::new();
        form.set_email("bidder@example.com");
        form.submit().unwrap();

        form.set_email("typo");
        assert!(form.submit().is_err());
        assert_eq!(form.view(), FormView::Confirmation);
    }

    #[test]
    fn menu_starts_closed() {
        let menu = MobileMenu::new();
        assert!(!menu.is_open());
        assert_eq!(menu.toggle_label(), "Open main menu");
    }

    #[test]
    fn menu_toggle_twice_restores_closed() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        assert!(menu.is_open());
        assert_eq!(menu.toggle_label(), "Close main menu");
        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn menu_close_is_idempotent() {
        let mut menu = MobileMenu::new();
        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }
}
