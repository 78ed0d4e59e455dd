//! Property-based tests for the early access form and mobile menu
//!
//! Uses proptest to check the form's state transitions against arbitrary
//! input, and the menu against arbitrary toggle sequences.

use proptest::prelude::*;
use vickreychain_core::{EarlyAccessForm, EmailAddress, FormView, LandingError, MobileMenu};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Generate addresses the browser rule accepts
fn valid_email_strategy() -> impl Strategy<Value = String> {
    (
        "[a-zA-Z0-9._%+-]{1,32}",
        prop::collection::vec("[a-zA-Z0-9]([a-zA-Z0-9-]{0,20}[a-zA-Z0-9])?", 1..4),
    )
        .prop_map(|(local, labels)| format!("{}@{}", local, labels.join(".")))
}

/// Generate strings without an '@' (never valid)
fn no_at_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^@]{0,64}").expect("valid regex")
}

/// Operations on the mobile menu
#[derive(Debug, Clone)]
enum MenuOp {
    Toggle,
    Close,
}

fn menu_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<MenuOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(MenuOp::Toggle),
            1 => Just(MenuOp::Close),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Every generated valid address is accepted unchanged
    #[test]
    fn valid_emails_parse(addr in valid_email_strategy()) {
        let parsed = EmailAddress::parse(&addr).unwrap();
        prop_assert_eq!(parsed.as_str(), addr.as_str());
    }

    /// A valid submit always lands on the confirmation with a cleared input
    #[test]
    fn valid_submit_confirms(addr in valid_email_strategy()) {
        let mut form = EarlyAccessForm::new();
        form.set_email(addr.clone());

        let accepted = form.submit().unwrap();

        prop_assert_eq!(accepted.as_str(), addr.as_str());
        prop_assert_eq!(form.view(), FormView::Confirmation);
        prop_assert!(form.email().is_empty());
    }

    /// Input without '@' never leaves the form view and is preserved
    #[test]
    fn rejected_submit_is_noop(input in no_at_strategy()) {
        let mut form = EarlyAccessForm::new();
        form.set_email(input.clone());

        let err = form.submit().unwrap_err();

        prop_assert!(err.is_validation());
        prop_assert_eq!(form.view(), FormView::Form);
        prop_assert_eq!(form.email(), input.as_str());
    }

    /// Whitespace-only input reports the required-field error
    #[test]
    fn blank_input_is_required(input in "[ \t\n\r]{0,16}") {
        prop_assert!(matches!(EmailAddress::parse(&input), Err(LandingError::EmailRequired)));
    }

    /// Menu state equals a simple boolean model after any op sequence
    #[test]
    fn menu_matches_model(ops in menu_ops_strategy(50)) {
        let mut menu = MobileMenu::new();
        let mut model = false;

        for op in &ops {
            match op {
                MenuOp::Toggle => {
                    menu.toggle();
                    model = !model;
                }
                MenuOp::Close => {
                    menu.close();
                    model = false;
                }
            }
        }

        prop_assert_eq!(menu.is_open(), model);
    }

    /// Any even number of toggles returns the menu to closed
    #[test]
    fn even_toggles_close_menu(pairs in 0usize..50) {
        let mut menu = MobileMenu::new();
        for _ in 0..pairs * 2 {
            menu.toggle();
        }
        prop_assert!(!menu.is_open());
    }
}
