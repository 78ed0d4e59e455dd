//! VickreyChain Core Library
//!
//! Everything the landing page needs that is not markup: the static copy,
//! the transient page state, email validation and site configuration.
//!
//! ## Overview
//!
//! VickreyChain is a marketing page for a prospective Vickrey auction
//! platform on the Internet Computer. Nothing here talks to a network or
//! stores data; the early access form only records what was typed for the
//! current session.
//!
//! ## Quick Start
//!
//! ```
//! use vickreychain_core::{EarlyAccessForm, FormView};
//!
//! let mut form = EarlyAccessForm::new();
//! form.set_email("bidder@example.com");
//! form.submit().unwrap();
//!
//! assert_eq!(form.view(), FormView::Confirmation);
//! assert!(form.email().is_empty());
//! ```

pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod logging;
pub mod sections;
pub mod state;

// Re-exports
pub use config::{PageMeta, SiteConfig, WindowConfig};
pub use content::{Faq, Feature, SectionCopy, Step};
pub use email::EmailAddress;
pub use error::{LandingError, LandingResult};
pub use logging::LoggingBuilder;
pub use sections::Section;
pub use state::{EarlyAccessForm, FormView, MobileMenu};
