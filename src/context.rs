//! Site config context for VickreyChain.
//!
//! The config is loaded once in `main` and provided to every component
//! through `use_context`.
//!
//! ```ignore
//! // In App component
//! use_context_provider(site_config);
//!
//! // In child components
//! let config = use_site_config();
//! ```

use dioxus::prelude::*;
use vickreychain_core::SiteConfig;

/// Get the config set from command line args.
pub fn site_config() -> SiteConfig {
    crate::site_config()
}

/// Hook to access the site config from context.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>()
}
