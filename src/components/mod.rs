//! Landing page sections.
//!
//! Each section is its own component; `Landing` stacks them in page order.

mod call_to_action;
mod faq_list;
mod feature_grid;
mod footer;
mod hero;
mod how_it_works;
mod nav_bar;
mod page_head;

pub use call_to_action::CallToAction;
pub use faq_list::FaqList;
pub use feature_grid::FeatureGrid;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav_bar::NavBar;
pub use page_head::PageHead;
