//! Reusable UI components.

mod button;
mod input;
mod notice;
mod section_header;

pub use button::*;
pub use input::*;
pub use notice::*;
pub use section_header::*;
