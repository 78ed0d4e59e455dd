//! Page components for VickreyChain.

mod landing;

pub use landing::Landing;
