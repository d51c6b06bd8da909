//! Application pages module
//!
//! The site is a single landing page.

mod landing;

pub use landing::LandingPage;
