//! Landing page sections, top to bottom

pub mod contact;
pub mod faq;
pub mod features;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod platforms;
pub mod pricing;
pub mod service;
pub mod testimonials;

pub use contact::Contact;
pub use faq::FaqSection;
pub use features::{Features, SectionHeading};
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use platforms::Platforms;
pub use pricing::Pricing;
pub use service::Service;
pub use testimonials::Testimonials;
