pub mod common;
pub mod feedback;
pub mod icon;
pub mod pages;
pub mod particles;
pub mod sections;
pub mod theme;

pub use icon::{Icon, icons};
pub use pages::LandingPage;
pub use particles::{ParticleField, ParticleShape};
pub use theme::{
    DeviceContext, SiteContext, provide_site_context, use_device_context, use_site_context,
};
