//! Core view-state logic for the landing page: particle fields, disclosure
//! groups, the selection cursor, form buffers and style variants

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
pub mod cursor;
pub mod disclosure;
pub mod form;
pub mod particles;
pub mod site;
pub mod style;
pub mod submission;
#[cfg(test)]
mod tests;

pub use cursor::SelectionCursor;
pub use disclosure::DisclosureGroup;
pub use form::{
    CONTACT_FORM, ContactForm, DismissTicket, FormBuffer, FormError, FormSchema, FormSnapshot,
    PLATFORM_FORM, PlatformForm, SubmitReceipt,
};
pub use particles::{Particle, ParticleRangeError, ParticleRanges, generate, generate_default};
pub use site::{Breakpoints, DeviceClass, Palette, ParticleCounts, SiteConfig};
pub use style::{ArtEffect, StyleDescriptor};
pub use submission::{
    LoggingSubmissionHandler, SharedSubmissionHandler, SubmissionError, SubmissionHandler,
};
