//! Common reusable UI components
//!
//! Form fields, feedback banners and the dialog shell shared by the
//! landing page sections.

pub mod form;
pub mod message;
pub mod modal;

pub use form::{BoundField, FormField, TextAreaField, bind_field};
pub use message::SuccessMessage;
pub use modal::BaseModal;
