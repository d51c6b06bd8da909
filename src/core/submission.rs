//! Form submission handlers
//!
//! The page hands submitted form snapshots to a [`SubmissionHandler`]. The
//! default handler only records the payload in the log; nothing is sent
//! anywhere. Handlers are fire-and-forget: the form shows its success
//! feedback before the handler reports back.

use std::sync::Arc;

use crate::core::form::{ContactForm, PlatformForm};

/// Submission handler error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmissionError {
    #[error("Submission rejected: {0}")]
    Rejected(String),

    #[error("Payload could not be encoded: {0}")]
    Encoding(String),
}

impl From<serde_json::Error> for SubmissionError {
    fn from(err: serde_json::Error) -> Self {
        SubmissionError::Encoding(err.to_string())
    }
}

/// Receiver for submitted forms
pub trait SubmissionHandler: Send + Sync {
    fn submit_contact(&self, form: ContactForm) -> Result<(), SubmissionError>;

    fn submit_platform(&self, form: PlatformForm) -> Result<(), SubmissionError>;
}

/// Shared handler, cheap to clone into event closures
pub type SharedSubmissionHandler = Arc<dyn SubmissionHandler>;

/// Handler that logs each payload as JSON and accepts it
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmissionHandler;

impl SubmissionHandler for LoggingSubmissionHandler {
    fn submit_contact(&self, form: ContactForm) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(&form)?;
        tracing::info!(form = "contact", %payload, "form submitted");
        Ok(())
    }

    fn submit_platform(&self, form: PlatformForm) -> Result<(), SubmissionError> {
        let payload = serde_json::to_string(&form)?;
        tracing::info!(form = "platform", %payload, "platform submitted");
        Ok(())
    }
}

/// Hand a contact payload to `handler`, logging a failure instead of returning it
pub fn dispatch_contact(handler: &dyn SubmissionHandler, form: ContactForm) {
    if let Err(err) = handler.submit_contact(form) {
        tracing::warn!(error = %err, "contact submission failed");
    }
}

/// Hand a platform payload to `handler`, logging a failure instead of returning it
pub fn dispatch_platform(handler: &dyn SubmissionHandler, form: PlatformForm) {
    if let Err(err) = handler.submit_platform(form) {
        tracing::warn!(error = %err, "platform submission failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording {
        contacts: Mutex<Vec<ContactForm>>,
        platforms: Mutex<Vec<PlatformForm>>,
        reject: bool,
    }

    impl SubmissionHandler for Recording {
        fn submit_contact(&self, form: ContactForm) -> Result<(), SubmissionError> {
            self.contacts.lock().unwrap().push(form);
            if self.reject {
                return Err(SubmissionError::Rejected("offline".to_string()));
            }
            Ok(())
        }

        fn submit_platform(&self, form: PlatformForm) -> Result<(), SubmissionError> {
            self.platforms.lock().unwrap().push(form);
            Ok(())
        }
    }

    fn contact() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    }

    #[test]
    fn test_logging_handler_accepts_everything() {
        let handler = LoggingSubmissionHandler;
        assert!(handler.submit_contact(contact()).is_ok());
        assert!(
            handler
                .submit_platform(PlatformForm {
                    name: "PixelMasters".to_string(),
                    url: "https://pixel.example".to_string(),
                    description: "Neural photo filters".to_string(),
                })
                .is_ok()
        );
    }

    #[test]
    fn test_dispatch_forwards_payload() {
        let handler = Recording::default();
        dispatch_contact(&handler, contact());
        assert_eq!(handler.contacts.lock().unwrap().as_slice(), &[contact()]);
        assert!(handler.platforms.lock().unwrap().is_empty());
    }

    #[test]
    fn test_dispatch_swallows_rejection() {
        let handler = Recording {
            reject: true,
            ..Default::default()
        };
        // Must not panic or propagate
        dispatch_contact(&handler, contact());
        assert_eq!(handler.contacts.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_shared_handler_is_object_safe() {
        let shared: SharedSubmissionHandler = Arc::new(LoggingSubmissionHandler);
        dispatch_contact(shared.as_ref(), contact());
    }

    #[test]
    fn test_error_display() {
        let err = SubmissionError::Rejected("offline".to_string());
        assert_eq!(err.to_string(), "Submission rejected: offline");
    }
}
