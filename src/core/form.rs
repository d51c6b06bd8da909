//! Ephemeral form buffers
//!
//! Provides:
//! - FormSchema: the fixed, ordered field set of a form
//! - FormBuffer: per-view field values, validation, submit and the
//!   "submitted" feedback flag
//! - DismissTicket: guard that keeps a stale auto-dismiss timer from
//!   clearing the flag of a later submit
//! - ContactForm / PlatformForm: typed snapshots handed to the submission
//!   handler
//!
//! The buffer never schedules anything itself. A caller that shows submit
//! feedback starts a timer with the ticket from [`SubmitReceipt`] and calls
//! [`FormBuffer::expire`] when it fires.

use serde::Serialize;
use std::collections::BTreeSet;

/// Declared field set of a form; every field is required
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormSchema {
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl FormSchema {
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains(&field)
    }

    fn position(&self, field: &str) -> Option<usize> {
        self.fields.iter().position(|f| *f == field)
    }
}

/// Contact section form
pub const CONTACT_FORM: FormSchema = FormSchema {
    name: "contact",
    fields: &["name", "email", "message"],
};

/// "Submit your platform" dialog in the platform showcase
pub const PLATFORM_FORM: FormSchema = FormSchema {
    name: "platform",
    fields: &["name", "url", "description"],
};

/// Form buffer error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Unknown field `{field}` for form `{form}`")]
    InvalidField { form: &'static str, field: String },

    #[error("Required fields are empty: {}", join(.0))]
    Validation(BTreeSet<&'static str>),

    #[error("Snapshot of form `{found}` cannot be read as `{expected}`")]
    SchemaMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

fn join(fields: &BTreeSet<&'static str>) -> String {
    fields.iter().copied().collect::<Vec<_>>().join(", ")
}

impl FormError {
    /// Empty required fields, if this is a validation failure
    pub fn missing_fields(&self) -> Option<&BTreeSet<&'static str>> {
        match self {
            FormError::Validation(missing) => Some(missing),
            _ => None,
        }
    }
}

/// Identifies the submit that scheduled an auto-dismiss timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DismissTicket(u64);

/// Copy of a form's values at submit time, in declared field order
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub form: &'static str,
    pub fields: Vec<(&'static str, String)>,
}

impl FormSnapshot {
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value.as_str())
    }

    fn take(&mut self, field: &str) -> String {
        self.fields
            .iter_mut()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| std::mem::take(value))
            .unwrap_or_default()
    }
}

/// Result of a successful submit
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitReceipt {
    pub snapshot: FormSnapshot,
    /// Pass to [`FormBuffer::expire`] when the auto-dismiss timer fires
    pub ticket: DismissTicket,
}

/// Field values of one form instance plus its submit feedback flag
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormBuffer {
    schema: FormSchema,
    values: Vec<String>,
    submitted: bool,
    generation: u64,
}

impl FormBuffer {
    /// Create a buffer with every declared field empty
    pub fn new(schema: FormSchema) -> Self {
        Self {
            schema,
            values: vec![String::new(); schema.fields.len()],
            submitted: false,
            generation: 0,
        }
    }

    /// Replace the value of one declared field
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) -> Result<(), FormError> {
        let Some(index) = self.schema.position(name) else {
            tracing::error!(form = self.schema.name, field = name, "write to undeclared form field");
            return Err(FormError::InvalidField {
                form: self.schema.name,
                field: name.to_string(),
            });
        };
        self.values[index] = value.into();
        Ok(())
    }

    /// Current value of a declared field
    pub fn field(&self, name: &str) -> Option<&str> {
        self.schema
            .position(name)
            .map(|index| self.values[index].as_str())
    }

    /// Copy of the current values
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            form: self.schema.name,
            fields: self
                .schema
                .fields
                .iter()
                .copied()
                .zip(self.values.iter().cloned())
                .collect(),
        }
    }

    /// Names of required fields that are still empty; empty set means valid
    pub fn validate(&self) -> BTreeSet<&'static str> {
        self.schema
            .fields
            .iter()
            .zip(&self.values)
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect()
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Capture the values, clear the buffer and raise the submitted flag
    ///
    /// Refuses with [`FormError::Validation`] while a required field is
    /// empty; entered values are kept in that case. Each successful submit
    /// invalidates the ticket of any earlier one.
    pub fn submit(&mut self) -> Result<SubmitReceipt, FormError> {
        let missing = self.validate();
        if !missing.is_empty() {
            tracing::debug!(form = self.schema.name, missing = %join(&missing), "submit blocked");
            return Err(FormError::Validation(missing));
        }

        let snapshot = self.snapshot();
        self.reset();
        self.submitted = true;
        self.generation = self.generation.wrapping_add(1);

        tracing::debug!(form = self.schema.name, "form submitted");
        Ok(SubmitReceipt {
            snapshot,
            ticket: DismissTicket(self.generation),
        })
    }

    /// Hide the submit feedback now
    pub fn dismiss(&mut self) {
        self.submitted = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Auto-dismiss timer callback
    ///
    /// Clears the flag only when `ticket` belongs to the latest submit and
    /// nothing dismissed it since. Returns `true` when the flag changed.
    pub fn expire(&mut self, ticket: DismissTicket) -> bool {
        if self.submitted && ticket.0 == self.generation {
            self.submitted = false;
            true
        } else {
            false
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Clear every value; the submitted flag is left as is
    pub fn reset(&mut self) {
        self.values.iter_mut().for_each(String::clear);
    }
}

/// Payload of the contact form
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl TryFrom<FormSnapshot> for ContactForm {
    type Error = FormError;

    fn try_from(mut snapshot: FormSnapshot) -> Result<Self, Self::Error> {
        if snapshot.form != CONTACT_FORM.name {
            return Err(FormError::SchemaMismatch {
                expected: CONTACT_FORM.name,
                found: snapshot.form,
            });
        }
        Ok(Self {
            name: snapshot.take("name"),
            email: snapshot.take("email"),
            message: snapshot.take("message"),
        })
    }
}

/// Payload of the platform submission dialog
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlatformForm {
    pub name: String,
    pub url: String,
    pub description: String,
}

impl TryFrom<FormSnapshot> for PlatformForm {
    type Error = FormError;

    fn try_from(mut snapshot: FormSnapshot) -> Result<Self, Self::Error> {
        if snapshot.form != PLATFORM_FORM.name {
            return Err(FormError::SchemaMismatch {
                expected: PLATFORM_FORM.name,
                found: snapshot.form,
            });
        }
        Ok(Self {
            name: snapshot.take("name"),
            url: snapshot.take("url"),
            description: snapshot.take("description"),
        })
    }
}
