//! Form state, validation, field classification and submission payloads.

use indexmap::IndexMap;

pub mod classify;
pub mod payload;
pub mod submit;
pub mod validation;

pub use classify::{FormInfo, api_field_type, classify_field};
pub use payload::{BasePayload, DiscountSecondaryPayload, OptinPayload, Submission};
pub use submit::{
    FormPipeline, SubmissionSink, SubmissionState, SubmitContext, SubmitOutcome, SubmitTrigger,
    SubmitType,
};
pub use validation::{Validation, validate_form};

/// Raw field values keyed by component id, in entry order.
pub type FormData = IndexMap<String, String>;

/// Validation messages keyed by component id.
pub type FormErrors = IndexMap<String, String>;

/// Per-instance form values and their validation errors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub form_data: FormData,
    pub form_errors: FormErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a field value. A field keeps its original position when updated.
    pub fn set(&mut self, field_id: &str, value: &str) {
        self.form_data
            .insert(field_id.to_string(), value.to_string());
    }

    pub fn value(&self, field_id: &str) -> Option<&str> {
        self.form_data.get(field_id).map(String::as_str)
    }

    pub fn error(&self, field_id: &str) -> Option<&str> {
        self.form_errors.get(field_id).map(String::as_str)
    }
}
