use super::classify::{FormInfo, classify_field};
use super::payload::{BasePayload, DiscountSecondaryPayload, OptinPayload, Submission};
use super::validation::validate_form;
use super::{FormErrors, FormState};
use crate::content::{FlexibleContent, OptinFlowNode};
use serde::Serialize;
use serde_json::Value;

/// Which submission path a submit control takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitType {
    #[default]
    Default,
    DiscountPrimary,
    DiscountSecondary,
}

/// What started a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTrigger {
    /// A default submit control, or Enter inside an input.
    Default,
    DiscountPrimary,
    DiscountSecondary,
    /// A quiz option was picked.
    Quiz { answer: String },
}

impl From<SubmitType> for SubmitTrigger {
    fn from(submit_type: SubmitType) -> Self {
        match submit_type {
            SubmitType::Default => SubmitTrigger::Default,
            SubmitType::DiscountPrimary => SubmitTrigger::DiscountPrimary,
            SubmitType::DiscountSecondary => SubmitTrigger::DiscountSecondary,
        }
    }
}

/// Receives finished payloads. Delivery and its outcome are the sink's concern.
pub trait SubmissionSink {
    fn optin_submit(&mut self, payload: &OptinPayload);
    fn discount_primary_submit(&mut self, payload: &BasePayload);
    fn discount_secondary_submit(&mut self, payload: &DiscountSecondaryPayload);
}

/// Collects submissions in order.
impl SubmissionSink for Vec<Submission> {
    fn optin_submit(&mut self, payload: &OptinPayload) {
        self.push(Submission::Optin(payload.clone()));
    }

    fn discount_primary_submit(&mut self, payload: &BasePayload) {
        self.push(Submission::DiscountPrimary(payload.clone()));
    }

    fn discount_secondary_submit(&mut self, payload: &DiscountSecondaryPayload) {
        self.push(Submission::DiscountSecondary(payload.clone()));
    }
}

/// Where a popup instance is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Rejected(FormErrors),
    Accepted,
    Submitted,
}

/// The result of one submit attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(FormErrors),
    Submitted(Submission),
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted(_))
    }
}

/// Everything a submission reads besides the form values.
#[derive(Debug, Clone, Copy)]
pub struct SubmitContext<'a> {
    pub node: &'a OptinFlowNode,
    pub content: &'a FlexibleContent,
    pub session_id: &'a str,
}

/// Form values plus the submission state machine of one popup instance.
#[derive(Debug, Default)]
pub struct FormPipeline {
    form: FormState,
    state: SubmissionState,
}

impl FormPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn set_field(&mut self, field_id: &str, value: &str) {
        self.form.set(field_id, value);
    }

    /// Validates the current values and stores the resulting errors.
    pub fn validate(&mut self, content: &FlexibleContent) -> bool {
        let validation = validate_form(&self.form.form_data, content);
        self.form.form_errors = validation.errors;
        validation.is_valid
    }

    /// Runs one submission.
    ///
    /// Only the default form path validates; discount and quiz submits carry no
    /// free-text fields and go straight to the sink. A rejected submit leaves the
    /// errors in the form state and never reaches the sink.
    pub fn submit(
        &mut self,
        trigger: SubmitTrigger,
        ctx: SubmitContext<'_>,
        sink: &mut dyn SubmissionSink,
    ) -> SubmitOutcome {
        let base = BasePayload::for_node(ctx.node, ctx.session_id);

        let submission = match trigger {
            SubmitTrigger::Default => {
                self.state = SubmissionState::Validating;
                if !self.validate(ctx.content) {
                    let errors = self.form.form_errors.clone();
                    tracing::debug!("Submission rejected with {} error(s)", errors.len());
                    self.state = SubmissionState::Rejected(errors.clone());
                    return SubmitOutcome::Rejected(errors);
                }
                self.state = SubmissionState::Accepted;
                let form_info = self.classify_all(ctx.content);
                let payload = OptinPayload { base, form_info };
                sink.optin_submit(&payload);
                Submission::Optin(payload)
            }
            SubmitTrigger::DiscountPrimary => {
                self.state = SubmissionState::Accepted;
                sink.discount_primary_submit(&base);
                Submission::DiscountPrimary(base)
            }
            SubmitTrigger::DiscountSecondary => {
                self.state = SubmissionState::Accepted;
                let payload = DiscountSecondaryPayload {
                    base,
                    discount_info: ctx
                        .node
                        .secondary_discount_info()
                        .cloned()
                        .unwrap_or(Value::Null),
                };
                sink.discount_secondary_submit(&payload);
                Submission::DiscountSecondary(payload)
            }
            SubmitTrigger::Quiz { answer } => {
                self.state = SubmissionState::Accepted;
                let payload = OptinPayload {
                    base,
                    form_info: vec![FormInfo::quiz_answer(&answer)],
                };
                sink.optin_submit(&payload);
                Submission::Optin(payload)
            }
        };

        tracing::debug!(
            "Submitted node {} for session {}",
            ctx.node.id,
            ctx.session_id
        );
        self.state = SubmissionState::Submitted;
        SubmitOutcome::Submitted(submission)
    }

    /// Classifies every field in entry order, dropping fields with no component.
    fn classify_all(&self, content: &FlexibleContent) -> Vec<FormInfo> {
        self.form
            .form_data
            .iter()
            .filter_map(|(id, value)| classify_field(id, value, content))
            .collect()
    }
}
