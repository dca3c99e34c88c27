//! End-to-end tests driving a `PopupInstance`.
mod common;
use common::{discount_node, optin_node, quiz_content, split_content};
use flexpop::form::validation::REQUIRED_MESSAGE;
use flexpop::form::{FormInfo, SubmissionState};
use flexpop::prelude::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

/// Counts calls per sink method.
#[derive(Default)]
struct CountingSink {
    optin: Vec<OptinPayload>,
    primary: usize,
    secondary: Vec<DiscountSecondaryPayload>,
}

impl SubmissionSink for CountingSink {
    fn optin_submit(&mut self, payload: &OptinPayload) {
        self.optin.push(payload.clone());
    }

    fn discount_primary_submit(&mut self, _payload: &BasePayload) {
        self.primary += 1;
    }

    fn discount_secondary_submit(&mut self, payload: &DiscountSecondaryPayload) {
        self.secondary.push(payload.clone());
    }
}

#[test]
fn test_empty_required_email_blocks_submission() {
    let mut popup = PopupInstance::builder(optin_node(), "session-1")
        .viewport_width(1400)
        .build();
    let mut sink = CountingSink::default();

    let outcome = popup.click("submit", &mut sink);
    let ClickOutcome::Rejected(errors) = outcome else {
        panic!("expected the submit to be rejected, got {:?}", outcome);
    };
    assert!(sink.optin.is_empty());
    assert_eq!(errors.len(), 1);
    assert_eq!(popup.form_state().form_errors.len(), 1);
    assert_eq!(popup.form_state().error("email"), Some(REQUIRED_MESSAGE));
}

#[test]
fn test_valid_form_submits_classified_fields() {
    let mut popup = PopupInstance::builder(optin_node(), "session-1")
        .viewport_width(1400)
        .build();
    popup.set_field("email", "visitor@example.com");
    popup.set_field("phone", "+1 555-123-4567");

    let mut sink = CountingSink::default();
    let outcome = popup.click("submit", &mut sink);
    assert!(matches!(outcome, ClickOutcome::Submitted(Submission::Optin(_))));
    assert_eq!(sink.optin.len(), 1);
    assert_eq!(
        sink.optin[0].form_info,
        vec![
            FormInfo::new("email", "visitor@example.com"),
            FormInfo::new("phone", "+1 555-123-4567"),
        ]
    );
    assert_eq!(sink.optin[0].base.org_id, "org-1");
    assert_eq!(popup.submission_state(), &SubmissionState::Submitted);
}

#[test]
fn test_secondary_discount_skips_validation() {
    let mut popup = PopupInstance::builder(discount_node(), "session-2").build();
    let mut sink = CountingSink::default();

    let outcome = popup.click("other", &mut sink);
    assert!(matches!(outcome, ClickOutcome::Submitted(_)));
    assert_eq!(sink.secondary.len(), 1);
    assert_eq!(sink.secondary[0].discount_info, json!({ "code": "X" }));
    assert!(popup.form_state().form_errors.is_empty());

    popup.click("claim", &mut sink);
    assert_eq!(sink.primary, 1);
    assert!(sink.optin.is_empty());
}

#[test]
fn test_dismiss_and_inert_clicks() {
    let mut popup = PopupInstance::builder(optin_node(), "session-3").build();
    let mut sink = CountingSink::default();
    assert_eq!(popup.click("no-thanks", &mut sink), ClickOutcome::Dismissed);
    assert_eq!(popup.click("headline", &mut sink), ClickOutcome::Inert);
    assert_eq!(popup.click("does-not-exist", &mut sink), ClickOutcome::Inert);
    assert!(sink.optin.is_empty());
    assert_eq!(popup.submission_state(), &SubmissionState::Idle);
}

#[test]
fn test_quiz_option_submits_answer() {
    let node = OptinFlowNode::new(5, "org-1", "quiz").with_content(quiz_content());
    let mut popup = PopupInstance::builder(node, "session-4").build();
    let mut sink = CountingSink::default();

    let outcome = popup.click("dry", &mut sink);
    assert!(matches!(outcome, ClickOutcome::Submitted(_)));
    assert_eq!(sink.optin[0].form_info, vec![FormInfo::quiz_answer("Dry skin")]);

    // Hidden options cannot be clicked.
    assert_eq!(popup.click("oily", &mut sink), ClickOutcome::Inert);
    assert_eq!(sink.optin.len(), 1);
}

#[test]
fn test_resize_changes_resolution() {
    let mut popup = PopupInstance::builder(optin_node(), "session-5")
        .viewport_width(1400)
        .build();
    assert_eq!(popup.breakpoint(), Breakpoint::Max2xl);

    let changes = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&changes);
    popup.on_breakpoint_change(SubscriberId(1), move |bp| log.borrow_mut().push(*bp));

    assert_eq!(popup.resize(375), Breakpoint::MaxSm);
    let tree = popup.resolve().unwrap();
    assert_eq!(tree.sections[0].order, Some(1));
    assert_eq!(
        tree.find_component("headline").unwrap().style["fontSize"],
        json!("20px")
    );
    assert_eq!(*changes.borrow(), vec![Breakpoint::MaxSm]);

    assert!(popup.unsubscribe(SubscriberId(1)));
    popup.resize(1400);
    assert_eq!(changes.borrow().len(), 1);
}

#[test]
fn test_override_pins_breakpoint() {
    let mut popup = PopupInstance::builder(optin_node(), "session-6")
        .viewport_width(1400)
        .override_breakpoint(Breakpoint::MaxSm)
        .preview_mode(true)
        .build();
    assert_eq!(popup.breakpoint(), Breakpoint::MaxSm);
    assert_eq!(popup.resize(2000), Breakpoint::MaxSm);
    assert_eq!(
        popup.container_style().unwrap(),
        common::bag(json!({ "width": "100vw", "height": "500px" }))
    );

    assert_eq!(popup.clear_breakpoint_override(), Breakpoint::Default);
}

#[test]
fn test_replace_content_keeps_form_values() {
    let mut popup = PopupInstance::builder(optin_node(), "session-7").build();
    popup.set_field("email", "kept@example.com");

    let versions = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&versions);
    popup.on_content_change(SubscriberId(2), move |snap| log.borrow_mut().push(snap.version));

    let before = popup.snapshot().unwrap();
    let mut edited = split_content();
    edited.sections.shift_remove("media");
    assert_eq!(popup.replace_content(edited), 2);

    assert_eq!(*versions.borrow(), vec![2]);
    assert_eq!(before.version, 1);
    assert_eq!(before.content.sections.len(), 2);
    assert_eq!(popup.content().unwrap().sections.len(), 1);
    assert_eq!(popup.form_state().value("email"), Some("kept@example.com"));
}

#[test]
fn test_node_without_content() {
    let node = OptinFlowNode::new(9, "org-1", "optin");
    let mut popup = PopupInstance::builder(node, "session-8").build();
    assert!(popup.resolve().is_none());
    assert!(popup.chrome().is_none());

    let mut sink = CountingSink::default();
    assert_eq!(popup.click("anything", &mut sink), ClickOutcome::Inert);

    // Nothing to validate, so a programmatic submit goes straight through.
    let outcome = popup.submit(SubmitTrigger::Default, &mut sink);
    assert!(outcome.is_submitted());
    assert!(sink.optin[0].form_info.is_empty());

    assert_eq!(popup.replace_content(quiz_content()), 1);
    assert!(popup.resolve().is_some());
}
