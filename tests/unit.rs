//! Unit tests for the document model, errors, conversion and formatting.
mod common;
use common::{split_content, split_content_json};
use flexpop::content::{ComponentVariant, ContentStore, InputProperties};
use flexpop::data::FormSample;
use flexpop::error::{ContentConversionError, ContentError};
use flexpop::prelude::*;
use serde_json::json;
use std::cell::RefCell;
use std::rc::Rc;

#[test]
fn test_round_trip_preserves_unknown_keys() {
    let mut value = split_content_json();
    value["editor_version"] = json!(3);
    value["sections"]["form"]["background"] = json!("#fff");
    value["sections"]["form"]["components"][0]["locked"] = json!(true);
    value["sections"]["form"]["components"][0]["properties"]["animation"] = json!("fade");
    value["layout"]["custom_properties"]["gap"] = json!("12px");
    value["layout"]["grid"] = json!({ "columns": 2 });

    let content = FlexibleContent::from_value(value.clone()).unwrap();
    assert_eq!(content.extra["editor_version"], json!(3));

    let back: serde_json::Value = serde_json::from_str(&content.to_json().unwrap()).unwrap();
    assert_eq!(back["editor_version"], json!(3));
    assert_eq!(back["sections"]["form"]["background"], json!("#fff"));
    assert_eq!(back["sections"]["form"]["components"][0]["locked"], json!(true));
    assert_eq!(
        back["sections"]["form"]["components"][0]["properties"]["animation"],
        json!("fade")
    );
    assert_eq!(back["layout"]["custom_properties"]["gap"], json!("12px"));
    assert_eq!(back["layout"]["grid"], json!({ "columns": 2 }));
}

#[test]
fn test_section_order_is_declaration_order() {
    let content = split_content();
    let ids: Vec<_> = content.sections.keys().map(String::as_str).collect();
    assert_eq!(ids, vec!["media", "form"]);
}

#[test]
fn test_visible_defaults_to_true() {
    let content = split_content();
    assert!(content.components().all(|c| c.visible));
}

#[test]
fn test_malformed_properties_fall_back_to_defaults() {
    let content = FlexibleContent::from_value(json!({
        "layout": { "type": "default" },
        "sections": {
            "s": {
                "id": "s",
                "components": [
                    { "id": "i", "type": "input", "properties": { "required": "yes" } }
                ]
            }
        }
    }))
    .unwrap();
    let input = content.find_component("i").unwrap();
    assert_eq!(input.variant(), ComponentVariant::Input(InputProperties::default()));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let err = FlexibleContent::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ContentError::JsonParseError(_)));
    assert!(err.to_string().starts_with("Failed to parse content JSON"));

    let err = FlexibleContent::from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }));
    assert!(err.to_string().contains("/definitely/not/here.json"));
}

#[test]
fn test_into_content_rejects_duplicate_ids() {
    let mut content = split_content();
    let dup = content.sections["media"].components[0].clone();
    content.sections["form"].components.push(dup);

    let err = content.into_content().unwrap_err();
    assert!(matches!(
        err,
        ContentConversionError::DuplicateComponent { ref section_id, ref component_id }
            if section_id == "form" && component_id == "hero"
    ));
    assert!(split_content().into_content().is_ok());
}

#[test]
fn test_content_store_versions_and_snapshots() {
    let mut store = ContentStore::new(split_content());
    assert_eq!(store.version(), 1);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    store.subscribe(SubscriberId(1), move |snap| log.borrow_mut().push(snap.version));
    let log = Rc::clone(&seen);
    store.subscribe(SubscriberId(1), move |snap| log.borrow_mut().push(snap.version * 10));
    assert_eq!(store.subscriber_count(), 1);

    let old = store.snapshot();
    assert_eq!(store.replace(common::quiz_content()), 2);
    assert_eq!(*seen.borrow(), vec![20]);
    assert!(old.content.sections.contains_key("media"));
    assert!(store.content().sections.contains_key("quiz"));

    assert!(store.unsubscribe(SubscriberId(1)));
    store.replace(split_content());
    assert_eq!(store.version(), 3);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_tree_formatter_output() {
    let content = split_content();
    let tree = ContentWalker::new(&content, Breakpoint::MaxSm, "optin").resolve();
    let text = TreeFormatter::format_tree(&tree);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "@max-sm split 30/70 column");
    assert_eq!(lines[1], "[left] media \"Media\" {padding: 0px, flex: 30 1 0%}");
    assert_eq!(lines[2], "  image hero");
    assert!(lines.contains(&"  button submit -> submit"));
    assert!(lines.contains(&"  text no-thanks -> close"));
    assert!(lines.contains(&"  text headline {fontSize: 20px, color: #111}"));
}

#[test]
fn test_form_sample_loading() {
    let sample = FormSample::from_json(r#"{ "email": "a@b.co", "name": "Ada" }"#).unwrap();
    let pairs: Vec<_> = sample.iter().collect();
    assert_eq!(pairs, vec![("email", "a@b.co"), ("name", "Ada")]);
    assert!(FormSample::from_json("[1, 2]").is_err());
}

#[test]
fn test_node_parsing() {
    let node = OptinFlowNode::from_json(
        r#"{ "id": 3, "org_id": "o", "type": "optin", "flow_id": 12 }"#,
    )
    .unwrap();
    assert_eq!(node.node_type, "optin");
    assert!(node.flexible_content.is_none());
    assert!(node.secondary_discount_info().is_none());
    assert_eq!(node.extra["flow_id"], json!(12));
}
