//! Common test utilities for building content documents and nodes.
use flexpop::prelude::*;
use serde_json::json;

/// A split popup: media on the left, an opt-in form on the right.
///
/// Ratio `60/40` by default and `30/70` at `max-sm`; stacks left first on mobile.
#[allow(dead_code)]
pub fn split_content_json() -> serde_json::Value {
    json!({
        "layout": {
            "type": "split",
            "slot_mapping": { "media": "left", "form": "right" },
            "custom_properties": {
                "split_ratio": { "default": "60/40", "max-sm": "30/70" },
                "mobile_stack_direction": "left_first",
                "popup_config": {
                    "responsive": {
                        "default": { "width": "800px", "height": "500px" },
                        "max-sm": { "width": "100vw" }
                    },
                    "gradient": {
                        "type": "linear",
                        "direction": "to right",
                        "stops": [
                            { "position": 0, "color": "#ff0000" },
                            { "position": 100, "color": "#0000ff" }
                        ]
                    }
                }
            }
        },
        "sections": {
            "media": {
                "id": "media",
                "name": "Media",
                "styles": { "default": { "padding": "0px" } },
                "components": [
                    {
                        "id": "hero",
                        "type": "image",
                        "properties": { "src": "https://cdn.example.com/hero.png" }
                    }
                ]
            },
            "form": {
                "id": "form",
                "name": "Form",
                "layout": "vertical",
                "components": [
                    {
                        "id": "headline",
                        "type": "text",
                        "styles": {
                            "default": { "fontSize": "32px", "color": "#111" },
                            "max-sm": { "fontSize": "20px" }
                        },
                        "properties": { "content": "Get 10% off" }
                    },
                    {
                        "id": "name",
                        "type": "input",
                        "properties": { "input_type": "text", "name": "name", "placeholder": "Your name" }
                    },
                    {
                        "id": "email",
                        "type": "input",
                        "properties": { "input_type": "email", "required": true, "placeholder": "Email" }
                    },
                    {
                        "id": "phone",
                        "type": "input",
                        "properties": { "input_type": "tel" }
                    },
                    {
                        "id": "submit",
                        "type": "button",
                        "properties": { "content": "Sign up", "action": "submit" }
                    },
                    {
                        "id": "no-thanks",
                        "type": "text",
                        "properties": { "content": "No thanks", "action": "close" }
                    }
                ]
            }
        }
    })
}

#[allow(dead_code)]
pub fn split_content() -> FlexibleContent {
    FlexibleContent::from_value(split_content_json()).unwrap()
}

/// A stacked discount popup with primary and secondary buttons and a required
/// email field that is never filled in.
#[allow(dead_code)]
pub fn discount_content() -> FlexibleContent {
    FlexibleContent::from_value(json!({
        "layout": { "type": "stacked" },
        "sections": {
            "main": {
                "id": "main",
                "name": "Main",
                "components": [
                    {
                        "id": "email",
                        "type": "input",
                        "properties": { "input_type": "email", "required": true }
                    },
                    {
                        "id": "claim",
                        "type": "button",
                        "properties": { "content": "Claim", "action": "primary_submit" }
                    },
                    {
                        "id": "other",
                        "type": "button",
                        "properties": { "content": "Other offer", "action": "secondary_submit" }
                    }
                ]
            }
        }
    }))
    .unwrap()
}

/// A quiz popup with two answer options, one hidden.
#[allow(dead_code)]
pub fn quiz_content() -> FlexibleContent {
    FlexibleContent::from_value(json!({
        "layout": { "type": "default" },
        "sections": {
            "quiz": {
                "id": "quiz",
                "name": "Quiz",
                "components": [
                    {
                        "id": "dry",
                        "type": "quiz_option",
                        "properties": { "content": "Dry skin", "field_type": "quiz" }
                    },
                    {
                        "id": "oily",
                        "type": "quiz_option",
                        "visible": false,
                        "properties": { "content": "Oily skin", "field_type": "quiz" }
                    }
                ]
            }
        }
    }))
    .unwrap()
}

/// An opt-in node carrying the split content.
#[allow(dead_code)]
pub fn optin_node() -> OptinFlowNode {
    OptinFlowNode::new(42, "org-1", "optin")
        .with_next_node(43)
        .with_content(split_content())
}

/// A discount node whose secondary button carries `{code: "X"}`.
#[allow(dead_code)]
pub fn discount_node() -> OptinFlowNode {
    let mut node = OptinFlowNode::from_json(
        r#"{
            "id": 7,
            "org_id": "org-1",
            "type": "discount",
            "discount": { "secondary_button": { "discount_info": { "code": "X" } } }
        }"#,
    )
    .unwrap();
    node.flexible_content = Some(discount_content());
    node
}

/// Builds a style bag from a JSON object literal.
#[allow(dead_code)]
pub fn bag(value: serde_json::Value) -> StyleBag {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}
