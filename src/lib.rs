//! # Flexpop - Responsive Popup Resolution Engine
//!
//! **Flexpop** turns an authored popup content document into everything a renderer
//! needs at one viewport size: the active breakpoint, the cascaded style of every
//! section and component, which section fills which side of a split layout and in
//! what order, the popup chrome, and what each click should do. It also owns the
//! popup's form: validation, field classification and submission payloads.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic. It operates on a canonical content document,
//! `FlexibleContent`. The primary workflow is:
//!
//! 1.  **Load Your Content**: Parse an opt-in node (`OptinFlowNode::from_json`) or a bare
//!     `FlexibleContent`. Editors with their own format implement `IntoContent`.
//! 2.  **Create an Instance**: Use `PopupInstance::builder` with the node, a session id and
//!     either a viewport width or a forced breakpoint.
//! 3.  **Resolve**: `PopupInstance::resolve` walks the document at the current breakpoint and
//!     returns a `ResolvedTree`. Call it again after `resize` or `replace_content`.
//! 4.  **Interact**: Feed field values with `set_field` and clicks with `click`. Submissions
//!     are handed to a `SubmissionSink` you provide.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flexpop::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let content = FlexibleContent::from_json(r#"{
//!         "layout": {
//!             "type": "split",
//!             "slot_mapping": { "media": "left", "form": "right" },
//!             "custom_properties": { "split_ratio": { "default": "60/40" } }
//!         },
//!         "sections": {
//!             "media": { "id": "media", "name": "Media", "components": [] },
//!             "form": {
//!                 "id": "form",
//!                 "name": "Form",
//!                 "components": [
//!                     { "id": "email", "type": "input",
//!                       "properties": { "input_type": "email", "required": true } },
//!                     { "id": "go", "type": "button",
//!                       "properties": { "content": "Join", "action": "submit" } }
//!                 ]
//!             }
//!         }
//!     }"#)?;
//!
//!     let node = OptinFlowNode::new(7, "org-1", "optin").with_content(content);
//!     let mut popup = PopupInstance::builder(node, "session-1")
//!         .viewport_width(1200)
//!         .build();
//!
//!     if let Some(tree) = popup.resolve() {
//!         print!("{}", TreeFormatter::format_tree(&tree));
//!     }
//!
//!     popup.set_field("email", "visitor@example.com");
//!     let mut sent: Vec<Submission> = Vec::new();
//!     match popup.click("go", &mut sent) {
//!         ClickOutcome::Submitted(_) => println!("-> Sent {} payload(s)", sent.len()),
//!         ClickOutcome::Rejected(errors) => println!("-> Fix: {:?}", errors),
//!         other => println!("-> {:?}", other),
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod breakpoint;
pub mod content;
pub mod data;
pub mod error;
pub mod form;
pub mod layout;
pub mod prelude;
pub mod session;
pub mod style;
pub mod subscription;
pub mod trace;
pub mod walker;
