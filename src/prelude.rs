//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flexpop crate.
//! Import this module to get access to the core functionality without having to import
//! each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use flexpop::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let node_json = std::fs::read_to_string("path/to/node.json")?;
//! let node = OptinFlowNode::from_json(&node_json)?;
//!
//! let mut popup = PopupInstance::builder(node, "session-1")
//!     .viewport_width(390)
//!     .build();
//!
//! if let Some(tree) = popup.resolve() {
//!     println!("{}", TreeFormatter::format_tree(&tree));
//! }
//!
//! popup.set_field("email", "a@b.co");
//! let mut sent: Vec<Submission> = Vec::new();
//! let outcome = popup.click("submit-button", &mut sent);
//! println!("Click outcome: {:?}", outcome);
//! # Ok(())
//! # }
//! ```

// Breakpoints and styles
pub use crate::breakpoint::{Breakpoint, BreakpointResolver, BreakpointSignal};
pub use crate::style::{StyleBag, StyleMap, resolve_styles};

// Content model
pub use crate::content::{
    Component, ComponentVariant, ContentStore, FlexibleContent, IntoContent, LayoutConfig,
    LayoutKind, OptinFlowNode, Section,
};

// Layout and rendering
pub use crate::layout::{PopupChrome, Slot, SplitLayoutResolver};
pub use crate::walker::{
    ClickAction, ContentWalker, RenderVisitor, ResolvedComponent, ResolvedLayout,
    ResolvedSection, ResolvedTree,
};

// Forms and submission
pub use crate::form::{
    BasePayload, DiscountSecondaryPayload, FormInfo, FormState, OptinPayload, Submission,
    SubmissionSink, SubmitOutcome, SubmitTrigger, SubmitType,
};
pub use crate::session::{ClickOutcome, PopupInstance};
pub use crate::subscription::SubscriberId;

// Error types
pub use crate::error::{BreakpointParseError, ContentConversionError, ContentError};

// Trace formatting
pub use crate::trace::TreeFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
