//! The popup content document model.
//!
//! These types mirror the authored JSON closely so documents survive a round trip
//! through an editor unchanged: `type` fields stay raw strings and every object keeps
//! the keys it does not know in a flattened `extra` map. Typed interpretation
//! (`LayoutKind`, `ComponentVariant`, `SplitLayoutConfig`) happens on demand.

pub mod component;
pub mod conversion;
pub mod document;
pub mod layout_config;
pub mod node;
pub mod store;

pub use component::*;
pub use conversion::*;
pub use document::*;
pub use layout_config::*;
pub use node::*;
pub use store::*;
