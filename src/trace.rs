//! Human-readable dumps of resolved render trees.

mod formatter;

pub use formatter::TreeFormatter;
