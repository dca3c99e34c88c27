//! Sample form input for driving a popup outside a browser.

mod model;

pub use model::FormSample;
