use thiserror::Error;

/// Errors that can occur while loading a content document.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to parse content JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Could not read content file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Content conversion failed: {0}")]
    Conversion(#[from] ContentConversionError),
}

/// Returned when a string does not name one of the known breakpoints.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown breakpoint '{0}', expected one of: default, max-sm, max-md, max-lg, max-xl, max-2xl")]
pub struct BreakpointParseError(pub String);

/// Errors that can occur when converting a custom authoring format into a `FlexibleContent`.
#[derive(Error, Debug, Clone)]
pub enum ContentConversionError {
    #[error("Invalid custom data: {0}")]
    ValidationError(String),

    #[error(
        "Component '{component_id}' in section '{section_id}' reuses an id already present in the document"
    )]
    DuplicateComponent {
        section_id: String,
        component_id: String,
    },
}
