use super::document::FlexibleContent;
use crate::error::ContentConversionError;

/// A trait for custom authoring formats that can be converted into a `FlexibleContent`.
///
/// The resolver only understands the canonical document model. Editors that store
/// popups in their own shape implement this trait to provide the translation layer.
///
/// # Example
///
/// ```rust,no_run
/// use flexpop::prelude::*;
/// use flexpop::error::ContentConversionError;
///
/// struct Banner { headline: String }
///
/// impl IntoContent for Banner {
///     fn into_content(self) -> std::result::Result<FlexibleContent, ContentConversionError> {
///         let json = serde_json::json!({
///             "layout": { "type": "stacked" },
///             "sections": {
///                 "main": {
///                     "id": "main",
///                     "name": "Main",
///                     "components": [
///                         { "id": "headline", "type": "text",
///                           "properties": { "content": self.headline } }
///                     ]
///                 }
///             }
///         });
///         serde_json::from_value(json)
///             .map_err(|e| ContentConversionError::ValidationError(e.to_string()))
///     }
/// }
/// ```
pub trait IntoContent {
    /// Consumes the object and converts it into a content document.
    fn into_content(self) -> Result<FlexibleContent, ContentConversionError>;
}

impl IntoContent for FlexibleContent {
    fn into_content(self) -> Result<FlexibleContent, ContentConversionError> {
        if let Some((section, component)) = first_duplicate(&self) {
            return Err(ContentConversionError::DuplicateComponent {
                section_id: section.to_string(),
                component_id: component.to_string(),
            });
        }
        Ok(self)
    }
}

/// The first component whose id was already used earlier in the document.
fn first_duplicate(content: &FlexibleContent) -> Option<(&str, &str)> {
    let mut seen = ahash::AHashSet::new();
    content.sections.values().find_map(|section| {
        section
            .components
            .iter()
            .find(|c| !seen.insert(c.id.as_str()))
            .map(|c| (section.id.as_str(), c.id.as_str()))
    })
}
