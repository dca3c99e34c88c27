use super::component::ComponentVariant;
use super::layout_config::{LayoutKind, SplitLayoutConfig};
use crate::error::ContentError;
use crate::style::StyleMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;

/// The root content document of a popup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlexibleContent {
    pub layout: LayoutConfig,
    /// Sections in document declaration order.
    pub sections: IndexMap<String, Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlexibleContent {
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        Ok(serde_json::from_value(value)?)
    }

    /// Loads a content document from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn to_json(&self) -> Result<String, ContentError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Every component of every section, in section then render order.
    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.sections.values().flat_map(|s| s.components.iter())
    }

    pub fn find_component(&self, id: &str) -> Option<&Component> {
        self.components().find(|c| c.id == id)
    }
}

/// A named group of components rendered together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub styles: StyleMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// How a section arranges its components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionArrangement {
    Vertical,
    Horizontal,
    Grid,
}

impl Section {
    /// Unknown or missing arrangements fall back to `Vertical`.
    pub fn arrangement(&self) -> SectionArrangement {
        match self.layout.as_deref() {
            Some("horizontal") => SectionArrangement::Horizontal,
            Some("grid") => SectionArrangement::Grid,
            Some("vertical") | None => SectionArrangement::Vertical,
            Some(other) => {
                tracing::warn!(
                    "Section '{}' has unknown layout '{}', using vertical",
                    self.id,
                    other
                );
                SectionArrangement::Vertical
            }
        }
    }
}

fn default_visible() -> bool {
    true
}

/// A single renderable element of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default, skip_serializing_if = "StyleMap::is_empty")]
    pub styles: StyleMap,
    #[serde(default)]
    pub properties: Map<String, Value>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Component {
    /// The typed interpretation of this component, keyed by its `type`.
    pub fn variant(&self) -> ComponentVariant {
        ComponentVariant::from_component(self)
    }

    /// A string property, if present and a string.
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    /// The click action declared in `properties.action`.
    pub fn action(&self) -> Option<&str> {
        self.property_str("action").filter(|a| !a.is_empty())
    }
}

/// Describes how sections are arranged inside the popup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(rename = "type")]
    pub type_name: String,
    /// Maps section id to slot name (`left` or `right`), in declaration order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_mapping: Option<IndexMap<String, String>>,
    #[serde(default)]
    pub custom_properties: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LayoutConfig {
    pub fn kind(&self) -> LayoutKind {
        LayoutKind::from_type_name(&self.type_name)
    }

    /// The split configuration carried in `custom_properties`, with defaults for
    /// anything missing or malformed.
    pub fn split_config(&self) -> SplitLayoutConfig {
        SplitLayoutConfig::from_custom_properties(&self.custom_properties)
    }
}
