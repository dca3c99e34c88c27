use super::document::Component;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextProperties {
    pub content: Option<String>,
    pub font: Option<String>,
    pub action: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageProperties {
    pub src: Option<String>,
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonProperties {
    pub content: Option<String>,
    pub action: Option<String>,
    pub font: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputProperties {
    /// HTML input type: `text`, `email`, `tel`, ...
    pub input_type: Option<String>,
    pub placeholder: Option<String>,
    pub required: bool,
    /// Semantic field type, takes precedence over `input_type` when classifying.
    pub field_type: Option<String>,
    pub name: Option<String>,
    pub font: Option<String>,
}

impl InputProperties {
    /// `field_type`, else `input_type`, else `text`.
    pub fn effective_field_type(&self) -> &str {
        self.field_type
            .as_deref()
            .filter(|t| !t.is_empty())
            .or_else(|| self.input_type.as_deref().filter(|t| !t.is_empty()))
            .unwrap_or("text")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizOptionProperties {
    pub action: Option<String>,
    /// The answer text submitted when the option is picked.
    pub content: Option<String>,
    pub field_type: Option<String>,
    pub font: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountDisplayProperties {
    pub code: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomProperties {
    pub html: Option<String>,
}

/// Typed view of a component, one variant per known `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "properties", rename_all = "snake_case")]
pub enum ComponentVariant {
    Text(TextProperties),
    Image(ImageProperties),
    Button(ButtonProperties),
    Input(InputProperties),
    QuizOption(QuizOptionProperties),
    ProductCard(Map<String, Value>),
    DiscountDisplay(DiscountDisplayProperties),
    Divider,
    Spacer,
    Custom(CustomProperties),
    /// Any `type` this crate does not know. Rendered as a placeholder.
    Unknown { type_name: String },
}

impl ComponentVariant {
    pub(crate) fn from_component(component: &Component) -> Self {
        let props = &component.properties;
        match component.type_name.as_str() {
            "text" => Self::Text(parse_properties(component, props)),
            "image" => Self::Image(parse_properties(component, props)),
            "button" => Self::Button(parse_properties(component, props)),
            "input" => Self::Input(parse_properties(component, props)),
            "quiz_option" => Self::QuizOption(parse_properties(component, props)),
            "product_card" => Self::ProductCard(props.clone()),
            "discount_display" => Self::DiscountDisplay(parse_properties(component, props)),
            "divider" => Self::Divider,
            "spacer" => Self::Spacer,
            "custom" => Self::Custom(parse_properties(component, props)),
            other => {
                tracing::warn!(
                    "Component '{}' has unknown type '{}', rendering placeholder",
                    component.id,
                    other
                );
                Self::Unknown {
                    type_name: other.to_string(),
                }
            }
        }
    }

    /// The `type` tag this variant dispatches on.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Text(_) => "text",
            Self::Image(_) => "image",
            Self::Button(_) => "button",
            Self::Input(_) => "input",
            Self::QuizOption(_) => "quiz_option",
            Self::ProductCard(_) => "product_card",
            Self::DiscountDisplay(_) => "discount_display",
            Self::Divider => "divider",
            Self::Spacer => "spacer",
            Self::Custom(_) => "custom",
            Self::Unknown { type_name } => type_name,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown { .. })
    }
}

/// Reads typed properties, falling back to defaults when the author supplied values
/// of the wrong shape.
fn parse_properties<T>(component: &Component, props: &Map<String, Value>) -> T
where
    T: DeserializeOwned + Default,
{
    serde_json::from_value(Value::Object(props.clone())).unwrap_or_else(|e| {
        tracing::warn!(
            "Component '{}' has malformed properties, using defaults: {}",
            component.id,
            e
        );
        T::default()
    })
}
