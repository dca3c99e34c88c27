use crate::content::FlexibleContent;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// One typed entry of an opt-in payload's `form_info`.
///
/// Serializes as a self-describing pair, `{"type": kind, key: value}`, e.g.
/// `{"type": "phone", "phone": "+1 555-123-4567"}` or
/// `{"type": "quiz", "quiz_answer": "Dry skin"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInfo {
    pub kind: String,
    pub key: String,
    pub value: String,
}

impl FormInfo {
    /// An entry whose value key equals its type.
    pub fn new(kind: &str, value: &str) -> Self {
        Self {
            kind: kind.to_string(),
            key: kind.to_string(),
            value: value.to_string(),
        }
    }

    /// The single entry sent when a quiz option is picked.
    pub fn quiz_answer(answer: &str) -> Self {
        Self {
            kind: "quiz".to_string(),
            key: "quiz_answer".to_string(),
            value: answer.to_string(),
        }
    }
}

impl Serialize for FormInfo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.key == "type" {
            // A value keyed `type` replaces the tag.
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("type", &self.value)?;
            return map.end();
        }
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", &self.kind)?;
        map.serialize_entry(&self.key, &self.value)?;
        map.end()
    }
}

/// Maps an authored field type to the type name the submission API expects.
///
/// `email` and `quiz` pass through, `tel` becomes `phone`, and a plain `text` field
/// becomes `name` only when one of its `name`, `field_type` or `input_type`
/// properties is literally `"name"`. Every other type passes through unchanged.
pub fn api_field_type<'a>(
    field_type: &'a str,
    name: Option<&str>,
    declared_field_type: Option<&str>,
    input_type: Option<&str>,
) -> &'a str {
    match field_type {
        "email" => "email",
        "tel" => "phone",
        "quiz" => "quiz",
        "text"
            if [name, declared_field_type, input_type]
                .into_iter()
                .any(|p| p == Some("name")) =>
        {
            "name"
        }
        other => other,
    }
}

/// Classifies one raw field value into a typed `FormInfo`.
///
/// The field is matched to the component with the same id. Its type is read from
/// `field_type`, else `input_type`, else defaults to `text`. Returns `None` when no
/// component has that id; such fields are left out of the payload.
pub fn classify_field(field_id: &str, value: &str, content: &FlexibleContent) -> Option<FormInfo> {
    let Some(component) = content.find_component(field_id) else {
        tracing::debug!("No component matches form field '{}', omitting it", field_id);
        return None;
    };

    let declared_field_type = component.property_str("field_type");
    let input_type = component.property_str("input_type");
    let field_type = declared_field_type
        .filter(|t| !t.is_empty())
        .or_else(|| input_type.filter(|t| !t.is_empty()))
        .unwrap_or("text");

    let api_type = api_field_type(
        field_type,
        component.property_str("name"),
        declared_field_type,
        input_type,
    );
    Some(FormInfo::new(api_type, value))
}
