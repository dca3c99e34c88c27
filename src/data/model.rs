use crate::error::ContentError;
use crate::form::FormData;
use serde::{Deserialize, Serialize};
use std::fs;

/// Field values to type into a popup, matching a flat `{"component_id": "value"}`
/// JSON object.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct FormSample {
    pub values: FormData,
}

impl FormSample {
    /// Load sample values from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ContentError> {
        let content = fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_string(),
            source,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Field ids and values in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
