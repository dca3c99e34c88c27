use super::document::FlexibleContent;
use crate::error::ContentError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opt-in flow node: the host-side record a popup is rendered for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptinFlowNode {
    pub id: i64,
    pub org_id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_node_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flexible_content: Option<FlexibleContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OptinFlowNode {
    pub fn new(id: i64, org_id: &str, node_type: &str) -> Self {
        Self {
            id,
            org_id: org_id.to_string(),
            node_type: node_type.to_string(),
            next_node_id: None,
            flexible_content: None,
            discount: None,
            extra: Map::new(),
        }
    }

    pub fn with_content(mut self, content: FlexibleContent) -> Self {
        self.flexible_content = Some(content);
        self
    }

    pub fn with_next_node(mut self, next_node_id: i64) -> Self {
        self.next_node_id = Some(next_node_id);
        self
    }

    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// `discount.secondary_button.discount_info`, passed through untouched.
    pub fn secondary_discount_info(&self) -> Option<&Value> {
        self.discount
            .as_ref()
            .and_then(|d| d.secondary_button.as_ref())
            .and_then(|b| b.discount_info.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button: Option<DiscountButtonConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiscountButtonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_info: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
