use super::classify::FormInfo;
use crate::content::OptinFlowNode;
use serde::Serialize;
use serde_json::Value;

/// Fields shared by every submission payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasePayload {
    pub org_id: String,
    pub session_id: String,
    pub node_id: i64,
    pub node_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_node_id: Option<i64>,
}

impl BasePayload {
    pub fn for_node(node: &OptinFlowNode, session_id: &str) -> Self {
        Self {
            org_id: node.org_id.clone(),
            session_id: session_id.to_string(),
            node_id: node.id,
            node_type: node.node_type.clone(),
            next_node_id: node.next_node_id,
        }
    }
}

/// Sent for default form submits and quiz answers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptinPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    pub form_info: Vec<FormInfo>,
}

/// Sent when the secondary discount button is used.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountSecondaryPayload {
    #[serde(flatten)]
    pub base: BasePayload,
    /// Copied verbatim from `discount.secondary_button.discount_info`.
    pub discount_info: Value,
}

/// A payload handed to a submission sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum Submission {
    Optin(OptinPayload),
    DiscountPrimary(BasePayload),
    DiscountSecondary(DiscountSecondaryPayload),
}

impl Submission {
    pub fn base(&self) -> &BasePayload {
        match self {
            Submission::Optin(p) => &p.base,
            Submission::DiscountPrimary(p) => p,
            Submission::DiscountSecondary(p) => &p.base,
        }
    }
}
