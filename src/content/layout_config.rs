use crate::breakpoint::Breakpoint;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The ratio used when no split ratio is configured.
pub const DEFAULT_SPLIT_RATIO: &str = "50/50";

/// How sections are composed inside the popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// Sections in document order, no slots. Also used for unrecognized types.
    Default,
    /// Two sections side by side, stacking on mobile.
    Split,
    /// Sections in a single centered column.
    Stacked,
}

impl LayoutKind {
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "split" => LayoutKind::Split,
            "stacked" => LayoutKind::Stacked,
            _ => LayoutKind::Default,
        }
    }
}

/// Which side comes first when a split layout stacks on the smallest breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackDirection {
    LeftFirst,
    #[default]
    RightFirst,
}

/// A split ratio, either one `"L/R"` string for every breakpoint or a
/// breakpoint-keyed map with an optional `default` entry. Empty or `null`
/// entries count as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SplitRatioSpec {
    Uniform(String),
    Responsive(IndexMap<String, Option<String>>),
}

impl Default for SplitRatioSpec {
    fn default() -> Self {
        let mut map = IndexMap::new();
        map.insert(
            Breakpoint::Default.as_str().to_string(),
            Some(DEFAULT_SPLIT_RATIO.to_string()),
        );
        SplitRatioSpec::Responsive(map)
    }
}

impl SplitRatioSpec {
    /// `ratio[bp]`, then `ratio.default`, then `"50/50"`.
    pub fn ratio_for(&self, bp: Breakpoint) -> &str {
        match self {
            SplitRatioSpec::Uniform(ratio) if !ratio.is_empty() => ratio,
            SplitRatioSpec::Uniform(_) => DEFAULT_SPLIT_RATIO,
            SplitRatioSpec::Responsive(map) => {
                let entry = |key: &str| {
                    map.get(key)
                        .and_then(Option::as_deref)
                        .filter(|ratio| !ratio.is_empty())
                };
                entry(bp.as_str())
                    .or_else(|| entry(Breakpoint::Default.as_str()))
                    .unwrap_or(DEFAULT_SPLIT_RATIO)
            }
        }
    }
}

/// Typed view of a split layout's `custom_properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplitLayoutConfig {
    #[serde(default)]
    pub split_ratio: SplitRatioSpec,
    #[serde(default)]
    pub mobile_stack_direction: StackDirection,
    #[serde(default)]
    pub popup_config: PopupConfig,
}

impl SplitLayoutConfig {
    pub fn from_custom_properties(props: &Map<String, Value>) -> Self {
        let split_ratio = match props.get("split_ratio") {
            None | Some(Value::Null) => SplitRatioSpec::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed split_ratio, using 50/50: {}", e);
                SplitRatioSpec::default()
            }),
        };
        let mobile_stack_direction = match props.get("mobile_stack_direction") {
            None | Some(Value::Null) => StackDirection::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|_| {
                tracing::warn!(
                    "Unknown mobile_stack_direction {}, using right_first",
                    value
                );
                StackDirection::default()
            }),
        };
        Self {
            split_ratio,
            mobile_stack_direction,
            popup_config: PopupConfig::from_custom_properties(props),
        }
    }
}

/// Width and height of the popup container at one breakpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewportConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopupOverlayConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub box_shadow: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopupCloseButtonConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Milliseconds before the close button fades in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delay: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Percentage, 0 to 100.
    pub position: f64,
    pub color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default)]
    pub stops: Vec<GradientStop>,
}

/// Chrome settings for the popup container. Opaque to layout resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PopupConfig {
    /// Container size keyed by breakpoint name.
    #[serde(default)]
    pub responsive: IndexMap<String, ViewportConfig>,
    #[serde(default)]
    pub overlay: PopupOverlayConfig,
    #[serde(default)]
    pub close_button: PopupCloseButtonConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<GradientConfig>,
}

impl PopupConfig {
    /// Reads `custom_properties.popup_config`, returning an empty config when it is
    /// missing or malformed.
    pub fn from_custom_properties(props: &Map<String, Value>) -> Self {
        match props.get("popup_config") {
            None | Some(Value::Null) => PopupConfig::default(),
            Some(value) => serde_json::from_value(value.clone()).unwrap_or_else(|e| {
                tracing::warn!("Ignoring malformed popup_config: {}", e);
                PopupConfig::default()
            }),
        }
    }

    pub fn viewport(&self, bp: Breakpoint) -> Option<&ViewportConfig> {
        self.responsive.get(bp.as_str())
    }
}
