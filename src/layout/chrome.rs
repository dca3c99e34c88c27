use crate::breakpoint::Breakpoint;
use crate::content::{GradientConfig, LayoutConfig, LayoutKind, PopupConfig};
use crate::style::StyleBag;
use itertools::Itertools;
use serde::Serialize;
use serde_json::Value;

const DEFAULT_BORDER_RADIUS: &str = "8px";
const DEFAULT_BOX_SHADOW: &str = "0px 1px 0px 0px rgba(255, 255, 255, 0.50) inset, 0px 4px 4px -1px rgba(0, 0, 0, 0.25), 0px 3px 8px -2px rgba(0, 0, 0, 0.20), 0px 8px 12px -3px rgba(0, 0, 0, 0.15), 0px 16px 20px -4px rgba(0, 0, 0, 0.10)";
const DEFAULT_CLOSE_POSITION: &str = "right";
const DEFAULT_CLOSE_COLOR: &str = "#FFFFFF";
const DEFAULT_CLOSE_DELAY_MS: u64 = 1000;
const DEFAULT_CLOSE_OPACITY: f64 = 0.5;

/// Resolved close button settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CloseButton {
    pub position: String,
    pub color: String,
    pub delay_ms: u64,
    pub opacity: f64,
}

/// The popup container chrome: size, background, frame and close button.
///
/// Values are passed through from the author's `popup_config`; the resolver only
/// picks the right entry per breakpoint and fills in defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupChrome {
    config: PopupConfig,
}

impl PopupChrome {
    pub fn new(config: PopupConfig) -> Self {
        Self { config }
    }

    /// Split and stacked layouts carry `custom_properties.popup_config`; the default
    /// layout has no chrome settings.
    pub fn from_layout(layout: &LayoutConfig) -> Self {
        let config = match layout.kind() {
            LayoutKind::Split | LayoutKind::Stacked => {
                PopupConfig::from_custom_properties(&layout.custom_properties)
            }
            LayoutKind::Default => PopupConfig::default(),
        };
        Self { config }
    }

    pub fn config(&self) -> &PopupConfig {
        &self.config
    }

    /// Container width and height.
    ///
    /// Outside preview mode (the editor canvas) the container fills its parent. In
    /// preview mode the `default` viewport is overlaid with the viewport of `bp`.
    pub fn container_style(&self, bp: Breakpoint, preview: bool) -> StyleBag {
        let mut style = StyleBag::new();
        if !preview {
            style.insert("width".to_string(), Value::from("100%"));
            style.insert("height".to_string(), Value::from("100%"));
            return style;
        }

        let base = self.config.viewport(Breakpoint::Default);
        let specific = (bp != Breakpoint::Default)
            .then(|| self.config.viewport(bp))
            .flatten();
        let width = specific
            .and_then(|v| v.width.as_ref())
            .or_else(|| base.and_then(|v| v.width.as_ref()));
        let height = specific
            .and_then(|v| v.height.as_ref())
            .or_else(|| base.and_then(|v| v.height.as_ref()));

        if let Some(width) = width {
            style.insert("width".to_string(), Value::from(width.as_str()));
        }
        if let Some(height) = height {
            style.insert("height".to_string(), Value::from(height.as_str()));
        }
        style
    }

    /// `backgroundImage` from the gradient, with a transparent color behind it, or a
    /// plain white background when there is no gradient.
    pub fn background_style(&self) -> StyleBag {
        let mut style = StyleBag::new();
        match self.config.gradient.as_ref().and_then(gradient_css) {
            Some(gradient) => {
                style.insert("backgroundImage".to_string(), Value::from(gradient));
                style.insert("backgroundColor".to_string(), Value::from("transparent"));
            }
            None => {
                style.insert("backgroundColor".to_string(), Value::from("white"));
            }
        }
        style
    }

    /// Border radius and shadow of the popup frame.
    pub fn frame_style(&self) -> StyleBag {
        let overlay = &self.config.overlay;
        let mut style = StyleBag::new();
        style.insert(
            "borderRadius".to_string(),
            Value::from(
                overlay
                    .border_radius
                    .as_deref()
                    .unwrap_or(DEFAULT_BORDER_RADIUS),
            ),
        );
        style.insert(
            "boxShadow".to_string(),
            Value::from(overlay.box_shadow.as_deref().unwrap_or(DEFAULT_BOX_SHADOW)),
        );
        style
    }

    pub fn close_button(&self) -> CloseButton {
        let cfg = &self.config.close_button;
        CloseButton {
            position: cfg
                .position
                .clone()
                .unwrap_or_else(|| DEFAULT_CLOSE_POSITION.to_string()),
            color: cfg
                .color
                .clone()
                .unwrap_or_else(|| DEFAULT_CLOSE_COLOR.to_string()),
            delay_ms: cfg.delay.unwrap_or(DEFAULT_CLOSE_DELAY_MS),
            // Zero counts as unset.
            opacity: cfg
                .opacity
                .filter(|o| *o > 0.0)
                .unwrap_or(DEFAULT_CLOSE_OPACITY),
        }
    }

    /// Preview-mode CSS sizing `.popup-container` at each configured breakpoint,
    /// widest first so narrower rules win in the cascade.
    pub fn media_query_css(&self) -> String {
        Breakpoint::THRESHOLDS
            .iter()
            .rev()
            .filter_map(|bp| {
                let viewport = self.config.viewport(*bp)?;
                let query = bp.media_query()?;
                Some(format!(
                    "{} {{\n  .popup-container {{\n    width: {} !important;\n    height: {} !important;\n    max-width: 100vw !important;\n    max-height: 100dvh !important;\n  }}\n}}",
                    query,
                    viewport.width.as_deref().unwrap_or("auto"),
                    viewport.height.as_deref().unwrap_or("auto"),
                ))
            })
            .join("\n")
    }
}

fn gradient_css(gradient: &GradientConfig) -> Option<String> {
    if gradient.stops.is_empty() {
        return None;
    }
    let stops = gradient
        .stops
        .iter()
        .map(|stop| format!("{} {}%", stop.color, stop.position))
        .join(", ");
    Some(format!(
        "{}-gradient({}, {})",
        gradient.kind.as_deref().unwrap_or("linear"),
        gradient.direction.as_deref().unwrap_or("to bottom"),
        stops
    ))
}
