//! Split-layout slot assignment, ordering and flex ratios.

use crate::breakpoint::Breakpoint;
use crate::content::{
    DEFAULT_SPLIT_RATIO, LayoutConfig, LayoutKind, Section, SplitLayoutConfig, StackDirection,
};
use crate::style::StyleBag;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub mod chrome;

pub use chrome::{CloseButton, PopupChrome};

/// One of the two columns of a split layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Left,
    Right,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Left => "left",
            Slot::Right => "right",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit render order per slot. `None` means natural document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SlotOrder {
    pub left: Option<u8>,
    pub right: Option<u8>,
}

impl SlotOrder {
    pub fn get(&self, slot: Slot) -> Option<u8> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    /// The slots in the order they render.
    pub fn sequence(&self) -> [Slot; 2] {
        match (self.left, self.right) {
            (Some(l), Some(r)) if r < l => [Slot::Right, Slot::Left],
            _ => [Slot::Left, Slot::Right],
        }
    }
}

/// Flex-grow weights of the two slots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlexRatio {
    pub left: f64,
    pub right: f64,
}

impl Default for FlexRatio {
    fn default() -> Self {
        Self {
            left: 50.0,
            right: 50.0,
        }
    }
}

impl FlexRatio {
    /// Parses an `"L/R"` ratio. Both sides must be finite, non-negative numbers.
    pub fn parse(ratio: &str) -> Option<Self> {
        let (left, right) = ratio.split_once('/')?;
        let left: f64 = left.trim().parse().ok()?;
        let right: f64 = right.trim().parse().ok()?;
        let valid = |w: f64| w.is_finite() && w >= 0.0;
        (valid(left) && valid(right)).then_some(Self { left, right })
    }

    pub fn weight(&self, slot: Slot) -> f64 {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    /// The `flex` style of a slot, e.g. `{"flex": "60 1 0%"}`.
    pub fn style(&self, slot: Slot) -> StyleBag {
        let mut style = StyleBag::new();
        style.insert(
            "flex".to_string(),
            Value::String(format!("{} 1 0%", self.weight(slot))),
        );
        style
    }

    pub fn left_style(&self) -> StyleBag {
        self.style(Slot::Left)
    }

    pub fn right_style(&self) -> StyleBag {
        self.style(Slot::Right)
    }
}

/// Main axis of the split container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StackAxis {
    Row,
    Column,
}

/// The resolved arrangement of a split layout at one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResolution<'a> {
    pub left: Option<&'a Section>,
    pub right: Option<&'a Section>,
    pub order: SlotOrder,
    pub flex: FlexRatio,
    /// The ratio string the flex weights were read from.
    pub ratio: String,
    pub axis: StackAxis,
}

impl<'a> SplitResolution<'a> {
    /// The no-op result for layouts that are not split.
    fn empty() -> Self {
        Self {
            left: None,
            right: None,
            order: SlotOrder::default(),
            flex: FlexRatio::default(),
            ratio: DEFAULT_SPLIT_RATIO.to_string(),
            axis: StackAxis::Row,
        }
    }

    pub fn section(&self, slot: Slot) -> Option<&'a Section> {
        match slot {
            Slot::Left => self.left,
            Slot::Right => self.right,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Resolves split layouts.
pub struct SplitLayoutResolver;

impl SplitLayoutResolver {
    /// Assigns sections to the left and right slots and works out ordering and flex
    /// weights for `bp`.
    ///
    /// Layouts whose type is not `split` resolve to an empty result; callers render
    /// them with the stacked or default path instead.
    pub fn resolve<'a>(
        layout: &LayoutConfig,
        sections: &'a IndexMap<String, Section>,
        bp: Breakpoint,
    ) -> SplitResolution<'a> {
        if layout.kind() != LayoutKind::Split {
            return SplitResolution::empty();
        }

        let config = layout.split_config();
        let ratio = config.split_ratio.ratio_for(bp).to_string();
        let flex = FlexRatio::parse(&ratio).unwrap_or_else(|| {
            tracing::warn!("Malformed split ratio '{}', using {}", ratio, DEFAULT_SPLIT_RATIO);
            FlexRatio::default()
        });

        SplitResolution {
            left: Self::section_for_slot(layout, sections, Slot::Left),
            right: Self::section_for_slot(layout, sections, Slot::Right),
            order: Self::stack_order(&config, bp),
            flex,
            ratio,
            axis: if bp.is_mobile() {
                StackAxis::Column
            } else {
                StackAxis::Row
            },
        }
    }

    /// The section mapped to `slot`. When several sections claim the same slot, the
    /// first entry in `slot_mapping` declaration order wins.
    pub fn section_for_slot<'a>(
        layout: &LayoutConfig,
        sections: &'a IndexMap<String, Section>,
        slot: Slot,
    ) -> Option<&'a Section> {
        let mapping = layout.slot_mapping.as_ref()?;
        let (section_id, _) = mapping.iter().find(|(_, s)| s.as_str() == slot.as_str())?;
        let section = sections.get(section_id);
        if section.is_none() {
            tracing::warn!(
                "Slot '{}' is mapped to missing section '{}'",
                slot,
                section_id
            );
        }
        section
    }

    /// Explicit ordering only applies at the smallest breakpoint.
    pub fn stack_order(config: &SplitLayoutConfig, bp: Breakpoint) -> SlotOrder {
        if !bp.is_mobile() {
            return SlotOrder::default();
        }
        match config.mobile_stack_direction {
            StackDirection::LeftFirst => SlotOrder {
                left: Some(1),
                right: Some(2),
            },
            StackDirection::RightFirst => SlotOrder {
                left: Some(2),
                right: Some(1),
            },
        }
    }
}
