use crate::content::ComponentVariant;
use crate::form::SubmitType;
use crate::layout::StackAxis;
use crate::style::StyleBag;
use crate::walker::{ClickAction, ResolvedComponent, ResolvedLayout, ResolvedSection, ResolvedTree};
use itertools::Itertools;
use serde_json::Value;

/// Formats resolved trees into indented text, one line per section or component.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn format_tree(tree: &ResolvedTree) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "@{} {}\n",
            tree.breakpoint,
            Self::format_layout(&tree.layout)
        ));
        for section in &tree.sections {
            out.push_str(&Self::format_section(section));
        }
        out
    }

    fn format_layout(layout: &ResolvedLayout) -> String {
        match layout {
            ResolvedLayout::Split {
                flex, direction, ..
            } => {
                let axis = match direction {
                    StackAxis::Row => "row",
                    StackAxis::Column => "column",
                };
                format!("split {}/{} {}", flex.left, flex.right, axis)
            }
            ResolvedLayout::Stacked => "stacked".to_string(),
            ResolvedLayout::Default => "default".to_string(),
        }
    }

    fn format_section(section: &ResolvedSection) -> String {
        let mut out = String::new();
        let slot = section
            .slot
            .map(|s| format!("[{}] ", s))
            .unwrap_or_default();
        out.push_str(&format!(
            "{}{} \"{}\"{}\n",
            slot,
            section.id,
            section.name,
            Self::format_style(&section.style)
        ));
        for component in &section.components {
            out.push_str(&format!("  {}\n", Self::format_component(component)));
        }
        out
    }

    fn format_component(component: &ResolvedComponent) -> String {
        let label = match &component.variant {
            ComponentVariant::Unknown { type_name } => format!("?{}", type_name),
            variant => variant.type_name().to_string(),
        };
        let action = match &component.action {
            ClickAction::Submit(SubmitType::Default) => " -> submit",
            ClickAction::Submit(SubmitType::DiscountPrimary) => " -> primary_submit",
            ClickAction::Submit(SubmitType::DiscountSecondary) => " -> secondary_submit",
            ClickAction::Dismiss => " -> close",
            ClickAction::QuizAnswer(_) => " -> quiz",
            ClickAction::Inert => "",
        };
        format!(
            "{} {}{}{}",
            label,
            component.id,
            action,
            Self::format_style(&component.style)
        )
    }

    /// Styles as ` {key: value, ...}`, or nothing when empty.
    fn format_style(style: &StyleBag) -> String {
        if style.is_empty() {
            return String::new();
        }
        let body = style
            .iter()
            .map(|(k, v)| format!("{}: {}", k, Self::format_value(v)))
            .join(", ");
        format!(" {{{}}}", body)
    }

    fn format_value(value: &Value) -> String {
        match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}
