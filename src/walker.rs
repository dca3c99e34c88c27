//! Walks a content document at one breakpoint and produces the fully resolved
//! render tree: section order, slot placement, per-component styles and click
//! actions. Rendering itself is left to a [`RenderVisitor`].

use crate::breakpoint::Breakpoint;
use crate::content::{
    Component, ComponentVariant, FlexibleContent, LayoutKind, OptinFlowNode, Section,
    SectionArrangement,
};
use crate::form::SubmitType;
use crate::layout::{FlexRatio, Slot, SlotOrder, SplitLayoutResolver, StackAxis};
use crate::style::{StyleBag, overlay, resolve_styles};
use serde::Serialize;

/// What clicking a component does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ClickAction {
    Submit(SubmitType),
    /// Routed to the host's close handler, never to submission.
    Dismiss,
    QuizAnswer(String),
    Inert,
}

impl ClickAction {
    pub fn is_inert(&self) -> bool {
        matches!(self, ClickAction::Inert)
    }
}

/// Picks the submission path for a submit action.
///
/// Only discount nodes distinguish primary and secondary buttons.
pub fn derive_submit_type(action: &str, node_type: &str) -> SubmitType {
    match (node_type, action) {
        ("discount", "primary_submit") => SubmitType::DiscountPrimary,
        ("discount", "secondary_submit") => SubmitType::DiscountSecondary,
        _ => SubmitType::Default,
    }
}

fn click_action(component: &Component, variant: &ComponentVariant, node_type: &str) -> ClickAction {
    match variant {
        ComponentVariant::Text(_) | ComponentVariant::Button(_) => match component.action() {
            Some(action @ ("submit" | "primary_submit" | "secondary_submit")) => {
                ClickAction::Submit(derive_submit_type(action, node_type))
            }
            Some("close") => ClickAction::Dismiss,
            _ => ClickAction::Inert,
        },
        ComponentVariant::QuizOption(props) if props.field_type.as_deref() == Some("quiz") => {
            ClickAction::QuizAnswer(props.content.clone().unwrap_or_default())
        }
        _ => ClickAction::Inert,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedComponent {
    pub id: String,
    pub style: StyleBag,
    pub variant: ComponentVariant,
    pub action: ClickAction,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedSection {
    pub id: String,
    pub name: String,
    /// The split slot this section fills, if any.
    pub slot: Option<Slot>,
    pub order: Option<u8>,
    /// Section style, with the slot's flex weight applied for split layouts.
    pub style: StyleBag,
    pub arrangement: SectionArrangement,
    /// Visible components only, in authored order.
    pub components: Vec<ResolvedComponent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedLayout {
    Split {
        left: Option<String>,
        right: Option<String>,
        order: SlotOrder,
        flex: FlexRatio,
        direction: StackAxis,
    },
    Stacked,
    Default,
}

/// A content document resolved at a single breakpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedTree {
    pub breakpoint: Breakpoint,
    pub layout: ResolvedLayout,
    /// Sections in render order.
    pub sections: Vec<ResolvedSection>,
}

impl ResolvedTree {
    pub fn components(&self) -> impl Iterator<Item = &ResolvedComponent> {
        self.sections.iter().flat_map(|s| s.components.iter())
    }

    pub fn find_component(&self, id: &str) -> Option<&ResolvedComponent> {
        self.components().find(|c| c.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&ResolvedSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Receives a resolved tree in render order.
pub trait RenderVisitor {
    fn begin(&mut self, _layout: &ResolvedLayout) {}
    fn enter_section(&mut self, _section: &ResolvedSection) {}
    fn component(&mut self, section: &ResolvedSection, component: &ResolvedComponent);
    fn exit_section(&mut self, _section: &ResolvedSection) {}
}

pub struct ContentWalker<'a> {
    content: &'a FlexibleContent,
    breakpoint: Breakpoint,
    node_type: &'a str,
}

impl<'a> ContentWalker<'a> {
    pub fn new(content: &'a FlexibleContent, breakpoint: Breakpoint, node_type: &'a str) -> Self {
        Self {
            content,
            breakpoint,
            node_type,
        }
    }

    /// A walker over the node's content, or `None` when the node has none.
    pub fn for_node(node: &'a OptinFlowNode, breakpoint: Breakpoint) -> Option<Self> {
        let Some(content) = node.flexible_content.as_ref() else {
            tracing::warn!("Node {} has no flexible content, nothing to render", node.id);
            return None;
        };
        Some(Self::new(content, breakpoint, &node.node_type))
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn resolve(&self) -> ResolvedTree {
        let bp = self.breakpoint;
        let layout = &self.content.layout;

        let (resolved_layout, sections) = match layout.kind() {
            LayoutKind::Split => {
                let split = SplitLayoutResolver::resolve(layout, &self.content.sections, bp);
                let sections: Vec<ResolvedSection> = split
                    .order
                    .sequence()
                    .into_iter()
                    .filter_map(|slot| {
                        let section = split.section(slot)?;
                        let style = overlay(
                            resolve_styles(&section.styles, bp),
                            &split.flex.style(slot),
                        );
                        Some(self.resolve_section(
                            section,
                            Some(slot),
                            split.order.get(slot),
                            style,
                        ))
                    })
                    .collect();
                let resolved = ResolvedLayout::Split {
                    left: split.left.map(|s| s.id.clone()),
                    right: split.right.map(|s| s.id.clone()),
                    order: split.order,
                    flex: split.flex,
                    direction: split.axis,
                };
                (resolved, sections)
            }
            kind => {
                let sections: Vec<ResolvedSection> = self
                    .content
                    .sections
                    .values()
                    .map(|section| {
                        let style = resolve_styles(&section.styles, bp);
                        self.resolve_section(section, None, None, style)
                    })
                    .collect();
                let resolved = if kind == LayoutKind::Stacked {
                    ResolvedLayout::Stacked
                } else {
                    ResolvedLayout::Default
                };
                (resolved, sections)
            }
        };

        tracing::debug!(
            "Resolved {} section(s) at breakpoint {}",
            sections.len(),
            bp
        );
        ResolvedTree {
            breakpoint: bp,
            layout: resolved_layout,
            sections,
        }
    }

    /// Resolves the tree and feeds it to `visitor` in render order.
    pub fn walk<V: RenderVisitor>(&self, visitor: &mut V) -> ResolvedTree {
        let tree = self.resolve();
        visitor.begin(&tree.layout);
        for section in &tree.sections {
            visitor.enter_section(section);
            for component in &section.components {
                visitor.component(section, component);
            }
            visitor.exit_section(section);
        }
        tree
    }

    fn resolve_section(
        &self,
        section: &Section,
        slot: Option<Slot>,
        order: Option<u8>,
        style: StyleBag,
    ) -> ResolvedSection {
        ResolvedSection {
            id: section.id.clone(),
            name: section.name.clone(),
            slot,
            order,
            style,
            arrangement: section.arrangement(),
            components: section
                .components
                .iter()
                .filter(|c| c.visible)
                .map(|c| self.resolve_component(c))
                .collect(),
        }
    }

    fn resolve_component(&self, component: &Component) -> ResolvedComponent {
        let variant = component.variant();
        ResolvedComponent {
            id: component.id.clone(),
            style: resolve_styles(&component.styles, self.breakpoint),
            action: click_action(component, &variant, self.node_type),
            variant,
        }
    }
}
