//! A live popup: one node rendered for one visitor session.

use crate::breakpoint::{Breakpoint, BreakpointSignal};
use crate::content::{ContentSnapshot, ContentStore, FlexibleContent, OptinFlowNode};
use crate::form::{
    FormErrors, FormPipeline, FormState, Submission, SubmissionSink, SubmissionState, SubmitContext,
    SubmitOutcome, SubmitTrigger,
};
use crate::layout::PopupChrome;
use crate::style::StyleBag;
use crate::subscription::SubscriberId;
use crate::walker::{ClickAction, ContentWalker, ResolvedTree};

/// The result of clicking a component.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickOutcome {
    Submitted(Submission),
    Rejected(FormErrors),
    /// The host should close the popup.
    Dismissed,
    /// The component has no click behavior, or is not rendered.
    Inert,
}

impl From<SubmitOutcome> for ClickOutcome {
    fn from(outcome: SubmitOutcome) -> Self {
        match outcome {
            SubmitOutcome::Submitted(submission) => ClickOutcome::Submitted(submission),
            SubmitOutcome::Rejected(errors) => ClickOutcome::Rejected(errors),
        }
    }
}

pub struct PopupInstanceBuilder {
    node: OptinFlowNode,
    session_id: String,
    override_bp: Option<Breakpoint>,
    width: Option<u32>,
    preview: bool,
}

impl PopupInstanceBuilder {
    pub fn new(node: OptinFlowNode, session_id: &str) -> Self {
        Self {
            node,
            session_id: session_id.to_string(),
            override_bp: None,
            width: None,
            preview: false,
        }
    }

    /// Pins the breakpoint, as the editor's device preview does.
    pub fn override_breakpoint(mut self, bp: Breakpoint) -> Self {
        self.override_bp = Some(bp);
        self
    }

    pub fn viewport_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn preview_mode(mut self, preview: bool) -> Self {
        self.preview = preview;
        self
    }

    pub fn build(mut self) -> PopupInstance {
        let store = self.node.flexible_content.take().map(ContentStore::new);
        if store.is_none() {
            tracing::warn!("Node {} has no flexible content", self.node.id);
        }
        PopupInstance {
            node: self.node,
            session_id: self.session_id,
            store,
            signal: BreakpointSignal::new(self.width, self.override_bp),
            form: FormPipeline::new(),
            preview: self.preview,
        }
    }
}

/// Owns everything one rendered popup needs: its node, the current content
/// document, the breakpoint signal and the form.
///
/// The content document is moved out of the node into a [`ContentStore`]; read it
/// back through [`PopupInstance::content`].
pub struct PopupInstance {
    node: OptinFlowNode,
    session_id: String,
    store: Option<ContentStore>,
    signal: BreakpointSignal,
    form: FormPipeline,
    preview: bool,
}

impl PopupInstance {
    pub fn builder(node: OptinFlowNode, session_id: &str) -> PopupInstanceBuilder {
        PopupInstanceBuilder::new(node, session_id)
    }

    pub fn node(&self) -> &OptinFlowNode {
        &self.node
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn is_preview(&self) -> bool {
        self.preview
    }

    pub fn content(&self) -> Option<&FlexibleContent> {
        self.store.as_ref().map(ContentStore::content)
    }

    pub fn snapshot(&self) -> Option<ContentSnapshot> {
        self.store.as_ref().map(ContentStore::snapshot)
    }

    pub fn content_version(&self) -> Option<u64> {
        self.store.as_ref().map(ContentStore::version)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.signal.current()
    }

    pub fn resize(&mut self, width: u32) -> Breakpoint {
        self.signal.set_width(width)
    }

    pub fn set_breakpoint_override(&mut self, bp: Breakpoint) -> Breakpoint {
        self.signal.set_override(bp)
    }

    pub fn clear_breakpoint_override(&mut self) -> Breakpoint {
        self.signal.clear_override()
    }

    pub fn on_breakpoint_change<F>(&mut self, owner: SubscriberId, callback: F)
    where
        F: FnMut(&Breakpoint) + 'static,
    {
        self.signal.subscribe(owner, callback);
    }

    /// Content change callbacks. Ignored when the popup has no content.
    pub fn on_content_change<F>(&mut self, owner: SubscriberId, callback: F)
    where
        F: FnMut(&ContentSnapshot) + 'static,
    {
        if let Some(store) = self.store.as_mut() {
            store.subscribe(owner, callback);
        }
    }

    pub fn unsubscribe(&mut self, owner: SubscriberId) -> bool {
        let from_signal = self.signal.unsubscribe(owner);
        let from_store = self
            .store
            .as_mut()
            .is_some_and(|store| store.unsubscribe(owner));
        from_signal || from_store
    }

    /// Swaps in a new content document. Form values are kept. Returns the new
    /// content version.
    pub fn replace_content(&mut self, content: FlexibleContent) -> u64 {
        match self.store.as_mut() {
            Some(store) => store.replace(content),
            None => {
                let store = ContentStore::new(content);
                let version = store.version();
                self.store = Some(store);
                version
            }
        }
    }

    pub fn set_field(&mut self, field_id: &str, value: &str) {
        self.form.set_field(field_id, value);
    }

    pub fn form_state(&self) -> &FormState {
        self.form.form()
    }

    pub fn submission_state(&self) -> &SubmissionState {
        self.form.state()
    }

    /// The render tree at the current breakpoint, or `None` without content.
    pub fn resolve(&self) -> Option<ResolvedTree> {
        let content = self.content()?;
        let walker = ContentWalker::new(content, self.breakpoint(), &self.node.node_type);
        Some(walker.resolve())
    }

    pub fn chrome(&self) -> Option<PopupChrome> {
        self.content().map(|c| PopupChrome::from_layout(&c.layout))
    }

    /// The container size at the current breakpoint.
    pub fn container_style(&self) -> Option<StyleBag> {
        self.chrome()
            .map(|chrome| chrome.container_style(self.breakpoint(), self.preview))
    }

    /// Handles a click on a rendered component.
    pub fn click(&mut self, component_id: &str, sink: &mut dyn SubmissionSink) -> ClickOutcome {
        let action = self
            .resolve()
            .and_then(|tree| tree.find_component(component_id).map(|c| c.action.clone()));

        match action {
            Some(ClickAction::Submit(submit_type)) => self.submit(submit_type.into(), sink).into(),
            Some(ClickAction::QuizAnswer(answer)) => {
                self.submit(SubmitTrigger::Quiz { answer }, sink).into()
            }
            Some(ClickAction::Dismiss) => ClickOutcome::Dismissed,
            Some(ClickAction::Inert) => ClickOutcome::Inert,
            None => {
                tracing::debug!("Click on '{}' hit no rendered component", component_id);
                ClickOutcome::Inert
            }
        }
    }

    pub fn submit(&mut self, trigger: SubmitTrigger, sink: &mut dyn SubmissionSink) -> SubmitOutcome {
        let empty = FlexibleContent::default();
        let content = self
            .store
            .as_ref()
            .map(ContentStore::content)
            .unwrap_or(&empty);
        let ctx = SubmitContext {
            node: &self.node,
            content,
            session_id: &self.session_id,
        };
        self.form.submit(trigger, ctx, sink)
    }
}
