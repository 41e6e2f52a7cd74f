//! Core type definitions
//!
//! This module contains the action model the graph is extracted from. The
//! types are already normalized: "no target" is `None` rather than a sentinel
//! id, and the immediate flag is a single boolean. The raw on-disk shape lives
//! in the actions parser.

/// Integer code classifying a sub-action
pub type SubActionKind = i64;

/// Integer code identifying a trigger event type
pub type TriggerKind = i64;

/// The full set of actions loaded from one configuration file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionSet {
    pub actions: Vec<Action>,
}

impl ActionSet {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

/// A named unit of automation logic
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Action {
    pub id: String,
    pub name: String,
    /// Cluster key; the empty string is the ungrouped cluster
    pub group: String,
    pub sub_actions: Vec<SubAction>,
    pub triggers: Vec<TriggerRef>,
}

impl Action {
    pub fn new(id: impl Into<String>, name: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            group: group.into(),
            sub_actions: Vec::new(),
            triggers: Vec::new(),
        }
    }

    pub fn with_sub_action(mut self, sub_action: SubAction) -> Self {
        self.sub_actions.push(sub_action);
        self
    }

    pub fn with_trigger(mut self, kind: TriggerKind) -> Self {
        self.triggers.push(TriggerRef { kind });
        self
    }
}

/// A step inside an action that may run up to two other actions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubAction {
    pub kind: SubActionKind,
    pub target: Option<InvocationTarget>,
    pub else_target: Option<InvocationTarget>,
}

impl SubAction {
    pub fn new(kind: SubActionKind) -> Self {
        Self {
            kind,
            target: None,
            else_target: None,
        }
    }

    pub fn with_target(mut self, action_id: impl Into<String>, immediate: bool) -> Self {
        self.target = Some(InvocationTarget::new(action_id, immediate));
        self
    }

    pub fn with_else_target(mut self, action_id: impl Into<String>, immediate: bool) -> Self {
        self.else_target = Some(InvocationTarget::new(action_id, immediate));
        self
    }
}

/// The action a sub-action branch runs and whether it runs in the same step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationTarget {
    pub action_id: String,
    pub immediate: bool,
}

impl InvocationTarget {
    pub fn new(action_id: impl Into<String>, immediate: bool) -> Self {
        Self {
            action_id: action_id.into(),
            immediate,
        }
    }
}

/// An event type that can start an action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TriggerRef {
    pub kind: TriggerKind,
}
