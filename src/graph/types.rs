//! Core graph types
//!
//! This module contains the derived graph model: nodes, clusters and typed
//! edges. The model is built once per run and handed to a renderer.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::core::TriggerKind;

/// A graph node for one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionNode {
    pub id: String,
    pub label: String,
}

/// A graph node for a trigger kind referenced by at least one action
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerNode {
    pub kind: TriggerKind,
    pub label: String,
    /// False when the label is a fallback for a kind missing from the catalog
    pub known: bool,
}

impl TriggerNode {
    /// Node key used by edges pointing out of this trigger
    pub fn key(&self) -> String {
        self.kind.to_string()
    }
}

/// A visual grouping of the actions sharing a group name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cluster {
    /// Structural identifier, safe to use as a graph id
    pub name: String,
    /// Group name as written in the configuration
    pub label: String,
    pub members: Vec<String>,
}

/// What an edge represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Action runs another action on its normal path
    Primary,
    /// Action runs another action on a failed condition
    Else,
    /// Trigger kind starts an action
    Trigger,
}

impl EdgeKind {
    /// Graphviz color for this kind of edge
    pub fn color(self) -> &'static str {
        match self {
            EdgeKind::Primary => "blue",
            EdgeKind::Else => "red",
            EdgeKind::Trigger => "green",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EdgeKind::Primary => write!(f, "primary"),
            EdgeKind::Else => write!(f, "else"),
            EdgeKind::Trigger => write!(f, "trigger"),
        }
    }
}

/// A directed edge between two node keys
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub kind: EdgeKind,
    /// Target is scheduled rather than run in the same step
    pub deferred: bool,
}

impl GraphEdge {
    pub fn new(from: impl Into<String>, to: impl Into<String>, kind: EdgeKind) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind,
            deferred: false,
        }
    }

    pub fn with_deferred(mut self, deferred: bool) -> Self {
        self.deferred = deferred;
        self
    }
}

/// Trigger kinds referenced by at least one action
///
/// Produced by edge extraction and consumed by trigger node filtering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TriggerUsage {
    seen: BTreeSet<TriggerKind>,
}

impl TriggerUsage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a kind; repeated marks are no-ops
    pub fn mark(&mut self, kind: TriggerKind) {
        self.seen.insert(kind);
    }

    /// Used kinds in ascending order
    pub fn iter(&self) -> impl Iterator<Item = TriggerKind> + '_ {
        self.seen.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// How trigger kinds missing from the catalog are rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum UnknownTriggerPolicy {
    /// Keep the edge but emit no node for the trigger
    #[default]
    Omit,
    /// Emit a node with a placeholder label
    Fallback,
}

/// The complete graph derived from one action set
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionGraph {
    pub action_nodes: Vec<ActionNode>,
    pub trigger_nodes: Vec<TriggerNode>,
    pub clusters: Vec<Cluster>,
    pub edges: Vec<GraphEdge>,
    /// Referenced trigger kinds the catalog has no label for
    pub unknown_trigger_kinds: Vec<TriggerKind>,
}

impl ActionGraph {
    pub fn node_count(&self) -> usize {
        self.action_nodes.len() + self.trigger_nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
