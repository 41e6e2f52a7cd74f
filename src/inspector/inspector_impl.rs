use std::collections::{BTreeMap, HashMap, HashSet};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use crate::core::{ActionSet, TriggerKind};
use crate::graph::{EdgeKind, build_edges};
use crate::triggers::is_known_trigger;

/// How much attention an anomaly deserves
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Legal structure worth knowing about
    Info,
    /// The rendered graph will be missing or duplicating something
    Warning,
}

/// A data-quality finding in an action set
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Anomaly {
    /// Several actions share one id; their nodes collapse in the output
    DuplicateActionId { id: String, count: usize },
    /// A sub-action runs an id that no action has
    DanglingTarget {
        from: String,
        to: String,
        edge_kind: EdgeKind,
    },
    /// A trigger kind the catalog has no label for
    UnknownTriggerKind {
        kind: TriggerKind,
        actions: Vec<String>,
    },
    /// Actions that can invoke each other
    InvocationCycle { actions: Vec<String> },
}

impl Anomaly {
    pub fn severity(&self) -> Severity {
        match self {
            Anomaly::InvocationCycle { .. } => Severity::Info,
            _ => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Anomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Anomaly::DuplicateActionId { id, count } => {
                write!(f, "action id '{id}' is used by {count} actions")
            }
            Anomaly::DanglingTarget {
                from,
                to,
                edge_kind,
            } => write!(f, "action '{from}' runs missing action '{to}' ({edge_kind})"),
            Anomaly::UnknownTriggerKind { kind, actions } => write!(
                f,
                "trigger kind {kind} is not in the catalog (used by {})",
                actions.join(", ")
            ),
            Anomaly::InvocationCycle { actions } => {
                write!(f, "invocation cycle: {}", actions.join(" → "))
            }
        }
    }
}

/// Inspector for data-shape anomalies in an action set
///
/// The graph is rendered best-effort regardless; the inspector only reports
/// what was dropped, duplicated or looped.
pub struct ActionInspector {
    anomalies: Vec<Anomaly>,
}

impl Default for ActionInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionInspector {
    /// Create a new inspector
    pub fn new() -> Self {
        Self {
            anomalies: Vec::new(),
        }
    }

    /// Collect every anomaly in the action set
    ///
    /// Findings are grouped by type: duplicate ids, dangling targets, unknown
    /// trigger kinds, then invocation cycles.
    pub fn inspect(&mut self, actions: &ActionSet) {
        self.find_duplicate_ids(actions);
        self.find_dangling_targets(actions);
        self.find_unknown_triggers(actions);
        self.find_invocation_cycles(actions);
    }

    fn find_duplicate_ids(&mut self, actions: &ActionSet) {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for action in actions.actions() {
            *counts.entry(action.id.as_str()).or_insert(0) += 1;
        }

        self.anomalies.extend(
            counts
                .into_iter()
                .filter(|&(_, count)| count > 1)
                .map(|(id, count)| Anomaly::DuplicateActionId {
                    id: id.to_string(),
                    count,
                }),
        );
    }

    fn find_dangling_targets(&mut self, actions: &ActionSet) {
        let known_ids: HashSet<&str> = actions.actions().iter().map(|a| a.id.as_str()).collect();
        let (edges, _) = build_edges(actions);

        self.anomalies.extend(
            edges
                .into_iter()
                .filter(|e| e.kind != EdgeKind::Trigger && !known_ids.contains(e.to.as_str()))
                .map(|e| Anomaly::DanglingTarget {
                    from: e.from,
                    to: e.to,
                    edge_kind: e.kind,
                }),
        );
    }

    fn find_unknown_triggers(&mut self, actions: &ActionSet) {
        let mut unknown: BTreeMap<TriggerKind, Vec<String>> = BTreeMap::new();

        for action in actions.actions() {
            for trigger in &action.triggers {
                if is_known_trigger(trigger.kind) {
                    continue;
                }
                let users = unknown.entry(trigger.kind).or_default();
                if !users.contains(&action.id) {
                    users.push(action.id.clone());
                }
            }
        }

        self.anomalies.extend(
            unknown
                .into_iter()
                .map(|(kind, actions)| Anomaly::UnknownTriggerKind { kind, actions }),
        );
    }

    fn find_invocation_cycles(&mut self, actions: &ActionSet) {
        let mut graph: DiGraph<&str, EdgeKind> = DiGraph::new();
        let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

        for action in actions.actions() {
            indices
                .entry(action.id.as_str())
                .or_insert_with(|| graph.add_node(action.id.as_str()));
        }

        let (edges, _) = build_edges(actions);
        for edge in &edges {
            if edge.kind == EdgeKind::Trigger {
                continue;
            }
            if let (Some(&from), Some(&to)) =
                (indices.get(edge.from.as_str()), indices.get(edge.to.as_str()))
            {
                graph.add_edge(from, to, edge.kind);
            }
        }

        let mut cycles: Vec<Vec<String>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| scc.len() > 1 || graph.contains_edge(scc[0], scc[0]))
            .map(|scc| {
                let mut ids: Vec<String> = scc.iter().map(|&idx| graph[idx].to_string()).collect();
                ids.sort();
                ids
            })
            .collect();
        cycles.sort();

        self.anomalies.extend(
            cycles
                .into_iter()
                .map(|actions| Anomaly::InvocationCycle { actions }),
        );
    }

    /// Get all anomalies found
    pub fn anomalies(&self) -> &[Anomaly] {
        &self.anomalies
    }

    pub fn anomaly_count(&self) -> usize {
        self.anomalies.len()
    }

    /// Number of anomalies that affect the rendered graph
    pub fn warning_count(&self) -> usize {
        self.anomalies
            .iter()
            .filter(|a| a.severity() == Severity::Warning)
            .count()
    }

    pub fn has_warnings(&self) -> bool {
        self.warning_count() > 0
    }

    /// Add an anomaly directly (used by report tests)
    pub fn add_anomaly(&mut self, anomaly: Anomaly) {
        self.anomalies.push(anomaly);
    }
}
