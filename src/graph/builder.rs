use std::collections::BTreeMap;

use super::types::{
    ActionGraph, ActionNode, Cluster, EdgeKind, GraphEdge, TriggerNode, TriggerUsage,
    UnknownTriggerPolicy,
};
use crate::constants::actions::is_skipped;
use crate::core::{ActionSet, TriggerKind};
use crate::triggers::trigger_label;

/// Builder for extracting the action graph from an action set
///
/// Nodes, clusters and edges are extracted independently. Trigger nodes are
/// filtered from the usage set that edge extraction returns, so edges are
/// always built first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionGraphBuilder {
    unknown_triggers: UnknownTriggerPolicy,
}

impl ActionGraphBuilder {
    /// Create a new graph builder
    ///
    /// # Arguments
    /// * `unknown_triggers` - How to render referenced trigger kinds that are
    ///   missing from the catalog
    pub fn new(unknown_triggers: UnknownTriggerPolicy) -> Self {
        Self { unknown_triggers }
    }

    /// Build the full graph for an action set
    pub fn build(&self, actions: &ActionSet) -> ActionGraph {
        let action_nodes = extract_nodes(actions);
        let clusters = build_clusters(actions);
        let (edges, usage) = build_edges(actions);
        let trigger_nodes = filter_trigger_nodes(&usage, self.unknown_triggers);
        let unknown_trigger_kinds = unknown_trigger_kinds(&usage);

        ActionGraph {
            action_nodes,
            trigger_nodes,
            clusters,
            edges,
            unknown_trigger_kinds,
        }
    }
}

/// One node per action, in collection order
pub fn extract_nodes(actions: &ActionSet) -> Vec<ActionNode> {
    actions
        .actions()
        .iter()
        .map(|action| ActionNode {
            id: action.id.clone(),
            label: action.name.clone(),
        })
        .collect()
}

/// One cluster per distinct group, ordered by group name
///
/// Members keep collection order. Cluster names are numbered in the sorted
/// order so the same input always yields the same identifiers.
pub fn build_clusters(actions: &ActionSet) -> Vec<Cluster> {
    let mut groups: BTreeMap<&str, Vec<String>> = BTreeMap::new();

    for action in actions.actions() {
        groups
            .entry(action.group.as_str())
            .or_default()
            .push(action.id.clone());
    }

    groups
        .into_iter()
        .enumerate()
        .map(|(i, (group, members))| Cluster {
            name: format!("cluster_{i}"),
            label: group.to_string(),
            members,
        })
        .collect()
}

/// Edges in encounter order, plus the trigger kinds they reference
pub fn build_edges(actions: &ActionSet) -> (Vec<GraphEdge>, TriggerUsage) {
    let mut edges = Vec::new();
    let mut usage = TriggerUsage::new();

    for action in actions.actions() {
        for sub_action in &action.sub_actions {
            if is_skipped(sub_action.kind) {
                continue;
            }

            if let Some(target) = &sub_action.target {
                edges.push(
                    GraphEdge::new(&action.id, &target.action_id, EdgeKind::Primary)
                        .with_deferred(!target.immediate),
                );
            }

            if let Some(target) = &sub_action.else_target {
                edges.push(
                    GraphEdge::new(&action.id, &target.action_id, EdgeKind::Else)
                        .with_deferred(!target.immediate),
                );
            }
        }

        for trigger in &action.triggers {
            edges.push(GraphEdge::new(
                trigger.kind.to_string(),
                &action.id,
                EdgeKind::Trigger,
            ));
            usage.mark(trigger.kind);
        }
    }

    (edges, usage)
}

/// Trigger nodes for used kinds, ordered by kind
pub fn filter_trigger_nodes(
    usage: &TriggerUsage,
    unknown_triggers: UnknownTriggerPolicy,
) -> Vec<TriggerNode> {
    usage
        .iter()
        .filter_map(|kind| match (trigger_label(kind), unknown_triggers) {
            (Some(label), _) => Some(TriggerNode {
                kind,
                label: label.to_string(),
                known: true,
            }),
            (None, UnknownTriggerPolicy::Fallback) => Some(TriggerNode {
                kind,
                label: format!("Unknown trigger {kind}"),
                known: false,
            }),
            (None, UnknownTriggerPolicy::Omit) => None,
        })
        .collect()
}

/// Used kinds that the catalog has no label for
pub fn unknown_trigger_kinds(usage: &TriggerUsage) -> Vec<TriggerKind> {
    usage
        .iter()
        .filter(|&kind| trigger_label(kind).is_none())
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::{Action, SubAction};

    fn edge(from: &str, to: &str, kind: EdgeKind, deferred: bool) -> GraphEdge {
        GraphEdge::new(from, to, kind).with_deferred(deferred)
    }

    #[test]
    fn test_isolated_action_contributes_one_node_and_no_edges() {
        let actions = ActionSet::new(vec![Action::new("a", "Lonely", "")]);

        let graph = ActionGraphBuilder::default().build(&actions);

        assert_eq!(graph.action_nodes.len(), 1);
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_nodes_preserve_collection_order() {
        let actions = ActionSet::new(vec![
            Action::new("z", "Last alphabetically", "g"),
            Action::new("a", "First alphabetically", "g"),
        ]);

        let nodes = extract_nodes(&actions);

        assert_eq!(
            nodes,
            vec![
                ActionNode {
                    id: "z".to_string(),
                    label: "Last alphabetically".to_string()
                },
                ActionNode {
                    id: "a".to_string(),
                    label: "First alphabetically".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_clusters_sorted_by_group_with_members_in_order() {
        let actions = ActionSet::new(vec![
            Action::new("1", "one", "Shoutouts"),
            Action::new("2", "two", ""),
            Action::new("3", "three", "Alerts"),
            Action::new("4", "four", "Shoutouts"),
        ]);

        let clusters = build_clusters(&actions);

        let summary: Vec<(&str, &str, Vec<&str>)> = clusters
            .iter()
            .map(|c| {
                (
                    c.name.as_str(),
                    c.label.as_str(),
                    c.members.iter().map(String::as_str).collect(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("cluster_0", "", vec!["2"]),
                ("cluster_1", "Alerts", vec!["3"]),
                ("cluster_2", "Shoutouts", vec!["1", "4"]),
            ]
        );
    }

    #[test]
    fn test_skipped_sub_action_produces_no_edges() {
        let actions = ActionSet::new(vec![
            Action::new("a", "A", "").with_sub_action(
                SubAction::new(1004)
                    .with_target("b", true)
                    .with_else_target("c", false),
            ),
        ]);

        let (edges, usage) = build_edges(&actions);

        assert!(edges.is_empty());
        assert!(usage.is_empty());
    }

    #[test]
    fn test_primary_and_else_are_independent() {
        let actions = ActionSet::new(vec![
            Action::new("a", "A", "")
                .with_sub_action(
                    SubAction::new(1)
                        .with_target("b", true)
                        .with_else_target("c", false),
                )
                .with_sub_action(SubAction::new(1).with_else_target("d", true))
                .with_sub_action(SubAction::new(1).with_target("e", false))
                .with_sub_action(SubAction::new(1)),
        ]);

        let (edges, _) = build_edges(&actions);

        assert_eq!(
            edges,
            vec![
                edge("a", "b", EdgeKind::Primary, false),
                edge("a", "c", EdgeKind::Else, true),
                edge("a", "d", EdgeKind::Else, false),
                edge("a", "e", EdgeKind::Primary, true),
            ]
        );
    }

    #[test]
    fn test_edge_order_sub_actions_before_triggers() {
        let actions = ActionSet::new(vec![
            Action::new("a", "A", "")
                .with_trigger(133)
                .with_sub_action(SubAction::new(1).with_target("b", true)),
            Action::new("b", "B", "").with_trigger(101),
        ]);

        let (edges, usage) = build_edges(&actions);

        assert_eq!(
            edges,
            vec![
                edge("a", "b", EdgeKind::Primary, false),
                edge("133", "a", EdgeKind::Trigger, false),
                edge("101", "b", EdgeKind::Trigger, false),
            ]
        );
        assert_eq!(usage.iter().collect::<Vec<_>>(), vec![101, 133]);
    }

    #[test]
    fn test_repeated_trigger_marks_once_but_keeps_edges() {
        let actions = ActionSet::new(vec![
            Action::new("a", "A", "").with_trigger(101),
            Action::new("b", "B", "").with_trigger(101),
        ]);

        let (edges, usage) = build_edges(&actions);

        assert_eq!(edges.len(), 2);
        assert_eq!(usage.len(), 1);
    }

    #[test]
    fn test_trigger_nodes_only_for_used_and_known_kinds() {
        let mut usage = TriggerUsage::new();
        usage.mark(401);
        usage.mark(101);
        usage.mark(99_999);

        let nodes = filter_trigger_nodes(&usage, UnknownTriggerPolicy::Omit);

        assert_eq!(
            nodes
                .iter()
                .map(|n| (n.kind, n.label.as_str()))
                .collect::<Vec<_>>(),
            vec![(101, "Follow"), (401, "Command Triggered")]
        );
        assert_eq!(unknown_trigger_kinds(&usage), vec![99_999]);
    }

    #[test]
    fn test_fallback_policy_renders_unknown_kinds() {
        let mut usage = TriggerUsage::new();
        usage.mark(99_999);
        usage.mark(101);

        let nodes = filter_trigger_nodes(&usage, UnknownTriggerPolicy::Fallback);

        assert_eq!(nodes.len(), 2);
        assert!(nodes[0].known);
        assert_eq!(nodes[1].kind, 99_999);
        assert_eq!(nodes[1].label, "Unknown trigger 99999");
        assert!(!nodes[1].known);
    }

    #[test]
    fn test_build_is_deterministic() {
        let actions = ActionSet::new(vec![
            Action::new("a", "A", "b-group")
                .with_trigger(102)
                .with_trigger(101)
                .with_sub_action(SubAction::new(1).with_target("b", false)),
            Action::new("b", "B", "a-group").with_trigger(155),
        ]);

        let builder = ActionGraphBuilder::default();
        assert_eq!(builder.build(&actions), builder.build(&actions));
    }
}
