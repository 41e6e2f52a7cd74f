use std::collections::HashMap;
use std::io::Write;

use miette::Result;

use crate::constants::output::DOT_GRAPH_NAME;
use crate::error::SbGraphvizError;
use crate::graph::{ActionGraph, EdgeKind};
use crate::utils::string::{escape_dot, escape_mermaid};

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(SbGraphvizError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(SbGraphvizError::from)
    };
}

const ACTION_PREFIX: &str = "a";
const TRIGGER_PREFIX: &str = "t";

/// Mermaid node ids assigned by first appearance
///
/// Action ids are arbitrary strings, so ids are numbered rather than
/// sanitized. Keys that only appear on edges still get their own id.
struct MermaidIds {
    prefix: &'static str,
    ids: HashMap<String, usize>,
}

impl MermaidIds {
    fn new(prefix: &'static str) -> Self {
        Self {
            prefix,
            ids: HashMap::new(),
        }
    }

    fn get(&mut self, key: &str) -> String {
        let next = self.ids.len();
        let index = match self.ids.get(key) {
            Some(&index) => index,
            None => {
                self.ids.insert(key.to_string(), next);
                next
            }
        };
        format!("{}{}", self.prefix, index)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GraphRenderer;

impl GraphRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the graph as a Graphviz DOT document
    pub fn render_dot(&self, graph: &ActionGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "digraph {} {{", DOT_GRAPH_NAME)?;
        writeln_out!(output, "  rankdir = \"LR\"")?;
        writeln_out!(output)?;

        for node in &graph.action_nodes {
            writeln_out!(
                output,
                "  \"{}\" [label=\"{}\" shape=box style=rounded]",
                escape_dot(&node.id),
                escape_dot(&node.label)
            )?;
        }
        for node in &graph.trigger_nodes {
            writeln_out!(
                output,
                "  \"{}\" [label=\"{}\" shape=diamond]",
                node.kind,
                escape_dot(&node.label)
            )?;
        }

        writeln_out!(output)?;

        for cluster in &graph.clusters {
            writeln_out!(output, "  subgraph {} {{", cluster.name)?;
            writeln_out!(output, "    label = \"{}\";", escape_dot(&cluster.label))?;
            for member in &cluster.members {
                writeln_out!(output, "    \"{}\";", escape_dot(member))?;
            }
            writeln_out!(output, "  }}")?;
            writeln_out!(output)?;
        }

        for edge in &graph.edges {
            let style = if edge.deferred { " style=dashed" } else { "" };
            writeln_out!(
                output,
                "  \"{}\" -> \"{}\" [color={}{}]",
                escape_dot(&edge.from),
                escape_dot(&edge.to),
                edge.kind.color(),
                style
            )?;
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    /// Render the graph as a Mermaid flowchart
    pub fn render_mermaid(&self, graph: &ActionGraph, output: &mut dyn Write) -> Result<()> {
        writeln_out!(output, "graph LR")?;

        let mut action_ids = MermaidIds::new(ACTION_PREFIX);
        let mut trigger_ids = MermaidIds::new(TRIGGER_PREFIX);

        for node in &graph.action_nodes {
            writeln_out!(
                output,
                "    {}(\"{}\")",
                action_ids.get(&node.id),
                escape_mermaid(&node.label)
            )?;
        }
        for node in &graph.trigger_nodes {
            writeln_out!(
                output,
                "    {}{{\"{}\"}}",
                trigger_ids.get(&node.key()),
                escape_mermaid(&node.label)
            )?;
        }

        for cluster in &graph.clusters {
            // Mermaid rejects an empty subgraph title
            let label = if cluster.label.is_empty() {
                " ".to_string()
            } else {
                escape_mermaid(&cluster.label)
            };

            writeln_out!(output)?;
            writeln_out!(output, "    subgraph {}[\"{}\"]", cluster.name, label)?;
            for member in &cluster.members {
                writeln_out!(output, "        {}", action_ids.get(member))?;
            }
            writeln_out!(output, "    end")?;
        }

        if graph.edges.is_empty() {
            return Ok(());
        }

        writeln_out!(output)?;
        for edge in &graph.edges {
            let from = match edge.kind {
                EdgeKind::Trigger => trigger_ids.get(&edge.from),
                EdgeKind::Primary | EdgeKind::Else => action_ids.get(&edge.from),
            };
            let arrow = if edge.deferred { "-.->" } else { "-->" };
            writeln_out!(
                output,
                "    {} {} {}",
                from,
                arrow,
                action_ids.get(&edge.to)
            )?;
        }

        // linkStyle addresses edges by their declaration index
        for kind in [EdgeKind::Primary, EdgeKind::Else, EdgeKind::Trigger] {
            let indices: Vec<String> = graph
                .edges
                .iter()
                .enumerate()
                .filter(|(_, e)| e.kind == kind)
                .map(|(i, _)| i.to_string())
                .collect();

            if !indices.is_empty() {
                writeln_out!(
                    output,
                    "    linkStyle {} stroke:{}",
                    indices.join(","),
                    kind.color()
                )?;
            }
        }

        Ok(())
    }

    /// Render the graph model as pretty-printed JSON
    pub fn render_json(&self, graph: &ActionGraph, output: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *output, graph).map_err(SbGraphvizError::from)?;
        writeln_out!(output)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::graph::{ActionNode, Cluster, GraphEdge, TriggerNode};

    fn sample_graph() -> ActionGraph {
        ActionGraph {
            action_nodes: vec![
                ActionNode {
                    id: "a-1".to_string(),
                    label: "Hello".to_string(),
                },
                ActionNode {
                    id: "a-2".to_string(),
                    label: "Say \"bye\"".to_string(),
                },
            ],
            trigger_nodes: vec![TriggerNode {
                kind: 101,
                label: "Follow".to_string(),
                known: true,
            }],
            clusters: vec![Cluster {
                name: "cluster_0".to_string(),
                label: "G1".to_string(),
                members: vec!["a-1".to_string(), "a-2".to_string()],
            }],
            edges: vec![
                GraphEdge::new("a-1", "a-2", EdgeKind::Primary),
                GraphEdge::new("a-1", "a-2", EdgeKind::Else).with_deferred(true),
                GraphEdge::new("101", "a-1", EdgeKind::Trigger),
            ],
            unknown_trigger_kinds: vec![],
        }
    }

    #[test]
    fn test_render_dot_document() {
        let mut output = Vec::new();
        GraphRenderer::new()
            .render_dot(&sample_graph(), &mut output)
            .unwrap();

        let expected = r#"digraph streamerbot {
  rankdir = "LR"

  "a-1" [label="Hello" shape=box style=rounded]
  "a-2" [label="Say \"bye\"" shape=box style=rounded]
  "101" [label="Follow" shape=diamond]

  subgraph cluster_0 {
    label = "G1";
    "a-1";
    "a-2";
  }

  "a-1" -> "a-2" [color=blue]
  "a-1" -> "a-2" [color=red style=dashed]
  "101" -> "a-1" [color=green]
}
"#;
        assert_eq!(String::from_utf8(output).unwrap(), expected);
    }

    #[test]
    fn test_render_dot_empty_graph() {
        let mut output = Vec::new();
        GraphRenderer::new()
            .render_dot(&ActionGraph::default(), &mut output)
            .unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "digraph streamerbot {\n  rankdir = \"LR\"\n\n\n}\n"
        );
    }

    #[test]
    fn test_render_mermaid() {
        let mut output = Vec::new();
        GraphRenderer::new()
            .render_mermaid(&sample_graph(), &mut output)
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.starts_with("graph LR\n"));
        assert!(result.contains("    a0(\"Hello\")"));
        assert!(result.contains("    a1(\"Say #quot;bye#quot;\")"));
        assert!(result.contains("    t0{\"Follow\"}"));
        assert!(result.contains("    subgraph cluster_0[\"G1\"]\n        a0\n        a1\n    end"));
        assert!(result.contains("    a0 --> a1"));
        assert!(result.contains("    a0 -.-> a1"));
        assert!(result.contains("    t0 --> a0"));
        assert!(result.contains("    linkStyle 0 stroke:blue"));
        assert!(result.contains("    linkStyle 1 stroke:red"));
        assert!(result.contains("    linkStyle 2 stroke:green"));
    }

    #[test]
    fn test_render_mermaid_keeps_similar_ids_apart() {
        let graph = ActionGraph {
            action_nodes: vec![
                ActionNode {
                    id: "a-1".to_string(),
                    label: "Dash".to_string(),
                },
                ActionNode {
                    id: "a_1".to_string(),
                    label: "Underscore".to_string(),
                },
            ],
            edges: vec![
                GraphEdge::new("a-1", "a_1", EdgeKind::Primary),
                GraphEdge::new("a_1", "missing", EdgeKind::Else),
                GraphEdge::new("99999", "a-1", EdgeKind::Trigger),
            ],
            ..ActionGraph::default()
        };

        let mut output = Vec::new();
        GraphRenderer::new()
            .render_mermaid(&graph, &mut output)
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("    a0(\"Dash\")"));
        assert!(result.contains("    a1(\"Underscore\")"));
        assert!(result.contains("    a0 --> a1"));
        assert!(result.contains("    a1 --> a2"));
        assert!(result.contains("    t0 --> a0"));
        assert!(!result.contains("a0 --> a0"));
    }

    #[test]
    fn test_render_mermaid_empty_group_label() {
        let graph = ActionGraph {
            action_nodes: vec![ActionNode {
                id: "x".to_string(),
                label: "X".to_string(),
            }],
            clusters: vec![Cluster {
                name: "cluster_0".to_string(),
                label: String::new(),
                members: vec!["x".to_string()],
            }],
            ..ActionGraph::default()
        };

        let mut output = Vec::new();
        GraphRenderer::new()
            .render_mermaid(&graph, &mut output)
            .unwrap();

        let result = String::from_utf8(output).unwrap();
        assert!(result.contains("subgraph cluster_0[\" \"]"));
        assert!(!result.contains("linkStyle"));
    }

    #[test]
    fn test_render_json() {
        let mut output = Vec::new();
        GraphRenderer::new()
            .render_json(&sample_graph(), &mut output)
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["action_nodes"].as_array().unwrap().len(), 2);
        assert_eq!(value["trigger_nodes"][0]["label"], "Follow");
        assert_eq!(value["edges"][1]["kind"], "else");
        assert_eq!(value["edges"][1]["deferred"], true);
        assert_eq!(value["clusters"][0]["members"][1], "a-2");
    }
}
