//! # Graph Extraction and Rendering Module
//!
//! This module turns an action set into a graph model and renders that model
//! for Graphviz and friends.
//!
//! ## Components
//!
//! ### Graph Extraction
//! - **ActionGraphBuilder**: Runs node, cluster and edge extraction and
//!   filters trigger nodes by usage
//! - **ActionGraph**: The derived nodes, clusters and edges
//! - **TriggerUsage**: Trigger kinds referenced by at least one action
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Renders the model as DOT, Mermaid or JSON
//!
//! ## Example
//!
//! ```
//! use sb_graphviz::core::{Action, ActionSet, SubAction};
//! use sb_graphviz::graph::{ActionGraphBuilder, GraphRenderer, UnknownTriggerPolicy};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let actions = ActionSet::new(vec![
//!     Action::new("a", "Hello", "G1")
//!         .with_sub_action(SubAction::new(1).with_target("a", true))
//!         .with_trigger(101),
//! ]);
//!
//! let graph = ActionGraphBuilder::new(UnknownTriggerPolicy::Omit).build(&actions);
//!
//! let mut output = Vec::new();
//! GraphRenderer::new().render_dot(&graph, &mut output)?;
//!
//! let dot_output = String::from_utf8(output)?;
//! assert!(dot_output.contains(r#""101" -> "a" [color=green]"#));
//! assert!(dot_output.contains(r#""a" -> "a" [color=blue]"#));
//! # Ok(())
//! # }
//! ```

mod builder;
mod renderer;
mod types;

pub use builder::{
    ActionGraphBuilder, build_clusters, build_edges, extract_nodes, filter_trigger_nodes,
    unknown_trigger_kinds,
};
pub use renderer::GraphRenderer;
pub use types::{
    ActionGraph, ActionNode, Cluster, EdgeKind, GraphEdge, TriggerNode, TriggerUsage,
    UnknownTriggerPolicy,
};
