//! # sb-graphviz - Draw Streamer.bot Actions as a Graph
//!
//! sb-graphviz reads a Streamer.bot `actions.json` export and describes the
//! relationships between actions as a directed graph. Actions become nodes
//! grouped into clusters by their action group, triggers become diamond
//! nodes, and sub-actions that run other actions become edges.
//!
//! ## Main Components
//!
//! - **Actions parser**: Loads the export and normalizes it into an
//!   [`core::ActionSet`]
//! - **Graph**: Extracts nodes, clusters and edges and renders them as DOT,
//!   Mermaid or JSON
//! - **Inspector**: Finds data problems the rendered graph would hide
//! - **Reports**: Human-readable and JSON inspection reports
//!
//! ## Usage
//!
//! ### Rendering an Export
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sb_graphviz::actions_parser::ActionsFile;
//! use sb_graphviz::graph::{ActionGraphBuilder, GraphRenderer, UnknownTriggerPolicy};
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let actions = ActionsFile::parse_file(Path::new("actions.json"))?.into_action_set();
//!
//! let graph = ActionGraphBuilder::new(UnknownTriggerPolicy::Omit).build(&actions);
//! println!(
//!     "{} nodes, {} clusters, {} edges",
//!     graph.node_count(),
//!     graph.clusters.len(),
//!     graph.edge_count()
//! );
//!
//! let mut dot_output = Vec::new();
//! GraphRenderer::new().render_dot(&graph, &mut dot_output)?;
//! std::fs::write("sb.dot", dot_output).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```
//!
//! ### Inspecting an Export
//!
//! ```no_run
//! use std::path::Path;
//!
//! use sb_graphviz::actions_parser::ActionsFile;
//! use sb_graphviz::inspector::ActionInspector;
//! use sb_graphviz::reports::{HumanReportGenerator, ReportGenerator};
//!
//! # fn main() -> miette::Result<()> {
//! let actions = ActionsFile::parse_file(Path::new("actions.json"))?.into_action_set();
//!
//! let mut inspector = ActionInspector::new();
//! inspector.inspect(&actions);
//!
//! if inspector.has_warnings() {
//!     let report = HumanReportGenerator::new(Some(10)).generate_report(&inspector)?;
//!     print!("{report}");
//! }
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod actions_parser;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod inspector;
pub mod reports;
pub mod triggers;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
