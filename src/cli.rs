use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{AnomalyDisplayArgs, FormatArgs, InputArgs};
use crate::graph::UnknownTriggerPolicy;

#[derive(Parser)]
#[command(
    name = "sb-graphviz",
    about = "Render Streamer.bot actions as a Graphviz dependency graph",
    long_about = "sb-graphviz reads a Streamer.bot actions.json export and describes how actions \
                  invoke each other and which triggers start them. Actions become nodes grouped \
                  by their action group, triggers become diamonds, and sub-actions that run \
                  other actions become colored edges.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the action graph
    ///
    /// Writes one node per action, one diamond per trigger in use, one
    /// cluster per action group and one edge per action invocation or
    /// trigger. Primary invocations are blue, else branches red and triggers
    /// green; invocations that do not run immediately are dashed.
    #[command(
        long_about = "Render the action graph of a Streamer.bot export. The DOT output is meant \
                      for Graphviz (for example `dot -Tsvg sb.dot -o sb.svg`). Mermaid and JSON \
                      renderings of the same graph are also available."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Graph format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_GRAPH_FORMAT,
            env = "SB_GRAPHVIZ_GRAPH_FORMAT"
        )]
        format: GraphFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "SB_GRAPHVIZ_OUTPUT")]
        output: Option<PathBuf>,

        /// How to render trigger kinds missing from the built-in catalog
        #[arg(
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_UNKNOWN_TRIGGERS,
            env = "SB_GRAPHVIZ_UNKNOWN_TRIGGERS"
        )]
        unknown_triggers: UnknownTriggerPolicy,
    },

    /// Report data problems the graph would hide
    ///
    /// Lists duplicate action ids, sub-actions that run missing actions,
    /// trigger kinds missing from the catalog and actions that invoke each
    /// other.
    #[command(
        long_about = "Inspect a Streamer.bot export for anomalies that rendering tolerates \
                      silently. Duplicate ids collapse nodes, missing targets and unknown trigger \
                      kinds leave edges without nodes. Invocation cycles are legal and reported as \
                      notes."
    )]
    Inspect {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,

        #[command(flatten)]
        anomaly_display: AnomalyDisplayArgs,

        /// Exit with error code if warnings are found
        #[arg(long, env = "SB_GRAPHVIZ_ERROR_ON_ANOMALIES")]
        error_on_anomalies: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum GraphFormat {
    Dot,
    Mermaid,
    Json,
}
