//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::actions_parser::ActionsFile;
use crate::cli::GraphFormat;
use crate::config::RenderOptions;
use crate::core::TriggerKind;
use crate::error::SbGraphvizError;
use crate::executors::CommandExecutor;
use crate::graph::{ActionGraphBuilder, GraphRenderer, UnknownTriggerPolicy};
use crate::utils::string::pluralize;

pub struct RenderExecutor;

/// Warning line for a referenced trigger kind the catalog does not know
pub fn unknown_trigger_warning(kind: TriggerKind, policy: UnknownTriggerPolicy) -> String {
    let consequence = match policy {
        UnknownTriggerPolicy::Omit => "its edges point at a node that is not drawn",
        UnknownTriggerPolicy::Fallback => "drawn with a placeholder label",
    };
    format!("Unknown trigger kind {kind}: {consequence}")
}

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Generating {} action graph...",
            style("📊").cyan(),
            format!("{:?}", config.format).to_lowercase()
        );

        let actions = ActionsFile::parse_file(&config.actions_file)
            .wrap_err("Failed to load actions")?
            .into_action_set();

        eprintln!(
            "  {} Loaded {} {} from {}",
            style("→").dim(),
            style(actions.len()).yellow(),
            pluralize("action", actions.len()),
            style(config.actions_file.display()).dim()
        );

        let graph = ActionGraphBuilder::new(config.unknown_triggers).build(&actions);

        for &kind in &graph.unknown_trigger_kinds {
            eprintln!(
                "{} {}",
                style("⚠").yellow().bold(),
                style(unknown_trigger_warning(kind, config.unknown_triggers)).yellow()
            );
        }

        // Render fully before touching the output so failures leave no partial file
        let renderer = GraphRenderer::new();
        let mut rendered = Vec::new();
        match config.format {
            GraphFormat::Dot => renderer
                .render_dot(&graph, &mut rendered)
                .wrap_err("Failed to render DOT graph")?,
            GraphFormat::Mermaid => renderer
                .render_mermaid(&graph, &mut rendered)
                .wrap_err("Failed to render Mermaid graph")?,
            GraphFormat::Json => renderer
                .render_json(&graph, &mut rendered)
                .wrap_err("Failed to render JSON graph")?,
        }

        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            let file = File::create(output_path).map_err(|e| SbGraphvizError::OutputCreateError {
                path: output_path.clone(),
                source: e,
            })?;
            Box::new(BufWriter::new(file))
        } else {
            Box::new(io::stdout())
        };

        output_writer
            .write_all(&rendered)
            .and_then(|()| output_writer.flush())
            .into_diagnostic()
            .wrap_err("Failed to write graph")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {} ({} {}, {} {})",
                style("✓").green(),
                style(output_path.display()).bold(),
                graph.node_count(),
                pluralize("node", graph.node_count()),
                graph.edge_count(),
                pluralize("edge", graph.edge_count())
            );
        }

        Ok(())
    }
}
