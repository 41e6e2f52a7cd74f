//! Inspect command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::actions_parser::ActionsFile;
use crate::cli::OutputFormat;
use crate::config::InspectOptions;
use crate::executors::CommandExecutor;
use crate::inspector::ActionInspector;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::utils::string::pluralize;

pub struct InspectExecutor;

impl CommandExecutor for InspectExecutor {
    type Config = InspectOptions;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Inspecting Streamer.bot actions...\n",
            style("🔍").cyan()
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

        let mut inspector = ActionInspector::new();
        inspector.inspect(&actions);

        let report_result = match config.format {
            OutputFormat::Human => {
                HumanReportGenerator::new(config.max_anomalies).generate_report(&inspector)
            }
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&inspector),
        };

        let report = report_result
            .into_diagnostic()
            .wrap_err("Failed to generate report")?;
        print!("{report}");

        if config.error_on_anomalies && inspector.has_warnings() {
            std::process::exit(1);
        }

        Ok(())
    }
}
