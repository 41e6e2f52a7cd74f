//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::SbGraphvizError;
use crate::inspector::{ActionInspector, Severity};
use crate::utils::string::pluralize;

pub struct HumanReportGenerator {
    max_anomalies: Option<usize>,
}

impl HumanReportGenerator {
    pub fn new(max_anomalies: Option<usize>) -> Self {
        Self { max_anomalies }
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, inspector: &ActionInspector) -> Result<String, SbGraphvizError> {
        let mut output = String::new();

        if inspector.anomaly_count() == 0 {
            writeln!(
                output,
                "\n{} No anomalies found. Every sub-action and trigger maps cleanly onto the graph.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        let warnings = inspector.warning_count();
        let infos = inspector.anomaly_count() - warnings;
        writeln!(
            output,
            "\n{} Found {} {} and {} {}:\n",
            if warnings > 0 {
                style("⚠️").yellow().bold()
            } else {
                style("ℹ️").blue().bold()
            },
            style(warnings).yellow().bold(),
            pluralize("warning", warnings),
            style(infos).blue(),
            pluralize("note", infos)
        )?;

        let limit = self.max_anomalies.unwrap_or(usize::MAX);
        for anomaly in inspector.anomalies().iter().take(limit) {
            let marker = match anomaly.severity() {
                Severity::Warning => style("warning").yellow().bold(),
                Severity::Info => style("note").blue(),
            };
            writeln!(output, "  {} {}: {}", style("•").dim(), marker, anomaly)?;
        }

        if limit < inspector.anomaly_count() {
            writeln!(
                output,
                "\n{} Showing {} of {} anomalies. Use --max-anomalies to see more.",
                style("ℹ️").blue(),
                style(limit).yellow(),
                style(inspector.anomaly_count()).yellow()
            )?;
        }

        Ok(output)
    }
}
