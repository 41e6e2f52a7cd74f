//! Inspect command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the inspect command
#[derive(Debug, Clone)]
pub struct InspectOptions {
    /// Streamer.bot actions export to inspect
    pub actions_file: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Maximum number of anomalies to report (None = all)
    pub max_anomalies: Option<usize>,
    /// Whether to exit with error code if warnings are found
    pub error_on_anomalies: bool,
}

impl InspectOptions {
    pub fn builder() -> InspectOptionsBuilder {
        InspectOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct InspectOptionsBuilder {
    actions_file: Option<PathBuf>,
    format: Option<OutputFormat>,
    max_anomalies: Option<Option<usize>>,
    error_on_anomalies: Option<bool>,
}

impl InspectOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions_file(mut self, actions_file: PathBuf) -> Self {
        self.actions_file = Some(actions_file);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_max_anomalies(mut self, max_anomalies: Option<usize>) -> Self {
        self.max_anomalies = Some(max_anomalies);
        self
    }

    pub fn with_error_on_anomalies(mut self, error_on_anomalies: bool) -> Self {
        self.error_on_anomalies = Some(error_on_anomalies);
        self
    }
}

impl crate::common::ConfigBuilder for InspectOptionsBuilder {
    type Config = InspectOptions;

    fn build(self) -> Result<Self::Config, crate::error::SbGraphvizError> {
        Ok(InspectOptions {
            actions_file: self
                .actions_file
                .ok_or_else(|| missing_field("actions_file"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            max_anomalies: self.max_anomalies.flatten(),
            error_on_anomalies: self.error_on_anomalies.unwrap_or(false),
        })
    }
}
