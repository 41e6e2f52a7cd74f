//! Inspect command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InspectOptions;
use crate::error::SbGraphvizError;

impl FromCommand for InspectOptions {
    fn from_command(command: Commands) -> Result<Self, SbGraphvizError> {
        match command {
            Commands::Inspect {
                input,
                format,
                anomaly_display,
                error_on_anomalies,
            } => InspectOptions::builder()
                .with_actions_file(input.actions_file)
                .with_format(format.format)
                .with_max_anomalies(anomaly_display.max_anomalies)
                .with_error_on_anomalies(error_on_anomalies)
                .build(),
            _ => Err(SbGraphvizError::ConfigurationError {
                message: "Invalid command type for InspectOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InspectOptions);

/// Execute the inspect command
pub fn execute_inspect_command(command: Commands) -> Result<()> {
    let config = InspectOptions::from_command(command)
        .wrap_err("Failed to parse inspect command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::inspect::InspectExecutor;
    InspectExecutor::execute(config)
}
