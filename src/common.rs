//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Path to the Streamer.bot actions.json export
    #[arg(
        short = 'i',
        long,
        value_name = "PATH",
        env = "SB_GRAPHVIZ_ACTIONS_FILE"
    )]
    pub actions_file: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = crate::constants::output::DEFAULT_FORMAT, env = "SB_GRAPHVIZ_FORMAT")]
    pub format: crate::cli::OutputFormat,
}

/// Common anomaly display arguments
#[derive(Args, Debug, Clone)]
pub struct AnomalyDisplayArgs {
    /// Maximum number of anomalies to display (shows all by default)
    #[arg(long, env = "SB_GRAPHVIZ_MAX_ANOMALIES")]
    pub max_anomalies: Option<usize>,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::SbGraphvizError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::SbGraphvizError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::SbGraphvizError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Build a "missing field" configuration error
pub(crate) fn missing_field(field: &str) -> crate::error::SbGraphvizError {
    crate::error::SbGraphvizError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
