//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::SbGraphvizError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, SbGraphvizError> {
        match command {
            Commands::Render {
                input,
                format,
                output,
                unknown_triggers,
            } => RenderOptions::builder()
                .with_actions_file(input.actions_file)
                .with_format(format)
                .with_output(output)
                .with_unknown_triggers(unknown_triggers)
                .build(),
            _ => Err(SbGraphvizError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
