//! Command implementations for the sb-graphviz CLI
//!
//! - render: Draw the action graph as DOT, Mermaid or JSON
//! - inspect: Report anomalies in the actions export

pub mod inspect;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Inspect { .. } => inspect::execute_inspect_command(command),
    }
}
