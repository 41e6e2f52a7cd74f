use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in actions file '{file}'")]
#[diagnostic(
    code(sb_graphviz::actions_parse_error),
    help("Check that the file is a Streamer.bot actions export and that its JSON is intact")
)]
pub struct ActionsParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("parse error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum SbGraphvizError {
    #[error("Failed to read actions file '{path}'")]
    #[diagnostic(
        code(sb_graphviz::input_unreadable),
        help("Check if the file exists and you have read permissions")
    )]
    ActionsFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    ActionsParseError(Box<ActionsParseError>),

    #[error("Cannot create output file '{path}'")]
    #[diagnostic(
        code(sb_graphviz::output_error),
        help("Check that the parent directory exists and is writable")
    )]
    OutputCreateError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(sb_graphviz::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(sb_graphviz::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(sb_graphviz::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(sb_graphviz::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
