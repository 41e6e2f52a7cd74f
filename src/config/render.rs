//! Render command configuration

use std::path::PathBuf;

use crate::cli::GraphFormat;
use crate::common::missing_field;
use crate::graph::UnknownTriggerPolicy;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub actions_file: PathBuf,
    pub format: GraphFormat,
    pub output: Option<PathBuf>,
    pub unknown_triggers: UnknownTriggerPolicy,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    actions_file: Option<PathBuf>,
    format: Option<GraphFormat>,
    output: Option<Option<PathBuf>>,
    unknown_triggers: Option<UnknownTriggerPolicy>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_actions_file(mut self, actions_file: PathBuf) -> Self {
        self.actions_file = Some(actions_file);
        self
    }

    pub fn with_format(mut self, format: GraphFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_unknown_triggers(mut self, unknown_triggers: UnknownTriggerPolicy) -> Self {
        self.unknown_triggers = Some(unknown_triggers);
        self
    }
}

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, crate::error::SbGraphvizError> {
        Ok(RenderOptions {
            actions_file: self
                .actions_file
                .ok_or_else(|| missing_field("actions_file"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            unknown_triggers: self.unknown_triggers.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_builder_complete() {
        let options = RenderOptions::builder()
            .with_actions_file(PathBuf::from("actions.json"))
            .with_format(GraphFormat::Mermaid)
            .with_output(Some(PathBuf::from("sb.mmd")))
            .build()
            .unwrap();

        assert_eq!(options.format, GraphFormat::Mermaid);
        assert_eq!(options.output, Some(PathBuf::from("sb.mmd")));
        assert_eq!(options.unknown_triggers, UnknownTriggerPolicy::Omit);
    }

    #[test]
    fn test_builder_missing_actions_file() {
        let err = RenderOptions::builder()
            .with_format(GraphFormat::Dot)
            .with_output(None)
            .build()
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "Configuration error: Missing required field: actions_file"
        );
    }
}
