//! Parsing of Streamer.bot `actions.json` exports
//!
//! The raw structs mirror the export format. Converting them into the core
//! model is where the format's quirks are absorbed: sentinel and empty target
//! ids become `None`, and the two spellings of the immediate flag are OR'ed.

use std::path::Path;

use miette::{NamedSource, SourceSpan};
use serde::Deserialize;

use crate::constants::actions::EMPTY_ACTION_ID;
use crate::core::{Action, ActionSet, InvocationTarget, SubAction, TriggerRef};
use crate::error::{ActionsParseError, SbGraphvizError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionsFile {
    pub actions: Option<Vec<RawAction>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAction {
    pub id: Option<String>,
    pub name: Option<String>,
    pub group: Option<String>,
    pub actions: Option<Vec<RawSubAction>>,
    pub triggers: Option<Vec<RawTrigger>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSubAction {
    #[serde(rename = "type")]
    pub kind: Option<i64>,
    pub action_id: Option<String>,
    pub run_immediately: Option<bool>,
    /// Misspelled key found in real exports
    pub run_immedately: Option<bool>,
    pub else_action_id: Option<String>,
    pub else_run_immediately: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawTrigger {
    #[serde(rename = "type")]
    pub kind: Option<i64>,
}

impl ActionsFile {
    pub fn parse_file(path: &Path) -> Result<Self, SbGraphvizError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SbGraphvizError::ActionsFileRead {
                path: path.to_path_buf(),
                source: e,
            })?;

        Self::parse_str(&content, &path.display().to_string())
    }

    pub fn parse_str(content: &str, file_name: &str) -> Result<Self, SbGraphvizError> {
        serde_json::from_str(content).map_err(|e| {
            let span = byte_offset(content, e.line(), e.column()).map(|offset| {
                let len = usize::from(offset < content.len());
                SourceSpan::new(offset.into(), len)
            });

            SbGraphvizError::ActionsParseError(Box::new(ActionsParseError {
                file: file_name.to_string(),
                source_code: NamedSource::new(file_name, content.to_string()),
                span,
                source: e,
            }))
        })
    }

    /// Convert the raw export into the normalized action model
    pub fn into_action_set(self) -> ActionSet {
        ActionSet::new(
            self.actions
                .unwrap_or_default()
                .into_iter()
                .map(RawAction::into_action)
                .collect(),
        )
    }
}

impl RawAction {
    fn into_action(self) -> Action {
        Action {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            group: self.group.unwrap_or_default(),
            sub_actions: self
                .actions
                .unwrap_or_default()
                .into_iter()
                .map(RawSubAction::into_sub_action)
                .collect(),
            triggers: self
                .triggers
                .unwrap_or_default()
                .into_iter()
                .map(|t| TriggerRef {
                    kind: t.kind.unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl RawSubAction {
    /// Either spelling of the flag marks the primary target as immediate
    pub fn is_immediate(&self) -> bool {
        self.run_immediately.unwrap_or(false) || self.run_immedately.unwrap_or(false)
    }

    fn into_sub_action(self) -> SubAction {
        let immediate = self.is_immediate();
        SubAction {
            kind: self.kind.unwrap_or_default(),
            target: normalize_target(self.action_id)
                .map(|id| InvocationTarget::new(id, immediate)),
            else_target: normalize_target(self.else_action_id).map(|id| {
                InvocationTarget::new(id, self.else_run_immediately.unwrap_or(false))
            }),
        }
    }
}

/// Map the sentinel and empty ids to `None`
fn normalize_target(action_id: Option<String>) -> Option<String> {
    action_id.filter(|id| !id.is_empty() && id != EMPTY_ACTION_ID)
}

/// Convert serde_json's 1-based line/column into a byte offset
fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let line_start: usize = content
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();

    Some((line_start + column.saturating_sub(1)).min(content.len()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_parse_actions_file() {
        let json = r#"{
  "actions": [
    {
      "id": "a-1",
      "name": "Hello",
      "group": "G1",
      "queue": "ignored",
      "actions": [
        {
          "type": 1,
          "actionId": "a-2",
          "runImmediately": true,
          "elseActionId": "00000000-0000-0000-0000-000000000000"
        }
      ],
      "triggers": [{ "id": "t-1", "type": 101 }]
    },
    { "id": "a-2", "name": "World", "group": "" }
  ]
}"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let set = ActionsFile::parse_file(file.path())
            .unwrap()
            .into_action_set();

        assert_eq!(set.len(), 2);
        let hello = &set.actions()[0];
        assert_eq!(hello.id, "a-1");
        assert_eq!(hello.name, "Hello");
        assert_eq!(hello.group, "G1");
        assert_eq!(hello.triggers, vec![TriggerRef { kind: 101 }]);
        assert_eq!(
            hello.sub_actions,
            vec![SubAction::new(1).with_target("a-2", true)]
        );

        let world = &set.actions()[1];
        assert!(world.sub_actions.is_empty());
        assert!(world.triggers.is_empty());
        assert_eq!(world.group, "");
    }

    #[test]
    fn test_misspelled_immediate_flag() {
        let json = r#"{"actions": [{"id": "a", "actions": [
            {"type": 1, "actionId": "b", "runImmedately": true},
            {"type": 1, "actionId": "c", "runImmediately": true, "runImmedately": false},
            {"type": 1, "actionId": "d", "runImmediately": false, "runImmedately": false},
            {"type": 1, "actionId": "e"}
        ]}]}"#;

        let set = ActionsFile::parse_str(json, "actions.json")
            .unwrap()
            .into_action_set();
        let flags: Vec<bool> = set.actions()[0]
            .sub_actions
            .iter()
            .map(|s| s.target.as_ref().unwrap().immediate)
            .collect();

        assert_eq!(flags, vec![true, true, false, false]);
    }

    #[test]
    fn test_sentinel_and_empty_targets_are_absent() {
        let json = r#"{"actions": [{"id": "a", "actions": [
            {"type": 1, "actionId": "00000000-0000-0000-0000-000000000000", "elseActionId": ""},
            {"type": 1, "actionId": null, "elseActionId": "b", "elseRunImmediately": true}
        ]}]}"#;

        let set = ActionsFile::parse_str(json, "actions.json")
            .unwrap()
            .into_action_set();
        let subs = &set.actions()[0].sub_actions;

        assert_eq!(subs[0].target, None);
        assert_eq!(subs[0].else_target, None);
        assert_eq!(subs[1].target, None);
        assert_eq!(subs[1].else_target, Some(InvocationTarget::new("b", true)));
    }

    #[test]
    fn test_missing_actions_key_is_empty_set() {
        let set = ActionsFile::parse_str("{}", "actions.json")
            .unwrap()
            .into_action_set();
        assert!(set.is_empty());
    }

    #[test]
    fn test_invalid_json_points_at_error() {
        let json = "{\n  \"actions\": [\n    {\"id\": }\n  ]\n}";
        let err = ActionsFile::parse_str(json, "broken.json").unwrap_err();

        match err {
            SbGraphvizError::ActionsParseError(parse_err) => {
                assert_eq!(parse_err.file, "broken.json");
                let span = parse_err.span.expect("span should be derived from line/column");
                assert_eq!(&json[span.offset()..span.offset() + 1], "}");
            }
            other => panic!("Expected ActionsParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = ActionsFile::parse_file(Path::new("/nonexistent/actions.json")).unwrap_err();
        assert!(matches!(err, SbGraphvizError::ActionsFileRead { .. }));
    }

    #[test]
    fn test_byte_offset() {
        let content = "ab\ncd\nef";
        assert_eq!(byte_offset(content, 1, 1), Some(0));
        assert_eq!(byte_offset(content, 2, 2), Some(4));
        assert_eq!(byte_offset(content, 3, 1), Some(6));
        assert_eq!(byte_offset(content, 0, 0), None);
        assert_eq!(byte_offset(content, 9, 9), Some(content.len()));
    }
}
