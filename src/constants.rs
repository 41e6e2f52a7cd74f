//! Configuration constants for sb-graphviz
//!
//! This module contains the fixed values shared by the parser, the graph
//! extraction and the command line defaults.

/// Input format conventions
pub mod actions {
    use crate::core::SubActionKind;

    /// Target id meaning "no action to run"
    pub const EMPTY_ACTION_ID: &str = "00000000-0000-0000-0000-000000000000";

    /// Sub-action kinds that never run another action
    pub const SKIP_SUB_ACTION_KINDS: &[SubActionKind] = &[
        1004, // Set Action State
    ];

    /// Whether a sub-action kind is excluded from edge generation
    pub fn is_skipped(kind: SubActionKind) -> bool {
        SKIP_SUB_ACTION_KINDS.contains(&kind)
    }
}

/// Output formatting configuration
pub mod output {
    /// Default report format for the inspect command
    pub const DEFAULT_FORMAT: &str = "human";

    /// Default format for the render command
    pub const DEFAULT_GRAPH_FORMAT: &str = "dot";

    /// Default handling of trigger kinds missing from the catalog
    pub const DEFAULT_UNKNOWN_TRIGGERS: &str = "omit";

    /// Name of the emitted DOT graph
    pub const DOT_GRAPH_NAME: &str = "streamerbot";
}
