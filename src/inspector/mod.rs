//! # Action Inspection Module
//!
//! This module finds data-shape anomalies that the renderer tolerates
//! silently: duplicate action ids, sub-actions pointing at missing actions,
//! trigger kinds missing from the catalog, and actions that invoke each other.
//!
//! ## Algorithm
//!
//! Invocation cycles are the strongly connected components of the
//! action→action graph, found with Tarjan's algorithm in O(V + E). A single
//! action only counts as a cycle when it invokes itself.
//!
//! ## Example
//!
//! ```
//! use sb_graphviz::core::{Action, ActionSet, SubAction};
//! use sb_graphviz::inspector::{ActionInspector, Anomaly};
//!
//! let actions = ActionSet::new(vec![
//!     Action::new("a", "A", "").with_sub_action(SubAction::new(1).with_target("b", true)),
//!     Action::new("b", "B", "").with_sub_action(SubAction::new(1).with_target("a", false)),
//! ]);
//!
//! let mut inspector = ActionInspector::new();
//! inspector.inspect(&actions);
//!
//! assert_eq!(
//!     inspector.anomalies(),
//!     &[Anomaly::InvocationCycle {
//!         actions: vec!["a".to_string(), "b".to_string()]
//!     }]
//! );
//! assert!(!inspector.has_warnings());
//! ```

mod inspector_impl;

pub use inspector_impl::*;
