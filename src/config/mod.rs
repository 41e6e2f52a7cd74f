//! # Configuration Module
//!
//! This module provides configuration structures for the sb-graphviz
//! commands. Each command has its own config module with a builder.
//!
//! ## Command Configurations
//!
//! - **RenderOptions**: Configuration for the `render` command
//! - **InspectOptions**: Configuration for the `inspect` command
//!
//! ## Example
//!
//! ```
//! use sb_graphviz::cli::{GraphFormat, OutputFormat};
//! use sb_graphviz::common::ConfigBuilder;
//! use sb_graphviz::config::{InspectOptions, RenderOptions};
//!
//! let render = RenderOptions::builder()
//!     .with_actions_file("actions.json".into())
//!     .with_format(GraphFormat::Dot)
//!     .with_output(Some("sb.dot".into()))
//!     .build()
//!     .unwrap();
//! assert_eq!(render.format, GraphFormat::Dot);
//!
//! let inspect = InspectOptions::builder()
//!     .with_actions_file("actions.json".into())
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_anomalies(true)
//!     .build()
//!     .unwrap();
//! assert!(inspect.error_on_anomalies);
//! ```

pub mod inspect;
pub mod render;

pub use inspect::InspectOptions;
pub use render::RenderOptions;
