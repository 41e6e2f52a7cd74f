//! Core data types and structures
//!
//! This module contains the action model used throughout sb-graphviz,
//! separated from parsing and graph extraction.

pub mod types;

pub use types::*;
