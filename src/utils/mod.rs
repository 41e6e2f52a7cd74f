//! Small helpers shared by renderers and reports

pub mod string;
