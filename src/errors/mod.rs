//! Error types for the analyzer.
//!
//! Only failures that abort a run live here: a source that cannot be opened
//! or read. Findings about the analyzed code are diagnostics, see
//! [`crate::checker::diagnostics`].

pub mod errors;
