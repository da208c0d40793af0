//! Plain-text rendering of an analysis run.

pub mod report;
