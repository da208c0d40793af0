//! Declaration tracking.
//!
//! The table maps an identifier to the type it was first declared with and the
//! line of that declaration. It is append-only for the length of a run: later
//! declarations of the same name are ignored.

pub mod declarations;

#[cfg(test)]
mod tests;

pub use declarations::{Declaration, DeclarationTable, Recorded, UNKNOWN_TYPE};
