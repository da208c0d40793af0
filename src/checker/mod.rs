//! Heuristic diagnostics over a scanned token stream.
//!
//! The checker makes one pass over the tokens in scan order and reports:
//!
//! - E1 type mismatches on `IDENT = VALUE` against the declaration table
//! - E2 identifiers that look like misspelled keywords
//! - E3 identifiers used without a prior declaration
//! - E4 relational operators without two operands
//!
//! Kotlin `var`/`val` initializers are type-checked by the scanner itself,
//! through the same compatibility rules in [`compatibility`].

pub mod checker;
pub mod compatibility;
pub mod diagnostics;
