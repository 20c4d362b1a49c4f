#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Railguard Outcome
//!
//! Railway-style error propagation: a two-variant success/failure container
//! and the combinators for composing fallible steps without exceptions.
//!
//! ## Features
//!
//! - **Explicit outcomes**: every fallible operation returns an [`Outcome`],
//!   never throws; failures are plain data
//! - **Composable pipelines**: `map`, `and_then`, `or_else` and `fold` build
//!   multi-step flows that short-circuit on the first failure
//! - **Domain failure taxonomy**: [`Fault`] covers the expected, recoverable
//!   failure categories (validation, not-found, conflict, dependency)
//! - **Ambient interop**: lossless conversion to and from
//!   `std::result::Result` at boundaries that use `?`

pub mod fault;
pub mod outcome;

/// Property-based tests for the outcome combinator laws
#[cfg(test)]
mod outcome_properties;

pub use fault::{Fault, FaultOutcome};
pub use outcome::Outcome;
