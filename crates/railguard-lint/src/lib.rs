#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! # Railguard Lint
//!
//! Static enforcement of railway-style error handling in TypeScript sources.
//!
//! The crate parses `.ts`/`.tsx` files with tree-sitter, extracts every
//! function-like declaration, and checks that each one declares a
//! `Result`-shaped return type unless its name or annotation exempts it.
//!
//! ## Features
//!
//! - **Declaration extraction**: function declarations, expressions, arrows,
//!   and methods, with names resolved from the surrounding syntax
//! - **Configurable rule**: allowed types, exempt names, and exempt patterns
//!   merge over shipped defaults
//! - **Deterministic diagnostics**: stable messages with file, line, and
//!   column for editor and CI integration
//! - **Directory engine**: recursive scans with per-file error isolation

pub mod config;
pub mod declarations;
pub mod diagnostics;
pub mod engine;
pub mod error;
pub mod rule;
pub mod source;

/// Property-based tests for rule verdicts and type normalization
#[cfg(test)]
mod rule_properties;

pub use config::{RuleConfig, RuleConfigFile, RuleOverrides};
pub use declarations::{FunctionDecl, FunctionKind, ANONYMOUS_NAME};
pub use diagnostics::{Diagnostic, DiagnosticKind, RULE_NAME};
pub use engine::{LintEngine, LintReport, SkippedFile};
pub use error::{LintError, LintResult};
pub use rule::ResultReturnRule;
pub use source::{ParsedSource, SourceKind};
