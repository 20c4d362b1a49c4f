//! Directory-walking lint engine

use std::fmt;
use std::path::Path;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::config::RuleConfig;
use crate::diagnostics::Diagnostic;
use crate::error::{LintError, LintResult};
use crate::rule::ResultReturnRule;
use crate::source::{ParsedSource, SourceKind};

/// Directory names never descended into.
const EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build", "coverage"];

/// A file the engine could not lint, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    /// Path as walked
    pub path: String,
    /// Human-readable reason
    pub reason: String,
}

/// Aggregated result of one lint run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintReport {
    /// Violations in path order
    pub diagnostics: Vec<Diagnostic>,
    /// Files parsed and checked
    pub files_checked: usize,
    /// Files skipped with their reasons
    pub skipped: Vec<SkippedFile>,
    /// Wall-clock duration of the run
    pub elapsed_ms: u64,
}

impl LintReport {
    fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
            files_checked: 0,
            skipped: Vec::new(),
            elapsed_ms: 0,
        }
    }

    /// Whether any violation was reported.
    pub fn has_violations(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Lint Report:")?;
        writeln!(f, "  Files checked: {}", self.files_checked)?;
        writeln!(f, "  Files skipped: {}", self.skipped.len())?;
        writeln!(f, "  Violations: {}", self.diagnostics.len())?;
        write!(f, "  Elapsed: {} ms", self.elapsed_ms)
    }
}

/// Applies the rule across a file tree.
///
/// Per-file failures are recorded and logged, never fatal: one unreadable
/// file must not hide violations in the rest of the tree.
pub struct LintEngine {
    rule: ResultReturnRule,
}

impl LintEngine {
    /// Build an engine with a compiled rule.
    pub fn new(config: RuleConfig) -> LintResult<Self> {
        Ok(Self {
            rule: ResultReturnRule::new(config)?,
        })
    }

    /// The compiled rule driving this engine.
    pub fn rule(&self) -> &ResultReturnRule {
        &self.rule
    }

    /// Lint a single file or a directory tree.
    pub fn run(&self, root: &Path) -> LintResult<LintReport> {
        let started = Instant::now();
        let mut report = LintReport::new();

        if root.is_file() {
            self.lint_file(root, &mut report);
        } else if root.is_dir() {
            let walker = WalkDir::new(root)
                .follow_links(false)
                .sort_by_file_name()
                .into_iter()
                .filter_entry(|e| e.depth() == 0 || !excluded_dir(e));
            for entry in walker {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        let path = err
                            .path()
                            .map(|p| p.display().to_string())
                            .unwrap_or_else(|| root.display().to_string());
                        warn!("walk error at {path}: {err}");
                        report.skipped.push(SkippedFile {
                            path,
                            reason: err.to_string(),
                        });
                        continue;
                    }
                };
                if !entry.file_type().is_file() {
                    continue;
                }
                if SourceKind::from_path(entry.path()).is_none() {
                    continue;
                }
                self.lint_file(entry.path(), &mut report);
            }
        } else {
            return Err(LintError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("no such path: {}", root.display()),
            )));
        }

        report.elapsed_ms = started.elapsed().as_millis() as u64;
        Ok(report)
    }

    fn lint_file(&self, path: &Path, report: &mut LintReport) {
        debug!("linting {}", path.display());
        match ParsedSource::parse_file(path) {
            Ok(parsed) => {
                report.files_checked += 1;
                let file = path.display().to_string();
                report.diagnostics.extend(
                    self.rule
                        .check_source(&parsed)
                        .into_iter()
                        .map(|d| d.with_file(file.clone())),
                );
            }
            Err(err) => {
                warn!("skipping {}: {err}", path.display());
                report.skipped.push(SkippedFile {
                    path: path.display().to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
}

fn excluded_dir(entry: &walkdir::DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    excluded_name(&name)
}

fn excluded_name(name: &str) -> bool {
    name.starts_with('.') || EXCLUDED_DIRS.contains(&name)
}
