//! The `require-result-return-type` rule

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::config::RuleConfig;
use crate::declarations::{self, FunctionDecl, FunctionKind};
use crate::diagnostics::Diagnostic;
use crate::error::{LintError, LintResult};
use crate::source::ParsedSource;

/// The four accepted Result shapes over normalized type text: bare and
/// `Promise`-wrapped, with one or two type arguments. Anchored, so partial
/// matches never slip through.
static RESULT_SHAPES: Lazy<[Regex; 4]> = Lazy::new(|| {
    [
        Regex::new(r"^Result<[^,]+>$").unwrap(),
        Regex::new(r"^Result<.+,.+>$").unwrap(),
        Regex::new(r"^Promise<Result<[^,]+>>$").unwrap(),
        Regex::new(r"^Promise<Result<.+,.+>>$").unwrap(),
    ]
});

static PASCAL_CASE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACED_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*([<>,|])\s*").unwrap());

/// Canonical form for type-text comparison: whitespace runs collapse to a
/// single space, then spaces around `<`, `>`, `,`, and `|` are dropped.
pub fn normalize_type(raw: &str) -> String {
    let collapsed = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    SPACED_PUNCT.replace_all(&collapsed, "$1").into_owned()
}

/// The compiled rule, immutable for the lifetime of a run.
///
/// Compiling up front means pattern errors surface once, at configuration
/// time, instead of on every declaration.
pub struct ResultReturnRule {
    config: RuleConfig,
    exempt_names: HashSet<String>,
    exempt_patterns: Vec<Regex>,
    allowed_types: HashSet<String>,
}

impl ResultReturnRule {
    /// Compile a rule from resolved configuration.
    pub fn new(config: RuleConfig) -> LintResult<Self> {
        let exempt_names = config.exempt_functions.iter().cloned().collect();

        let mut exempt_patterns = Vec::with_capacity(config.exempt_patterns.len());
        for pattern in &config.exempt_patterns {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .map_err(|e| LintError::InvalidPattern {
                    pattern: pattern.clone(),
                    message: e.to_string(),
                })?;
            exempt_patterns.push(regex);
        }

        let allowed_types = config
            .allowed_return_types
            .iter()
            .map(|t| normalize_type(t))
            .collect();

        Ok(Self {
            config,
            exempt_names,
            exempt_patterns,
            allowed_types,
        })
    }

    /// The configuration this rule was compiled from.
    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Decide a single declaration. Returns zero or one diagnostic; the
    /// verdict depends only on the declaration and the compiled
    /// configuration, so repeated runs agree.
    ///
    /// Anonymous declarations resolve to the name `anonymous` and are
    /// checked like any other; hosts that want inline callbacks quiet
    /// exempt that name.
    pub fn check_decl(&self, decl: &FunctionDecl) -> Option<Diagnostic> {
        // Constructors and accessors cannot return a Result under the
        // language's own rules.
        if matches!(
            decl.kind,
            FunctionKind::Constructor | FunctionKind::Getter | FunctionKind::Setter
        ) {
            return None;
        }

        if self.exempt_names.contains(&decl.name) {
            return None;
        }
        if self.exempt_patterns.iter().any(|p| p.is_match(&decl.name)) {
            return None;
        }
        if self.config.exempt_pascal_case && PASCAL_CASE.is_match(&decl.name) {
            return None;
        }

        let Some(found) = decl.return_type.as_deref() else {
            return Some(Diagnostic::missing_annotation(decl));
        };

        let normalized = normalize_type(found);
        if self.allowed_types.contains(&normalized) {
            return None;
        }
        if RESULT_SHAPES.iter().any(|p| p.is_match(&normalized)) {
            return None;
        }

        Some(Diagnostic::not_result(decl, normalized))
    }

    /// Run the rule over every function-like declaration in a source, in
    /// tree order. One declaration's verdict never affects another's.
    pub fn check_source(&self, parsed: &ParsedSource) -> Vec<Diagnostic> {
        declarations::extract(parsed)
            .iter()
            .filter_map(|decl| self.check_decl(decl))
            .collect()
    }
}

impl std::fmt::Debug for ResultReturnRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultReturnRule")
            .field("exempt_names", &self.exempt_names.len())
            .field("exempt_patterns", &self.exempt_patterns.len())
            .field("allowed_types", &self.allowed_types.len())
            .finish()
    }
}
