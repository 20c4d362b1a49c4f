//! Rule configuration: overridable exemption and allow-list tables

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LintResult;

/// Return types accepted without a `Result` wrapper.
///
/// Primitives and their `Promise` forms, framework response types, markup
/// types produced by component trees, and database handles.
const DEFAULT_ALLOWED_RETURN_TYPES: &[&str] = &[
    "void",
    "boolean",
    "string",
    "number",
    "bigint",
    "unknown",
    "never",
    "Promise<void>",
    "Promise<boolean>",
    "Promise<string>",
    "Promise<number>",
    "Response",
    "Promise<Response>",
    "NextResponse",
    "Promise<NextResponse>",
    "JSX.Element",
    "React.JSX.Element",
    "ReactNode",
    "React.ReactNode",
    "Element",
    "Database",
    "DatabaseSync",
    "Promise<Database>",
];

/// Names exempt regardless of signature: entry points, test-runner
/// callbacks, and framework lifecycle functions.
const DEFAULT_EXEMPT_FUNCTIONS: &[&str] = &[
    "main",
    "setup",
    "teardown",
    "describe",
    "it",
    "test",
    "beforeEach",
    "afterEach",
    "beforeAll",
    "afterAll",
    "componentDidMount",
    "componentDidUpdate",
    "componentWillUnmount",
    "getServerSideProps",
    "getStaticProps",
    "loader",
    "action",
    "middleware",
    "reducer",
    "render",
];

/// Name patterns exempt by convention: hooks, event handlers, renderers,
/// and serialization protocol methods. Matched case-insensitively.
const DEFAULT_EXEMPT_PATTERNS: &[&str] = &[
    "^use[A-Z]",
    "^on[A-Z]",
    "^handle[A-Z]",
    "^render[A-Z]",
    "^to(JSON|String)$",
];

/// Resolved configuration for the rule.
///
/// Every table ships with defaults; hosts override them per field through
/// [`RuleOverrides`]. Once a lint run starts the configuration is immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RuleConfig {
    /// Literal type texts accepted without a `Result` wrapper
    pub allowed_return_types: Vec<String>,
    /// Literal names never flagged
    pub exempt_functions: Vec<String>,
    /// Case-insensitive name regexes never flagged
    pub exempt_patterns: Vec<String>,
    /// Skip names that are entirely PascalCase (component factories)
    pub exempt_pascal_case: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            allowed_return_types: to_strings(DEFAULT_ALLOWED_RETURN_TYPES),
            exempt_functions: to_strings(DEFAULT_EXEMPT_FUNCTIONS),
            exempt_patterns: to_strings(DEFAULT_EXEMPT_PATTERNS),
            exempt_pascal_case: true,
        }
    }
}

impl RuleConfig {
    /// Apply overrides on top of the defaults. A field that is present
    /// replaces its default table entirely; absent fields keep theirs.
    pub fn with_overrides(overrides: &RuleOverrides) -> Self {
        let defaults = Self::default();
        Self {
            allowed_return_types: overrides
                .allowed_return_types
                .clone()
                .unwrap_or(defaults.allowed_return_types),
            exempt_functions: overrides
                .exempt_functions
                .clone()
                .unwrap_or(defaults.exempt_functions),
            exempt_patterns: overrides
                .exempt_patterns
                .clone()
                .unwrap_or(defaults.exempt_patterns),
            exempt_pascal_case: overrides
                .exempt_pascal_case
                .unwrap_or(defaults.exempt_pascal_case),
        }
    }
}

/// Partial configuration: each present field replaces its default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuleOverrides {
    /// Replacement for the allowed return types table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_return_types: Option<Vec<String>>,
    /// Replacement for the exempt names table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_functions: Option<Vec<String>>,
    /// Replacement for the exempt patterns table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_patterns: Option<Vec<String>>,
    /// Toggle for the PascalCase exemption
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exempt_pascal_case: Option<bool>,
}

/// On-disk configuration (`railguard.toml`): a rule-name → overrides map.
///
/// ```toml
/// [rules."require-result-return-type"]
/// exempt-functions = ["main", "cli"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfigFile {
    /// Overrides keyed by rule name
    #[serde(default)]
    pub rules: HashMap<String, RuleOverrides>,
}

impl RuleConfigFile {
    /// Load and deserialize a TOML configuration file.
    pub fn load(path: &Path) -> LintResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Resolve the effective configuration for a rule. Rules without an
    /// entry get pure defaults.
    pub fn resolve(&self, rule: &str) -> RuleConfig {
        self.rules
            .get(rule)
            .map(RuleConfig::with_overrides)
            .unwrap_or_default()
    }
}

fn to_strings(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}
