//! Violation reports produced by the rule

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::declarations::FunctionDecl;

/// The rule's name, as referenced from configuration files.
pub const RULE_NAME: &str = "require-result-return-type";

/// Which of the two violation templates a diagnostic renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// The declaration has no return-type annotation
    MissingAnnotation,
    /// The declared type is neither allow-listed nor Result-shaped
    NotResult,
}

/// A single violation, tied to a declaration's location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule that produced the report
    pub rule: String,
    /// Violation template
    pub kind: DiagnosticKind,
    /// Resolved name of the offending declaration
    pub function_name: String,
    /// The declared type, for [`DiagnosticKind::NotResult`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub found_type: Option<String>,
    /// Source file, filled in by the engine
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line
    pub line: usize,
    /// 1-based column
    pub column: usize,
}

impl Diagnostic {
    /// Report a declaration with no return-type annotation.
    pub fn missing_annotation(decl: &FunctionDecl) -> Self {
        Self {
            rule: RULE_NAME.to_string(),
            kind: DiagnosticKind::MissingAnnotation,
            function_name: decl.name.clone(),
            found_type: None,
            file: None,
            line: decl.line,
            column: decl.column,
        }
    }

    /// Report a declaration whose type is not Result-shaped.
    pub fn not_result(decl: &FunctionDecl, found_type: impl Into<String>) -> Self {
        Self {
            rule: RULE_NAME.to_string(),
            kind: DiagnosticKind::NotResult,
            function_name: decl.name.clone(),
            found_type: Some(found_type.into()),
            file: None,
            line: decl.line,
            column: decl.column,
        }
    }

    /// Attach the source file path.
    pub fn with_file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// The violation message, without location.
    pub fn message(&self) -> String {
        match self.kind {
            DiagnosticKind::MissingAnnotation => format!(
                "missing return type annotation on function `{}`",
                self.function_name
            ),
            DiagnosticKind::NotResult => format!(
                "function `{}` must return Result<T, E>; found type `{}`",
                self.function_name,
                self.found_type.as_deref().unwrap_or("unknown")
            ),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}: {}", file, self.line, self.column, self.message()),
            None => write!(f, "{}:{}: {}", self.line, self.column, self.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations::FunctionKind;

    fn decl(name: &str, return_type: Option<&str>) -> FunctionDecl {
        FunctionDecl {
            name: name.to_string(),
            kind: FunctionKind::Declaration,
            return_type: return_type.map(str::to_string),
            line: 3,
            column: 5,
        }
    }

    #[test]
    fn test_missing_annotation_template() {
        let diagnostic = Diagnostic::missing_annotation(&decl("saveUser", None));
        assert_eq!(
            diagnostic.message(),
            "missing return type annotation on function `saveUser`"
        );
    }

    #[test]
    fn test_not_result_template_echoes_type() {
        let diagnostic = Diagnostic::not_result(&decl("loadUser", Some("Promise<User>")), "Promise<User>");
        assert_eq!(
            diagnostic.message(),
            "function `loadUser` must return Result<T, E>; found type `Promise<User>`"
        );
    }

    #[test]
    fn test_display_includes_location() {
        let diagnostic =
            Diagnostic::missing_annotation(&decl("saveUser", None)).with_file("src/users.ts");
        assert_eq!(
            diagnostic.to_string(),
            "src/users.ts:3:5: missing return type annotation on function `saveUser`"
        );
    }

    #[test]
    fn test_serializes_with_rule_name() {
        let diagnostic = Diagnostic::missing_annotation(&decl("saveUser", None));
        let json = serde_json::to_value(&diagnostic).unwrap();
        assert_eq!(json["rule"], "require-result-return-type");
        assert_eq!(json["kind"], "missing_annotation");
        assert!(json.get("found_type").is_none());
    }
}
