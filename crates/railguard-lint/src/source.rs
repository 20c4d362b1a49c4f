//! TypeScript source parsing

use std::path::Path;

use tree_sitter::{Node, Parser, Tree};

use crate::error::{LintError, LintResult};

/// The grammar dialect used to parse a source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceKind {
    /// Plain TypeScript (`.ts`, `.mts`, `.cts`)
    TypeScript,
    /// TypeScript with JSX (`.tsx`, `.jsx`)
    Tsx,
}

impl SourceKind {
    /// Detect the dialect from a file extension, `None` for anything else.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension().and_then(|s| s.to_str())?;
        match ext.to_ascii_lowercase().as_str() {
            "ts" | "mts" | "cts" => Some(SourceKind::TypeScript),
            "tsx" | "jsx" => Some(SourceKind::Tsx),
            _ => None,
        }
    }

    fn grammar(self) -> tree_sitter::Language {
        match self {
            SourceKind::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
            SourceKind::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
        }
    }
}

/// A source file together with its syntax tree.
///
/// Declarations borrow text out of the stored source, so the pair stays
/// bundled for the lifetime of a lint pass.
pub struct ParsedSource {
    source: String,
    tree: Tree,
    kind: SourceKind,
}

impl ParsedSource {
    /// Parse in-memory source text with the given dialect.
    pub fn parse(source: impl Into<String>, kind: SourceKind) -> LintResult<Self> {
        let source = source.into();
        let mut parser = Parser::new();
        parser
            .set_language(&kind.grammar())
            .map_err(|e| LintError::Grammar(e.to_string()))?;
        let tree = parser.parse(&source, None).ok_or_else(|| LintError::Parse {
            path: "<inline>".to_string(),
        })?;
        Ok(Self { source, tree, kind })
    }

    /// Read and parse a file, detecting the dialect from its extension.
    pub fn parse_file(path: &Path) -> LintResult<Self> {
        let kind = SourceKind::from_path(path).ok_or_else(|| LintError::UnsupportedSource {
            path: path.display().to_string(),
        })?;
        let source = std::fs::read_to_string(path)?;
        Self::parse(source, kind).map_err(|err| match err {
            LintError::Parse { .. } => LintError::Parse {
                path: path.display().to_string(),
            },
            other => other,
        })
    }

    /// The raw source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The dialect this source was parsed as.
    pub fn kind(&self) -> SourceKind {
        self.kind
    }

    /// The root node of the syntax tree.
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// The text spanned by a node, `None` when the span is not valid UTF-8.
    pub fn node_text(&self, node: Node<'_>) -> Option<&str> {
        node.utf8_text(self.source.as_bytes()).ok()
    }
}

impl std::fmt::Debug for ParsedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedSource")
            .field("kind", &self.kind)
            .field("bytes", &self.source.len())
            .finish()
    }
}
