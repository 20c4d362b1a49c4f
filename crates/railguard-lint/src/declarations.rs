//! Function-like declaration extraction from parsed sources

use tree_sitter::Node;

use crate::source::ParsedSource;

/// Name assigned to declarations with no resolvable binding.
pub const ANONYMOUS_NAME: &str = "anonymous";

/// The syntactic shape of a function-like declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    /// `function f() {}` or its generator form
    Declaration,
    /// `function () {}` in expression position, generators included
    Expression,
    /// `() => {}`
    Arrow,
    /// Class or object-literal method
    Method,
    /// Class constructor
    Constructor,
    /// Accessor declared with `get`
    Getter,
    /// Accessor declared with `set`
    Setter,
}

/// A single function-like declaration found in a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionDecl {
    /// Resolved name, [`ANONYMOUS_NAME`] when no binding exists
    pub name: String,
    /// Syntactic shape
    pub kind: FunctionKind,
    /// Declared return type with the `:` and surrounding space stripped,
    /// `None` when the annotation is absent or its text unretrievable
    pub return_type: Option<String>,
    /// 1-based line of the declaration
    pub line: usize,
    /// 1-based column of the declaration
    pub column: usize,
}

/// Collect every function-like declaration in the source, in tree order.
///
/// Nested functions and callbacks are collected too; deciding whether they
/// violate anything is the rule's job, not the extractor's.
pub fn extract(parsed: &ParsedSource) -> Vec<FunctionDecl> {
    let mut decls = Vec::new();
    collect(parsed.root(), parsed, &mut decls);
    decls
}

fn collect(node: Node<'_>, parsed: &ParsedSource, decls: &mut Vec<FunctionDecl>) {
    if let Some(decl) = declaration_of(node, parsed) {
        decls.push(decl);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        collect(child, parsed, decls);
    }
}

fn declaration_of(node: Node<'_>, parsed: &ParsedSource) -> Option<FunctionDecl> {
    let kind = match node.kind() {
        "function_declaration" | "generator_function_declaration" => FunctionKind::Declaration,
        "function_expression" | "generator_function" => FunctionKind::Expression,
        "arrow_function" => FunctionKind::Arrow,
        "method_definition" => method_kind(node, parsed),
        _ => return None,
    };

    let name = resolve_name(node, parsed).unwrap_or_else(|| ANONYMOUS_NAME.to_string());
    let position = node.start_position();

    Some(FunctionDecl {
        name,
        kind,
        return_type: return_type_text(node, parsed),
        line: position.row + 1,
        column: position.column + 1,
    })
}

fn method_kind(node: Node<'_>, parsed: &ParsedSource) -> FunctionKind {
    let name = node.child_by_field_name("name");
    let name_id = name.map(|n| n.id());

    // Accessor keywords sit before the name; a method literally named `get`
    // has the keyword kind on its name node, which the id check excludes.
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if Some(child.id()) == name_id {
            break;
        }
        match child.kind() {
            "get" => return FunctionKind::Getter,
            "set" => return FunctionKind::Setter,
            _ => {}
        }
    }

    let name_text = name.and_then(|n| parsed.node_text(n));
    if name_text == Some("constructor") {
        FunctionKind::Constructor
    } else {
        FunctionKind::Method
    }
}

fn resolve_name(node: Node<'_>, parsed: &ParsedSource) -> Option<String> {
    // Declarations, methods, and named function expressions carry their own
    // name; everything else is named by whatever syntax it is bound to.
    if let Some(name) = node.child_by_field_name("name") {
        return parsed.node_text(name).map(str::to_string);
    }

    let mut current = node;
    loop {
        let parent = current.parent()?;
        match parent.kind() {
            "parenthesized_expression" => current = parent,
            "variable_declarator" => {
                let name = parent.child_by_field_name("name")?;
                return parsed.node_text(name).map(str::to_string);
            }
            "pair" => {
                let key = parent.child_by_field_name("key")?;
                return parsed.node_text(key).map(|t| strip_quotes(t).to_string());
            }
            "public_field_definition" | "field_definition" => {
                let name = parent
                    .child_by_field_name("name")
                    .or_else(|| parent.child_by_field_name("property"))?;
                return parsed.node_text(name).map(str::to_string);
            }
            "assignment_expression" => {
                let left = parent.child_by_field_name("left")?;
                return match left.kind() {
                    "member_expression" => {
                        let property = left.child_by_field_name("property")?;
                        parsed.node_text(property).map(str::to_string)
                    }
                    "identifier" => parsed.node_text(left).map(str::to_string),
                    _ => None,
                };
            }
            _ => return None,
        }
    }
}

fn return_type_text(node: Node<'_>, parsed: &ParsedSource) -> Option<String> {
    let annotation = node.child_by_field_name("return_type")?;
    let text = parsed.node_text(annotation)?;
    let stripped = text
        .trim_start()
        .strip_prefix(':')
        .map(str::trim)
        .unwrap_or_else(|| text.trim());
    if stripped.is_empty() {
        None
    } else {
        Some(stripped.to_string())
    }
}

fn strip_quotes(raw: &str) -> &str {
    raw.strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')))
        .unwrap_or(raw)
}
