//! Tree-sitter backed syntax provider

use super::{NodeKind, SyntaxNode, SyntaxProvider, SyntaxTree};
use crate::error::ExtractError;
use crate::lang::Language;

/// Syntax provider wrapping a tree-sitter grammar
pub struct TreeSitterProvider {
    language: Language,
    parser: tree_sitter::Parser,
}

impl TreeSitterProvider {
    /// Create a provider for the given language
    pub fn new(language: Language) -> Result<Self, ExtractError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&language.tree_sitter_language())
            .map_err(|e| ExtractError::Provider(e.to_string()))?;
        Ok(Self { language, parser })
    }

    pub fn language(&self) -> Language {
        self.language
    }
}

impl SyntaxProvider for TreeSitterProvider {
    fn parse(&mut self, source: &str) -> Result<SyntaxTree, ExtractError> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::Provider("parser returned no tree".to_string()))?;

        let root = tree.root_node();
        if root.has_error() {
            return Err(ExtractError::Syntax {
                line: first_error_line(root).unwrap_or(1),
                message: "could not build a syntax tree".to_string(),
            });
        }

        let mut nodes = Vec::new();
        collect_children(root, source, self.language, &mut nodes);
        Ok(SyntaxTree::new(nodes))
    }
}

/// Pre-order collection of named nodes, excluding the root: the whole-file
/// node starts on line 1 and would win every match there.
fn collect_children(
    node: tree_sitter::Node,
    source: &str,
    language: Language,
    nodes: &mut Vec<SyntaxNode>,
) {
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        nodes.push(convert(child, source, language));
        collect_children(child, source, language, nodes);
    }
}

fn convert(node: tree_sitter::Node, source: &str, language: Language) -> SyntaxNode {
    let name = node
        .child_by_field_name("name")
        .and_then(|n| n.utf8_text(source.as_bytes()).ok())
        .map(str::to_string);

    let body_start_line = node
        .child_by_field_name("body")
        .and_then(|body| body.named_child(0))
        .map(|first| first.start_position().row + 1);

    SyntaxNode {
        kind: map_kind(node, language),
        grammar_kind: node.kind().to_string(),
        name,
        start_line: node.start_position().row + 1,
        end_line: node.end_position().row + 1,
        body_start_line,
        byte_range: node.byte_range(),
    }
}

fn map_kind(node: tree_sitter::Node, language: Language) -> NodeKind {
    if is_bare_string_expr(node) {
        return NodeKind::StringExpr;
    }
    match (language, node.kind()) {
        (Language::Python, "function_definition") => NodeKind::Function,
        (Language::Python, "class_definition") => NodeKind::Class,
        (Language::Java, "method_declaration" | "constructor_declaration") => NodeKind::Function,
        (Language::Java, "class_declaration" | "interface_declaration" | "enum_declaration") => {
            NodeKind::Class
        }
        (Language::Rust, "function_item") => NodeKind::Function,
        (Language::Rust, "struct_item" | "enum_item" | "trait_item" | "union_item") => {
            NodeKind::Class
        }
        (_, "identifier") => NodeKind::Identifier,
        (_, kind) if kind.ends_with("statement") || kind.ends_with("declaration") => {
            NodeKind::Statement
        }
        _ => NodeKind::Other,
    }
}

/// An expression statement holding nothing but a string literal
fn is_bare_string_expr(node: tree_sitter::Node) -> bool {
    node.kind() == "expression_statement"
        && node.named_child_count() == 1
        && node
            .named_child(0)
            .is_some_and(|child| child.kind().starts_with("string"))
}

fn first_error_line(node: tree_sitter::Node) -> Option<usize> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position().row + 1);
    }
    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if child.has_error() {
            if let Some(line) = first_error_line(child) {
                return Some(line);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_python_function() {
        let mut provider = TreeSitterProvider::new(Language::Python).unwrap();
        let tree = provider.parse("def foo():\n    return 1\n").unwrap();

        let func = tree
            .nodes()
            .iter()
            .find(|n| n.kind == NodeKind::Function)
            .unwrap();
        assert_eq!(func.name.as_deref(), Some("foo"));
        assert_eq!(func.start_line, 1);
        assert_eq!(func.body_start_line, Some(2));
    }

    #[test]
    fn test_parse_java_class_and_method() {
        let mut provider = TreeSitterProvider::new(Language::Java).unwrap();
        let source = "class Foo {\n    int add(int a, int b) {\n        return a + b;\n    }\n}\n";
        let tree = provider.parse(source).unwrap();

        let class = tree
            .nodes()
            .iter()
            .find(|n| n.kind == NodeKind::Class)
            .unwrap();
        assert_eq!(class.name.as_deref(), Some("Foo"));
        assert_eq!(class.body_start_line, Some(2));

        let method = tree
            .nodes()
            .iter()
            .find(|n| n.kind == NodeKind::Function)
            .unwrap();
        assert_eq!(method.name.as_deref(), Some("add"));
        assert_eq!(method.start_line, 2);
    }

    #[test]
    fn test_parse_rust_struct() {
        let mut provider = TreeSitterProvider::new(Language::Rust).unwrap();
        let tree = provider
            .parse("struct Point {\n    x: i32,\n    y: i32,\n}\n")
            .unwrap();

        let item = tree
            .nodes()
            .iter()
            .find(|n| n.kind == NodeKind::Class)
            .unwrap();
        assert_eq!(item.name.as_deref(), Some("Point"));
        assert_eq!(item.body_start_line, Some(2));
    }

    #[test]
    fn test_docstring_is_a_string_expr() {
        let mut provider = TreeSitterProvider::new(Language::Python).unwrap();
        let tree = provider
            .parse("def foo():\n    \"\"\"Doc.\"\"\"\n    return 1\n")
            .unwrap();

        let stmt = tree
            .nodes()
            .iter()
            .find(|n| n.start_line == 2 && n.grammar_kind == "expression_statement")
            .unwrap();
        assert_eq!(stmt.kind, NodeKind::StringExpr);
    }

    #[test]
    fn test_malformed_source_is_a_syntax_error() {
        let mut provider = TreeSitterProvider::new(Language::Python).unwrap();
        let err = provider.parse("def foo(:\n    pass\n").unwrap_err();
        match err {
            ExtractError::Syntax { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_nodes_are_collected_in_pre_order() {
        let mut provider = TreeSitterProvider::new(Language::Python).unwrap();
        let tree = provider.parse("x = 1\n").unwrap();

        // The statement comes before the identifiers it contains.
        let first = tree.first_at_line(1, false).unwrap();
        assert_eq!(first.grammar_kind, "expression_statement");
    }
}
