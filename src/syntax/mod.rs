//! Syntax tree abstraction
//!
//! The engine does no parsing of its own: it consumes a position-annotated
//! tree from an injected provider. Any provider exposing this minimal
//! capability set plugs in; the shipped one wraps tree-sitter.

mod provider;

pub use provider::TreeSitterProvider;

use crate::comment::Comment;
use crate::error::ExtractError;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Coarse classification of a syntax node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Function,
    Class,
    Identifier,
    /// A bare string-literal expression statement; never treated as the code
    /// a comment documents
    StringExpr,
    Statement,
    Other,
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NodeKind::Function => write!(f, "function"),
            NodeKind::Class => write!(f, "class"),
            NodeKind::Identifier => write!(f, "identifier"),
            NodeKind::StringExpr => write!(f, "string_expr"),
            NodeKind::Statement => write!(f, "statement"),
            NodeKind::Other => write!(f, "other"),
        }
    }
}

/// One node of the provider's tree
#[derive(Debug, Clone)]
pub struct SyntaxNode {
    pub kind: NodeKind,
    /// Raw grammar kind, for diagnostics
    pub grammar_kind: String,
    /// Declared name, when the grammar exposes a `name` field
    pub name: Option<String>,
    /// 1-based line the node starts on
    pub start_line: usize,
    /// 1-based line the node ends on
    pub end_line: usize,
    /// 1-based line of the first statement in the node's body, for container
    /// kinds
    pub body_start_line: Option<usize>,
    /// Byte range of the node in the parsed source
    pub byte_range: Range<usize>,
}

/// A position-annotated syntax tree, flattened in pre-order
///
/// Pre-order matters: "the node at a line" is the first node in walk order
/// whose span starts there, which is the outermost construct on that line.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    nodes: Vec<SyntaxNode>,
}

impl SyntaxTree {
    pub fn new(nodes: Vec<SyntaxNode>) -> Self {
        Self { nodes }
    }

    pub fn nodes(&self) -> &[SyntaxNode] {
        &self.nodes
    }

    /// First node in pre-order whose span starts on `line`
    ///
    /// With `reject_string_exprs`, a bare string-literal expression statement
    /// found there yields `None` rather than the next candidate; the caller
    /// falls through to its next rule instead of descending into the string.
    pub fn first_at_line(&self, line: usize, reject_string_exprs: bool) -> Option<&SyntaxNode> {
        let found = self.nodes.iter().find(|node| node.start_line == line)?;
        if reject_string_exprs && found.kind == NodeKind::StringExpr {
            None
        } else {
            Some(found)
        }
    }

    /// First node whose header precedes the comment and whose body starts
    /// after it: the comment sits between a declaration header and the first
    /// line of its body.
    ///
    /// A multiline comment may begin on the body's first line (it can itself
    /// be the first statement, as a docstring is); a single-line comment must
    /// begin strictly before it.
    pub fn enclosing_opener(&self, comment: &Comment) -> Option<&SyntaxNode> {
        self.nodes.iter().find(|node| {
            let Some(body_start) = node.body_start_line else {
                return false;
            };
            node.start_line < comment.start_line
                && if comment.is_multiline {
                    comment.start_line <= body_start
                } else {
                    comment.start_line < body_start
                }
        })
    }
}

/// External capability supplying a syntax tree for source text
///
/// Implementations fail with [`ExtractError::Syntax`] on malformed input,
/// carrying the line of the first offending construct.
pub trait SyntaxProvider {
    fn parse(&mut self, source: &str) -> Result<SyntaxTree, ExtractError>;
}
