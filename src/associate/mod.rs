//! Association engine
//!
//! Attaches each comment to the syntax node it most plausibly documents.
//! Three rules are tried in order, stopping at the first that yields a node:
//!
//! 1. Enclosing-block opener: the comment sits between a declaration header
//!    and the first line of its body.
//! 2. Same-line: a node starts on the comment's end line (bare string
//!    expression statements excluded, they are documentation, not code).
//! 3. Next-line: a node starts on the line after the comment.
//!
//! A comment no rule matches stays unassociated; that is a valid terminal
//! state, not an error.

use crate::comment::{Association, Comment};
use crate::config::ExtractConfig;
use crate::syntax::{NodeKind, SyntaxNode, SyntaxTree};

/// Associate each comment with the nearest relevant syntax node.
///
/// `excerpt_source` is the comment-erased view of the source the excerpts are
/// rendered from; its byte layout matches the view the tree was parsed from.
pub fn associate(
    comments: &mut [Comment],
    tree: &SyntaxTree,
    excerpt_source: &str,
    config: &ExtractConfig,
) {
    for comment in comments.iter_mut() {
        let node = tree
            .enclosing_opener(comment)
            .or_else(|| tree.first_at_line(comment.end_line, true))
            .or_else(|| tree.first_at_line(comment.end_line + 1, false));

        if let Some(node) = node {
            attach(comment, node, excerpt_source, config);
        }
    }
}

/// Record the association and fill the descriptive tag fields.
fn attach(comment: &mut Comment, node: &SyntaxNode, excerpt_source: &str, config: &ExtractConfig) {
    let excerpt = excerpt_source
        .get(node.byte_range.clone())
        .unwrap_or_default()
        .to_string();

    match node.kind {
        NodeKind::Function => {
            if let Some(name) = &node.name {
                comment.set_function_name(name);
            }
            if let Some(body) = body_text(&excerpt, config.context_max_lines) {
                comment.set_context(&body);
            }
        }
        NodeKind::Class => {
            if let Some(name) = &node.name {
                comment.set_class_name(name);
            }
            if let Some(body) = body_text(&excerpt, config.context_max_lines) {
                comment.set_context(&body);
            }
        }
        NodeKind::Identifier => {
            // Only a comment on the same or a prior line documents an
            // identifier; a trailing use further down is unrelated.
            if comment.start_line <= node.start_line {
                comment.set_identifier_name(excerpt.trim());
            }
        }
        _ => {}
    }

    let name = node
        .name
        .clone()
        .or_else(|| (node.kind == NodeKind::Identifier).then(|| excerpt.trim().to_string()));

    comment.associations.push(Association {
        kind: node.kind,
        name,
        start_line: node.start_line,
        excerpt,
    });
}

/// Declaration body with the header line excluded, capped at `max_lines`
fn body_text(excerpt: &str, max_lines: usize) -> Option<String> {
    let rest = excerpt.splitn(2, '\n').nth(1)?;
    let lines: Vec<&str> = rest.lines().take(max_lines).collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}
