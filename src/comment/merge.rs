//! Banner comment merging
//!
//! Two or more consecutive single-line comments, each owning its source line,
//! read as one continuous comment. Merging collapses such a run into one
//! record so that downstream association sees the whole banner instead of
//! attaching only its last line to the following declaration.

use super::Comment;
use crate::lang::LexicalSpec;

/// Merge runs of adjacent bare single-line comments.
///
/// A comment joins the previous emitted one when both are single-line, they
/// sit on consecutive source lines, and each line holds nothing but optional
/// whitespace plus the comment itself. Block comments never merge. Merging is
/// transitive left-to-right across a run.
pub fn merge_adjacent(comments: Vec<Comment>, source: &str, spec: &LexicalSpec) -> Vec<Comment> {
    let lines: Vec<&str> = source.lines().collect();
    let bare = |line_no: usize| {
        lines
            .get(line_no.wrapping_sub(1))
            .is_some_and(|line| line.trim_start().starts_with(spec.line_comment.as_str()))
    };

    let mut merged: Vec<Comment> = Vec::with_capacity(comments.len());
    for comment in comments {
        let joinable = merged.last().is_some_and(|prev| {
            !comment.is_multiline
                && !prev.is_multiline
                && comment.start_line == prev.end_line + 1
                && bare(prev.end_line)
                && bare(comment.start_line)
        });
        if joinable {
            if let Some(prev) = merged.pop() {
                merged.push(Comment::merged(&prev, &comment));
            }
        } else {
            merged.push(comment);
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{Language, LexicalSpec};
    use crate::scan;

    fn merge_rust(source: &str) -> Vec<Comment> {
        let spec = LexicalSpec::for_language(Language::Rust);
        let spans = scan::scan(source, &spec).unwrap();
        let comments = scan::normalize(source, &spans);
        merge_adjacent(comments, source, &spec)
    }

    #[test]
    fn test_two_banner_lines_merge() {
        let merged = merge_rust("// first\n// second\n");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "first second");
        assert_eq!(merged[0].start_line, 1);
        assert_eq!(merged[0].end_line, 2);
        assert!(!merged[0].is_multiline);
    }

    #[test]
    fn test_merge_is_transitive() {
        let merged = merge_rust("// first\n// second\n// third\n");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "first second third");
        assert_eq!(merged[0].start_line, 1);
        assert_eq!(merged[0].end_line, 3);
    }

    #[test]
    fn test_no_merge_when_code_intervenes() {
        let merged = merge_rust("// first\nx = 1;  // second\n");
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].text, "first");
        assert_eq!(merged[1].text, "second");
    }

    #[test]
    fn test_no_merge_across_a_gap_line() {
        let merged = merge_rust("// first\n\n// second\n");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_block_comments_never_merge() {
        let merged = merge_rust("/* first */\n// second\n");
        assert_eq!(merged.len(), 2);
        assert!(merged[0].is_multiline);

        let merged = merge_rust("// first\n/* second */\n");
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_indented_banner_merges() {
        let merged = merge_rust("    // first\n    // second\n");
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].text, "first second");
    }
}
