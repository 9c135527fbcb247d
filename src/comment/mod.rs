//! Comment records
//!
//! The output entity of the pipeline: an immutable-once-tagged value carrying
//! the comment text, its line span, and its associations with syntax nodes.

mod merge;

pub use merge::merge_adjacent;

use crate::syntax::NodeKind;
use serde::{Deserialize, Serialize};

/// A comment extracted from source code
///
/// Created by the scanner/normalizer, replaced (never edited in place) by the
/// merger, tagged by the association engine, then frozen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Stable identifier (content hash of span + text)
    pub id: String,
    /// Comment body with delimiters stripped
    pub text: String,
    /// 1-based line the comment starts on
    pub start_line: usize,
    /// 1-based line the comment ends on (inclusive)
    pub end_line: usize,
    /// Whether this was a block/multiline comment
    pub is_multiline: bool,
    /// Syntax nodes this comment documents; empty is a valid terminal state
    pub associations: Vec<Association>,
    /// Name of the associated function, if any
    pub function_name: Option<String>,
    /// Name of the associated class, if any
    pub class_name: Option<String>,
    /// Name of the associated identifier, if any
    pub identifier_name: Option<String>,
    /// Body text of the associated declaration, header line excluded
    pub context: Option<String>,
}

/// A recorded link between a comment and a syntax node
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Association {
    /// Kind of the associated node
    pub kind: NodeKind,
    /// Name of the node, when the grammar exposes one
    pub name: Option<String>,
    /// 1-based line the node starts on
    pub start_line: usize,
    /// Source excerpt of the node, comments erased
    pub excerpt: String,
}

impl Comment {
    /// Create a new comment record
    pub fn new(text: impl Into<String>, start_line: usize, end_line: usize, is_multiline: bool) -> Self {
        let text = text.into();
        let id = crate::extract::content_hash(&format!("{start_line}:{end_line}:{text}"))[..16].to_string();
        Self {
            id,
            text,
            start_line,
            end_line,
            is_multiline,
            associations: Vec::new(),
            function_name: None,
            class_name: None,
            identifier_name: None,
            context: None,
        }
    }

    /// Combine two adjacent single-line comments into one record spanning both
    ///
    /// The inputs are destroyed by the caller; merging never edits in place.
    pub fn merged(first: &Comment, second: &Comment) -> Self {
        Self::new(
            format!("{} {}", first.text, second.text),
            first.start_line,
            second.end_line,
            false,
        )
    }

    /// Whether any syntax node was associated with this comment
    pub fn is_associated(&self) -> bool {
        !self.associations.is_empty()
    }

    /// Record the associated function name; first association wins
    pub fn set_function_name(&mut self, name: &str) {
        if self.function_name.is_none() {
            self.function_name = Some(name.to_string());
        }
    }

    /// Record the associated class name; first association wins
    pub fn set_class_name(&mut self, name: &str) {
        if self.class_name.is_none() {
            self.class_name = Some(name.to_string());
        }
    }

    /// Record the associated identifier name; first association wins
    pub fn set_identifier_name(&mut self, name: &str) {
        if self.identifier_name.is_none() {
            self.identifier_name = Some(name.to_string());
        }
    }

    /// Record the associated declaration's body text; first association wins
    pub fn set_context(&mut self, context: &str) {
        if self.context.is_none() {
            self.context = Some(context.to_string());
        }
    }
}
