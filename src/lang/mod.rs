//! Supported languages and their lexical comment tables
//!
//! A language contributes two things to the pipeline: a tree-sitter grammar
//! for the syntax tree provider, and a small lexical table describing its
//! comment and string syntax. The table is data, not code; the scanner is
//! generic over it.

use serde::{Deserialize, Serialize};

/// Supported programming languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Rust,
    Python,
    Java,
}

impl Language {
    /// All supported languages
    pub fn all() -> [Language; 3] {
        [Language::Rust, Language::Python, Language::Java]
    }

    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "rs" => Some(Language::Rust),
            "py" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Look up a language by name (as printed by `Display`)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "rust" => Some(Language::Rust),
            "python" => Some(Language::Python),
            "java" => Some(Language::Java),
            _ => None,
        }
    }

    /// Get the tree-sitter language for this language
    pub fn tree_sitter_language(&self) -> tree_sitter::Language {
        match self {
            Language::Rust => tree_sitter_rust::LANGUAGE.into(),
            Language::Python => tree_sitter_python::LANGUAGE.into(),
            Language::Java => tree_sitter_java::LANGUAGE.into(),
        }
    }

    /// Get file extension for this language
    pub fn extension(&self) -> &'static str {
        match self {
            Language::Rust => "rs",
            Language::Python => "py",
            Language::Java => "java",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Rust => write!(f, "rust"),
            Language::Python => write!(f, "python"),
            Language::Java => write!(f, "java"),
        }
    }
}

/// Lexical comment table for one language
///
/// Drives the scanner's state machine: which token opens a line comment,
/// which delimiter pairs open and close block comments, which characters
/// quote string literals, and which character escapes inside them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalSpec {
    /// Token that starts a single-line comment (runs to end of line)
    pub line_comment: String,
    /// Delimiter pairs that open/close block comments
    pub block_delimiters: Vec<(String, String)>,
    /// Characters that open and close string literals
    pub string_quotes: Vec<char>,
    /// Escape character inside string literals
    pub escape: char,
    /// Block delimiters only count as comments when they own their start and
    /// end lines (Python docstrings); otherwise the span is a string literal
    pub block_requires_bare_lines: bool,
    /// Whether block comment spans are blanked out of the view handed to the
    /// syntax tree provider; false for languages whose block comments are
    /// legitimate syntax the provider must keep (Python docstrings)
    pub blank_blocks_for_parse: bool,
}

impl LexicalSpec {
    /// Built-in lexical table for a language
    pub fn for_language(language: Language) -> Self {
        match language {
            // Single quotes stay out of the table: lifetimes and char
            // literals would open a bogus string state.
            Language::Rust => Self {
                line_comment: "//".to_string(),
                block_delimiters: vec![("/*".to_string(), "*/".to_string())],
                string_quotes: vec!['"'],
                escape: '\\',
                block_requires_bare_lines: false,
                blank_blocks_for_parse: true,
            },
            Language::Python => Self {
                line_comment: "#".to_string(),
                block_delimiters: vec![
                    ("\"\"\"".to_string(), "\"\"\"".to_string()),
                    ("'''".to_string(), "'''".to_string()),
                ],
                string_quotes: vec!['"', '\''],
                escape: '\\',
                block_requires_bare_lines: true,
                blank_blocks_for_parse: false,
            },
            Language::Java => Self {
                line_comment: "//".to_string(),
                block_delimiters: vec![("/*".to_string(), "*/".to_string())],
                string_quotes: vec!['"', '\''],
                escape: '\\',
                block_requires_bare_lines: false,
                blank_blocks_for_parse: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_extension() {
        assert_eq!(Language::from_extension("rs"), Some(Language::Rust));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("java"), Some(Language::Java));
        assert_eq!(Language::from_extension("cpp"), None);
    }

    #[test]
    fn test_from_name_round_trips_display() {
        for language in Language::all() {
            assert_eq!(Language::from_name(&language.to_string()), Some(language));
        }
    }

    #[test]
    fn test_python_table_has_both_triple_quote_flavors() {
        let spec = LexicalSpec::for_language(Language::Python);
        assert_eq!(spec.block_delimiters.len(), 2);
        assert!(spec.block_requires_bare_lines);
        assert!(!spec.blank_blocks_for_parse);
    }

    #[test]
    fn test_rust_table_excludes_single_quote() {
        let spec = LexicalSpec::for_language(Language::Rust);
        assert!(!spec.string_quotes.contains(&'\''));
    }
}
