//! Comment extraction pipeline
//!
//! Wires the stages together: scan raw spans, normalize them into comment
//! records, merge banner runs, then hand a comment-blanked view of the source
//! to the syntax provider and associate each comment with the code it
//! documents. Data flows strictly forward; each file is a pure function of
//! its own text and tree.

use crate::comment::{merge_adjacent, Comment};
use crate::config::ExtractConfig;
use crate::error::ExtractError;
use crate::lang::{Language, LexicalSpec};
use crate::scan;
use crate::syntax::{SyntaxProvider, TreeSitterProvider};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Compute a stable hash for content
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

/// Extract comments from source text.
///
/// The single consumer-facing operation of the core: scans, normalizes,
/// merges, and associates in one pass, returning comments sorted by start
/// line. Fails with [`ExtractError::UnterminatedComment`] on an unclosed
/// block comment and with [`ExtractError::Syntax`] when the provider cannot
/// parse the blanked source; on parse failure no comments are returned at
/// all, partial tagging would be silently wrong.
pub fn extract_comments(
    source: &str,
    spec: &LexicalSpec,
    provider: &mut dyn SyntaxProvider,
    config: &ExtractConfig,
) -> Result<Vec<Comment>, ExtractError> {
    let spans = scan::scan(source, spec)?;
    let mut comments = scan::normalize(source, &spans);

    // Stable: ties (which well-formed input should not produce) keep scan
    // order.
    comments.sort_by_key(|c| c.start_line);

    if config.merge_banners {
        comments = merge_adjacent(comments, source, spec);
    }

    if config.associate {
        let parse_view = scan::blank_spans(source, &spans, spec.blank_blocks_for_parse);
        let excerpt_view = scan::blank_spans(source, &spans, true);
        let tree = provider.parse(&parse_view)?;
        crate::associate::associate(&mut comments, &tree, &excerpt_view, config);
    }

    if !config.include_unassociated {
        comments.retain(Comment::is_associated);
    }

    debug!(comments = comments.len(), "extraction complete");
    Ok(comments)
}

/// Extracts comments from source files
///
/// Holds one syntax provider per supported language so repeated extractions
/// reuse the parsers.
pub struct CommentExtractor {
    config: ExtractConfig,
    providers: HashMap<Language, TreeSitterProvider>,
}

impl CommentExtractor {
    /// Create an extractor with default configuration
    pub fn new() -> Result<Self, ExtractError> {
        Self::with_config(ExtractConfig::default())
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: ExtractConfig) -> Result<Self, ExtractError> {
        let mut providers = HashMap::new();
        for language in Language::all() {
            providers.insert(language, TreeSitterProvider::new(language)?);
        }
        Ok(Self { config, providers })
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Extract comments from a file's content, language detected by extension
    pub fn extract_file(&mut self, path: &Path, content: &str) -> Result<Vec<Comment>, ExtractError> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        let language = Language::from_extension(extension)
            .ok_or_else(|| ExtractError::UnsupportedLanguage(extension.to_string()))?;

        debug!(path = %path.display(), %language, "extracting comments");
        self.extract_source(content, language)
    }

    /// Read a file from disk and extract its comments
    pub fn extract_path(&mut self, path: &Path) -> Result<Vec<Comment>, ExtractError> {
        let content = std::fs::read_to_string(path)?;
        self.extract_file(path, &content)
    }

    /// Extract comments from source text in a known language
    pub fn extract_source(
        &mut self,
        content: &str,
        language: Language,
    ) -> Result<Vec<Comment>, ExtractError> {
        let spec = LexicalSpec::for_language(language);
        let provider = self
            .providers
            .get_mut(&language)
            .ok_or_else(|| ExtractError::UnsupportedLanguage(language.to_string()))?;
        extract_comments(content, &spec, provider, &self.config)
    }
}
