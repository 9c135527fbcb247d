//! Error taxonomy for comment extraction

use thiserror::Error;

/// Errors surfaced by the extraction pipeline
///
/// All errors are per-file; there is no cross-file aggregation at this layer.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source file could not be opened or read
    #[error("failed to read source file: {0}")]
    Io(#[from] std::io::Error),

    /// A block comment was never closed before end of input
    #[error("unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },

    /// The syntax tree provider could not build a tree for the source
    ///
    /// Fatal for the whole file: scan and merge results are discarded rather
    /// than returned partially tagged.
    #[error("syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// No language table is registered for the file's extension
    #[error("unsupported language for extension '{0}'")]
    UnsupportedLanguage(String),

    /// A syntax provider could not be constructed (grammar mismatch, etc.)
    #[error("syntax provider unavailable: {0}")]
    Provider(String),
}
