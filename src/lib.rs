//! DocHarvest - Comment extraction and code association engine
//!
//! This library extracts comments from source files, distinguishing them from
//! identical character sequences inside string literals, merges adjacent
//! single-line comments into logical banners, and associates each comment
//! with the syntax node it most plausibly documents.

pub mod associate;
pub mod cli;
pub mod comment;
pub mod config;
pub mod error;
pub mod extract;
pub mod lang;
pub mod scan;
pub mod syntax;

/// Re-export commonly used types
pub use comment::{Association, Comment};
pub use config::ExtractConfig;
pub use error::ExtractError;
pub use extract::{extract_comments, CommentExtractor};
pub use lang::{Language, LexicalSpec};
pub use syntax::{NodeKind, SyntaxNode, SyntaxProvider, SyntaxTree, TreeSitterProvider};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "docharvest";
