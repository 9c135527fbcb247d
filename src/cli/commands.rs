//! Command implementations

use super::{ExtractArgs, InspectArgs, OutputFormat};
use crate::comment::Comment;
use crate::config::ExtractConfig;
use crate::extract::CommentExtractor;
use crate::lang::{Language, LexicalSpec};
use anyhow::{Context, Result};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extraction results for one file
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub file: String,
    pub comments: Vec<Comment>,
}

/// Extract comments from the given files and directories
pub fn extract(args: &ExtractArgs) -> Result<Vec<FileReport>> {
    let mut config = ExtractConfig::load_or_default(Path::new("."))?;
    if args.no_merge {
        config.merge_banners = false;
    }
    if args.no_associate {
        config.associate = false;
    }
    if args.associated_only {
        config.include_unassociated = false;
    }

    let language = resolve_language(args.language.as_deref())?;
    let mut extractor = CommentExtractor::with_config(config)?;

    let files = collect_files(&args.paths)?;
    let mut reports = Vec::new();
    let mut failures = 0usize;

    for file in &files {
        let result = match language {
            Some(language) => std::fs::read_to_string(file)
                .map_err(crate::ExtractError::from)
                .and_then(|content| extractor.extract_source(&content, language)),
            None => extractor.extract_path(file),
        };

        match result {
            Ok(comments) => reports.push(FileReport {
                file: file.display().to_string(),
                comments,
            }),
            Err(e) => {
                eprintln!("Warning: failed to extract {:?}: {}", file, e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        eprintln!("{} file(s) skipped", failures);
    }

    Ok(reports)
}

/// Show a detailed per-comment report for one file
pub fn inspect(args: &InspectArgs) -> Result<()> {
    let path = Path::new(&args.file);
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {:?}", path))?;

    let mut extractor = CommentExtractor::new()?;
    let comments = match resolve_language(args.language.as_deref())? {
        Some(language) => extractor.extract_source(&content, language)?,
        None => extractor.extract_file(path, &content)?,
    };

    println!("Comment Report: {}", path.display());
    println!("================\n");

    if comments.is_empty() {
        println!("No comments found.");
        return Ok(());
    }

    for (index, comment) in comments.iter().enumerate() {
        println!("{}. [{}] lines {}-{}", index + 1, &comment.id[..8], comment.start_line, comment.end_line);
        println!("   Text: {}", first_line(&comment.text));
        println!("   Multiline: {}", comment.is_multiline);

        if let Some(ref name) = comment.function_name {
            println!("   Function: {}", name);
        }
        if let Some(ref name) = comment.class_name {
            println!("   Class: {}", name);
        }
        if let Some(ref name) = comment.identifier_name {
            println!("   Identifier: {}", name);
        }

        for association in &comment.associations {
            println!(
                "   Node: {} at line {}",
                association.kind, association.start_line
            );
            println!("   Code: {}", first_line(&association.excerpt));
        }
        println!();
    }

    Ok(())
}

/// Per-language lexical table, for the languages command
#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub language: Language,
    pub extension: &'static str,
    pub lexical: LexicalSpec,
}

/// List supported languages and their comment syntax
pub fn languages(format: OutputFormat) -> Result<()> {
    let infos: Vec<LanguageInfo> = Language::all()
        .into_iter()
        .map(|language| LanguageInfo {
            language,
            extension: language.extension(),
            lexical: LexicalSpec::for_language(language),
        })
        .collect();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&infos)?);
        }
        OutputFormat::Text => {
            println!("Supported Languages");
            println!("===================\n");
            for info in &infos {
                println!("{} (.{})", info.language, info.extension);
                println!("  Line comment: {}", info.lexical.line_comment);
                for (open, close) in &info.lexical.block_delimiters {
                    println!("  Block comment: {} {}", open, close);
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Print reports in JSON format
pub fn print_comments_json(reports: &[FileReport]) -> Result<()> {
    let json = serde_json::to_string_pretty(reports)?;
    println!("{}", json);
    Ok(())
}

/// Print reports in text format
pub fn print_comments_text(reports: &[FileReport]) {
    if reports.is_empty() {
        println!("No files processed.");
        return;
    }

    for report in reports {
        println!("{}:", report.file);
        if report.comments.is_empty() {
            println!("  (no comments)");
            continue;
        }
        for comment in &report.comments {
            let tag = comment
                .function_name
                .as_deref()
                .map(|n| format!(" (function {})", n))
                .or_else(|| {
                    comment
                        .class_name
                        .as_deref()
                        .map(|n| format!(" (class {})", n))
                })
                .or_else(|| {
                    comment
                        .identifier_name
                        .as_deref()
                        .map(|n| format!(" (identifier {})", n))
                })
                .unwrap_or_default();
            println!(
                "  [{}-{}] {}{}",
                comment.start_line,
                comment.end_line,
                first_line(&comment.text),
                tag
            );
        }
        println!();
    }
}

/// Expand the given paths into a list of extractable files
fn collect_files(paths: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let path = Path::new(path);
        if path.is_dir() {
            for entry in WalkDir::new(path)
                .sort_by_file_name()
                .into_iter()
                .filter_map(Result::ok)
                .filter(|e| e.file_type().is_file())
            {
                let ext = entry
                    .path()
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or("");
                if Language::from_extension(ext).is_some() {
                    files.push(entry.path().to_path_buf());
                }
            }
        } else {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

fn resolve_language(name: Option<&str>) -> Result<Option<Language>> {
    match name {
        None => Ok(None),
        Some(name) => Language::from_name(name)
            .map(Some)
            .ok_or_else(|| anyhow::anyhow!("Unknown language: {}", name)),
    }
}

fn first_line(text: &str) -> &str {
    text.trim().lines().next().unwrap_or("")
}
