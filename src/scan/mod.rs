//! Lexical comment scanner
//!
//! A four-state scanner over raw source bytes that classifies spans as code,
//! string literal, or comment, so that comment delimiters appearing inside
//! string literals are never misidentified as comments. No regex: escape
//! sequences require the explicit state machine.

use crate::comment::Comment;
use crate::error::ExtractError;
use crate::lang::LexicalSpec;

/// Classification of a raw comment span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Single-line comment, runs from its start token to end of line
    Line,
    /// Block comment, delimited by a start/end token pair
    Block,
}

/// A raw comment span in the source, delimiters included
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpan {
    pub kind: SpanKind,
    /// Byte offset of the opening delimiter
    pub start: usize,
    /// Byte offset one past the span (past the closing delimiter for blocks,
    /// excluding the newline for line comments)
    pub end: usize,
    /// Length of the opening delimiter
    pub prefix_len: usize,
    /// Length of the closing delimiter (zero for line comments)
    pub suffix_len: usize,
}

/// Maps byte offsets to 1-based line numbers
#[derive(Debug)]
pub struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                starts.push(i + 1);
            }
        }
        Self { starts }
    }

    /// 1-based line number containing the byte offset
    pub fn line_of(&self, offset: usize) -> usize {
        match self.starts.binary_search(&offset) {
            Ok(idx) => idx + 1,
            Err(idx) => idx,
        }
    }
}

/// Scanner state
enum State {
    Code,
    LineComment { start: usize },
    BlockComment { start: usize, pair: usize },
    StringLiteral { closing: Closing },
}

/// What closes the current string literal
#[derive(Clone, Copy)]
enum Closing {
    Quote(u8),
    /// A multi-character delimiter; index into `LexicalSpec::block_delimiters`
    /// (a triple-quoted span that failed the bare-line test is scanned as a
    /// string, closed by the same token that would have closed the comment)
    Token(usize),
}

/// Scan source text into an ordered sequence of raw comment spans.
///
/// Fails with [`ExtractError::UnterminatedComment`] when end of input is
/// reached while still inside a block comment.
pub fn scan(source: &str, spec: &LexicalSpec) -> Result<Vec<RawSpan>, ExtractError> {
    let bytes = source.as_bytes();
    let mut spans = Vec::new();
    let mut state = State::Code;
    let mut i = 0;

    while i < bytes.len() {
        match state {
            State::Code => {
                if let Some(pair) = block_start_at(bytes, i, spec) {
                    let open_len = spec.block_delimiters[pair].0.len();
                    if !spec.block_requires_bare_lines || line_prefix_blank(bytes, i) {
                        state = State::BlockComment { start: i, pair };
                    } else {
                        state = State::StringLiteral {
                            closing: Closing::Token(pair),
                        };
                    }
                    i += open_len;
                } else if line_comment_at(bytes, i, spec) {
                    state = State::LineComment { start: i };
                    i += spec.line_comment.len();
                } else if let Some(q) = quote_at(bytes, i, spec) {
                    state = State::StringLiteral {
                        closing: Closing::Quote(q),
                    };
                    i += 1;
                } else {
                    i += 1;
                }
            }
            State::LineComment { start } => {
                if bytes[i] == b'\n' {
                    spans.push(RawSpan {
                        kind: SpanKind::Line,
                        start,
                        end: i,
                        prefix_len: spec.line_comment.len(),
                        suffix_len: 0,
                    });
                    state = State::Code;
                }
                i += 1;
            }
            State::BlockComment { start, pair } => {
                let (ref open, ref close) = spec.block_delimiters[pair];
                if bytes[i..].starts_with(close.as_bytes()) {
                    let end = i + close.len();
                    // A bare-line block must also own the rest of its closing
                    // line; otherwise the span was a string after all.
                    if !spec.block_requires_bare_lines || line_suffix_blank(bytes, end) {
                        spans.push(RawSpan {
                            kind: SpanKind::Block,
                            start,
                            end,
                            prefix_len: open.len(),
                            suffix_len: close.len(),
                        });
                    }
                    state = State::Code;
                    i = end;
                } else {
                    i += 1;
                }
            }
            State::StringLiteral { closing } => {
                if bytes[i] == spec.escape as u8 {
                    i += 2;
                    continue;
                }
                match closing {
                    Closing::Quote(q) => {
                        if bytes[i] == q {
                            state = State::Code;
                        }
                        i += 1;
                    }
                    Closing::Token(pair) => {
                        let close = &spec.block_delimiters[pair].1;
                        if bytes[i..].starts_with(close.as_bytes()) {
                            i += close.len();
                            state = State::Code;
                        } else {
                            i += 1;
                        }
                    }
                }
            }
        }
    }

    match state {
        State::LineComment { start } => {
            spans.push(RawSpan {
                kind: SpanKind::Line,
                start,
                end: bytes.len(),
                prefix_len: spec.line_comment.len(),
                suffix_len: 0,
            });
        }
        State::BlockComment { start, .. } => {
            let lines = LineIndex::new(source);
            return Err(ExtractError::UnterminatedComment {
                line: lines.line_of(start),
            });
        }
        _ => {}
    }

    Ok(spans)
}

/// Strip delimiters from raw spans and compute 1-based line spans.
///
/// Single-line comment text is trimmed; block comment text keeps its interior
/// whitespace so that `end_line - start_line` equals the newline count.
pub fn normalize(source: &str, spans: &[RawSpan]) -> Vec<Comment> {
    let lines = LineIndex::new(source);
    spans
        .iter()
        .map(|span| {
            let inner = &source[span.start + span.prefix_len..span.end - span.suffix_len];
            match span.kind {
                SpanKind::Line => {
                    let line = lines.line_of(span.start);
                    // Extra delimiter characters (`///`, `##`) belong to the
                    // banner, not the text.
                    let last = span_last_char(span, source);
                    let text = inner.trim_start_matches(last).trim();
                    Comment::new(text, line, line, false)
                }
                SpanKind::Block => {
                    let start_line = lines.line_of(span.start);
                    let end_line = lines.line_of(span.end - span.suffix_len);
                    Comment::new(inner, start_line, end_line, true)
                }
            }
        })
        .collect()
}

/// Replace comment spans with spaces, preserving every newline and the byte
/// length of the source, so node positions reported against the blanked view
/// remain valid against the original.
///
/// With `blank_blocks` false only line comment spans are blanked (the parse
/// view for languages whose block comments are real syntax).
pub fn blank_spans(source: &str, spans: &[RawSpan], blank_blocks: bool) -> String {
    let mut out = String::with_capacity(source.len());
    let mut iter = spans
        .iter()
        .filter(|s| blank_blocks || s.kind == SpanKind::Line)
        .peekable();

    for (pos, ch) in source.char_indices() {
        while let Some(span) = iter.peek() {
            if pos >= span.end {
                iter.next();
            } else {
                break;
            }
        }
        let in_span = iter.peek().is_some_and(|s| pos >= s.start && pos < s.end);
        if in_span && ch != '\n' {
            for _ in 0..ch.len_utf8() {
                out.push(' ');
            }
        } else {
            out.push(ch);
        }
    }
    out
}

fn span_last_char(span: &RawSpan, source: &str) -> char {
    source[span.start..span.start + span.prefix_len]
        .chars()
        .last()
        .unwrap_or(' ')
}

fn block_start_at(bytes: &[u8], i: usize, spec: &LexicalSpec) -> Option<usize> {
    spec.block_delimiters
        .iter()
        .position(|(open, _)| bytes[i..].starts_with(open.as_bytes()))
}

fn line_comment_at(bytes: &[u8], i: usize, spec: &LexicalSpec) -> bool {
    !spec.line_comment.is_empty() && bytes[i..].starts_with(spec.line_comment.as_bytes())
}

fn quote_at(bytes: &[u8], i: usize, spec: &LexicalSpec) -> Option<u8> {
    spec.string_quotes
        .iter()
        .map(|q| *q as u8)
        .find(|q| bytes[i] == *q)
}

/// Whether everything between the previous newline and `i` is blank
fn line_prefix_blank(bytes: &[u8], i: usize) -> bool {
    bytes[..i]
        .iter()
        .rev()
        .take_while(|b| **b != b'\n')
        .all(|b| *b == b' ' || *b == b'\t')
}

/// Whether everything between `i` and the next newline is blank
fn line_suffix_blank(bytes: &[u8], i: usize) -> bool {
    bytes[i..]
        .iter()
        .take_while(|b| **b != b'\n')
        .all(|b| *b == b' ' || *b == b'\t' || *b == b'\r')
}
