//! Parse Utilities
//!
//! Source files, locations and spans shared by the template parsers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::chars;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseSourceFile {
    pub content: String,
    pub url: String,
}

impl ParseSourceFile {
    pub fn new(content: String, url: String) -> Self {
        ParseSourceFile { content, url }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseLocation {
    pub file: ParseSourceFile,
    pub offset: usize,
    pub line: usize,
    pub col: usize,
}

impl ParseLocation {
    pub fn new(file: ParseSourceFile, offset: usize, line: usize, col: usize) -> Self {
        ParseLocation { file, offset, line, col }
    }

    /// Return a location moved forward by `delta` bytes.
    ///
    /// Forward moves over ASCII text keep line/col exact; that is all the
    /// expression grammar needs when trimming whitespace.
    pub fn move_by(&self, delta: usize) -> ParseLocation {
        let source = &self.file.content;
        let mut offset = self.offset;
        let mut line = self.line;
        let mut col = self.col;
        let mut remaining = delta;

        while offset < source.len() && remaining > 0 {
            let ch = source.as_bytes()[offset];
            offset += 1;
            remaining -= 1;
            if ch == chars::NEWLINE as u8 {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }

        ParseLocation::new(self.file.clone(), offset, line, col)
    }

    /// Return the source around the location, up to `max_chars` on each side
    /// and at most `max_lines` lines.
    pub fn get_context(&self, max_chars: usize, max_lines: usize) -> Option<(String, String)> {
        let content = &self.file.content;
        if content.is_empty() {
            return None;
        }

        let anchor = self.offset.min(content.len());

        let mut start_offset = anchor;
        let mut ctx_chars = 0;
        let mut ctx_lines = 0;
        while ctx_chars < max_chars && start_offset > 0 {
            start_offset -= 1;
            while start_offset > 0 && !content.is_char_boundary(start_offset) {
                start_offset -= 1;
            }
            ctx_chars += 1;
            if content.as_bytes()[start_offset] == b'\n' {
                ctx_lines += 1;
                if ctx_lines >= max_lines {
                    break;
                }
            }
        }

        let mut end_offset = anchor;
        ctx_chars = 0;
        ctx_lines = 0;
        while ctx_chars < max_chars && end_offset < content.len() {
            let ch = content.as_bytes()[end_offset];
            end_offset += 1;
            while end_offset < content.len() && !content.is_char_boundary(end_offset) {
                end_offset += 1;
            }
            ctx_chars += 1;
            if ch == b'\n' {
                ctx_lines += 1;
                if ctx_lines >= max_lines {
                    break;
                }
            }
        }

        Some((
            content[start_offset..anchor].to_string(),
            content[anchor..end_offset].to_string(),
        ))
    }
}

impl fmt::Display for ParseLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}:{}", self.file.url, self.line, self.col)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseSourceSpan {
    pub start: ParseLocation,
    pub end: ParseLocation,
}

impl ParseSourceSpan {
    pub fn new(start: ParseLocation, end: ParseLocation) -> Self {
        ParseSourceSpan { start, end }
    }

    /// The source text covered by the span.
    pub fn text(&self) -> &str {
        &self.start.file.content[self.start.offset..self.end.offset]
    }
}

impl fmt::Display for ParseSourceSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}
