//! Character cursor over a template source file.
//!
//! A sequential cursor with cheap save/restore, used by the tag boundary
//! parser for backtracking on soft failures.

use crate::chars;
use crate::parse_util::{ParseLocation, ParseSourceFile, ParseSourceSpan};

/// Saved cursor position, restorable with [`CharacterCursor::restore`].
#[derive(Debug, Clone)]
pub struct CursorState {
    peek: char,
    offset: usize,
    line: usize,
    column: usize,
}

impl CursorState {
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Cursor over an immutable source file.
#[derive(Debug, Clone)]
pub struct CharacterCursor {
    file: ParseSourceFile,
    state: CursorState,
}

impl CharacterCursor {
    pub fn new(file: ParseSourceFile) -> Self {
        let mut cursor = CharacterCursor {
            file,
            state: CursorState {
                peek: chars::EOF,
                offset: 0,
                line: 0,
                column: 0,
            },
        };
        cursor.update_peek();
        cursor
    }

    fn update_peek(&mut self) {
        self.state.peek = self.file.content[self.state.offset..]
            .chars()
            .next()
            .unwrap_or(chars::EOF);
    }

    /// The character at the cursor, or [`chars::EOF`] past the end.
    pub fn peek(&self) -> char {
        self.state.peek
    }

    pub fn at_eof(&self) -> bool {
        self.state.offset >= self.file.content.len()
    }

    /// Byte offset of the cursor in the source.
    pub fn offset(&self) -> usize {
        self.state.offset
    }

    pub fn advance(&mut self) {
        if self.state.offset < self.file.content.len() {
            self.state.offset += self.state.peek.len_utf8();
            if self.state.peek == chars::NEWLINE {
                self.state.line += 1;
                self.state.column = 0;
            } else {
                self.state.column += 1;
            }
            self.update_peek();
        }
    }

    /// Save the current position.
    pub fn state(&self) -> CursorState {
        self.state.clone()
    }

    /// Backtrack to a previously saved position.
    pub fn restore(&mut self, state: CursorState) {
        self.state = state;
    }

    pub fn file(&self) -> &ParseSourceFile {
        &self.file
    }

    pub fn location(&self) -> ParseLocation {
        ParseLocation::new(
            self.file.clone(),
            self.state.offset,
            self.state.line,
            self.state.column,
        )
    }

    pub fn location_of(&self, state: &CursorState) -> ParseLocation {
        ParseLocation::new(self.file.clone(), state.offset, state.line, state.column)
    }

    /// Span from a saved position to the current one.
    pub fn span_from(&self, start: &CursorState) -> ParseSourceSpan {
        ParseSourceSpan::new(self.location_of(start), self.location())
    }

    /// The source text between a saved position and the current one.
    pub fn chars_from(&self, start: &CursorState) -> String {
        self.file.content[start.offset..self.state.offset].to_string()
    }

    /// Consume `ch` if it is next.
    pub fn attempt_char(&mut self, ch: char) -> bool {
        if self.state.peek == ch && !self.at_eof() {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the literal `s` if it is next, otherwise leave the cursor
    /// untouched.
    pub fn attempt_str(&mut self, s: &str) -> bool {
        let saved = self.state();
        for ch in s.chars() {
            if self.at_eof() || self.state.peek != ch {
                self.restore(saved);
                return false;
            }
            self.advance();
        }
        true
    }

    /// Check for the literal `s` without consuming it.
    pub fn peek_str(&self, s: &str) -> bool {
        self.file.content[self.state.offset..].starts_with(s)
    }

    pub fn skip_whitespace(&mut self) {
        while !self.at_eof() && chars::is_whitespace(self.state.peek) {
            self.advance();
        }
    }
}
