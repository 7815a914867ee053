//! Character constants used throughout the compiler

// Special characters
pub const EOF: char = '\0';
pub const TAB: char = '\t';
pub const NEWLINE: char = '\n';
pub const RETURN: char = '\r';
pub const SPACE: char = ' ';

// Punctuation
pub const BANG: char = '!';
pub const DQ: char = '"';
pub const AMPERSAND: char = '&';
pub const SQ: char = '\'';
pub const LPAREN: char = '(';
pub const COMMA: char = ',';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const SEMICOLON: char = ';';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const QUESTION: char = '?';

// Brackets and braces
pub const LBRACKET: char = '[';
pub const BACKSLASH: char = '\\';
pub const LBRACE: char = '{';
pub const BAR: char = '|';
pub const RBRACE: char = '}';

/// Check if character is whitespace
pub fn is_whitespace(ch: char) -> bool {
    ch == SPACE || ch == TAB || ch == NEWLINE || ch == RETURN || ch == '\x0B' || ch == '\x0C'
}

/// Check if character is ASCII letter
pub fn is_ascii_letter(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_uppercase()
}

/// Check if character is a quote
pub fn is_quote(ch: char) -> bool {
    ch == SQ || ch == DQ || ch == '`'
}

/// Check if character can be part of an element or attribute name
pub fn is_name_char(ch: char) -> bool {
    is_ascii_letter(ch) || ch.is_ascii_digit() || ch == '-' || ch == '_' || ch == ':'
}
