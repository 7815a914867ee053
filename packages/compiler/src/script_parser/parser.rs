//! The `<script>` element parser.
//!
//! Recognizes the opening tag, classifies the content from the `type`
//! attribute, and scans the body with either a plain end-tag search (opaque
//! content such as JSON) or the JavaScript-aware state machine below.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::chars;
use crate::parse_util::ParseSourceFile;

use super::ast::{Attribute, ScriptContent, ScriptElement};
use super::attributes;
use super::cursor::{CharacterCursor, CursorState};
use super::expression;
use super::ScriptParseError;

const TAG_NAME: &str = "script";
const END_TAG: &str = "</script>";

const END_TAG_NOT_FOUND: &str = "script element: expected end tag not present";

/// `type` attribute values whose content is JavaScript.
const JAVASCRIPT_TYPE_ATTRIBUTE_VALUES: &[&str] = &[
    "", // Unset means JavaScript.
    "text/javascript",
    "javascript", // Obsolete, but still used.
    "module",
];

/// Keywords after which a `/` starts a regex literal rather than a division.
static REGEX_PRECEDING_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^|\s)(?:return|yield|case|delete|do|else|in|instanceof|new|throw|typeof|void)$")
        .unwrap()
});

/// The scanner's lexical context.
///
/// A closed sum type: being inside a regex while a string is open is not
/// representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsContext {
    Plain,
    InString(JsQuote),
    InRegex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsQuote {
    Single,
    Double,
    Backtick,
}

impl JsQuote {
    fn from_char(ch: char) -> Option<JsQuote> {
        match ch {
            chars::SQ => Some(JsQuote::Single),
            chars::DQ => Some(JsQuote::Double),
            '`' => Some(JsQuote::Backtick),
            _ => None,
        }
    }
}

/// Parses `<script>` elements.
#[derive(Debug, Default)]
pub struct ScriptElementParser;

impl ScriptElementParser {
    /// Attempt to parse a script element at the cursor.
    ///
    /// `Ok(None)` is a clean non-match with the cursor restored, so the
    /// caller can try other grammar rules. Errors are terminal: once the
    /// opening tag's `>` has been consumed, the element either fully parses
    /// or fails.
    pub fn parse(
        &self,
        cursor: &mut CharacterCursor,
    ) -> Result<Option<ScriptElement>, ScriptParseError> {
        let start = cursor.state();

        // <
        if !cursor.attempt_char(chars::LT) {
            return Ok(None);
        }

        // Element name, matched exactly.
        let mut name = String::new();
        while !cursor.at_eof() && chars::is_name_char(cursor.peek()) {
            name.push(cursor.peek());
            cursor.advance();
        }
        if name != TAG_NAME {
            cursor.restore(start);
            return Ok(None);
        }

        let attrs = match attributes::parse(cursor) {
            Some(attrs) => attrs,
            None => {
                cursor.restore(start);
                return Ok(None);
            }
        };

        // >
        if !cursor.attempt_char(chars::GT) {
            cursor.restore(start);
            return Ok(None);
        }

        // The tag is committed; failures from here on are terminal.
        let element = if has_javascript_type(&attrs) {
            self.parse_javascript_content(cursor, &start, attrs)?
        } else {
            self.parse_raw_content(cursor, &start, attrs)?
        };
        Ok(Some(element))
    }

    /// Opaque content: only the literal end tag matters.
    fn parse_raw_content(
        &self,
        cursor: &mut CharacterCursor,
        start: &CursorState,
        attrs: Vec<Attribute>,
    ) -> Result<ScriptElement, ScriptParseError> {
        let content_start = cursor.state();
        loop {
            if cursor.peek_str(END_TAG) {
                break;
            }
            if cursor.at_eof() {
                return Err(ScriptParseError::new(END_TAG_NOT_FOUND, cursor.location()));
            }
            cursor.advance();
        }

        let text = cursor.chars_from(&content_start);
        let mut contents = Vec::new();
        if !text.is_empty() {
            contents.push(ScriptContent::literal(text));
        }

        cursor.attempt_str(END_TAG);
        Ok(ScriptElement {
            attributes: attrs,
            contents,
            source_span: cursor.span_from(start),
        })
    }

    /// JavaScript content: the character-by-character state machine.
    ///
    /// Each iteration checks, in this order: the end tag, an embedded
    /// expression, a comment, then a single lexical unit. The first two
    /// checks are deliberately not gated by the string/regex context, so a
    /// literal `</script>` inside a string still ends the element. Templates
    /// that need that text in a string must escape or split it.
    fn parse_javascript_content(
        &self,
        cursor: &mut CharacterCursor,
        start: &CursorState,
        attrs: Vec<Attribute>,
    ) -> Result<ScriptElement, ScriptParseError> {
        let mut contents: Vec<ScriptContent> = Vec::new();
        let mut buffer = String::new();
        let mut context = JsContext::Plain;

        loop {
            if cursor.attempt_str(END_TAG) {
                break;
            }

            if let Some(expr) = expression::parse(cursor)? {
                flush_literal(&mut contents, &mut buffer);
                contents.push(ScriptContent::expression(
                    expr,
                    matches!(context, JsContext::InString(_)),
                ));
                continue;
            }

            if let Some(comment) = consume_comment(cursor) {
                flush_literal(&mut contents, &mut buffer);
                contents.push(ScriptContent::literal(comment));
                continue;
            }

            if cursor.at_eof() {
                return Err(ScriptParseError::new(END_TAG_NOT_FOUND, cursor.location()));
            }

            // One lexical unit: `\` plus any single character, or a single
            // character. Longer escape forms never matter here, two
            // characters always suffice.
            let first = cursor.peek();
            let mut unit = String::new();
            unit.push(first);
            cursor.advance();
            if first == chars::BACKSLASH && !cursor.at_eof() {
                unit.push(cursor.peek());
                cursor.advance();
            }

            // Transitions depend only on the unit's first character; an
            // escape unit starts with `\` and never changes the context.
            context = match context {
                JsContext::Plain => {
                    if first == chars::SLASH && is_start_of_regex(&buffer) {
                        JsContext::InRegex
                    } else if let Some(quote) = JsQuote::from_char(first) {
                        JsContext::InString(quote)
                    } else {
                        JsContext::Plain
                    }
                }
                JsContext::InRegex => {
                    // A segment flush empties the buffer mid-regex; a `/`
                    // with nothing buffered does not close the regex.
                    if first == chars::SLASH
                        && !buffer.is_empty()
                        && !buffer.ends_with(chars::BACKSLASH)
                    {
                        JsContext::Plain
                    } else {
                        JsContext::InRegex
                    }
                }
                JsContext::InString(quote) => {
                    if JsQuote::from_char(first) == Some(quote) {
                        JsContext::Plain
                    } else {
                        JsContext::InString(quote)
                    }
                }
            };

            buffer.push_str(&unit);
        }

        flush_literal(&mut contents, &mut buffer);
        Ok(ScriptElement {
            attributes: attrs,
            contents,
            source_span: cursor.span_from(start),
        })
    }
}

/// Convenience entry point: parse a script element at the start of `source`.
pub fn parse_script_element(
    source: &str,
    url: &str,
) -> Result<Option<ScriptElement>, ScriptParseError> {
    let file = ParseSourceFile::new(source.to_string(), url.to_string());
    let mut cursor = CharacterCursor::new(file);
    ScriptElementParser.parse(&mut cursor)
}

fn flush_literal(contents: &mut Vec<ScriptContent>, buffer: &mut String) {
    if !buffer.is_empty() {
        contents.push(ScriptContent::literal(std::mem::take(buffer)));
    }
}

/// Consume `// ...` through the newline (or end of input), or `/* ... */`
/// plus any trailing whitespace. Returns the consumed text.
fn consume_comment(cursor: &mut CharacterCursor) -> Option<String> {
    let start = cursor.state();

    if cursor.attempt_str("//") {
        while !cursor.at_eof() {
            let ch = cursor.peek();
            cursor.advance();
            if ch == chars::NEWLINE {
                break;
            }
        }
        return Some(cursor.chars_from(&start));
    }

    if cursor.attempt_str("/*") {
        loop {
            if cursor.at_eof() || cursor.attempt_str("*/") {
                break;
            }
            cursor.advance();
        }
        cursor.skip_whitespace();
        return Some(cursor.chars_from(&start));
    }

    None
}

/// Decide whether the element's content is JavaScript.
///
/// Only the first constant `type` attribute is consulted;
/// expression-valued and boolean `type` attributes cannot be resolved at
/// parse time and are skipped.
fn has_javascript_type(attrs: &[Attribute]) -> bool {
    for attr in attrs {
        let Attribute::Constant(constant) = attr else {
            continue;
        };
        if !constant.name.eq_ignore_ascii_case("type") {
            continue;
        }
        return JAVASCRIPT_TYPE_ATTRIBUTE_VALUES
            .iter()
            .any(|v| constant.value.eq_ignore_ascii_case(v));
    }
    true
}

/// Does a `/` after `preceding` start a regex literal rather than a
/// division? Resolved from the trailing token context alone.
fn is_start_of_regex(preceding: &str) -> bool {
    let trimmed = preceding.trim_end_matches(|ch| matches!(ch, ' ' | '\t' | '\r' | '\n'));
    if trimmed.is_empty() {
        return true;
    }
    if REGEX_PRECEDING_KEYWORD.is_match(trimmed) {
        return true;
    }
    matches!(
        trimmed.chars().last(),
        Some(
            chars::LPAREN
                | chars::COMMA
                | chars::EQ
                | chars::COLON
                | chars::LBRACKET
                | chars::BANG
                | chars::AMPERSAND
                | chars::BAR
                | chars::QUESTION
                | chars::LBRACE
                | chars::SEMICOLON
        )
    )
}
