//! Embedded template expressions: `{{ expr }}`.
//!
//! The narrow interface the script parser consumes: attempt an expression at
//! the cursor, get back a node and an advanced cursor, or a clean non-match.

use crate::parse_util::ParseSourceSpan;

use super::ast::EmbeddedExpression;
use super::cursor::CharacterCursor;
use super::ScriptParseError;

pub const EXPRESSION_START: &str = "{{";
pub const EXPRESSION_END: &str = "}}";

/// Attempt to parse an embedded expression at the cursor.
///
/// Returns `Ok(None)` without moving the cursor when the input does not
/// start with `{{`. Once the opening marker is consumed, a missing `}}` is a
/// hard error.
pub fn parse(cursor: &mut CharacterCursor) -> Result<Option<EmbeddedExpression>, ScriptParseError> {
    if !cursor.attempt_str(EXPRESSION_START) {
        return Ok(None);
    }

    // Skip leading whitespace so the recorded span covers the trimmed text.
    cursor.skip_whitespace();

    let expr_start = cursor.state();
    loop {
        if cursor.at_eof() {
            return Err(ScriptParseError::new(
                "expression: missing closing `}}`",
                cursor.location(),
            ));
        }
        if cursor.peek_str(EXPRESSION_END) {
            break;
        }
        cursor.advance();
    }

    let raw = cursor.chars_from(&expr_start);
    let trimmed = raw.trim_end();
    let span_start = cursor.location_of(&expr_start);
    let span_end = span_start.move_by(trimmed.len());
    let expression = EmbeddedExpression {
        expression: trimmed.to_string(),
        source_span: ParseSourceSpan::new(span_start, span_end),
    };

    cursor.attempt_str(EXPRESSION_END);
    Ok(Some(expression))
}
