//! Attribute grammar for element opening tags.
//!
//! A narrow collaborator of the script parser: attributes are parsed into
//! opaque nodes here and only consulted again by the content-type
//! classifier. A malformed list is a soft failure; the caller backtracks the
//! whole tag.

use crate::chars;

use super::ast::{Attribute, BooleanAttribute, ConstantAttribute, ExpressionAttribute};
use super::cursor::CharacterCursor;
use super::expression;

/// Parse the attribute list of an opening tag.
///
/// Consumes attributes and surrounding whitespace, leaving the cursor on the
/// tag closer (`>`, `/`) or at end of input. Returns `None` on a malformed
/// list.
pub fn parse(cursor: &mut CharacterCursor) -> Option<Vec<Attribute>> {
    let mut attributes = Vec::new();

    loop {
        let before = cursor.state();
        cursor.skip_whitespace();
        let saw_whitespace = cursor.offset() > before.offset();

        if cursor.at_eof() || cursor.peek() == chars::GT || cursor.peek() == chars::SLASH {
            return Some(attributes);
        }

        // Attributes must be separated from the tag name and each other.
        if !saw_whitespace {
            return None;
        }

        attributes.push(parse_attribute(cursor)?);
    }
}

fn parse_attribute(cursor: &mut CharacterCursor) -> Option<Attribute> {
    let start = cursor.state();

    let mut name = String::new();
    while chars::is_name_char(cursor.peek()) && !cursor.at_eof() {
        name.push(cursor.peek());
        cursor.advance();
    }
    if name.is_empty() {
        return None;
    }

    if !cursor.attempt_char(chars::EQ) {
        return Some(Attribute::Boolean(BooleanAttribute {
            name,
            source_span: cursor.span_from(&start),
        }));
    }

    if cursor.peek_str(expression::EXPRESSION_START) {
        // An unterminated expression here is still a soft failure: the tag
        // has not been committed yet.
        let expr = expression::parse(cursor).ok().flatten()?;
        return Some(Attribute::Expression(ExpressionAttribute {
            name,
            expression: expr,
            source_span: cursor.span_from(&start),
        }));
    }

    let quote = cursor.peek();
    if quote == chars::DQ || quote == chars::SQ {
        cursor.advance();
        let value_start = cursor.state();
        loop {
            if cursor.at_eof() {
                return None;
            }
            if cursor.peek() == quote {
                break;
            }
            cursor.advance();
        }
        let value = cursor.chars_from(&value_start);
        cursor.advance();
        return Some(Attribute::Constant(ConstantAttribute {
            name,
            value,
            source_span: cursor.span_from(&start),
        }));
    }

    // Unquoted value.
    let value_start = cursor.state();
    while !cursor.at_eof()
        && !chars::is_whitespace(cursor.peek())
        && cursor.peek() != chars::GT
        && cursor.peek() != chars::SLASH
    {
        cursor.advance();
    }
    let value = cursor.chars_from(&value_start);
    if value.is_empty() {
        return None;
    }
    Some(Attribute::Constant(ConstantAttribute {
        name,
        value,
        source_span: cursor.span_from(&start),
    }))
}
