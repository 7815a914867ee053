//! Script element parsing
//!
//! Parses `<script>` elements embedded in Sable templates. Script content is
//! split into literal JavaScript text and embedded `{{ ... }}` template
//! expressions. The hard part is finding the terminating `</script>`:
//! JavaScript cannot be scanned by substring search alone, because the end
//! tag may legally appear inside a string, a comment or a regex literal, and
//! `/` is ambiguous (division vs. regex delimiter) without tracking the
//! preceding context.

pub mod ast;
pub mod attributes;
pub mod cursor;
pub mod expression;
pub mod parser;

use thiserror::Error;

use crate::parse_util::ParseLocation;

pub use ast::{
    Attribute, BooleanAttribute, ConstantAttribute, EmbeddedExpression, ExpressionAttribute,
    ScriptContent, ScriptElement,
};
pub use cursor::{CharacterCursor, CursorState};
pub use parser::{parse_script_element, ScriptElementParser};

/// A terminal parse error, raised once the opening tag has been committed.
///
/// Soft failures (not a script element at this position) are reported as
/// `Ok(None)` with the cursor restored, never through this type.
#[derive(Debug, Clone, Error)]
#[error("{msg}: {location}")]
pub struct ScriptParseError {
    pub msg: String,
    pub location: ParseLocation,
}

impl ScriptParseError {
    pub fn new(msg: impl Into<String>, location: ParseLocation) -> Self {
        ScriptParseError {
            msg: msg.into(),
            location,
        }
    }

    /// The error message with the surrounding source for context.
    pub fn contextual_message(&self) -> String {
        if let Some((before, after)) = self.location.get_context(100, 3) {
            format!("{} (\"{}[ERROR ->]{}\")", self.msg, before, after)
        } else {
            self.msg.clone()
        }
    }
}
