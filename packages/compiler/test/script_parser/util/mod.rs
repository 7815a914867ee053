//! Shared helpers for the script parser test suites.
#![allow(dead_code)]

use sable_compiler::parse_util::ParseSourceFile;
use sable_compiler::script_parser::{
    CharacterCursor, ScriptContent, ScriptElement, ScriptElementParser, ScriptParseError,
};

pub fn cursor_for(source: &str) -> CharacterCursor {
    CharacterCursor::new(ParseSourceFile::new(
        source.to_string(),
        "test.sable".to_string(),
    ))
}

pub fn parse(source: &str) -> Result<Option<ScriptElement>, ScriptParseError> {
    let mut cursor = cursor_for(source);
    ScriptElementParser.parse(&mut cursor)
}

pub fn parse_ok(source: &str) -> ScriptElement {
    parse(source)
        .expect("hard parse error")
        .expect("expected a script element")
}

/// The literal segments of an element, in order.
pub fn literal_values(element: &ScriptElement) -> Vec<&str> {
    element
        .contents
        .iter()
        .filter_map(|content| match content {
            ScriptContent::Literal { value } => Some(value.as_str()),
            ScriptContent::Expression { .. } => None,
        })
        .collect()
}

/// Re-serialize all contents in order: literal text verbatim, expressions
/// rendered with single-space padded markers.
pub fn render_contents(element: &ScriptElement) -> String {
    let mut out = String::new();
    for content in &element.contents {
        match content {
            ScriptContent::Literal { value } => out.push_str(value),
            ScriptContent::Expression { expression, .. } => {
                out.push_str("{{ ");
                out.push_str(&expression.expression);
                out.push_str(" }}");
            }
        }
    }
    out
}
