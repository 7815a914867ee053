//! Script element AST nodes.

use serde::{Deserialize, Serialize};

use crate::parse_util::ParseSourceSpan;

/// A parsed `<script>...</script>` element.
///
/// Fully constructed by one parse call and immutable afterwards. The span
/// starts at `<` and ends immediately after the matched `</script>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptElement {
    pub attributes: Vec<Attribute>,
    pub contents: Vec<ScriptContent>,
    pub source_span: ParseSourceSpan,
}

/// One segment of script content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ScriptContent {
    /// Raw script text, emitted verbatim.
    Literal { value: String },
    /// An embedded template expression spliced in at render time.
    /// `inside_string_literal` records whether a string was open when the
    /// expression was recognized, so consumers know to quote the value.
    Expression {
        expression: EmbeddedExpression,
        inside_string_literal: bool,
    },
}

impl ScriptContent {
    pub fn literal(value: impl Into<String>) -> Self {
        ScriptContent::Literal { value: value.into() }
    }

    pub fn expression(expression: EmbeddedExpression, inside_string_literal: bool) -> Self {
        ScriptContent::Expression {
            expression,
            inside_string_literal,
        }
    }
}

/// An embedded `{{ ... }}` template expression.
///
/// The span covers the trimmed expression text, not the markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddedExpression {
    pub expression: String,
    pub source_span: ParseSourceSpan,
}

/// An attribute of an opening tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Attribute {
    Constant(ConstantAttribute),
    Expression(ExpressionAttribute),
    Boolean(BooleanAttribute),
}

/// `key="value"`, `key='value'` or `key=value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantAttribute {
    pub name: String,
    pub value: String,
    pub source_span: ParseSourceSpan,
}

/// `key={{ expr }}`: the value is only known at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionAttribute {
    pub name: String,
    pub expression: EmbeddedExpression,
    pub source_span: ParseSourceSpan,
}

/// A bare `key` with no value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BooleanAttribute {
    pub name: String,
    pub source_span: ParseSourceSpan,
}

impl Attribute {
    /// The attribute key, whatever the value form.
    pub fn name(&self) -> &str {
        match self {
            Attribute::Constant(a) => &a.name,
            Attribute::Expression(a) => &a.name,
            Attribute::Boolean(a) => &a.name,
        }
    }
}
