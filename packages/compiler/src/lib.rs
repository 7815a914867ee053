#![deny(clippy::all)]

//! Sable Template Compiler
//!
//! Parsing front end for Sable templates. The crate covers the `<script>`
//! element sub-parser: the opening/closing tag boundaries, the content-type
//! classifier, and the JavaScript-aware scanner that splits script content
//! into literal text and embedded `{{ ... }}` expressions.

pub mod chars;
pub mod parse_util;
pub mod script_parser;

pub use script_parser::{parse_script_element, ScriptElementParser, ScriptParseError};
