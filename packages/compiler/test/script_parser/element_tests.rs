//! Tag boundary and content-type classification tests.

#[path = "util/mod.rs"]
mod util;

use sable_compiler::script_parser::{Attribute, ScriptContent, ScriptElementParser};
use util::*;

mod tag_boundaries {
    use super::*;

    #[test]
    fn should_parse_an_empty_element() {
        let element = parse_ok("<script></script>");
        assert!(element.attributes.is_empty());
        assert!(element.contents.is_empty());
        assert_eq!(element.source_span.start.offset, 0);
        assert_eq!(element.source_span.end.offset, 17);
    }

    #[test]
    fn should_span_the_whole_element() {
        let source = "<script>\nvar x = 1;\n</script>";
        let element = parse_ok(source);
        assert_eq!(element.source_span.text(), source);
        assert_eq!(element.source_span.end.line, 2);
        assert_eq!(element.source_span.end.col, 9);
    }

    #[test]
    fn should_not_match_other_elements() {
        let mut cursor = cursor_for("<div>x</div>");
        let result = ScriptElementParser.parse(&mut cursor).unwrap();
        assert!(result.is_none());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn should_match_the_name_case_sensitively() {
        assert!(parse("<SCRIPT></SCRIPT>").unwrap().is_none());
        assert!(parse("<Script></Script>").unwrap().is_none());
    }

    #[test]
    fn should_not_match_a_longer_name() {
        assert!(parse("<scripts></scripts>").unwrap().is_none());
    }

    #[test]
    fn should_not_match_without_a_closing_angle() {
        let mut cursor = cursor_for("<script");
        let result = ScriptElementParser.parse(&mut cursor).unwrap();
        assert!(result.is_none());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn should_not_match_a_self_closing_tag() {
        assert!(parse("<script />").unwrap().is_none());
    }

    #[test]
    fn should_not_match_a_malformed_attribute_list() {
        let mut cursor = cursor_for("<script \"loose\"></script>");
        let result = ScriptElementParser.parse(&mut cursor).unwrap();
        assert!(result.is_none());
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn should_allow_whitespace_before_the_closing_angle() {
        let element = parse_ok("<script  \n>var a;</script>");
        assert_eq!(literal_values(&element), vec!["var a;"]);
    }

    #[test]
    fn should_record_attributes() {
        let element = parse_ok("<script type=\"module\" defer></script>");
        assert_eq!(element.attributes.len(), 2);
        assert_eq!(element.attributes[0].name(), "type");
        assert_eq!(element.attributes[1].name(), "defer");
        assert!(matches!(&element.attributes[1], Attribute::Boolean(_)));
    }
}

mod content_type_classification {
    use super::*;

    #[test]
    fn should_treat_json_as_raw_text() {
        let element = parse_ok("<script type=\"application/json\">{\"a\": 1}</script>");
        assert_eq!(element.contents.len(), 1);
        assert_eq!(literal_values(&element), vec!["{\"a\": 1}"]);
    }

    #[test]
    fn should_not_recognize_expressions_in_raw_text() {
        let element = parse_ok("<script type=\"text/template\">Hi {{ name }}!</script>");
        assert_eq!(literal_values(&element), vec!["Hi {{ name }}!"]);
    }

    #[test]
    fn should_not_track_strings_in_raw_text() {
        // An unbalanced quote would confuse the JavaScript scanner; raw
        // text only looks for the end tag.
        let element = parse_ok("<script type=\"text/template\">it's fine</script>");
        assert_eq!(literal_values(&element), vec!["it's fine"]);
    }

    #[test]
    fn should_produce_no_segment_for_an_empty_raw_body() {
        let element = parse_ok("<script type=\"application/json\"></script>");
        assert!(element.contents.is_empty());
    }

    #[test]
    fn should_match_type_values_case_insensitively() {
        let element = parse_ok("<script type=\"TEXT/JAVASCRIPT\">{{ a }}</script>");
        assert!(matches!(
            element.contents[0],
            ScriptContent::Expression { .. }
        ));
    }

    #[test]
    fn should_match_the_type_key_case_insensitively() {
        let element = parse_ok("<script TYPE=\"application/json\">{}</script>");
        assert_eq!(literal_values(&element), vec!["{}"]);
    }

    #[test]
    fn should_default_to_javascript_for_an_empty_type() {
        let element = parse_ok("<script type=\"\">{{ a }}</script>");
        assert!(matches!(
            element.contents[0],
            ScriptContent::Expression { .. }
        ));
    }

    #[test]
    fn should_skip_an_expression_valued_type() {
        let element = parse_ok("<script type={{ t }}>{{ a }}</script>");
        assert!(matches!(
            element.contents[0],
            ScriptContent::Expression { .. }
        ));
    }

    #[test]
    fn should_consult_only_the_first_constant_type() {
        let element =
            parse_ok("<script type=\"application/json\" type=\"text/javascript\">{}</script>");
        assert_eq!(literal_values(&element), vec!["{}"]);
    }

    #[test]
    fn should_accept_an_unquoted_type_value() {
        let element = parse_ok("<script type=module>export {};</script>");
        assert_eq!(literal_values(&element), vec!["export {};"]);
    }
}

mod serialization {
    use super::*;

    #[test]
    fn should_serialize_contents_with_tagged_variants() {
        let element = parse_ok("<script>var x = {{ count }};</script>");
        let value = serde_json::to_value(&element).unwrap();
        assert_eq!(value["contents"][0]["type"], "Literal");
        assert_eq!(value["contents"][0]["value"], "var x = ");
        assert_eq!(value["contents"][1]["type"], "Expression");
        assert_eq!(
            value["contents"][1]["expression"]["expression"],
            "count"
        );
    }
}
