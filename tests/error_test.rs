use openrouter_response::{
    ArgumentsPolicy, DecodeError, DecodeOptions, Decoder, FieldPath, PathSegment, Result,
};
use serde_json::json;

#[test]
fn test_structural_display() {
    let err = DecodeError::Structural {
        path: FieldPath::root().key("choices").index(0).key("message"),
        expected: "object",
    };
    assert_eq!(
        err.to_string(),
        "missing or invalid field 'choices[0].message': expected object"
    );
}

#[test]
fn test_arguments_error_keeps_source() {
    let decoder = Decoder::new(DecodeOptions::new().arguments_policy(ArgumentsPolicy::Strict));
    let err = decoder
        .decode_value(&json!({
            "choices": [{"message": {"tool_calls": [{"function": {"name": "f", "arguments": "{"}}]}}]
        }))
        .unwrap_err();

    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("invalid tool call arguments at"));
    let segments = err.path().unwrap().segments();
    assert_eq!(segments.first(), Some(&PathSegment::Key("choices")));
    assert_eq!(segments.last(), Some(&PathSegment::Key("arguments")));
}

#[test]
fn test_result_alias() {
    fn returns_error() -> Result<()> {
        Err(DecodeError::Structural {
            path: FieldPath::root(),
            expected: "object",
        })
    }
    assert!(returns_error().is_err());
}
