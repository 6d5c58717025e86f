//! Integration tests for Error types
//!
//! Tests error construction, display, context, and error lists.

use apidesign_foundation::{Error, ErrorContext, ErrorKind, Errors};

// =============================================================================
// Error Construction
// =============================================================================

#[test]
fn error_incompatible_target() {
    let err = Error::incompatible_target("Required");
    assert!(matches!(err.kind, ErrorKind::IncompatibleTarget { .. }));
    assert_eq!(err.to_string(), "invalid use of Required");
}

#[test]
fn error_incompatible_attribute_type() {
    let err = Error::incompatible_attribute_type("format", "int", "a string");
    assert_eq!(
        err.to_string(),
        "invalid format validation definition: attribute must be a string (but type is int)"
    );
}

#[test]
fn error_invalid_number() {
    let err = Error::invalid_number("\"not-a-number\"");
    assert!(err.to_string().contains("not-a-number"));
}

#[test]
fn error_enum_value_names_index() {
    let err = Error::new(ErrorKind::IncompatibleEnumValue {
        value: "\"two\"".to_string(),
        index: 1,
        type_name: "int".to_string(),
    });
    let msg = err.to_string();
    assert!(msg.contains("index 1"));
    assert!(msg.contains("\"two\""));
    assert!(msg.contains("int"));
}

#[test]
fn error_invalid_format_quotes_tag() {
    let err = Error::new(ErrorKind::InvalidFormat("zip".to_string()));
    assert_eq!(err.to_string(), "invalid validation format \"zip\"");
}

// =============================================================================
// Error Context
// =============================================================================

#[test]
fn context_renders_path_and_source() {
    let err = Error::incompatible_target("Meta").with_context(
        ErrorContext::new()
            .with_segment("type \"Account\"")
            .with_segment("attribute \"email\"")
            .with_source("design.rs"),
    );
    assert_eq!(
        err.to_string(),
        "invalid use of Meta (in type \"Account\" / attribute \"email\" at design.rs)"
    );
}

#[test]
fn empty_context_is_not_rendered() {
    let err = Error::incompatible_target("Meta").with_context(ErrorContext::new());
    assert_eq!(err.to_string(), "invalid use of Meta");
}

// =============================================================================
// Error Lists
// =============================================================================

#[test]
fn errors_render_one_per_line() {
    let errors = Errors(vec![
        Error::incompatible_target("Enum"),
        Error::invalid_number("x"),
    ]);
    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.to_string(),
        "invalid use of Enum\ninvalid number value x"
    );
    let kinds: Vec<_> = errors.into_iter().map(|e| e.kind).collect();
    assert_eq!(kinds[1], ErrorKind::InvalidNumber("x".to_string()));
}
