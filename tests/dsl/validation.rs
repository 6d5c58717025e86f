//! Integration tests for validation functions
//!
//! Tests kind checks, value normalization, and the all-or-nothing rules.

use apidesign_dsl::{
    enum_values, format, max_length, maximum, min_length, minimum, pattern, required,
};
use apidesign_eval::{EvalConfig, EvalContext, run};
use apidesign_expr::{AttributeExpr, DataType, Design, Primitive, ResultTypeExpr, ValidationFormat};
use apidesign_foundation::{ErrorKind, Value};
use proptest::prelude::*;

use crate::on_field;

fn incompatible_type(validation: &str, expected: &str, actual: &str) -> ErrorKind {
    ErrorKind::IncompatibleAttributeType {
        validation: validation.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    }
}

// =============================================================================
// Kind Checks
// =============================================================================

#[test]
fn wrong_kind_reports_once_and_leaves_record_absent() {
    let cases: [(DataType, fn(&mut EvalContext), ErrorKind); 7] = [
        (
            DataType::INT,
            |ctx| format(ctx, "email"),
            incompatible_type("format", "a string", "int"),
        ),
        (
            DataType::BOOLEAN,
            |ctx| pattern(ctx, "^a$"),
            incompatible_type("pattern", "a string", "boolean"),
        ),
        (
            DataType::STRING,
            |ctx| minimum(ctx, 1),
            incompatible_type("minimum", "an integer or a number", "string"),
        ),
        (
            DataType::array_of(DataType::INT),
            |ctx| maximum(ctx, 1),
            incompatible_type("maximum", "an integer or a number", "array"),
        ),
        (
            DataType::INT,
            |ctx| min_length(ctx, 1),
            incompatible_type("minimum length", "a string, bytes, an array or a map", "int"),
        ),
        (
            DataType::object(),
            |ctx| max_length(ctx, 1),
            incompatible_type("maximum length", "a string, bytes, an array or a map", "object"),
        ),
        (
            DataType::STRING,
            |ctx| required(ctx, ["a"]),
            incompatible_type("required", "an object", "string"),
        ),
    ];

    for (data_type, dsl, expected) in cases {
        let (field, errors) = on_field(Some(data_type), dsl);
        assert_eq!(errors, vec![expected]);
        assert!(field.validation.is_none());
    }
}

#[test]
fn unknown_type_records_without_checks() {
    let (field, errors) = on_field(None, |ctx| {
        format(ctx, "uuid");
        pattern(ctx, "^[0-9a-f-]+$");
        minimum(ctx, 0);
        maximum(ctx, 10.5);
        min_length(ctx, 36);
        max_length(ctx, 36);
        required(ctx, ["id"]);
    });

    assert!(errors.is_empty());
    let validation = field.validation.unwrap();
    assert_eq!(validation.format, Some(ValidationFormat::Uuid));
    assert_eq!(validation.pattern.as_deref(), Some("^[0-9a-f-]+$"));
    assert_eq!(validation.minimum, Some(0.0));
    assert_eq!(validation.maximum, Some(10.5));
    assert_eq!(validation.min_length, Some(36));
    assert_eq!(validation.max_length, Some(36));
    assert_eq!(validation.required, ["id"]);
}

#[test]
fn length_applies_to_every_sized_kind() {
    for data_type in [
        DataType::STRING,
        DataType::BYTES,
        DataType::array_of(DataType::STRING),
        DataType::map_of(DataType::STRING, DataType::INT),
    ] {
        let (field, errors) = on_field(Some(data_type), |ctx| min_length(ctx, 2));
        assert!(errors.is_empty());
        assert_eq!(field.validation.unwrap().min_length, Some(2));
    }
}

#[test]
fn later_calls_replace_earlier_values() {
    let (field, errors) = on_field(Some(DataType::STRING), |ctx| {
        format(ctx, "email");
        format(ctx, "hostname");
        max_length(ctx, 10);
        max_length(ctx, 20);
    });

    assert!(errors.is_empty());
    let validation = field.validation.unwrap();
    assert_eq!(validation.format, Some(ValidationFormat::Hostname));
    assert_eq!(validation.max_length, Some(20));
}

#[test]
fn failed_call_keeps_earlier_value() {
    let (field, errors) = on_field(Some(DataType::STRING), |ctx| {
        pattern(ctx, "^a+$");
        pattern(ctx, "(");
    });

    assert_eq!(errors.len(), 1);
    assert_eq!(field.validation.unwrap().pattern.as_deref(), Some("^a+$"));
}

// =============================================================================
// Numeric Bounds
// =============================================================================

#[test]
fn bounds_normalize_to_float() {
    for input in [Value::from(42), Value::from("42"), Value::from(42.0)] {
        let (field, errors) = on_field(Some(DataType::INT), |ctx| {
            minimum(ctx, input.clone());
            maximum(ctx, input);
        });
        assert!(errors.is_empty());
        let validation = field.validation.unwrap();
        assert_eq!(validation.minimum, Some(42.0));
        assert_eq!(validation.maximum, Some(42.0));
    }
}

#[test]
fn bounds_accept_every_numeric_primitive() {
    for primitive in [Primitive::Int32, Primitive::UInt64, Primitive::Float32, Primitive::Float64] {
        let (field, errors) = on_field(Some(primitive.into()), |ctx| minimum(ctx, -1));
        assert!(errors.is_empty());
        assert_eq!(field.validation.unwrap().minimum, Some(-1.0));
    }
}

#[test]
fn non_numeric_bound_is_reported() {
    let (field, errors) = on_field(Some(DataType::FLOAT64), |ctx| minimum(ctx, "not-a-number"));
    assert_eq!(
        errors,
        vec![ErrorKind::InvalidNumber("\"not-a-number\"".to_string())]
    );
    assert!(field.validation.is_none());
}

// =============================================================================
// Enum
// =============================================================================

#[test]
fn enum_on_unknown_type_stores_raw_values() {
    let (field, errors) = on_field(None, |ctx| {
        enum_values(ctx, [Value::from(1), Value::from("two"), Value::from(3)]);
    });

    assert!(errors.is_empty());
    assert_eq!(
        field.validation.unwrap().values.unwrap(),
        vec![Value::from(1), Value::from("two"), Value::from(3)]
    );
}

#[test]
fn enum_is_all_or_nothing() {
    let (field, errors) = on_field(Some(DataType::INT), |ctx| {
        enum_values(ctx, [Value::from(1), Value::from("two"), Value::from(3)]);
    });

    assert_eq!(
        errors,
        vec![ErrorKind::IncompatibleEnumValue {
            value: "\"two\"".to_string(),
            index: 1,
            type_name: "int".to_string(),
        }]
    );
    assert!(field.validation.is_none());
}

#[test]
fn enum_reports_every_offending_index() {
    let (_, errors) = on_field(Some(DataType::STRING), |ctx| {
        enum_values(ctx, [Value::from(1), Value::from("ok"), Value::from(true)]);
    });

    let indexes: Vec<_> = errors
        .iter()
        .map(|kind| match kind {
            ErrorKind::IncompatibleEnumValue { index, .. } => *index,
            _ => usize::MAX,
        })
        .collect();
    assert_eq!(indexes, [0, 2]);
}

#[test]
fn enum_checks_array_elements() {
    let (field, errors) = on_field(Some(DataType::array_of(DataType::STRING)), |ctx| {
        enum_values(ctx, [vec!["a", "b"], vec!["c"]]);
    });
    assert!(errors.is_empty());
    assert_eq!(field.validation.unwrap().values.unwrap().len(), 2);

    let (_, errors) = on_field(Some(DataType::array_of(DataType::STRING)), |ctx| {
        enum_values(ctx, [vec![1, 2]]);
    });
    assert_eq!(errors.len(), 1);
}

#[test]
fn enum_on_object_accepts_maps_before_fields_exist() {
    let (field, errors) = on_field(Some(DataType::object()), |ctx| {
        enum_values(ctx, [Value::map([("x", 1)])]);
        ctx.attribute("x", Some(DataType::INT), |_| {});
    });

    assert!(errors.is_empty());
    assert!(field.field("x").is_some());
    assert_eq!(
        field.validation.unwrap().values.unwrap(),
        vec![Value::map([("x", 1)])]
    );
}

#[test]
fn enum_on_object_rejects_non_maps() {
    let (field, errors) = on_field(Some(DataType::object()), |ctx| {
        ctx.attribute("x", Some(DataType::INT), |_| {});
        enum_values(ctx, [Value::map([("x", 1)]), Value::from("x")]);
    });

    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0],
        ErrorKind::IncompatibleEnumValue { index: 1, .. }
    ));
    assert!(field.validation.is_none());
}

#[test]
fn enum_on_user_type_is_rejected() {
    let errors = run(EvalConfig::minimal(), |ctx| {
        ctx.user_type("Color", |ctx| enum_values(ctx, ["red", "green"]));
    })
    .unwrap_err();
    assert_eq!(
        errors.0[0].kind,
        ErrorKind::IncompatibleTarget {
            dsl: "Enum".to_string()
        }
    );
}

// =============================================================================
// Format and Pattern
// =============================================================================

#[test]
fn unknown_format_is_reported_and_not_stored() {
    let (field, errors) = on_field(Some(DataType::STRING), |ctx| format(ctx, "zip-code"));
    assert_eq!(errors, vec![ErrorKind::InvalidFormat("zip-code".to_string())]);
    assert!(field.validation.is_none());
}

#[test]
fn every_supported_format_is_accepted() {
    for supported in ValidationFormat::ALL {
        let (field, errors) = on_field(Some(DataType::STRING), |ctx| {
            format(ctx, supported.as_str());
        });
        assert!(errors.is_empty(), "{supported} rejected");
        assert_eq!(field.validation.unwrap().format, Some(supported));
    }
}

#[test]
fn invalid_pattern_reports_compile_failure() {
    let (field, errors) = on_field(Some(DataType::STRING), |ctx| pattern(ctx, "[a-"));
    assert_eq!(errors.len(), 1);
    assert!(matches!(&errors[0], ErrorKind::InvalidPattern { pattern, .. } if pattern == "[a-"));
    assert!(
        apidesign_foundation::Error::new(errors[0].clone())
            .to_string()
            .contains("compile failed")
    );
    assert!(field.validation.is_none());
}

// =============================================================================
// Required
// =============================================================================

#[test]
fn required_accumulates_without_deduplication() {
    let (field, errors) = on_field(Some(DataType::object()), |ctx| {
        required(ctx, ["a"]);
        required(ctx, ["b", "a"]);
    });

    assert!(errors.is_empty());
    let validation = field.validation.unwrap();
    assert_eq!(validation.required, ["a", "b", "a"]);
    assert!(validation.is_required("b"));
}

#[test]
fn required_on_result_type() {
    let design = run(EvalConfig::default(), |ctx| {
        ctx.result_type("application/vnd.error", "Error", |ctx| {
            ctx.attribute("code", Some(DataType::STRING), |_| {});
            required(ctx, ["code"]);
        });
    })
    .unwrap();

    let error = design.result_type("application/vnd.error").unwrap();
    assert!(error.attribute.validation.as_ref().unwrap().is_required("code"));
}

#[test]
fn required_on_method_is_rejected() {
    let errors = run(EvalConfig::minimal(), |ctx| {
        ctx.service("svc", |ctx| ctx.method("m", |ctx| required(ctx, ["a"])));
    })
    .unwrap_err();
    assert_eq!(
        errors.0[0].kind,
        ErrorKind::IncompatibleTarget {
            dsl: "Required".to_string()
        }
    );
}

// =============================================================================
// Targets
// =============================================================================

#[test]
fn constraints_outside_attributes_are_rejected() {
    let calls: [(&str, fn(&mut EvalContext)); 6] = [
        ("Format", |ctx| format(ctx, "email")),
        ("Pattern", |ctx| pattern(ctx, "^a$")),
        ("Minimum", |ctx| minimum(ctx, 1)),
        ("Maximum", |ctx| maximum(ctx, 1)),
        ("MinLength", |ctx| min_length(ctx, 1)),
        ("MaxLength", |ctx| max_length(ctx, 1)),
    ];

    for (dsl, call) in calls {
        let mut ctx = EvalContext::with_config(EvalConfig::minimal());
        ctx.user_type("Subject", call);
        ctx.result_type("application/vnd.subject", "Subject", call);
        ctx.service("svc", |ctx| {
            call(ctx);
            ctx.method("m", call);
        });
        call(&mut ctx);

        let (design, errors) = ctx.into_parts();
        let expected = ErrorKind::IncompatibleTarget {
            dsl: dsl.to_string(),
        };
        assert_eq!(errors.len(), 5, "{dsl}");
        assert!(errors.iter().all(|e| e.kind == expected), "{dsl}");

        let user_type = design.user_type("Subject").unwrap();
        assert!(user_type.attribute.validation.is_none(), "{dsl}");
        let result_type = design.result_type("application/vnd.subject").unwrap();
        assert!(result_type.attribute.validation.is_none(), "{dsl}");
    }
}

#[test]
fn enum_on_result_type_is_rejected() {
    let mut ctx = EvalContext::with_config(EvalConfig::minimal());
    ctx.result_type("application/vnd.color", "Color", |ctx| {
        enum_values(ctx, ["red", "green"]);
    });

    let (design, errors) = ctx.into_parts();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.errors()[0].kind,
        ErrorKind::IncompatibleTarget {
            dsl: "Enum".to_string()
        }
    );
    let color = design.result_type("application/vnd.color").unwrap();
    assert!(color.attribute.validation.is_none());
}

#[test]
fn required_on_scalar_result_type_is_rejected() {
    let mut design = Design::new();
    design.result_types.push(ResultTypeExpr::new(
        "application/vnd.token",
        "Token",
        AttributeExpr::typed(DataType::STRING),
    ));

    let mut ctx = EvalContext::from_design(design, EvalConfig::minimal());
    ctx.result_type("application/vnd.token", "Token", |ctx| required(ctx, ["value"]));

    let (design, errors) = ctx.into_parts();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.errors()[0].kind,
        incompatible_type("required", "an object", "string")
    );
    let token = design.result_type("application/vnd.token").unwrap();
    assert!(token.attribute.validation.is_none());
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn required_keeps_every_name_in_order(
        first in prop::collection::vec("[a-z]{1,8}", 0..5),
        second in prop::collection::vec("[a-z]{1,8}", 0..5),
    ) {
        let (field, errors) = on_field(None, |ctx| {
            required(ctx, first.clone());
            required(ctx, second.clone());
        });
        prop_assert!(errors.is_empty());
        let expected: Vec<String> = first.iter().chain(&second).cloned().collect();
        prop_assert_eq!(field.validation.unwrap().required, expected);
    }

    #[test]
    fn integer_bounds_match_their_string_form(n in any::<i32>()) {
        let (from_int, _) = on_field(Some(DataType::INT), |ctx| minimum(ctx, n));
        let (from_str, _) = on_field(Some(DataType::INT), |ctx| minimum(ctx, n.to_string()));
        prop_assert_eq!(
            from_int.validation.unwrap().minimum,
            from_str.validation.unwrap().minimum
        );
    }
}
