//! Integration tests for Meta
//!
//! Tests accumulation order and the set of nodes that accept metadata.

use apidesign_dsl::{keys, meta};
use apidesign_eval::{EvalConfig, EvalContext, run};
use apidesign_expr::DataType;
use apidesign_foundation::ErrorKind;

use crate::on_field;

#[test]
fn values_append_in_call_order() {
    let (field, errors) = on_field(Some(DataType::STRING), |ctx| {
        meta(ctx, "swagger:extension:x-tags", ["a", "b"]);
        meta(ctx, "swagger:extension:x-tags", ["c", "a"]);
    });

    assert!(errors.is_empty());
    assert_eq!(
        field.meta.unwrap().get("swagger:extension:x-tags").unwrap(),
        ["a", "b", "c", "a"]
    );
}

#[test]
fn keys_are_independent() {
    let (field, _) = on_field(None, |ctx| {
        meta(ctx, keys::STRUCT_FIELD_NAME, ["Value"]);
        meta(ctx, "struct:tag:json", ["value,omitempty"]);
        meta(ctx, keys::STRUCT_FIELD_NAME, ["Val"]);
    });

    let record = field.meta.unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record.last(keys::STRUCT_FIELD_NAME), Some("Val"));
    assert!(record.contains_key("struct:tag:json"));
}

#[test]
fn metadata_ignores_attribute_type() {
    for data_type in [DataType::BOOLEAN, DataType::BYTES, DataType::object()] {
        let (field, errors) = on_field(Some(data_type), |ctx| meta(ctx, "k", ["v"]));
        assert!(errors.is_empty());
        assert!(field.meta.is_some());
    }
}

#[test]
fn empty_values_still_create_the_key() {
    let (field, _) = on_field(None, |ctx| meta(ctx, keys::SWAGGER_GENERATE, Vec::<String>::new()));
    let record = field.meta.unwrap();
    assert!(record.get(keys::SWAGGER_GENERATE).unwrap().is_empty());
}

#[test]
fn every_node_kind_accepts_metadata() {
    let design = run(EvalConfig::default(), |ctx| {
        ctx.api("store", |ctx| meta(ctx, keys::SWAGGER_GENERATE, ["false"]));
        ctx.service("catalog", |ctx| {
            meta(ctx, "swagger:tag:catalog", ["Catalog"]);
            ctx.method("list", |ctx| meta(ctx, keys::SWAGGER_SUMMARY, ["List items"]));
        });
        ctx.result_type("application/vnd.item", "Item", |ctx| {
            meta(ctx, keys::STRUCT_ERROR_NAME, ["code"]);
        });
        ctx.user_type("Key", |ctx| meta(ctx, keys::TYPE_GENERATE_FORCE, Vec::<&str>::new()));
    })
    .unwrap();

    assert!(design.api.meta.as_ref().unwrap().contains_key(keys::SWAGGER_GENERATE));
    let catalog = design.service("catalog").unwrap();
    assert!(catalog.meta.as_ref().unwrap().contains_key("swagger:tag:catalog"));
    let list = catalog.method("list").unwrap();
    assert_eq!(list.meta.as_ref().unwrap().last(keys::SWAGGER_SUMMARY), Some("List items"));
    let item = design.result_type("application/vnd.item").unwrap();
    assert!(item.attribute.meta.as_ref().unwrap().contains_key(keys::STRUCT_ERROR_NAME));
    let key = design.user_type("Key").unwrap();
    assert!(key.attribute.meta.as_ref().unwrap().contains_key(keys::TYPE_GENERATE_FORCE));
}

#[test]
fn outside_any_declaration_is_rejected() {
    let mut ctx = EvalContext::new();
    meta(&mut ctx, "k", ["v"]);
    let errors = ctx.finish().unwrap_err();
    assert_eq!(
        errors.0[0].kind,
        ErrorKind::IncompatibleTarget {
            dsl: "Meta".to_string()
        }
    );
}
