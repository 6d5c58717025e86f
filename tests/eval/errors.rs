//! Integration tests for error collection
//!
//! Tests error limits, context recording, and pass results.

use apidesign_eval::{ErrorCollector, EvalConfig, EvalContext, run};
use apidesign_foundation::{Error, ErrorKind};

#[test]
fn every_error_of_a_pass_is_returned() {
    let errors = run(EvalConfig::default(), |ctx| {
        ctx.method("a", |_| {});
        ctx.payload(None, |_| {});
        ctx.element(|_| {});
    })
    .unwrap_err();

    let dsls: Vec<_> = errors
        .iter()
        .map(|e| match &e.kind {
            ErrorKind::IncompatibleTarget { dsl } => dsl.as_str(),
            _ => "",
        })
        .collect();
    assert_eq!(dsls, ["Method", "Payload", "Elem"]);
}

#[test]
fn limit_keeps_first_errors_and_counts_the_rest() {
    let errors = run(EvalConfig::default().with_max_errors(2), |ctx| {
        for _ in 0..5 {
            ctx.reporter().incompatible_target("Meta");
        }
    })
    .unwrap_err();

    assert_eq!(errors.len(), 3);
    assert_eq!(
        errors.0[2].kind,
        ErrorKind::TooManyErrors {
            limit: 2,
            dropped: 3
        }
    );
}

#[test]
fn zero_limit_still_fails_the_pass() {
    let mut collector = ErrorCollector::with_limit(Some(0));
    collector.push(Error::incompatible_target("Meta"));
    assert_eq!(collector.len(), 0);
    assert!(!collector.is_empty());
    assert_eq!(collector.dropped(), 1);
    assert!(collector.finish().is_err());
}

#[test]
fn errors_carry_source_and_path() {
    let mut ctx = EvalContext::with_config(EvalConfig::for_source("store.rs"));
    ctx.service("catalog", |ctx| {
        ctx.method("show", |ctx| ctx.reporter().incompatible_target("Required"));
    });

    let errors = ctx.finish().unwrap_err();
    assert_eq!(
        errors.to_string(),
        "invalid use of Required (in service \"catalog\" / method \"show\" at store.rs)"
    );
}

#[test]
fn context_can_be_disabled() {
    let errors = run(EvalConfig::for_source("store.rs").with_record_context(false), |ctx| {
        ctx.service("catalog", |ctx| ctx.reporter().incompatible_target("Required"));
    })
    .unwrap_err();
    assert!(errors.0[0].context.is_none());
    assert_eq!(errors.to_string(), "invalid use of Required");
}
