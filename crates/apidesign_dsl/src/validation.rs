//! Validation DSL functions.
//!
//! Each function applies to the attribute currently being declared. When the
//! attribute type is already known it must be of a kind the validation
//! supports; when it is not known yet the validation is recorded as is and
//! later passes re-check it against the resolved type.

use apidesign_eval::{EvalContext, Reporter, Target};
use apidesign_expr::{AttributeExpr, ValidationExpr, ValidationFormat};
use apidesign_foundation::{Error, ErrorKind, Kind, Result, Value};
use regex::Regex;
use tracing::debug;

/// Restricts the attribute to the given values.
///
/// Every value must be representable by the attribute type. Each offending
/// value is reported with its index; if any value is rejected none are
/// recorded.
pub fn enum_values<I, V>(ctx: &mut EvalContext, values: I)
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    let (target, mut reporter) = ctx.current();
    let Target::Attribute(attribute) = target else {
        reporter.incompatible_target("Enum");
        return;
    };

    let mut compatible = true;
    if let Some(data_type) = &attribute.data_type {
        for (index, value) in values.iter().enumerate() {
            if !data_type.is_compatible(value) {
                reporter.report(ErrorKind::IncompatibleEnumValue {
                    value: value.to_string(),
                    index,
                    type_name: data_type.name().to_string(),
                });
                compatible = false;
            }
        }
    }
    if compatible {
        debug!(count = values.len(), "enum recorded");
        attribute.validation_mut().values = Some(values);
    }
}

/// Requires string values to follow `tag`, one of the supported formats.
pub fn format(ctx: &mut EvalContext, tag: &str) {
    let (target, mut reporter) = ctx.current();
    let Some(attribute) = string_attribute(target, &mut reporter, "Format", "format") else {
        return;
    };
    match tag.parse::<ValidationFormat>() {
        Ok(format) => {
            debug!(%format, "format recorded");
            attribute.validation_mut().format = Some(format);
        }
        Err(err) => reporter.report(err.kind),
    }
}

/// Requires string values to match the regular expression `expr`.
pub fn pattern(ctx: &mut EvalContext, expr: &str) {
    let (target, mut reporter) = ctx.current();
    let Some(attribute) = string_attribute(target, &mut reporter, "Pattern", "pattern") else {
        return;
    };
    match compile(expr) {
        Ok(()) => {
            debug!(pattern = expr, "pattern recorded");
            attribute.validation_mut().pattern = Some(expr.to_string());
        }
        Err(err) => reporter.report(err.kind),
    }
}

/// Sets the inclusive lower bound of a numeric attribute.
///
/// Accepts integers, floats, and strings holding a decimal number.
pub fn minimum(ctx: &mut EvalContext, value: impl Into<Value>) {
    numeric_bound(ctx, "Minimum", "minimum", &value.into(), |validation, bound| {
        validation.minimum = Some(bound);
    });
}

/// Sets the inclusive upper bound of a numeric attribute.
///
/// Accepts integers, floats, and strings holding a decimal number.
pub fn maximum(ctx: &mut EvalContext, value: impl Into<Value>) {
    numeric_bound(ctx, "Maximum", "maximum", &value.into(), |validation, bound| {
        validation.maximum = Some(bound);
    });
}

/// Sets the minimum length of a string, bytes, array or map attribute.
pub fn min_length(ctx: &mut EvalContext, length: usize) {
    length_bound(ctx, "MinLength", "minimum length", |validation| {
        validation.min_length = Some(length);
    });
}

/// Sets the maximum length of a string, bytes, array or map attribute.
pub fn max_length(ctx: &mut EvalContext, length: usize) {
    length_bound(ctx, "MaxLength", "maximum length", |validation| {
        validation.max_length = Some(length);
    });
}

/// Declares object fields that must be present.
///
/// Applies to attributes and result types. Names accumulate across calls
/// and are not deduplicated.
pub fn required<I, S>(ctx: &mut EvalContext, names: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (target, mut reporter) = ctx.current();
    let attribute = match target {
        Target::Attribute(attribute) => attribute,
        Target::ResultType(result_type) => &mut result_type.attribute,
        _ => {
            reporter.incompatible_target("Required");
            return;
        }
    };
    if let Some(data_type) = &attribute.data_type {
        if data_type.kind() != Kind::Object {
            reporter.incompatible_attribute_type("required", data_type.name(), "an object");
            return;
        }
    }
    let validation = attribute.validation_mut();
    validation.add_required(names);
    debug!(total = validation.required.len(), "required recorded");
}

// =============================================================================
// Helpers
// =============================================================================

/// Returns the current attribute if it is a string or of unknown type.
fn string_attribute<'a>(
    target: Target<'a>,
    reporter: &mut Reporter<'_>,
    dsl: &str,
    validation: &str,
) -> Option<&'a mut AttributeExpr> {
    let Target::Attribute(attribute) = target else {
        reporter.incompatible_target(dsl);
        return None;
    };
    if let Some(data_type) = &attribute.data_type {
        if data_type.kind() != Kind::String {
            reporter.incompatible_attribute_type(validation, data_type.name(), "a string");
            return None;
        }
    }
    Some(attribute)
}

fn numeric_bound(
    ctx: &mut EvalContext,
    dsl: &str,
    validation: &str,
    value: &Value,
    set: impl FnOnce(&mut ValidationExpr, f64),
) {
    let (target, mut reporter) = ctx.current();
    let Target::Attribute(attribute) = target else {
        reporter.incompatible_target(dsl);
        return;
    };
    if let Some(data_type) = &attribute.data_type {
        if !data_type.kind().is_numeric() {
            reporter.incompatible_attribute_type(
                validation,
                data_type.name(),
                "an integer or a number",
            );
            return;
        }
    }
    match to_number(value) {
        Ok(bound) => {
            debug!(validation, bound, "bound recorded");
            set(attribute.validation_mut(), bound);
        }
        Err(err) => reporter.report(err.kind),
    }
}

fn length_bound(
    ctx: &mut EvalContext,
    dsl: &str,
    validation: &str,
    set: impl FnOnce(&mut ValidationExpr),
) {
    let (target, mut reporter) = ctx.current();
    let Target::Attribute(attribute) = target else {
        reporter.incompatible_target(dsl);
        return;
    };
    if let Some(data_type) = &attribute.data_type {
        if !data_type.kind().has_length() {
            reporter.incompatible_attribute_type(
                validation,
                data_type.name(),
                "a string, bytes, an array or a map",
            );
            return;
        }
    }
    debug!(validation, "length recorded");
    set(attribute.validation_mut());
}

/// Normalizes a numeric bound to `f64`.
///
/// The integer/float distinction is lost on purpose: bounds are compared as
/// numbers by every consumer.
fn to_number(value: &Value) -> Result<f64> {
    match value {
        Value::String(s) => s
            .parse::<f64>()
            .map_err(|_| Error::invalid_number(value.to_string())),
        other => other
            .as_number()
            .ok_or_else(|| Error::invalid_number(other.to_string())),
    }
}

fn compile(expr: &str) -> Result<()> {
    Regex::new(expr).map(|_| ()).map_err(|err| {
        Error::new(ErrorKind::InvalidPattern {
            pattern: expr.to_string(),
            reason: err.to_string(),
        })
    })
}
