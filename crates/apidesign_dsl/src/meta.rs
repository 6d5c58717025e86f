//! The `Meta` DSL function.

use apidesign_eval::{EvalContext, Target};
use tracing::debug;

/// Metadata keys with a meaning to the generators that consume designs.
///
/// Any key is accepted by [`meta`]; these are the ones downstream tooling
/// interprets.
pub mod keys {
    /// Forces generation of a type for the listed services (all if empty).
    pub const TYPE_GENERATE_FORCE: &str = "type:generate:force";
    /// Marks the result type attribute used to select the returned error.
    pub const STRUCT_ERROR_NAME: &str = "struct:error:name";
    /// Overrides the generated struct field name.
    pub const STRUCT_FIELD_NAME: &str = "struct:field:name";
    /// Overrides the name of the value used to initialize the attribute.
    pub const STRUCT_FIELD_ORIGIN: &str = "struct:field:origin";
    /// Prefix of keys that set struct field tags, e.g. `struct:tag:json`.
    pub const STRUCT_TAG_PREFIX: &str = "struct:tag:";
    /// Whether Swagger output is generated.
    pub const SWAGGER_GENERATE: &str = "swagger:generate";
    /// Swagger operation summary.
    pub const SWAGGER_SUMMARY: &str = "swagger:summary";
    /// Whether random examples are generated.
    pub const SWAGGER_EXAMPLE: &str = "swagger:example";
    /// Prefix of keys that set Swagger tags.
    pub const SWAGGER_TAG_PREFIX: &str = "swagger:tag:";
    /// Prefix of keys that set Swagger extensions.
    pub const SWAGGER_EXTENSION_PREFIX: &str = "swagger:extension:";
}

/// Appends `values` to the metadata stored under `key` on the current node.
///
/// Applies to attributes, user types and result types (both on their
/// attribute), methods, services and the API root. Repeated calls with the same key
/// build up the value list in call order.
pub fn meta<I, S>(ctx: &mut EvalContext, key: &str, values: I)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let (target, mut reporter) = ctx.current();
    let record = match target {
        Target::Attribute(attribute) => attribute.meta_mut(),
        Target::Composite(user_type) => user_type.attribute.meta_mut(),
        Target::ResultType(result_type) => result_type.attribute.meta_mut(),
        Target::Method(method) => method.meta_mut(),
        Target::Service(service) => service.meta_mut(),
        Target::Api(api) => api.meta_mut(),
        Target::None => {
            reporter.incompatible_target("Meta");
            return;
        }
    };
    record.append(key, values);
    debug!(key, count = record.get(key).map_or(0, <[String]>::len), "meta recorded");
}
