//! Validation and metadata DSL functions for apidesign.
//!
//! Every function takes the [`EvalContext`](apidesign_eval::EvalContext) of
//! the running evaluation, looks up the node currently being declared, and
//! records its argument on that node. Problems are reported to the context
//! and never interrupt evaluation.
//!
//! ```text
//! ctx.attribute("email", Some(DataType::STRING), |ctx| {
//!     format(ctx, "email");
//!     min_length(ctx, 3);
//!     max_length(ctx, 254);
//!     meta(ctx, keys::STRUCT_FIELD_NAME, ["EmailAddress"]);
//! });
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod meta;
pub mod validation;

pub use meta::{keys, meta};
pub use validation::{
    enum_values, format, max_length, maximum, min_length, minimum, pattern, required,
};
