//! Declaration nodes for apidesign.
//!
//! A design is a tree rooted at [`Design`]: the API root, services and their
//! methods, user types and result types, down to individual attributes. The
//! DSL layer mutates these nodes in place; later passes only read them.
//!
//! # Module Structure
//!
//! - `attribute` - Attributes and their data types
//! - `validation` - Constraint records and string formats
//! - `meta` - Metadata records
//! - `service` - API root, services, methods
//! - `user_type` - Named user types and result types
//! - `design` - The design root owning every node

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod attribute;
mod design;
mod meta;
mod service;
mod user_type;
mod validation;

pub use attribute::{AttributeExpr, DataType, NamedAttribute, Object, Primitive};
pub use design::Design;
pub use meta::MetaExpr;
pub use service::{ApiExpr, MethodExpr, ServiceExpr};
pub use user_type::{ResultTypeExpr, UserTypeExpr};
pub use validation::{ValidationExpr, ValidationFormat};
