//! Core values, type kinds, and error types for apidesign.
//!
//! This crate provides:
//! - [`Value`] - Literal values a design passes to validations
//! - [`Kind`] - Coarse classification of attribute types
//! - [`Error`] - Design errors with evaluation context
//! - [`Errors`] - The aggregate outcome of a failed design pass

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod kind;
pub mod value;

pub use error::{Error, ErrorContext, ErrorKind, Errors, Result};
pub use kind::Kind;
pub use value::Value;
