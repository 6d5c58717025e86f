//! Error types for design evaluation.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Design errors never abort a pass: they are collected and surfaced together
//! once evaluation completes (see [`Errors`]).

use std::fmt;

use thiserror::Error;

/// Result type used by fallible helpers across apidesign.
pub type Result<T> = std::result::Result<T, Error>;

/// A single problem found while evaluating a design.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{kind}{}", located(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Where in the design the error was reported.
    pub context: Option<ErrorContext>,
}

fn located(context: &Option<ErrorContext>) -> String {
    match context {
        Some(ctx) if !ctx.is_empty() => format!(" ({ctx})"),
        _ => String::new(),
    }
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an incompatible target error for the named DSL function.
    #[must_use]
    pub fn incompatible_target(dsl: impl Into<String>) -> Self {
        Self::new(ErrorKind::IncompatibleTarget { dsl: dsl.into() })
    }

    /// Creates an incompatible attribute type error.
    #[must_use]
    pub fn incompatible_attribute_type(
        validation: impl Into<String>,
        actual: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::IncompatibleAttributeType {
            validation: validation.into(),
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates an invalid number value error.
    #[must_use]
    pub fn invalid_number(value: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidNumber(value.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A DSL function was called where the current node does not support it.
    #[error("invalid use of {dsl}")]
    IncompatibleTarget {
        /// Name of the DSL function.
        dsl: String,
    },

    /// A validation does not apply to the attribute's known type.
    #[error(
        "invalid {validation} validation definition: attribute must be {expected} (but type is {actual})"
    )]
    IncompatibleAttributeType {
        /// Validation being defined (e.g. `minimum`).
        validation: String,
        /// Family of types the validation applies to.
        expected: String,
        /// Name of the attribute's actual type.
        actual: String,
    },

    /// An enum value cannot be represented by the attribute's type.
    #[error("value {value} at index {index} is incompatible with attribute of type {type_name}")]
    IncompatibleEnumValue {
        /// Rendered offending value.
        value: String,
        /// Position of the value in the enum list.
        index: usize,
        /// Name of the attribute's type.
        type_name: String,
    },

    /// Unsupported string format tag.
    #[error("invalid validation format {0:?}")]
    InvalidFormat(String),

    /// Pattern failed to compile as a regular expression.
    #[error("invalid pattern {pattern:?}: compile failed: {reason}")]
    InvalidPattern {
        /// The pattern source.
        pattern: String,
        /// Compiler diagnostic.
        reason: String,
    },

    /// A numeric bound could not be read as a number.
    #[error("invalid number value {0}")]
    InvalidNumber(String),

    /// The configured error cap was reached; later errors were dropped.
    #[error("too many errors: {dropped} more after the first {limit}")]
    TooManyErrors {
        /// The configured cap.
        limit: usize,
        /// How many errors were discarded.
        dropped: usize,
    },
}

/// Where in the design an error was reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// Design source label (file or package name).
    pub source: Option<String>,
    /// Evaluation path from the design root to the current node.
    pub path: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Appends a path segment.
    #[must_use]
    pub fn with_segment(mut self, segment: impl Into<String>) -> Self {
        self.path.push(segment.into());
        self
    }

    /// Returns true if the context carries no information.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.source.is_none() && self.path.is_empty()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.path.is_empty() {
            write!(f, "in {}", self.path.join(" / "))?;
        }
        if let Some(source) = &self.source {
            if !self.path.is_empty() {
                write!(f, " ")?;
            }
            write!(f, "at {source}")?;
        }
        Ok(())
    }
}

/// All errors reported during one design pass.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{}", render(.0))]
pub struct Errors(pub Vec<Error>);

fn render(errors: &[Error]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

impl Errors {
    /// Number of errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the errors in report order.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.0.iter()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
