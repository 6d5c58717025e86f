//! Named user types and result types.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeExpr;

/// A named type wrapping an attribute.
///
/// Declarations made inside a user type apply to its attribute.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UserTypeExpr {
    /// Type name.
    pub name: String,
    /// The wrapped attribute.
    pub attribute: AttributeExpr,
}

impl UserTypeExpr {
    /// Creates a named user type around `attribute`.
    #[must_use]
    pub fn new(name: impl Into<String>, attribute: AttributeExpr) -> Self {
        Self {
            name: name.into(),
            attribute,
        }
    }
}

/// A result type: a user type identified by a media type.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ResultTypeExpr {
    /// Media type identifier, e.g. `application/vnd.error`.
    pub identifier: String,
    /// Type name.
    pub name: String,
    /// The wrapped attribute, which also holds the result type's metadata.
    pub attribute: AttributeExpr,
}

impl ResultTypeExpr {
    /// Creates a result type around `attribute`.
    #[must_use]
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        attribute: AttributeExpr,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            name: name.into(),
            attribute,
        }
    }
}
