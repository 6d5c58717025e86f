//! Coarse classification of attribute types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The kind of an attribute type.
///
/// Validations decide whether they apply to an attribute by looking at its
/// kind only; element and field types are never consulted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Kind {
    /// Boolean.
    Boolean,
    /// Platform-sized signed integer.
    Int,
    /// 32-bit signed integer.
    Int32,
    /// 64-bit signed integer.
    Int64,
    /// Platform-sized unsigned integer.
    UInt,
    /// 32-bit unsigned integer.
    UInt32,
    /// 64-bit unsigned integer.
    UInt64,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
    /// UTF-8 string.
    String,
    /// Raw bytes.
    Bytes,
    /// Any value.
    Any,
    /// Homogeneous array.
    Array,
    /// Map with typed keys and values.
    Map,
    /// Object with named fields.
    Object,
}

impl Kind {
    /// Returns true for the signed and unsigned integer kinds.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Int32 | Self::Int64 | Self::UInt | Self::UInt32 | Self::UInt64
        )
    }

    /// Returns true for the floating point kinds.
    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::Float32 | Self::Float64)
    }

    /// Returns true for kinds that accept numeric bounds.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    /// Returns true for kinds that have a length.
    #[must_use]
    pub const fn has_length(self) -> bool {
        matches!(self, Self::Bytes | Self::String | Self::Array | Self::Map)
    }

    /// Returns the name used in designs and error messages.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::UInt => "uint",
            Self::UInt32 => "uint32",
            Self::UInt64 => "uint64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::String => "string",
            Self::Bytes => "bytes",
            Self::Any => "any",
            Self::Array => "array",
            Self::Map => "map",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
