//! Attributes and the data types they carry.

use std::fmt;

use apidesign_foundation::{Kind, Value};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::meta::MetaExpr;
use crate::validation::ValidationExpr;

/// An attribute: a typed value slot with optional validations and metadata.
///
/// The data type may be absent while the design is still being evaluated,
/// e.g. a field declared with `ctx.attribute("owner", None, ...)` before its
/// fields are known.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeExpr {
    /// The attribute type, `None` until known.
    pub data_type: Option<DataType>,
    /// Free-form description.
    pub description: Option<String>,
    /// Constraint record, created by the first validation.
    pub validation: Option<ValidationExpr>,
    /// Metadata record, created by the first `meta` call.
    pub meta: Option<MetaExpr>,
}

impl AttributeExpr {
    /// Creates an attribute with no type yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an attribute with a known type.
    #[must_use]
    pub fn typed(data_type: DataType) -> Self {
        Self {
            data_type: Some(data_type),
            ..Self::default()
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the kind of the attribute type, if known.
    #[must_use]
    pub fn kind(&self) -> Option<Kind> {
        self.data_type.as_ref().map(DataType::kind)
    }

    /// Returns the name of the attribute type, if known.
    #[must_use]
    pub fn type_name(&self) -> Option<&'static str> {
        self.data_type.as_ref().map(DataType::name)
    }

    /// Returns true if `value` can be held by this attribute.
    ///
    /// Attributes without a known type accept everything.
    #[must_use]
    pub fn is_compatible(&self, value: &Value) -> bool {
        self.data_type
            .as_ref()
            .is_none_or(|data_type| data_type.is_compatible(value))
    }

    /// Returns the constraint record, creating it if absent.
    pub fn validation_mut(&mut self) -> &mut ValidationExpr {
        self.validation.get_or_insert_with(ValidationExpr::default)
    }

    /// Returns the metadata record, creating it if absent.
    pub fn meta_mut(&mut self) -> &mut MetaExpr {
        self.meta.get_or_insert_with(MetaExpr::default)
    }

    /// Returns the object fields, if this attribute is an object.
    #[must_use]
    pub fn object(&self) -> Option<&Object> {
        match &self.data_type {
            Some(DataType::Object(object)) => Some(object),
            _ => None,
        }
    }

    /// Looks up an object field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&AttributeExpr> {
        self.object().and_then(|object| object.field(name))
    }

    /// Looks up an object field by name for mutation.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut AttributeExpr> {
        match &mut self.data_type {
            Some(DataType::Object(object)) => object.field_mut(name),
            _ => None,
        }
    }

    /// Returns the array element attribute for mutation.
    pub fn element_mut(&mut self) -> Option<&mut AttributeExpr> {
        match &mut self.data_type {
            Some(DataType::Array(element)) => Some(element),
            _ => None,
        }
    }
}

/// Built-in scalar types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Primitive {
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
    /// 32-bit float.
    Float32,
    /// 64-bit float.
    Float64,
    /// String.
    String,
    /// Raw bytes.
    Bytes,
    /// Any value.
    Any,
}

impl Primitive {
    /// Returns the kind of this primitive.
    #[must_use]
    pub const fn kind(self) -> Kind {
        match self {
            Self::Boolean => Kind::Boolean,
            Self::Int => Kind::Int,
            Self::Int32 => Kind::Int32,
            Self::Int64 => Kind::Int64,
            Self::UInt => Kind::UInt,
            Self::UInt32 => Kind::UInt32,
            Self::UInt64 => Kind::UInt64,
            Self::Float32 => Kind::Float32,
            Self::Float64 => Kind::Float64,
            Self::String => Kind::String,
            Self::Bytes => Kind::Bytes,
            Self::Any => Kind::Any,
        }
    }

    /// Returns true if `value` can be held by this primitive.
    ///
    /// Integers fit every numeric primitive, floats only the float ones,
    /// strings fit strings and bytes.
    #[must_use]
    pub fn is_compatible(self, value: &Value) -> bool {
        let kind = self.kind();
        match value {
            _ if kind == Kind::Any => true,
            Value::Bool(_) => kind == Kind::Boolean,
            Value::Int(_) | Value::UInt(_) => kind.is_numeric(),
            Value::Float(_) => kind.is_float(),
            Value::String(_) => matches!(kind, Kind::String | Kind::Bytes),
            Value::Bytes(_) => kind == Kind::Bytes,
            Value::Array(_) | Value::Map(_) => false,
        }
    }
}

/// The type of an attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DataType {
    /// A built-in scalar.
    Primitive(Primitive),
    /// An array of elements described by the boxed attribute.
    Array(Box<AttributeExpr>),
    /// A map from keys to elements.
    Map {
        /// Key attribute.
        key: Box<AttributeExpr>,
        /// Element attribute.
        elem: Box<AttributeExpr>,
    },
    /// An object with named fields.
    Object(Object),
}

impl DataType {
    /// The `String` primitive.
    pub const STRING: Self = Self::Primitive(Primitive::String);
    /// The `Int` primitive.
    pub const INT: Self = Self::Primitive(Primitive::Int);
    /// The `Float64` primitive.
    pub const FLOAT64: Self = Self::Primitive(Primitive::Float64);
    /// The `Boolean` primitive.
    pub const BOOLEAN: Self = Self::Primitive(Primitive::Boolean);
    /// The `Bytes` primitive.
    pub const BYTES: Self = Self::Primitive(Primitive::Bytes);
    /// The `Any` primitive.
    pub const ANY: Self = Self::Primitive(Primitive::Any);

    /// Creates an array type.
    #[must_use]
    pub fn array_of(element: DataType) -> Self {
        Self::Array(Box::new(AttributeExpr::typed(element)))
    }

    /// Creates a map type.
    #[must_use]
    pub fn map_of(key: DataType, elem: DataType) -> Self {
        Self::Map {
            key: Box::new(AttributeExpr::typed(key)),
            elem: Box::new(AttributeExpr::typed(elem)),
        }
    }

    /// Creates an empty object type.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Object::default())
    }

    /// Returns the kind of this type.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Primitive(primitive) => primitive.kind(),
            Self::Array(_) => Kind::Array,
            Self::Map { .. } => Kind::Map,
            Self::Object(_) => Kind::Object,
        }
    }

    /// Returns the type name used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.kind().as_str()
    }

    /// Returns true if `value` can be held by this type.
    #[must_use]
    pub fn is_compatible(&self, value: &Value) -> bool {
        match self {
            Self::Primitive(primitive) => primitive.is_compatible(value),
            Self::Array(element) => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| element.is_compatible(item))),
            Self::Map { key, elem } => value.as_map().is_some_and(|entries| {
                entries
                    .iter()
                    .all(|(k, v)| key.is_compatible(k) && elem.is_compatible(v))
            }),
            // Fields may still be declared later in the pass.
            Self::Object(_) => value.as_map().is_some(),
        }
    }
}

impl From<Primitive> for DataType {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Array(element) => match &element.data_type {
                Some(inner) => write!(f, "array<{inner}>"),
                None => write!(f, "array"),
            },
            _ => f.write_str(self.name()),
        }
    }
}

/// A named object field.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NamedAttribute {
    /// Field name.
    pub name: String,
    /// Field attribute.
    pub attribute: AttributeExpr,
}

/// The ordered fields of an object type.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Object(Vec<NamedAttribute>);

impl Object {
    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&AttributeExpr> {
        self.0
            .iter()
            .find(|f| f.name == name)
            .map(|f| &f.attribute)
    }

    /// Looks up a field by name for mutation.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut AttributeExpr> {
        self.0
            .iter_mut()
            .find(|f| f.name == name)
            .map(|f| &mut f.attribute)
    }

    /// Returns the named field, appending `attribute` first if it is missing.
    pub fn field_or_insert(&mut self, name: &str, attribute: AttributeExpr) -> &mut AttributeExpr {
        let index = match self.0.iter().position(|f| f.name == name) {
            Some(index) => index,
            None => {
                self.0.push(NamedAttribute {
                    name: name.to_string(),
                    attribute,
                });
                self.0.len() - 1
            }
        };
        &mut self.0[index].attribute
    }

    /// Iterates over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &NamedAttribute> {
        self.0.iter()
    }
}
