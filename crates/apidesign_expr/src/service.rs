//! API root, services, and methods.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::AttributeExpr;
use crate::meta::MetaExpr;

/// The API root.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ApiExpr {
    /// API name.
    pub name: String,
    /// API title.
    pub title: Option<String>,
    /// Free-form description.
    pub description: Option<String>,
    /// Metadata record.
    pub meta: Option<MetaExpr>,
}

impl ApiExpr {
    /// Creates a named API root.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the metadata record, creating it if absent.
    pub fn meta_mut(&mut self) -> &mut MetaExpr {
        self.meta.get_or_insert_with(MetaExpr::default)
    }
}

/// A service grouping related methods.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ServiceExpr {
    /// Service name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Methods in declaration order.
    pub methods: Vec<MethodExpr>,
    /// Metadata record.
    pub meta: Option<MetaExpr>,
}

impl ServiceExpr {
    /// Creates an empty named service.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Looks up a method by name.
    #[must_use]
    pub fn method(&self, name: &str) -> Option<&MethodExpr> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Looks up a method by name for mutation.
    pub fn method_mut(&mut self, name: &str) -> Option<&mut MethodExpr> {
        self.methods.iter_mut().find(|m| m.name == name)
    }

    /// Returns the named method, creating it if missing.
    pub fn method_or_insert(&mut self, name: &str) -> &mut MethodExpr {
        let index = match self.methods.iter().position(|m| m.name == name) {
            Some(index) => index,
            None => {
                self.methods.push(MethodExpr::new(name));
                self.methods.len() - 1
            }
        };
        &mut self.methods[index]
    }

    /// Returns the metadata record, creating it if absent.
    pub fn meta_mut(&mut self) -> &mut MetaExpr {
        self.meta.get_or_insert_with(MetaExpr::default)
    }
}

/// A service method.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MethodExpr {
    /// Method name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Method payload.
    pub payload: Option<AttributeExpr>,
    /// Method result.
    pub result: Option<AttributeExpr>,
    /// Metadata record.
    pub meta: Option<MetaExpr>,
}

impl MethodExpr {
    /// Creates an empty named method.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Returns the metadata record, creating it if absent.
    pub fn meta_mut(&mut self) -> &mut MetaExpr {
        self.meta.get_or_insert_with(MetaExpr::default)
    }
}
