//! The design root.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeExpr, DataType};
use crate::service::{ApiExpr, ServiceExpr};
use crate::user_type::{ResultTypeExpr, UserTypeExpr};

/// Every node of one design, owned in a single tree.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Design {
    /// The API root.
    pub api: ApiExpr,
    /// Services in declaration order.
    pub services: Vec<ServiceExpr>,
    /// User types in declaration order.
    pub types: Vec<UserTypeExpr>,
    /// Result types in declaration order.
    pub result_types: Vec<ResultTypeExpr>,
}

impl Design {
    /// Creates an empty design.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up a service by name.
    #[must_use]
    pub fn service(&self, name: &str) -> Option<&ServiceExpr> {
        self.services.iter().find(|s| s.name == name)
    }

    /// Looks up a service by name for mutation.
    pub fn service_mut(&mut self, name: &str) -> Option<&mut ServiceExpr> {
        self.services.iter_mut().find(|s| s.name == name)
    }

    /// Returns the named service, creating it if missing.
    pub fn service_or_insert(&mut self, name: &str) -> &mut ServiceExpr {
        let index = match self.services.iter().position(|s| s.name == name) {
            Some(index) => index,
            None => {
                self.services.push(ServiceExpr::new(name));
                self.services.len() - 1
            }
        };
        &mut self.services[index]
    }

    /// Looks up a user type by name.
    #[must_use]
    pub fn user_type(&self, name: &str) -> Option<&UserTypeExpr> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Looks up a user type by name for mutation.
    pub fn user_type_mut(&mut self, name: &str) -> Option<&mut UserTypeExpr> {
        self.types.iter_mut().find(|t| t.name == name)
    }

    /// Returns the named user type, creating an object type if missing.
    pub fn user_type_or_insert(&mut self, name: &str) -> &mut UserTypeExpr {
        let index = match self.types.iter().position(|t| t.name == name) {
            Some(index) => index,
            None => {
                self.types.push(UserTypeExpr::new(
                    name,
                    AttributeExpr::typed(DataType::object()),
                ));
                self.types.len() - 1
            }
        };
        &mut self.types[index]
    }

    /// Looks up a result type by identifier.
    #[must_use]
    pub fn result_type(&self, identifier: &str) -> Option<&ResultTypeExpr> {
        self.result_types.iter().find(|r| r.identifier == identifier)
    }

    /// Looks up a result type by identifier for mutation.
    pub fn result_type_mut(&mut self, identifier: &str) -> Option<&mut ResultTypeExpr> {
        self.result_types
            .iter_mut()
            .find(|r| r.identifier == identifier)
    }

    /// Returns the result type with `identifier`, creating an object result
    /// type named `name` if missing.
    pub fn result_type_or_insert(&mut self, identifier: &str, name: &str) -> &mut ResultTypeExpr {
        let index = match self
            .result_types
            .iter()
            .position(|r| r.identifier == identifier)
        {
            Some(index) => index,
            None => {
                self.result_types.push(ResultTypeExpr::new(
                    identifier,
                    name,
                    AttributeExpr::typed(DataType::object()),
                ));
                self.result_types.len() - 1
            }
        };
        &mut self.result_types[index]
    }
}
