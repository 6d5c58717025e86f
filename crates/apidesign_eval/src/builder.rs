//! Scoped declaration methods that grow the design tree.
//!
//! Each method creates its node if missing, opens it for the duration of the
//! nested closure, and closes it again. Calling one where its parent is not
//! the current node reports an error and skips the closure.

use apidesign_expr::{AttributeExpr, DataType};

use crate::context::{EvalContext, Step, Target};

impl EvalContext {
    /// Declares the API root.
    pub fn api(&mut self, name: &str, dsl: impl FnOnce(&mut Self)) {
        if !self.stack().is_empty() {
            self.reporter().incompatible_target("API");
            return;
        }
        self.design_mut().api.name = name.to_string();
        self.scoped(Step::Api, dsl);
    }

    /// Declares a service.
    pub fn service(&mut self, name: &str, dsl: impl FnOnce(&mut Self)) {
        if !self.stack().is_empty() {
            self.reporter().incompatible_target("Service");
            return;
        }
        self.design_mut().service_or_insert(name);
        self.scoped(Step::Service(name.to_string()), dsl);
    }

    /// Declares an object user type.
    pub fn user_type(&mut self, name: &str, dsl: impl FnOnce(&mut Self)) {
        if !self.stack().is_empty() {
            self.reporter().incompatible_target("Type");
            return;
        }
        self.design_mut().user_type_or_insert(name);
        self.scoped(Step::Type(name.to_string()), dsl);
    }

    /// Declares a result type identified by a media type.
    pub fn result_type(&mut self, identifier: &str, name: &str, dsl: impl FnOnce(&mut Self)) {
        if !self.stack().is_empty() {
            self.reporter().incompatible_target("ResultType");
            return;
        }
        self.design_mut().result_type_or_insert(identifier, name);
        self.scoped(Step::ResultType(identifier.to_string()), dsl);
    }

    /// Declares a method of the current service.
    pub fn method(&mut self, name: &str, dsl: impl FnOnce(&mut Self)) {
        let (target, mut reporter) = self.current();
        match target {
            Target::Service(service) => {
                service.method_or_insert(name);
            }
            _ => {
                reporter.incompatible_target("Method");
                return;
            }
        }
        self.scoped(Step::Method(name.to_string()), dsl);
    }

    /// Declares the payload of the current method.
    pub fn payload(&mut self, data_type: Option<DataType>, dsl: impl FnOnce(&mut Self)) {
        let (target, mut reporter) = self.current();
        match target {
            Target::Method(method) => {
                open_attribute(&mut method.payload, data_type);
            }
            _ => {
                reporter.incompatible_target("Payload");
                return;
            }
        }
        self.scoped(Step::Payload, dsl);
    }

    /// Declares the result of the current method.
    pub fn result(&mut self, data_type: Option<DataType>, dsl: impl FnOnce(&mut Self)) {
        let (target, mut reporter) = self.current();
        match target {
            Target::Method(method) => {
                open_attribute(&mut method.result, data_type);
            }
            _ => {
                reporter.incompatible_target("Result");
                return;
            }
        }
        self.scoped(Step::Result, dsl);
    }

    /// Declares a field of the current attribute.
    ///
    /// An attribute with no type yet becomes an object. `data_type` may be
    /// `None` when the field type is not known at this point.
    pub fn attribute(
        &mut self,
        name: &str,
        data_type: Option<DataType>,
        dsl: impl FnOnce(&mut Self),
    ) {
        let (target, mut reporter) = self.current();
        let Some(parent) = target.into_attribute() else {
            reporter.incompatible_target("Attribute");
            return;
        };
        let object = match parent.data_type.get_or_insert_with(DataType::object) {
            DataType::Object(object) => object,
            _ => {
                reporter.incompatible_target("Attribute");
                return;
            }
        };
        object.field_or_insert(
            name,
            AttributeExpr {
                data_type,
                ..AttributeExpr::default()
            },
        );
        self.scoped(Step::Field(name.to_string()), dsl);
    }

    /// Opens the element of the current array attribute.
    pub fn element(&mut self, dsl: impl FnOnce(&mut Self)) {
        let (target, mut reporter) = self.current();
        if target
            .into_attribute()
            .and_then(AttributeExpr::element_mut)
            .is_none()
        {
            reporter.incompatible_target("Elem");
            return;
        }
        self.scoped(Step::Element, dsl);
    }
}

fn open_attribute(slot: &mut Option<AttributeExpr>, data_type: Option<DataType>) {
    let attribute = slot.get_or_insert_with(AttributeExpr::default);
    if attribute.data_type.is_none() {
        attribute.data_type = data_type;
    }
}
