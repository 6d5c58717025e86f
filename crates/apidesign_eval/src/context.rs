//! The evaluation stack and current-target resolution.
//!
//! The stack is a path of [`Step`]s from the design root to the node whose
//! declaration closure is running. Resolving it yields a [`Target`]: a
//! mutable view of exactly one node, tagged with what kind of node it is.

use std::fmt;

use apidesign_expr::{
    ApiExpr, AttributeExpr, Design, MethodExpr, ResultTypeExpr, ServiceExpr, UserTypeExpr,
};
use apidesign_foundation::{Error, ErrorContext, ErrorKind, Errors};
use tracing::trace;

use crate::collector::ErrorCollector;
use crate::config::EvalConfig;

// =============================================================================
// Steps
// =============================================================================

/// One hop from a node to one of its children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// The API root.
    Api,
    /// A service, by name.
    Service(String),
    /// A user type, by name.
    Type(String),
    /// A result type, by identifier.
    ResultType(String),
    /// A method of the current service, by name.
    Method(String),
    /// The payload of the current method.
    Payload,
    /// The result of the current method.
    Result,
    /// A field of the current object attribute, by name.
    Field(String),
    /// The element of the current array attribute.
    Element,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api => write!(f, "api"),
            Self::Service(name) => write!(f, "service {name:?}"),
            Self::Type(name) => write!(f, "type {name:?}"),
            Self::ResultType(identifier) => write!(f, "result type {identifier:?}"),
            Self::Method(name) => write!(f, "method {name:?}"),
            Self::Payload => write!(f, "payload"),
            Self::Result => write!(f, "result"),
            Self::Field(name) => write!(f, "attribute {name:?}"),
            Self::Element => write!(f, "element"),
        }
    }
}

// =============================================================================
// Targets
// =============================================================================

/// The node currently open for configuration.
///
/// The set of variants is closed: DSL functions match on it and list the
/// variants they accept.
#[derive(Debug)]
pub enum Target<'a> {
    /// A plain attribute.
    Attribute(&'a mut AttributeExpr),
    /// A named type wrapping an attribute.
    Composite(&'a mut UserTypeExpr),
    /// A result type.
    ResultType(&'a mut ResultTypeExpr),
    /// A method.
    Method(&'a mut MethodExpr),
    /// A service.
    Service(&'a mut ServiceExpr),
    /// The API root.
    Api(&'a mut ApiExpr),
    /// No node is open, or the stack no longer resolves.
    None,
}

impl<'a> Target<'a> {
    /// Returns a short name for the kind of node.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Attribute(_) => "attribute",
            Self::Composite(_) => "type",
            Self::ResultType(_) => "result type",
            Self::Method(_) => "method",
            Self::Service(_) => "service",
            Self::Api(_) => "api",
            Self::None => "none",
        }
    }

    /// Returns true if no node is open.
    #[must_use]
    pub const fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Returns the attribute of any attribute-shaped node.
    #[must_use]
    pub fn into_attribute(self) -> Option<&'a mut AttributeExpr> {
        match self {
            Self::Attribute(attribute) => Some(attribute),
            Self::Composite(user_type) => Some(&mut user_type.attribute),
            Self::ResultType(result_type) => Some(&mut result_type.attribute),
            _ => None,
        }
    }

    fn root(design: &'a mut Design, step: &Step) -> Self {
        match step {
            Step::Api => Self::Api(&mut design.api),
            Step::Service(name) => design.service_mut(name).map_or(Self::None, Self::Service),
            Step::Type(name) => design.user_type_mut(name).map_or(Self::None, Self::Composite),
            Step::ResultType(identifier) => design
                .result_type_mut(identifier)
                .map_or(Self::None, Self::ResultType),
            _ => Self::None,
        }
    }

    fn descend(self, step: &Step) -> Self {
        match (self, step) {
            (Self::Service(service), Step::Method(name)) => {
                service.method_mut(name).map_or(Self::None, Self::Method)
            }
            (Self::Method(method), Step::Payload) => {
                method.payload.as_mut().map_or(Self::None, Self::Attribute)
            }
            (Self::Method(method), Step::Result) => {
                method.result.as_mut().map_or(Self::None, Self::Attribute)
            }
            (target, Step::Field(name)) => target
                .into_attribute()
                .and_then(|attribute| attribute.field_mut(name))
                .map_or(Self::None, Self::Attribute),
            (target, Step::Element) => target
                .into_attribute()
                .and_then(AttributeExpr::element_mut)
                .map_or(Self::None, Self::Attribute),
            _ => Self::None,
        }
    }
}

// =============================================================================
// Reporter
// =============================================================================

/// Reports errors against the node that was current when it was handed out.
pub struct Reporter<'a> {
    errors: &'a mut ErrorCollector,
    stack: &'a [Step],
    config: &'a EvalConfig,
}

impl Reporter<'_> {
    /// Records an error of the given kind.
    pub fn report(&mut self, kind: ErrorKind) {
        let error = Error::new(kind);
        let error = if self.config.record_context {
            error.with_context(self.context())
        } else {
            error
        };
        self.errors.push(error);
    }

    /// Records that `dsl` was called where the current node does not allow it.
    pub fn incompatible_target(&mut self, dsl: &str) {
        self.report(ErrorKind::IncompatibleTarget {
            dsl: dsl.to_string(),
        });
    }

    /// Records that a validation does not apply to the attribute's type.
    pub fn incompatible_attribute_type(&mut self, validation: &str, actual: &str, expected: &str) {
        self.report(ErrorKind::IncompatibleAttributeType {
            validation: validation.to_string(),
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }

    fn context(&self) -> ErrorContext {
        let context = self
            .stack
            .iter()
            .fold(ErrorContext::new(), |ctx, step| ctx.with_segment(step.to_string()));
        match &self.config.source {
            Some(source) => context.with_source(source.clone()),
            None => context,
        }
    }
}

// =============================================================================
// Evaluation Context
// =============================================================================

/// State of one design evaluation pass.
#[derive(Debug, Default)]
pub struct EvalContext {
    design: Design,
    stack: Vec<Step>,
    errors: ErrorCollector,
    config: EvalConfig,
}

impl EvalContext {
    /// Creates a context for an empty design with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context for an empty design.
    #[must_use]
    pub fn with_config(config: EvalConfig) -> Self {
        Self::from_design(Design::new(), config)
    }

    /// Creates a context that continues building an existing design.
    #[must_use]
    pub fn from_design(design: Design, config: EvalConfig) -> Self {
        Self {
            design,
            stack: Vec::new(),
            errors: ErrorCollector::with_limit(config.max_errors),
            config,
        }
    }

    /// The design built so far.
    #[must_use]
    pub fn design(&self) -> &Design {
        &self.design
    }

    pub(crate) fn design_mut(&mut self) -> &mut Design {
        &mut self.design
    }

    /// The errors reported so far.
    #[must_use]
    pub fn errors(&self) -> &ErrorCollector {
        &self.errors
    }

    /// The evaluation settings.
    #[must_use]
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// The path from the design root to the current node.
    #[must_use]
    pub fn stack(&self) -> &[Step] {
        &self.stack
    }

    /// Resolves the current node and hands out a reporter for it.
    pub fn current(&mut self) -> (Target<'_>, Reporter<'_>) {
        let target = match self.stack.split_first() {
            Some((first, rest)) => rest
                .iter()
                .fold(Target::root(&mut self.design, first), Target::descend),
            None => Target::None,
        };
        let reporter = Reporter {
            errors: &mut self.errors,
            stack: &self.stack,
            config: &self.config,
        };
        (target, reporter)
    }

    /// Hands out a reporter for the current node without resolving it.
    pub fn reporter(&mut self) -> Reporter<'_> {
        Reporter {
            errors: &mut self.errors,
            stack: &self.stack,
            config: &self.config,
        }
    }

    /// Runs `dsl` with `step` pushed onto the stack.
    pub fn scoped(&mut self, step: Step, dsl: impl FnOnce(&mut Self)) {
        trace!(%step, depth = self.stack.len(), "enter");
        self.stack.push(step);
        dsl(self);
        if let Some(step) = self.stack.pop() {
            trace!(%step, depth = self.stack.len(), "exit");
        }
    }

    /// Splits the context into the design and the collected errors.
    #[must_use]
    pub fn into_parts(self) -> (Design, ErrorCollector) {
        (self.design, self.errors)
    }

    /// Ends the pass.
    ///
    /// # Errors
    /// Returns every reported error if the design had any problem.
    pub fn finish(self) -> Result<Design, Errors> {
        let (design, errors) = self.into_parts();
        errors.finish().map(|()| design)
    }
}

/// Evaluates a design from scratch.
///
/// # Errors
/// Returns every error reported while running `dsl`.
pub fn run(config: EvalConfig, dsl: impl FnOnce(&mut EvalContext)) -> Result<Design, Errors> {
    let mut ctx = EvalContext::with_config(config);
    dsl(&mut ctx);
    ctx.finish()
}
