//! Configuration for design evaluation.

/// Settings for one evaluation pass.
///
/// Controls how reported errors are recorded. Evaluation itself always runs
/// to completion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalConfig {
    /// Label of the design source, attached to every error context.
    pub source: Option<String>,

    /// Maximum number of errors kept; later errors are only counted.
    pub max_errors: Option<usize>,

    /// Attach the evaluation path to reported errors.
    pub record_context: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            source: None,
            max_errors: None,
            record_context: true,
        }
    }
}

impl EvalConfig {
    /// Creates a configuration labelled with the design source.
    #[must_use]
    pub fn for_source(source: impl Into<String>) -> Self {
        Self {
            source: Some(source.into()),
            ..Self::default()
        }
    }

    /// Creates a configuration that records bare errors without paths.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            source: None,
            max_errors: None,
            record_context: false,
        }
    }

    /// Builder method to set the source label.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Builder method to cap the number of recorded errors.
    #[must_use]
    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = Some(max_errors);
        self
    }

    /// Builder method to toggle evaluation paths on errors.
    #[must_use]
    pub fn with_record_context(mut self, record_context: bool) -> Self {
        self.record_context = record_context;
        self
    }
}
