//! Error accumulation for a design pass.

use apidesign_foundation::{Error, ErrorKind, Errors};
use tracing::{debug, warn};

/// Collects design errors in report order.
///
/// Reporting never fails and never stops evaluation. The collected errors
/// are inspected once, when the pass is finished.
#[derive(Clone, Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<Error>,
    limit: Option<usize>,
    dropped: usize,
}

impl ErrorCollector {
    /// Creates an unbounded collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collector that keeps at most `limit` errors.
    #[must_use]
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Records an error.
    pub fn push(&mut self, error: Error) {
        debug!(%error, "design error reported");
        match self.limit {
            Some(limit) if self.errors.len() >= limit => {
                self.dropped += 1;
                if self.dropped == 1 {
                    warn!(limit, "error limit reached, further errors are counted only");
                }
            }
            _ => self.errors.push(error),
        }
    }

    /// Number of errors kept.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no error was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.dropped == 0
    }

    /// Number of errors discarded because of the limit.
    #[must_use]
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// The kept errors, in report order.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// Iterates over the kept errors.
    pub fn iter(&self) -> impl Iterator<Item = &Error> {
        self.errors.iter()
    }

    /// Ends the pass.
    ///
    /// # Errors
    /// Returns every kept error if any was reported, followed by a
    /// [`ErrorKind::TooManyErrors`] entry when some were dropped.
    pub fn finish(self) -> Result<(), Errors> {
        if self.is_empty() {
            return Ok(());
        }
        let mut errors = self.errors;
        if self.dropped > 0 {
            errors.push(Error::new(ErrorKind::TooManyErrors {
                limit: self.limit.unwrap_or_default(),
                dropped: self.dropped,
            }));
        }
        Err(Errors(errors))
    }
}
