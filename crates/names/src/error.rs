//! The single error kind name parsing surfaces.

use thiserror::Error;

/// A raw string did not match any accepted name format.
///
/// Every parse failure in this crate is reported through this one kind: a
/// human-readable reason plus, where a nested parse failed, the underlying
/// failure as the error source. Parsing never panics and never partially
/// succeeds; a value object either exists fully validated or not at all.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("wrong name format: {reason}")]
pub struct NameFormatError {
    reason: String,
    #[source]
    cause: Option<Box<NameFormatError>>,
}

impl NameFormatError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            cause: None,
        }
    }

    /// Wrap an underlying failure (e.g. a segment that failed its own parse).
    pub fn caused_by(reason: impl Into<String>, cause: NameFormatError) -> Self {
        Self {
            reason: reason.into(),
            cause: Some(Box::new(cause)),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn cause(&self) -> Option<&NameFormatError> {
        self.cause.as_deref()
    }
}
