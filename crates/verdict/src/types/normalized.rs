//! The canonical error shape carried by failed outcomes.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{NormalizerConfig, StackCapture};
use crate::normalize::Normalizer;
use crate::types::PartialError;

/// Opaque reference to whatever triggered a failure.
///
/// Preserved for inspection, never interpreted by the normalizer.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum OriginalError {
    /// A native error. Shared with whoever else holds the `Arc`.
    Error(Arc<dyn StdError + Send + Sync>),

    /// A non-error payload: primitives, `null`, structured data, panic messages.
    Value(serde_json::Value),

    /// Snapshot of a partial error object taken when it was normalized.
    Partial(Arc<PartialError>),
}

impl OriginalError {
    /// Returns the native error, if this cause is one.
    pub fn as_error(&self) -> Option<&Arc<dyn StdError + Send + Sync>> {
        match self {
            OriginalError::Error(error) => Some(error),
            _ => None,
        }
    }

    /// Returns the raw payload, if this cause is one.
    pub fn as_value(&self) -> Option<&serde_json::Value> {
        match self {
            OriginalError::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the partial error snapshot, if this cause is one.
    pub fn as_partial(&self) -> Option<&PartialError> {
        match self {
            OriginalError::Partial(partial) => Some(partial),
            _ => None,
        }
    }

    /// Attempts to downcast a native cause to a concrete error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use verdict::failure;
    ///
    /// let outcome = failure::<()>(std::io::Error::other("disk on fire"));
    /// let original = outcome.error().and_then(|e| e.original()).unwrap();
    /// assert!(original.downcast_ref::<std::io::Error>().is_some());
    /// ```
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.as_error().and_then(|error| error.downcast_ref::<E>())
    }
}

// Native causes compare by identity.
impl PartialEq for OriginalError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (OriginalError::Error(a), OriginalError::Error(b)) => Arc::ptr_eq(a, b),
            (OriginalError::Value(a), OriginalError::Value(b)) => a == b,
            (OriginalError::Partial(a), OriginalError::Partial(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for OriginalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OriginalError::Error(error) => write!(f, "{error}"),
            OriginalError::Value(value) => write!(f, "{value}"),
            OriginalError::Partial(partial) => match &partial.message {
                Some(message) => write!(f, "{message}"),
                None => write!(f, "partial error"),
            },
        }
    }
}

/// A failure reduced to a status code, a message, a stack trace and the
/// original cause.
///
/// Instances are produced by the normalizer only; fields are read through
/// accessors so a normalized error stays as it was built.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedError {
    pub(crate) code: Option<u16>,
    pub(crate) message: String,
    pub(crate) stack: Option<String>,
    #[serde(skip)]
    pub(crate) original: Option<OriginalError>,
    #[serde(skip)]
    pub(crate) stack_capture: StackCapture,
}

impl NormalizedError {
    /// Numeric status code. Always present on errors built by the normalizer.
    pub fn code(&self) -> Option<u16> {
        self.code
    }

    /// Human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Diagnostic trace, if one was attached or captured.
    pub fn stack(&self) -> Option<&str> {
        self.stack.as_deref()
    }

    /// The cause this error was normalized from.
    pub fn original(&self) -> Option<&OriginalError> {
        self.original.as_ref()
    }

    /// Converts back into a partial error, keeping code, message, stack and cause.
    ///
    /// Feeding the result to [`failure`](crate::failure) re-normalizes it:
    /// code and message are kept while the stack is re-captured.
    pub fn into_partial(self) -> PartialError {
        PartialError {
            code: self.code,
            message: Some(self.message),
            stack: self.stack,
            original: self.original,
            response_status: None,
            status: None,
        }
    }

    /// A normalizer using the stack policy this error was built under.
    pub(crate) fn renormalizer(&self) -> Normalizer {
        Normalizer::new(NormalizerConfig::with_stack_capture(self.stack_capture))
    }
}

impl fmt::Display for NormalizedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{code} {}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}
