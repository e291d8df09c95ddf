//! Raw failure inputs accepted by the normalizer.
//!
//! A failure is tagged up front as one of three shapes rather than being
//! inspected at runtime:
//!
//! - [`NativeError`]: a Rust error value, optionally annotated with status info
//! - [`PartialError`]: an already error-shaped structured value
//! - anything else, carried as a JSON value

use std::error::Error as StdError;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::status::present;
use crate::types::{NormalizedError, OriginalError};

/// A native error with optional status annotations.
///
/// # Examples
///
/// ```
/// use verdict::{NativeError, failure};
///
/// let err = NativeError::new(std::io::Error::other("gone")).with_response_status(404);
/// let outcome = failure::<()>(err);
/// assert_eq!(outcome.error().unwrap().message(), "Not Found");
/// ```
#[derive(Debug, Clone)]
pub struct NativeError {
    pub(crate) error: Arc<dyn StdError + Send + Sync>,
    pub(crate) response_status: Option<u16>,
    pub(crate) status: Option<u16>,
    pub(crate) stack: Option<String>,
}

impl NativeError {
    /// Wraps an error value.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_arc(Arc::new(error))
    }

    /// Wraps an already shared error. The same `Arc` ends up as the
    /// normalized error's original cause.
    pub fn from_arc(error: Arc<dyn StdError + Send + Sync>) -> Self {
        Self {
            error,
            response_status: None,
            status: None,
            stack: None,
        }
    }

    /// Wraps a boxed error, such as one converted from `anyhow::Error`.
    pub fn from_boxed(error: Box<dyn StdError + Send + Sync>) -> Self {
        Self::from_arc(Arc::from(error))
    }

    /// Sets the status reported by a nested response. Takes priority over
    /// [`with_status`](Self::with_status).
    pub fn with_response_status(mut self, status: u16) -> Self {
        self.response_status = Some(status);
        self
    }

    /// Sets the top-level status.
    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    /// Attaches the stack trace recorded where the error was raised.
    pub fn with_stack<S: Into<String>>(mut self, stack: S) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// The wrapped error.
    pub fn error(&self) -> &Arc<dyn StdError + Send + Sync> {
        &self.error
    }

    /// The extracted status: response status first, then top-level status.
    /// A status of `0` counts as missing.
    pub fn extracted_status(&self) -> Option<u16> {
        present(self.response_status).or(present(self.status))
    }
}

/// An error-shaped value whose fields may be partially filled in.
///
/// Deserializes from JSON payloads such as
/// `{"code": 409}` or `{"message": "nope", "responseStatus": 403}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PartialError {
    /// Status code, if already decided.
    pub code: Option<u16>,
    /// Message, if already decided.
    pub message: Option<String>,
    /// Stack trace. Always replaced by a fresh trace on normalization.
    pub stack: Option<String>,
    /// Cause, if already known.
    #[serde(skip)]
    pub original: Option<OriginalError>,
    /// Status reported by a nested response.
    pub response_status: Option<u16>,
    /// Top-level status.
    pub status: Option<u16>,
}

impl PartialError {
    /// Creates a partial error carrying only a code.
    pub fn with_code(code: u16) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    /// Creates a partial error carrying only a message.
    pub fn with_message<S: Into<String>>(message: S) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }
}

/// A raw failure, tagged by shape.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum FailureInput {
    /// A native error.
    Native(NativeError),

    /// An already error-shaped value.
    Partial(PartialError),

    /// Anything else.
    Unknown(serde_json::Value),
}

impl FailureInput {
    /// Tags an arbitrary value as an unknown failure.
    pub fn unknown<V: Into<serde_json::Value>>(value: V) -> Self {
        FailureInput::Unknown(value.into())
    }

    /// Short name of the shape, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            FailureInput::Native(_) => "native",
            FailureInput::Partial(_) => "partial",
            FailureInput::Unknown(_) => "unknown",
        }
    }
}

impl<E> From<E> for FailureInput
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        FailureInput::Native(NativeError::new(error))
    }
}

impl From<NativeError> for FailureInput {
    fn from(native: NativeError) -> Self {
        FailureInput::Native(native)
    }
}

impl From<PartialError> for FailureInput {
    fn from(partial: PartialError) -> Self {
        FailureInput::Partial(partial)
    }
}

impl From<NormalizedError> for FailureInput {
    fn from(error: NormalizedError) -> Self {
        FailureInput::Partial(error.into_partial())
    }
}
