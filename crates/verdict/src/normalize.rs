//! Failure normalization.
//!
//! [`Normalizer`] turns any [`FailureInput`] into a [`NormalizedError`]:
//!
//! - native errors take their status from `response_status`, then `status`,
//!   then 500, and keep their own stack when they carry one
//! - partial errors keep their code and message when set, fill the gaps from
//!   the status table, and always get a fresh stack
//! - anything else becomes a 500 "Internal Server Error"
//!
//! # Usage
//!
//! ```rust
//! use verdict::{Normalizer, PartialError};
//! use verdict::config::{NormalizerConfig, StackCapture};
//!
//! let normalizer = Normalizer::new(NormalizerConfig::with_stack_capture(StackCapture::Never));
//! let error = normalizer.normalize(PartialError::with_code(409));
//! assert_eq!(error.code(), Some(409));
//! assert_eq!(error.message(), "Conflict");
//! assert_eq!(error.stack(), None);
//! ```

use std::sync::Arc;

use crate::config::NormalizerConfig;
use crate::status::{DEFAULT_STATUS, UNKNOWN_ERROR_MESSAGE, present, status_message};
use crate::types::{
    FailureInput, NativeError, NormalizedError, OriginalError, Outcome, PartialError,
};

/// Normalizes a failure with the default configuration.
///
/// # Examples
///
/// ```
/// use verdict::{FailureInput, failure};
///
/// let outcome = failure::<()>(FailureInput::unknown("something odd"));
/// let error = outcome.error().unwrap();
/// assert_eq!(error.code(), Some(500));
/// assert_eq!(error.message(), "Internal Server Error");
/// ```
pub fn failure<T>(input: impl Into<FailureInput>) -> Outcome<T> {
    Normalizer::default().failure(input)
}

/// Builds failed outcomes according to a [`NormalizerConfig`].
///
/// Holds no state besides its configuration; one instance can serve any
/// number of concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    config: NormalizerConfig,
}

impl Normalizer {
    /// Creates a normalizer with the given configuration.
    pub fn new(config: NormalizerConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> &NormalizerConfig {
        &self.config
    }

    /// Wraps a normalized failure in an outcome.
    pub fn failure<T>(&self, input: impl Into<FailureInput>) -> Outcome<T> {
        Outcome::Failure(self.normalize(input))
    }

    /// Reduces a raw failure to a [`NormalizedError`].
    pub fn normalize(&self, input: impl Into<FailureInput>) -> NormalizedError {
        let input = input.into();
        let kind = input.kind();
        let error = match input {
            FailureInput::Native(native) => self.normalize_native(native),
            FailureInput::Partial(partial) => self.normalize_partial(partial),
            FailureInput::Unknown(value) => self.normalize_unknown(value),
        };
        tracing::debug!(
            branch = kind,
            code = error.code,
            reason = %error.message,
            "Normalized failure"
        );
        error
    }

    /// Applies `f` to a success payload; failures are re-normalized.
    pub fn map<T, U, F>(&self, outcome: Outcome<T>, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> U,
    {
        match outcome {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(error) => self.failure(error),
        }
    }

    /// Returns `f(data)` on success; failures are re-normalized.
    pub fn flat_map<T, U, F>(&self, outcome: Outcome<T>, f: F) -> Outcome<U>
    where
        F: FnOnce(T) -> Outcome<U>,
    {
        match outcome {
            Outcome::Success(data) => f(data),
            Outcome::Failure(error) => self.failure(error),
        }
    }

    fn normalize_native(&self, native: NativeError) -> NormalizedError {
        let extracted = native.extracted_status();
        let code = extracted.unwrap_or(DEFAULT_STATUS);
        let own_message = native.error.to_string();

        let message = extracted
            .and_then(status_message)
            .map(str::to_owned)
            .or_else(|| (!own_message.is_empty()).then_some(own_message))
            .or_else(|| status_message(code).map(str::to_owned))
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned());

        NormalizedError {
            code: Some(code),
            message,
            stack: native.stack.or_else(|| self.fresh_stack()),
            original: Some(OriginalError::Error(native.error)),
            stack_capture: self.config.stack_capture,
        }
    }

    fn normalize_partial(&self, mut partial: PartialError) -> NormalizedError {
        let original = match partial.original.take() {
            Some(original) => original,
            None => OriginalError::Partial(Arc::new(partial.clone())),
        };
        let code = present(partial.code)
            .or(present(partial.response_status))
            .or(present(partial.status))
            .unwrap_or(DEFAULT_STATUS);
        let message = partial
            .message
            .filter(|message| !message.is_empty())
            .or_else(|| status_message(code).map(str::to_owned))
            .unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned());

        NormalizedError {
            code: Some(code),
            message,
            stack: self.fresh_stack(),
            original: Some(original),
            stack_capture: self.config.stack_capture,
        }
    }

    fn normalize_unknown(&self, value: serde_json::Value) -> NormalizedError {
        NormalizedError {
            code: Some(DEFAULT_STATUS),
            message: status_message(DEFAULT_STATUS)
                .unwrap_or(UNKNOWN_ERROR_MESSAGE)
                .to_owned(),
            stack: self.fresh_stack(),
            original: Some(OriginalError::Value(value)),
            stack_capture: self.config.stack_capture,
        }
    }

    fn fresh_stack(&self) -> Option<String> {
        self.config.stack_capture.capture()
    }
}
