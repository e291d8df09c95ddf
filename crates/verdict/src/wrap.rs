//! Operation wrapping.
//!
//! [`try_catch`] awaits a fallible future and hands back an [`Outcome`]
//! instead of an error or a panic. It adds no timeout, cancellation or
//! retry of its own; the wrapped future keeps whatever it already has.

use std::any::Any;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::normalize::Normalizer;
use crate::types::{FailureInput, Outcome};

/// Awaits `operation` and captures how it settled, using the default
/// configuration.
///
/// `Ok(value)` becomes a success. `Err(error)` and panics raised while the
/// operation is polled become normalized failures. Nothing escapes.
///
/// # Examples
///
/// ```
/// use verdict::try_catch;
///
/// let outcome = tokio_test::block_on(try_catch(async { Ok::<_, std::io::Error>(42) }));
/// assert_eq!(outcome.unwrap(), 42);
///
/// let outcome = tokio_test::block_on(try_catch(async {
///     Err::<i32, _>(std::io::Error::other("boom"))
/// }));
/// assert_eq!(outcome.error().unwrap().message(), "boom");
/// ```
pub async fn try_catch<T, E, F>(operation: F) -> Outcome<T>
where
    F: Future<Output = Result<T, E>>,
    E: Into<FailureInput>,
{
    Normalizer::default().try_catch(operation).await
}

impl Normalizer {
    /// Awaits `operation` and captures how it settled.
    ///
    /// See [`try_catch`] for the conversion rules.
    pub async fn try_catch<T, E, F>(&self, operation: F) -> Outcome<T>
    where
        F: Future<Output = Result<T, E>>,
        E: Into<FailureInput>,
    {
        match AssertUnwindSafe(operation).catch_unwind().await {
            Ok(Ok(value)) => {
                tracing::trace!("Operation settled successfully");
                Outcome::Success(value)
            }
            Ok(Err(error)) => self.failure(error),
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                tracing::warn!(panic = %message, "Operation panicked; capturing as failure");
                self.failure(FailureInput::unknown(message))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "operation panicked with a non-string payload".to_string()
    }
}
