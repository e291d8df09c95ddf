#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Verdict Library
//!
//! Turns operations that may fail into [`Outcome`] values that always carry
//! either a payload or a [`NormalizedError`].

pub mod config;
pub mod error;
pub mod normalize;
pub mod status;
pub mod types;
pub mod wrap;

// Re-exports for convenience
pub use config::{NormalizerConfig, StackCapture};
pub use error::{Error, Result};
pub use normalize::{Normalizer, failure};
pub use status::status_message;
pub use types::{
    FailureInput, NativeError, NormalizedError, OriginalError, Outcome, PartialError, flat_map,
    map, success,
};
pub use wrap::try_catch;
