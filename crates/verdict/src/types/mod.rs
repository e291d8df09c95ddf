//! Core value types: outcomes, normalized errors and raw failure inputs.

mod input;
mod normalized;
mod outcome;
mod proptests;

pub use input::{FailureInput, NativeError, PartialError};
pub use normalized::{NormalizedError, OriginalError};
pub use outcome::{Outcome, flat_map, map, success};
