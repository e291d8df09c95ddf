//! Normalizer configuration.
//!
//! The only tunable is how fresh stack traces are captured. Configuration
//! can be built in code or loaded from TOML:
//!
//! ```
//! use verdict::config::{NormalizerConfig, StackCapture};
//!
//! let config = NormalizerConfig::from_toml_str(r#"stack_capture = "never""#).unwrap();
//! assert_eq!(config.stack_capture, StackCapture::Never);
//! ```

use std::backtrace::{Backtrace, BacktraceStatus};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// How a normalizer captures a fresh stack trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum StackCapture {
    /// Always capture, regardless of environment variables.
    #[default]
    Always,

    /// Capture only when `RUST_BACKTRACE` / `RUST_LIB_BACKTRACE` enable it.
    Environment,

    /// Never capture; fresh stacks are left empty.
    Never,
}

impl StackCapture {
    /// Captures a trace at the caller according to this policy.
    pub fn capture(self) -> Option<String> {
        match self {
            StackCapture::Always => Some(Backtrace::force_capture().to_string()),
            StackCapture::Environment => {
                let backtrace = Backtrace::capture();
                match backtrace.status() {
                    BacktraceStatus::Captured => Some(backtrace.to_string()),
                    _ => None,
                }
            }
            StackCapture::Never => None,
        }
    }
}

impl std::fmt::Display for StackCapture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StackCapture::Always => write!(f, "always"),
            StackCapture::Environment => write!(f, "environment"),
            StackCapture::Never => write!(f, "never"),
        }
    }
}

impl std::str::FromStr for StackCapture {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "always" => Ok(StackCapture::Always),
            "environment" | "env" => Ok(StackCapture::Environment),
            "never" | "off" => Ok(StackCapture::Never),
            other => Err(Error::config(format!(
                "unknown stack capture mode '{other}' (expected always, environment or never)"
            ))),
        }
    }
}

/// Settings for a [`Normalizer`](crate::Normalizer).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NormalizerConfig {
    /// Stack capture policy for freshly normalized errors.
    pub stack_capture: StackCapture,
}

impl NormalizerConfig {
    /// Creates a configuration with the given stack capture policy.
    pub fn with_stack_capture(stack_capture: StackCapture) -> Self {
        Self { stack_capture }
    }

    /// Parses a configuration from a TOML document.
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        tracing::debug!(stack_capture = %config.stack_capture, "Loaded normalizer config");
        Ok(config)
    }
}
