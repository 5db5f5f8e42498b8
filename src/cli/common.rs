//! Shared CLI error and result types.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::models::Variant;

/// Result type for CLI command handlers.
pub type CliResult<T> = Result<T, CliError>;

/// Error raised by a CLI command, mapped to a process exit code.
#[derive(Debug)]
pub struct CliError {
    kind: CliErrorKind,
    message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliErrorKind {
    /// File system or serialization failure
    Io,
    /// Bad arguments or rejected input
    Validation,
}

impl CliError {
    /// Creates an I/O error (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Io,
            message: message.into(),
        }
    }

    /// Creates a validation error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: CliErrorKind::Validation,
            message: message.into(),
        }
    }

    /// Exit code the process should terminate with.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self.kind {
            CliErrorKind::Io => 1,
            CliErrorKind::Validation => 2,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Loads settings from an explicit path or the default location.
pub fn load_config(path: Option<&Path>) -> CliResult<Config> {
    let result = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    result.map_err(|e| CliError::io(format!("Failed to load settings: {e}")))
}

/// Saves settings to an explicit path or the default location.
pub fn save_config(config: &Config, path: Option<&Path>) -> CliResult<()> {
    let result = match path {
        Some(path) => config.save_to(path),
        None => config.save(),
    };

    result.map_err(|e| CliError::io(format!("Failed to save settings: {e}")))
}

/// Resolves the variant from a `--variant` override or the settings file.
pub fn resolve_variant(arg: Option<&str>, config: &Config) -> CliResult<Variant> {
    match arg {
        Some(raw) => raw
            .parse()
            .map_err(|e| CliError::validation(format!("{e}"))),
        None => Ok(config.variant),
    }
}
