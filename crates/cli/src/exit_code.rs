//! Exit codes for the schemadump CLI.
//!
//! Distinct codes let scripts and CI systems tell configuration mistakes
//! apart from an unreachable endpoint or a schema that cannot be printed.

use crate::settings::SettingsError;
use schemadump_introspect::IntrospectionError;

/// Exit codes used by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - SDL written
    Success = 0,
    /// Configuration error (missing endpoint, malformed header)
    ConfigError = 2,
    /// Schema fetch error (network, HTTP status, server-reported errors)
    SchemaError = 3,
    /// I/O error (file write failure)
    IoError = 4,
    /// Parse error (introspection payload that cannot be rendered as SDL)
    ParseError = 5,
}

impl ExitCode {
    /// Exit the process with this exit code.
    pub fn exit(self) -> ! {
        std::process::exit(self.code())
    }

    /// Get the numeric value of this exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for the first recognised cause in the error chain.
    #[must_use]
    pub fn for_error(error: &anyhow::Error) -> Self {
        for cause in error.chain() {
            if cause.is::<SettingsError>() {
                return Self::ConfigError;
            }
            if let Some(err) = cause.downcast_ref::<IntrospectionError>() {
                return if err.is_transport() {
                    Self::SchemaError
                } else {
                    Self::ParseError
                };
            }
            if cause.is::<std::io::Error>() {
                return Self::IoError;
            }
        }
        Self::SchemaError
    }
}

impl std::fmt::Display for ExitCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "success"),
            Self::ConfigError => write!(f, "configuration error"),
            Self::SchemaError => write!(f, "schema fetch error"),
            Self::IoError => write!(f, "I/O error"),
            Self::ParseError => write!(f, "parse error"),
        }
    }
}
