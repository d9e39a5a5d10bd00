//! Resolution of introspection settings from flags and environment variables.

use schemadump_introspect::IntrospectionClient;
use std::time::Duration;
use thiserror::Error;

/// Default timeout in seconds for introspection requests.
pub const DEFAULT_TIMEOUT: u64 = 120;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(
        "SERVER_ENDPOINT must be provided. Pass the endpoint URL as an argument \
         or set the SERVER_ENDPOINT environment variable."
    )]
    MissingEndpoint,

    #[error("Invalid header format: '{0}'. Expected 'Header-Name: Header-Value'")]
    InvalidHeader(String),

    #[error("Header name cannot be empty")]
    EmptyHeaderName,
}

/// Resolved introspection settings.
#[derive(Debug)]
pub struct Settings {
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub timeout: u64,
    pub retry: u32,
}

impl Settings {
    /// Resolves settings from the CLI arguments. `url` and `authorization`
    /// already carry their environment fallbacks.
    pub fn resolve(
        url: Option<String>,
        authorization: Option<String>,
        cli_headers: &[String],
        timeout: Option<u64>,
        retry: Option<u32>,
    ) -> Result<Self, SettingsError> {
        let url = url
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .ok_or(SettingsError::MissingEndpoint)?;

        let mut headers: Vec<(String, String)> = Vec::new();
        if let Some(value) = authorization.filter(|v| !v.trim().is_empty()) {
            headers.push(("Authorization".to_string(), value));
        }

        // Explicit headers win over the authorization value (case-insensitive).
        for header in cli_headers {
            let (name, value) = parse_header(header)?;
            headers.retain(|(n, _)| !n.eq_ignore_ascii_case(&name));
            headers.push((name, value));
        }

        Ok(Self {
            url,
            headers,
            timeout: timeout.unwrap_or(DEFAULT_TIMEOUT),
            retry: retry.unwrap_or(0),
        })
    }

    /// Builds the introspection client for these settings.
    pub fn client(&self) -> IntrospectionClient {
        IntrospectionClient::new()
            .with_timeout(Duration::from_secs(self.timeout))
            .with_retries(self.retry)
            .with_headers(self.headers.iter().cloned())
    }
}

/// Parses a header string in "Name: Value" format.
fn parse_header(header: &str) -> Result<(String, String), SettingsError> {
    let Some((name, value)) = header.split_once(':') else {
        return Err(SettingsError::InvalidHeader(header.to_string()));
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(SettingsError::EmptyHeaderName);
    }
    Ok((name.to_string(), value.trim().to_string()))
}
