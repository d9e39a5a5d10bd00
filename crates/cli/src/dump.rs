//! Fetches the schema and writes it out as SDL or raw introspection JSON.

use crate::progress;
use crate::settings::Settings;
use crate::OutputOptions;
use anyhow::{Context, Result};
use colored::Colorize;
use schemadump_introspect::{
    introspection_to_sdl_with_options, IntrospectionClient, IntrospectionError, PrintOptions,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

/// Schema output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaFormat {
    /// SDL (Schema Definition Language) format
    #[default]
    Sdl,
    /// JSON introspection format
    Json,
}

impl SchemaFormat {
    fn label(self) -> &'static str {
        match self {
            Self::Sdl => "SDL",
            Self::Json => "JSON",
        }
    }
}

/// What to fetch and where to write it.
#[derive(Debug)]
pub struct DumpOptions {
    pub output: Option<PathBuf>,
    pub format: SchemaFormat,
    pub print: PrintOptions,
}

#[tracing::instrument(skip_all, fields(url = %settings.url, format = ?options.format))]
pub async fn run(settings: Settings, options: DumpOptions, output_opts: OutputOptions) -> Result<()> {
    let start_time = Instant::now();
    let client = settings.client();

    // No spinner when the schema itself goes to stdout.
    let spinner = progress::spinner(
        &format!("Fetching schema from {}...", settings.url),
        options.output.is_some() && output_opts.show_progress,
    );

    let content = progress::clear_after(&spinner, fetch(&client, &settings.url, &options)).await?;
    tracing::debug!(bytes = content.len(), "Schema rendered");

    if let Some(path) = options.output {
        std::fs::write(&path, &content)
            .with_context(|| format!("Failed to write to {}", path.display()))?;

        if output_opts.show_info {
            println!(
                "{} Schema written to {} ({} format)",
                "✓".green(),
                path.display().to_string().cyan(),
                options.format.label()
            );
            println!("  {} {:.2}s", "⏱".dimmed(), start_time.elapsed().as_secs_f64());
        }
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        handle
            .write_all(content.as_bytes())
            .context("Failed to write to stdout")?;
        handle.flush().context("Failed to write to stdout")?;
    }

    Ok(())
}

async fn fetch(client: &IntrospectionClient, url: &str, options: &DumpOptions) -> Result<String> {
    match options.format {
        SchemaFormat::Sdl => {
            let response = client
                .execute(url)
                .await
                .with_context(|| format!("Failed to fetch schema from {url}"))?;
            introspection_to_sdl_with_options(&response, options.print)
                .context("Failed to convert introspection result to SDL")
        }
        SchemaFormat::Json => {
            let response = client
                .execute_raw(url)
                .await
                .with_context(|| format!("Failed to fetch schema from {url}"))?;
            check_response_errors(&response)?;
            let mut json = serde_json::to_string_pretty(&response)
                .context("Failed to serialize introspection response")?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Raw responses skip the typed decode, so the `errors` array is checked here.
fn check_response_errors(response: &serde_json::Value) -> Result<(), IntrospectionError> {
    let Some(errors) = response.get("errors").and_then(serde_json::Value::as_array) else {
        return Ok(());
    };
    if errors.is_empty() {
        return Ok(());
    }
    Err(IntrospectionError::Server(
        errors
            .iter()
            .map(|error| {
                error
                    .get("message")
                    .and_then(serde_json::Value::as_str)
                    .map_or_else(|| error.to_string(), ToString::to_string)
            })
            .collect(),
    ))
}
