mod dump;
mod exit_code;
mod progress;
mod settings;

use clap::Parser;
use colored::Colorize;
use dump::{DumpOptions, SchemaFormat};
use exit_code::ExitCode;
use schemadump_introspect::PrintOptions;
use settings::Settings;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "schemadump")]
#[command(about = "Download a GraphQL schema via introspection and print it as SDL", long_about = None)]
#[command(version)]
#[allow(clippy::struct_excessive_bools)]
struct Cli {
    /// GraphQL endpoint URL to introspect
    #[arg(value_name = "URL", env = "SERVER_ENDPOINT")]
    url: Option<String>,

    /// Value sent as the Authorization header
    #[arg(long, env = "AUTHORIZATION_HEADER", hide_env_values = true)]
    authorization: Option<String>,

    /// HTTP headers to include in the request (can be specified multiple times)
    /// Format: "Header-Name: Header-Value"
    #[arg(long = "header", short = 'H', value_name = "HEADER")]
    headers: Vec<String>,

    /// Output file path (writes to stdout if not specified)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "sdl")]
    format: SchemaFormat,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Number of retry attempts on failure
    #[arg(long)]
    retry: Option<u32>,

    /// Omit built-in scalars, directives and introspection types
    #[arg(long)]
    skip_builtins: bool,

    /// Print field arguments inline, as `name(arg: Type): Type`
    #[arg(long)]
    field_arguments: bool,

    /// Print default values of arguments and input fields
    #[arg(long)]
    default_values: bool,

    /// Force colored output even when not a TTY
    #[arg(long, conflicts_with = "no_color")]
    color: bool,

    /// Disable colored output
    #[arg(long, conflicts_with = "color")]
    no_color: bool,

    /// Suppress all output except errors and the schema itself
    #[arg(short, long)]
    quiet: bool,
}

/// Output verbosity options
#[derive(Debug, Clone, Copy)]
pub struct OutputOptions {
    /// Whether to show progress indicators (spinners)
    pub show_progress: bool,
    /// Whether to show informational output (success messages, timings)
    pub show_info: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing();
    configure_colors(cli.color, cli.no_color);

    let code = match run(cli).await {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            let code = ExitCode::for_error(&err);
            tracing::debug!(%code, "Exiting with error");
            eprintln!("{} {err:#}", "error:".red().bold());
            code
        }
    };
    code.exit();
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::resolve(
        cli.url,
        cli.authorization,
        &cli.headers,
        cli.timeout,
        cli.retry,
    )?;

    let output_opts = OutputOptions {
        show_progress: !cli.quiet,
        show_info: !cli.quiet,
    };
    let options = DumpOptions {
        output: cli.output,
        format: cli.format,
        print: PrintOptions {
            skip_builtins: cli.skip_builtins,
            field_arguments: cli.field_arguments,
            default_values: cli.default_values,
        },
    };

    dump::run(settings, options, output_opts).await
}

/// Logs go to stderr so stdout only ever carries the schema.
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off")),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Configure colored output based on flags and environment variables.
///
/// Priority order (highest to lowest):
/// 1. `--color` flag (force colors on)
/// 2. `--no-color` flag (force colors off)
/// 3. `NO_COLOR` environment variable (if set to any value, disable colors)
/// 4. `CLICOLOR_FORCE` environment variable (if set to non-zero, force colors)
/// 5. `CLICOLOR` environment variable (if set to "0", disable colors)
/// 6. Default: colors enabled if stdout is a TTY (handled by `colored` crate)
fn configure_colors(force_color: bool, no_color: bool) {
    use colored::control;

    if force_color {
        control::set_override(true);
    } else if no_color || std::env::var_os("NO_COLOR").is_some() {
        control::set_override(false);
    } else if let Ok(val) = std::env::var("CLICOLOR_FORCE") {
        if !val.is_empty() && val != "0" {
            control::set_override(true);
        }
    } else if std::env::var("CLICOLOR").is_ok_and(|val| val == "0") {
        control::set_override(false);
    }
}
