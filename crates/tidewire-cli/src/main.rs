//! tidewire - inspect AI mode defaults and pty window sizes
//!
//! Thin command-line front end over `tidewire-core`:
//! - Resolve and validate the AI modes file
//! - Resolve a single ad-hoc provider config
//! - List built-in provider defaults
//! - Show how a terminal size is clamped for the pty layer

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use tidewire_core::{ai, paths, pty, AiModeConfig, ModeStore, TermSize};

/// tidewire - AI mode and pty geometry inspector
#[derive(Parser, Debug)]
#[command(name = "tidewire")]
#[command(about = "Inspect AI mode defaults and pty window sizes", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the AI modes file with provider defaults applied
    Modes {
        /// Modes file (defaults to ~/.tidewire/aimodes.json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Report modes that are still incomplete after resolution
        #[arg(long)]
        validate: bool,
    },

    /// Resolve a single provider config
    Resolve {
        #[arg(short, long)]
        provider: String,

        #[arg(long)]
        api_type: Option<String>,

        #[arg(long)]
        endpoint: Option<String>,

        #[arg(long)]
        secret: Option<String>,
    },

    /// List built-in provider defaults
    Providers,

    /// Show the pty window size for a terminal size
    Winsize {
        #[arg(long, allow_negative_numbers = true)]
        rows: i64,

        #[arg(long, allow_negative_numbers = true)]
        cols: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        xpixel: i64,

        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        ypixel: i64,
    },
}

/// Print resolved modes; returns false if validation was requested and failed
fn run_modes(file: Option<PathBuf>, validate: bool) -> Result<bool> {
    let path = file.unwrap_or_else(paths::modes_file);
    let mut store = ModeStore::load_from_path(&path)
        .with_context(|| format!("failed to load ai modes from {}", path.display()))?;
    store.resolve_all();

    println!("{}", serde_json::to_string_pretty(&store)?);

    if validate {
        let errors = store.validate_all();
        for err in &errors {
            eprintln!("error: {}", err);
        }
        return Ok(errors.is_empty());
    }
    Ok(true)
}

fn resolve_one(
    provider: String,
    api_type: Option<String>,
    endpoint: Option<String>,
    secret: Option<String>,
) -> AiModeConfig {
    let mut config = AiModeConfig::for_provider(provider);
    config.api_type = api_type.map(Into::into);
    config.endpoint = endpoint;
    config.api_token_secret_name = secret;
    config.with_provider_defaults()
}

fn print_providers() {
    for entry in ai::builtin_defaults() {
        println!(
            "{:<12} {:<14} {:<18} {}",
            entry.provider.as_str(),
            entry.api_type,
            entry.secret_name,
            entry.endpoint
        );
    }
}

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    tracing::debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::Modes { file, validate } => {
            if !run_modes(file, validate)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Resolve {
            provider,
            api_type,
            endpoint,
            secret,
        } => {
            let config = resolve_one(provider, api_type, endpoint, secret);
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        Commands::Providers => print_providers(),
        Commands::Winsize {
            rows,
            cols,
            xpixel,
            ypixel,
        } => {
            let size = TermSize::new(rows, cols).with_pixels(xpixel, ypixel);
            let winsize = pty::winsize_from_term_size(size);
            println!("{}", serde_json::to_string(&winsize)?);
        }
    }

    Ok(ExitCode::SUCCESS)
}
