//! TallyKV Binary
//!
//! Runs a session against stdin or a script file.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use clap::Parser;
use tallykv::repl::{Session, SessionEnd};
use tallykv::Config;
use tracing_subscriber::{fmt, EnvFilter};

/// TallyKV
#[derive(Parser, Debug)]
#[command(name = "tallykv")]
#[command(about = "In-memory key-value store with value counts and nested transactions")]
#[command(version)]
struct Args {
    /// Read commands from this file instead of stdin
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Prompt written before each command
    #[arg(short, long, default_value = "Enter Command: ")]
    prompt: String,

    /// Do not write a prompt (always off for scripts)
    #[arg(long)]
    no_prompt: bool,

    /// Report unknown commands instead of skipping them
    #[arg(long)]
    strict: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(short, long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    // Initialize tracing/logging (stderr, so stdout only carries responses)
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    tracing::info!("TallyKV v{}", tallykv::VERSION);

    let config = Config::builder()
        .prompt(&args.prompt)
        .show_prompt(!args.no_prompt && args.script.is_none())
        .strict_commands(args.strict)
        .build();

    let stdout = io::stdout().lock();

    let result = match &args.script {
        Some(path) => {
            tracing::info!("Running script {}", path.display());
            match File::open(path) {
                Ok(file) => Session::new(BufReader::new(file), stdout, config).run(),
                Err(e) => {
                    tracing::error!("Failed to open script {}: {}", path.display(), e);
                    std::process::exit(1);
                }
            }
        }
        None => Session::new(io::stdin().lock(), stdout, config).run(),
    };

    match result {
        Ok(SessionEnd::End) => tracing::info!("Session ended"),
        Ok(SessionEnd::Eof) => tracing::info!("Input exhausted"),
        Err(e) => {
            tracing::error!("Session error: {}", e);
            std::process::exit(1);
        }
    }
}
