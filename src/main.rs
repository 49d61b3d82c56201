//! replacecode CLI - refresh README code blocks from source files

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use replacecode::commands;
use replacecode::interface::Context;

#[derive(Parser)]
#[command(name = "replacecode")]
#[command(author, version, about = "Replace marked README code blocks with file contents", long_about = None)]
struct Cli {
    /// Files whose contents replace the blocks that name them
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// Document to rewrite (defaults to README.md)
    #[arg(short, long)]
    document: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Working directory
    #[arg(short = 'C', long)]
    directory: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Exit with an error if the document is not up to date, without writing it
    #[arg(long)]
    check: bool,

    /// Dry run - show what would be done without doing it
    #[arg(short = 'n', long)]
    dry_run: bool,

    /// Show a unified diff of what would change, without writing it
    #[arg(long)]
    diff: bool,

    /// Overwrite even if the document changed while being processed
    #[arg(short, long)]
    force: bool,

    /// Suppress normal output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Determine working directory
    let base_dir = cli
        .directory
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."));

    let config = match cli.config {
        Some(ref path) => replacecode::config::read_config_file(path),
        None => replacecode::config::read_config(&base_dir),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error reading configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context::new(config, base_dir);

    let options = commands::UpdateOptions {
        files: cli.files,
        document: cli.document,
        check: cli.check,
        dry_run: cli.dry_run,
        diff: cli.diff,
        force: cli.force,
        quiet: cli.quiet,
    };

    match commands::update(&ctx, options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
