//! # pygen
//!
//! CLI tool for checking, formatting and rendering pygen IR documents.
//!
//! ## Usage
//!
//! ```bash
//! # Decode a document and report consistency issues
//! pygen check mathx.json
//!
//! # Rewrite a document in canonical form
//! pygen fmt mathx.json
//!
//! # Fail if a document is not canonical
//! pygen fmt mathx.json --check
//!
//! # Render a type stub into ./generated
//! pygen render mathx.json
//!
//! # Preview Markdown docs without writing
//! pygen render mathx.json --format markdown --dry-run
//!
//! # Initialize configuration
//! pygen init
//! ```

use clap::{ArgAction, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;

use pygen_cli::{
    commands,
    config::{CliArgs, ConfigManager},
    error::CliError,
    writer::{FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "pygen")]
#[command(author, version, about = "Check, format and render pygen IR documents", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an IR document and report consistency issues
    Check {
        /// IR document (JSON)
        file: PathBuf,

        /// Exit with an error when issues are found
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Rewrite an IR document in canonical form
    Fmt {
        /// IR document (JSON)
        file: PathBuf,

        /// Only check whether the document is canonical
        #[arg(long)]
        check: bool,

        /// Write compact JSON instead of indented JSON
        #[arg(long)]
        compact: bool,
    },

    /// Render an IR document with one of the built-in emitters
    Render {
        /// IR document (JSON)
        file: PathBuf,

        /// Emitter to use (stub, markdown)
        #[arg(short, long)]
        format: Option<String>,

        /// Output directory for rendered files
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Preview output without writing files
        #[arg(long)]
        dry_run: bool,

        /// Leave documentation strings out of the output
        #[arg(long)]
        no_docs: bool,
    },

    /// Initialize a new pygen configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "pygen.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

    let default_level = match verbose {
        0 => tracing_subscriber::filter::LevelFilter::WARN,
        1 => tracing_subscriber::filter::LevelFilter::DEBUG,
        _ => tracing_subscriber::filter::LevelFilter::TRACE,
    };
    let stderr_subscriber = tracing_subscriber::fmt::layer()
        .compact()
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(
            // RUST_LOG wins over -v.
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        );

    tracing_subscriber::registry()
        .with(stderr_subscriber)
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config;
    match cli.command {
        Commands::Check {
            file,
            deny_warnings,
        } => cmd_check(file, deny_warnings, config_path),

        Commands::Fmt {
            file,
            check,
            compact,
        } => cmd_fmt(file, check, compact, config_path),

        Commands::Render {
            file,
            format,
            output,
            dry_run,
            no_docs,
        } => cmd_render(file, format, output, dry_run, no_docs, config_path),

        Commands::Init { output, force } => cmd_init(output, force),
    }
}

/// Check command implementation.
fn cmd_check(
    file: PathBuf,
    deny_warnings: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            // The flag can only turn denial on; the config file can too.
            deny_warnings: deny_warnings.then_some(true),
            ..Default::default()
        },
    );

    println!("{} {}", "Checking".cyan(), file.display());
    let outcome = commands::check(&file)?;

    println!(
        "  Module {}: {} function(s), {} variable(s)",
        outcome.module.name().bold(),
        outcome.module.functions().len().to_string().green(),
        outcome.module.variables().len().to_string().green()
    );

    if outcome.report.is_clean() {
        println!("{} No consistency issues", "✓".green());
        return Ok(());
    }

    println!(
        "{} {} consistency issue(s):",
        "Warning:".yellow(),
        outcome.report.len()
    );
    for issue in outcome.report.issues() {
        println!("  - {}", issue);
    }

    if outcome.passes(config.check.deny_warnings) {
        Ok(())
    } else {
        Err(CliError::Validation(format!(
            "{} consistency issue(s) in {}",
            outcome.report.len(),
            file.display()
        )))
    }
}

/// Fmt command implementation.
fn cmd_fmt(
    file: PathBuf,
    check: bool,
    compact: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            pretty: compact.then_some(false),
            ..Default::default()
        },
    );

    let outcome = commands::format(&file, config.output.pretty)?;

    if check {
        return if outcome.is_canonical() {
            println!("{} {} is formatted", "✓".green(), file.display());
            Ok(())
        } else {
            println!("{} {} is not formatted", "✗".red(), file.display());
            println!("  Run 'pygen fmt {}' to update", file.display());
            Err(CliError::Validation(format!(
                "{} is not formatted",
                file.display()
            )))
        };
    }

    match FileWriter::new(false).write(&file, &outcome.canonical)? {
        WriteResult::Written { path, .. } => {
            println!("{} Formatted {}", "✓".green(), path.display());
        }
        WriteResult::Unchanged { path } | WriteResult::DryRun { path, .. } => {
            println!("{} {} already formatted", "✓".green(), path.display());
        }
    }
    Ok(())
}

/// Render command implementation.
fn cmd_render(
    file: PathBuf,
    format: Option<String>,
    output: Option<PathBuf>,
    dry_run: bool,
    no_docs: bool,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = ConfigManager::load(config_path.as_deref())?;
    let config = ConfigManager::merge_cli_args(
        config,
        &CliArgs {
            output,
            format,
            include_docs: no_docs.then_some(false),
            ..Default::default()
        },
    );
    config.validate()?;

    println!(
        "{} {} with the {} emitter",
        "Rendering".cyan(),
        file.display(),
        config.render.format
    );
    let rendered = commands::render(&file, &config)?;

    let writer = FileWriter::new(dry_run);
    match writer.write_emitted(&config.output.dir, &rendered)? {
        WriteResult::Written { path, bytes } => {
            println!(
                "{} Written {} bytes to {}",
                "✓".green(),
                bytes,
                path.display()
            );
        }
        WriteResult::Unchanged { path } => {
            println!("{} {} is up to date", "✓".green(), path.display());
        }
        WriteResult::DryRun { content, path } => {
            println!(
                "{} Would write to {}:",
                "[dry-run]".yellow(),
                path.display()
            );
            println!("{}", "─".repeat(60).dimmed());
            print!("{}", content);
            println!("{}", "─".repeat(60).dimmed());
        }
    }

    Ok(())
}

/// Init command implementation.
fn cmd_init(output: PathBuf, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(format!(
            "Configuration file already exists: {}",
            output.display()
        )));
    }

    std::fs::write(&output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );

    Ok(())
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}
