//! Shared entry point for every binary.

use crate::cli::Cli;
use crate::commands::{run_migrate, MigrateOptions};
use crate::config::Config;
use crate::constants::{DEFAULT_EXTENSIONS, DEFAULT_ROOT};
use crate::rules::{FixCategory, RuleSet};
use crate::utils::{normalize_display_path, DiscoverOptions};
use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;

/// Runs the codemod with the given arguments.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or file I/O fails.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Run prismafix with the given arguments, writing output to the specified writer.
///
/// This is the testable version of `run_with_args` that allows output capture.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or file I/O fails.
pub fn run_with_args_to<W: std::io::Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["prismafix".to_owned()];
    program_args.extend(args);
    let cli_var = match Cli::try_parse_from(program_args) {
        Ok(c) => c,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(1);
            }
        },
    };

    let verbose = cli_var.output.verbose;

    let config = match &cli_var.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load(),
    };

    if verbose {
        eprintln!("[VERBOSE] prismafix v{}", env!("CARGO_PKG_VERSION"));
        match &config.config_file_path {
            Some(path) => eprintln!("[VERBOSE] Config: {}", normalize_display_path(path)),
            None => eprintln!("[VERBOSE] Config: built-in defaults"),
        }
        for warning in &config.warnings {
            eprintln!("{} {warning}", "[WARN]".yellow());
        }
    }

    let settings = config.prismafix;
    let tables = settings.rule_tables()?;
    let rules = RuleSet::new(&tables)?;

    let root = cli_var
        .path
        .or_else(|| settings.root.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

    let extensions: Vec<String> = if cli_var.extensions.is_empty() {
        settings.extensions.clone().unwrap_or_else(|| {
            DEFAULT_EXTENSIONS.iter().map(|&s| s.to_owned()).collect()
        })
    } else {
        cli_var.extensions
    }
    .into_iter()
    .map(|ext| ext.trim_start_matches('.').to_owned())
    .collect();

    let mut exclude_folders = settings.exclude_folders.clone().unwrap_or_default();
    exclude_folders.extend(cli_var.exclude_folders);

    let categories = match cli_var.only {
        Some(category) => vec![category],
        None => vec![FixCategory::Enums, FixCategory::Types],
    };

    let options = MigrateOptions {
        root,
        discover: DiscoverOptions {
            extensions,
            exclude_folders,
            respect_gitignore: cli_var.respect_gitignore
                || settings.respect_gitignore.unwrap_or(false),
            verbose,
        },
        categories,
        dry_run: cli_var.output.dry_run,
        verbose,
    };

    run_migrate(&rules, &options, writer)?;
    Ok(0)
}
