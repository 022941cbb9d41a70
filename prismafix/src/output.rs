//! Console report for a codemod run.
//!
//! The per-file notices and the summary block are plain text so they stay
//! grep-able; only the dry-run notice and verbose diagnostics are styled.

use crate::commands::RunReport;
use crate::constants::BANNER_WIDTH;
use crate::rules::{FixCategory, Rewrite};
use crate::utils::normalize_display_path;
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Print the number of files about to be processed.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_processing_header(writer: &mut impl Write, file_count: usize) -> std::io::Result<()> {
    writeln!(writer, "Processing {file_count} files...")?;
    writeln!(writer)?;
    Ok(())
}

/// Print the notice shown once before a dry run.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_dry_run_notice(writer: &mut impl Write) -> std::io::Result<()> {
    writeln!(
        writer,
        "{}",
        "[DRY-RUN] Files that would be rewritten (nothing is written):".yellow()
    )?;
    Ok(())
}

/// Print `[ENUMS] Fixed: <path>` or `[TYPES] Fixed: <path>`.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_fix_notice(
    writer: &mut impl Write,
    category: FixCategory,
    path: &Path,
) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} Fixed: {}",
        category.tag(),
        normalize_display_path(path)
    )
}

/// Print the closing banner with both totals.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_summary(writer: &mut impl Write, report: &RunReport) -> std::io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(writer)?;
    writeln!(writer, "{banner}")?;
    writeln!(
        writer,
        "Total files with enum fixes: {}",
        report.enum_files
    )?;
    writeln!(
        writer,
        "Total files with type fixes: {}",
        report.type_files
    )?;
    writeln!(writer, "{banner}")?;
    Ok(())
}

/// Log which rules fired for one file (verbose mode, stderr).
pub fn print_verbose_hits(category: FixCategory, path: &Path, rewrite: &Rewrite) {
    eprintln!(
        "{} {} {} edit(s) in {}",
        "[VERBOSE]".dimmed(),
        category.tag(),
        rewrite.edit_count(),
        normalize_display_path(path)
    );
    for hit in &rewrite.hits {
        eprintln!("{}   {} x{}", "[VERBOSE]".dimmed(), hit.rule, hit.edits);
    }
}
