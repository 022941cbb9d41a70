//! The codemod run: discover files, apply each rule group, report.

use crate::output;
use crate::rules::{FixCategory, Rewrite, RuleGroup, RuleSet};
use crate::utils::{collect_source_files, normalize_display_path, DiscoverOptions};

use anyhow::{Context, Result};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Options for a codemod run
#[derive(Debug, Clone)]
pub struct MigrateOptions {
    /// Directory searched for source files
    pub root: PathBuf,
    /// Discovery filters
    pub discover: DiscoverOptions,
    /// Rule groups to run, in order
    pub categories: Vec<FixCategory>,
    /// Compute changes without writing
    pub dry_run: bool,
    /// Log per-rule edit counts to stderr
    pub verbose: bool,
}

impl Default for MigrateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from(crate::constants::DEFAULT_ROOT),
            discover: DiscoverOptions {
                extensions: crate::constants::DEFAULT_EXTENSIONS
                    .iter()
                    .map(|&s| s.to_owned())
                    .collect(),
                ..DiscoverOptions::default()
            },
            categories: vec![FixCategory::Enums, FixCategory::Types],
            dry_run: false,
            verbose: false,
        }
    }
}

/// One file changed by one rule group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFix {
    /// File that was rewritten
    pub file: PathBuf,
    /// Rule group that changed it
    pub category: FixCategory,
    /// Number of edits applied
    pub edits: usize,
}

/// Totals for a run
#[derive(Debug, Default, Clone)]
pub struct RunReport {
    /// Files discovered
    pub files_scanned: usize,
    /// Files changed by the enum group
    pub enum_files: usize,
    /// Files changed by the annotation group
    pub type_files: usize,
    /// Every change, in processing order
    pub fixes: Vec<FileFix>,
}

impl RunReport {
    fn record(&mut self, category: FixCategory, file: &Path, edits: usize) {
        match category {
            FixCategory::Enums => self.enum_files += 1,
            FixCategory::Types => self.type_files += 1,
        }
        self.fixes.push(FileFix {
            file: file.to_path_buf(),
            category,
            edits,
        });
    }
}

fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn apply_group(group: &RuleGroup, source: &str, path: &Path) -> Result<Option<Rewrite>> {
    group.apply(source).with_context(|| {
        format!(
            "Failed to apply {} rules to {}",
            group.category().tag(),
            path.display()
        )
    })
}

/// Run one rule group over one file, overwriting it only if it changed.
///
/// # Errors
///
/// Returns an error if the file cannot be read (including invalid UTF-8)
/// or written.
pub fn fix_file(path: &Path, group: &RuleGroup) -> Result<Option<Rewrite>> {
    let source = read_source(path)?;
    let rewrite = apply_group(group, &source, path)?;
    if let Some(rewrite) = &rewrite {
        fs::write(path, &rewrite.content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }
    Ok(rewrite)
}

/// Rewrite every matching file under `options.root`.
///
/// Files are processed one at a time. Any read or write error aborts the
/// run; files already rewritten stay rewritten.
///
/// # Errors
///
/// Returns an error if file I/O fails or writing the report fails.
pub fn run_migrate<W: Write>(
    rules: &RuleSet,
    options: &MigrateOptions,
    mut writer: W,
) -> Result<RunReport> {
    if options.verbose {
        eprintln!(
            "[VERBOSE] Search root: {}",
            normalize_display_path(&options.root)
        );
        eprintln!("[VERBOSE] Extensions: {:?}", options.discover.extensions);
        eprintln!("[VERBOSE] Rule groups: {:?}", options.categories);
    }

    let files = collect_source_files(&options.root, &options.discover);
    let mut report = RunReport {
        files_scanned: files.len(),
        ..RunReport::default()
    };

    if options.dry_run {
        output::print_dry_run_notice(&mut writer)?;
    }
    output::print_processing_header(&mut writer, files.len())?;

    for path in &files {
        // Dry runs thread the buffer between groups instead of re-reading.
        let mut staged: Option<String> = None;

        for &category in &options.categories {
            let group = rules.group(category);

            let rewrite = if options.dry_run {
                let source = match staged.take() {
                    Some(source) => source,
                    None => read_source(path)?,
                };
                let rewrite = apply_group(group, &source, path)?;
                staged = Some(rewrite.as_ref().map_or(source, |r| r.content.clone()));
                rewrite
            } else {
                fix_file(path, group)?
            };

            if let Some(rewrite) = rewrite {
                report.record(category, path, rewrite.edit_count());
                output::print_fix_notice(&mut writer, category, path)?;
                if options.verbose {
                    output::print_verbose_hits(category, path, &rewrite);
                }
            }
        }
    }

    output::print_summary(&mut writer, &report)?;
    Ok(report)
}
