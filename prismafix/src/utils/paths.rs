//! Path helpers: display formatting, folder exclusion and source discovery.

use crate::constants::DEFAULT_EXCLUDE_FOLDERS;
use std::path::{Path, PathBuf};

/// Path as printed in `Fixed:` notices and verbose logs.
///
/// Separators become `/` and a leading `./` is dropped, so the same tree
/// prints identically on every platform.
///
/// ```
/// use std::path::Path;
/// use prismafix::utils::normalize_display_path;
///
/// assert_eq!(normalize_display_path(Path::new(".\\src\\app\\api\\route.ts")), "src/app/api/route.ts");
/// assert_eq!(normalize_display_path(Path::new("./src/app/api/route.ts")), "src/app/api/route.ts");
/// ```
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let raw = path.to_string_lossy();
    let slashed = raw.trim_start_matches(r"\\?\").replace('\\', "/");
    if let Some(rest) = slashed.strip_prefix("./") {
        return rest.to_owned();
    }
    slashed
}

/// Whether a directory name is in the exclusion list.
///
/// `*.generated` style entries match by suffix; everything else must match
/// the whole name, so `dist` prunes `dist/` but not `distribution/`.
#[must_use]
pub fn is_excluded(name: &str, excludes: &[String]) -> bool {
    excludes.iter().any(|exclude| match exclude.strip_prefix('*') {
        Some(suffix) => suffix.starts_with('.') && name.ends_with(suffix),
        None => name == exclude,
    })
}

/// Options controlling source file discovery.
#[derive(Debug, Clone, Default)]
pub struct DiscoverOptions {
    /// Extensions to keep, without the leading dot (`"ts"`).
    pub extensions: Vec<String>,
    /// Directory names pruned during traversal, on top of the defaults.
    pub exclude_folders: Vec<String>,
    /// Honour `.gitignore`, `.git/info/exclude` and the global gitignore.
    pub respect_gitignore: bool,
    /// Print walk errors to stderr.
    pub verbose: bool,
}

/// Collects files under `root` whose extension is in `options.extensions`.
///
/// Hidden entries are skipped. Excluded directories are pruned at traversal
/// time so nothing below them is visited. Symlinks are followed into files
/// and directories. A missing root yields an empty list.
#[must_use]
pub fn collect_source_files(root: &Path, options: &DiscoverOptions) -> Vec<PathBuf> {
    use ignore::WalkBuilder;

    let mut all_excludes: Vec<String> = DEFAULT_EXCLUDE_FOLDERS()
        .iter()
        .map(|&s| s.to_owned())
        .collect();
    all_excludes.extend(options.exclude_folders.iter().cloned());

    let root_for_filter = root.to_path_buf();

    let walker = WalkBuilder::new(root)
        .hidden(true)
        .follow_links(true)
        .ignore(false)
        .parents(options.respect_gitignore)
        .git_ignore(options.respect_gitignore)
        .git_global(options.respect_gitignore)
        .git_exclude(options.respect_gitignore)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(move |entry| {
            if entry.path() == root_for_filter {
                return true;
            }

            // files are filtered by extension below
            if !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }

            if let Some(name) = entry.file_name().to_str() {
                if is_excluded(name, &all_excludes) {
                    return false;
                }
            }

            true
        })
        .build();

    let mut files = Vec::new();

    for result in walker {
        match result {
            Ok(entry) => {
                if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                let path = entry.path();
                let matches = path.extension().is_some_and(|ext| {
                    options.extensions.iter().any(|wanted| ext == wanted.as_str())
                });
                if matches {
                    files.push(path.to_path_buf());
                }
            }
            Err(e) => {
                if options.verbose {
                    eprintln!("Walk error: {e}");
                }
            }
        }
    }

    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn ts_options() -> DiscoverOptions {
        DiscoverOptions {
            extensions: vec!["ts".to_owned()],
            ..DiscoverOptions::default()
        }
    }

    #[test]
    fn test_collect_filters_by_extension_recursively() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("orders/[id]"))?;
        fs::write(root.join("route.ts"), "")?;
        fs::write(root.join("orders/route.ts"), "")?;
        fs::write(root.join("orders/[id]/route.ts"), "")?;
        fs::write(root.join("orders/page.tsx"), "")?;
        fs::write(root.join("orders/notes.md"), "")?;
        fs::write(root.join("orders/types.d.ts"), "")?;

        let files = collect_source_files(root, &ts_options());
        let mut names: Vec<String> = files
            .iter()
            .map(|p| normalize_display_path(p.strip_prefix(root).unwrap_or(p)))
            .collect();
        names.sort();

        assert_eq!(
            names,
            vec![
                "orders/[id]/route.ts",
                "orders/route.ts",
                "orders/types.d.ts",
                "route.ts",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_collect_skips_excluded_and_hidden() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let root = temp.path();

        fs::create_dir_all(root.join("node_modules/pkg"))?;
        fs::write(root.join("node_modules/pkg/index.ts"), "")?;
        fs::create_dir_all(root.join(".cache"))?;
        fs::write(root.join(".cache/x.ts"), "")?;
        fs::create_dir_all(root.join("generated"))?;
        fs::write(root.join("generated/client.ts"), "")?;
        fs::write(root.join("keep.ts"), "")?;

        let options = DiscoverOptions {
            exclude_folders: vec!["generated".to_owned()],
            ..ts_options()
        };
        let files = collect_source_files(root, &options);

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("keep.ts"));
        Ok(())
    }

    #[test]
    fn test_collect_multiple_extensions() -> anyhow::Result<()> {
        let temp = tempdir()?;
        fs::write(temp.path().join("a.ts"), "")?;
        fs::write(temp.path().join("b.tsx"), "")?;
        fs::write(temp.path().join("c.js"), "")?;

        let options = DiscoverOptions {
            extensions: vec!["ts".to_owned(), "tsx".to_owned()],
            ..DiscoverOptions::default()
        };
        assert_eq!(collect_source_files(temp.path(), &options).len(), 2);
        Ok(())
    }

    #[test]
    fn test_collect_missing_root_is_empty() {
        let files = collect_source_files(Path::new("definitely/not/here"), &ts_options());
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_empty_root() -> anyhow::Result<()> {
        let temp = tempdir()?;
        assert!(collect_source_files(temp.path(), &ts_options()).is_empty());
        Ok(())
    }

    #[test]
    fn test_is_excluded_wildcard() {
        let excludes = vec!["*.generated".to_owned(), "dist".to_owned()];
        assert!(is_excluded("api.generated", &excludes));
        assert!(is_excluded("dist", &excludes));
        assert!(!is_excluded("distribution", &excludes));
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_follows_symlinks() -> anyhow::Result<()> {
        use std::os::unix::fs::symlink;

        let temp = tempdir()?;
        let real = temp.path().join("real");
        let api = temp.path().join("api");
        fs::create_dir_all(real.join("orders"))?;
        fs::create_dir_all(&api)?;
        fs::write(real.join("target.ts"), "")?;
        fs::write(real.join("orders/route.ts"), "")?;
        symlink(real.join("target.ts"), api.join("route.ts"))?;
        symlink(real.join("orders"), api.join("orders"))?;

        let files = collect_source_files(&api, &ts_options());
        let mut names: Vec<String> = files
            .iter()
            .map(|p| normalize_display_path(p.strip_prefix(&api).unwrap_or(p)))
            .collect();
        names.sort();

        assert_eq!(names, vec!["orders/route.ts", "route.ts"]);
        Ok(())
    }

    #[test]
    fn test_display_path_keeps_relative_segments() {
        assert_eq!(
            normalize_display_path(Path::new("src/app/api/[id]/route.ts")),
            "src/app/api/[id]/route.ts"
        );
        assert_eq!(
            normalize_display_path(Path::new("./../web/route.ts")),
            "../web/route.ts"
        );
    }
}
