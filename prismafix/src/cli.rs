use crate::rules::FixCategory;
use clap::{Args, Parser};
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.prismafix.toml):
  Create this file in your project root to set defaults.
  A \"prismafix\" object in package.json is read when no .prismafix.toml exists.

  [prismafix]
  root = \"src/app/api\"           # Search root
  extensions = [\"ts\"]            # File extensions to rewrite
  exclude_folders = [\"generated\"] # Extra folders to skip
  respect_gitignore = false       # Skip files ignored by git
  module = \"@prisma/client\"      # Module whose enum imports are stripped
  fallback_type = \"any\"          # Inserted type annotation

  [prismafix.extra_enum_values]
  ListingType = [\"FIXED\", \"AUCTION\"]
";

/// Options for output verbosity and write behaviour.
#[derive(Args, Debug, Default, Clone)]
pub struct OutputOptions {
    /// Report what would change without writing any file.
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose output for debugging (config, root, per-rule edit counts).
    #[arg(short, long)]
    pub verbose: bool,
}

/// Command line interface configuration using `clap`.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "prismafix - Replace Prisma enum imports with string literals and annotate untyped callbacks",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Directory to rewrite (defaults to the configured root, `src/app/api`).
    pub path: Option<PathBuf>,

    /// Use this configuration file instead of searching for one.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// File extensions to rewrite, without the dot (repeatable; overrides config).
    #[arg(long = "ext")]
    pub extensions: Vec<String>,

    /// Folders to skip during traversal (added to config and defaults).
    #[arg(long = "exclude-folder", alias = "exclude")]
    pub exclude_folders: Vec<String>,

    /// Skip files ignored by git.
    #[arg(long)]
    pub respect_gitignore: bool,

    /// Run a single rule group.
    #[arg(long, value_enum)]
    pub only: Option<FixCategory>,

    /// Output options.
    #[command(flatten)]
    pub output: OutputOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["prismafix"]).unwrap();
        assert!(cli.path.is_none());
        assert!(cli.extensions.is_empty());
        assert!(cli.only.is_none());
        assert!(!cli.output.dry_run);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "prismafix",
            "app/api",
            "--ext",
            "ts",
            "--ext",
            "tsx",
            "--exclude-folder",
            "generated",
            "--only",
            "types",
            "--dry-run",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("app/api")));
        assert_eq!(cli.extensions, vec!["ts", "tsx"]);
        assert_eq!(cli.exclude_folders, vec!["generated"]);
        assert_eq!(cli.only, Some(FixCategory::Types));
        assert!(cli.output.dry_run);
        assert!(cli.output.verbose);
    }

    #[test]
    fn test_rejects_unknown_group() {
        assert!(Cli::try_parse_from(["prismafix", "--only", "all"]).is_err());
    }
}
