//! Commands module - CLI command implementations.

mod migrate;

pub use migrate::{fix_file, run_migrate, FileFix, MigrateOptions, RunReport};
