//! Utilities module for prismafix.

mod paths;

pub use paths::{collect_source_files, is_excluded, normalize_display_path, DiscoverOptions};
