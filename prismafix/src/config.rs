use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::constants::{CONFIG_FILENAME, PACKAGE_JSON_FILENAME};
use crate::rules::{RuleError, RuleTables};

#[derive(Debug, Deserialize, Default, Clone)]
/// Top-level configuration struct.
pub struct Config {
    #[serde(default)]
    /// The main configuration section for prismafix.
    pub prismafix: PrismafixConfig,
    /// The path to the configuration file this was loaded from.
    /// `None` if using defaults or programmatic config.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
    /// Config files that were found but could not be parsed.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
/// Configuration options for prismafix.
pub struct PrismafixConfig {
    /// Directory searched for source files.
    pub root: Option<PathBuf>,
    /// File extensions to rewrite, without the dot.
    pub extensions: Option<Vec<String>>,
    /// Extra folders to skip during traversal.
    pub exclude_folders: Option<Vec<String>>,
    /// Whether to skip files ignored by git.
    pub respect_gitignore: Option<bool>,
    /// Module specifier whose enum imports are stripped.
    pub module: Option<String>,
    /// Type name inserted by annotation and fallback rules.
    pub fallback_type: Option<String>,
    /// Additional enums, mapped to their value names.
    #[serde(default)]
    pub extra_enum_values: BTreeMap<String, Vec<String>>,
}

impl PrismafixConfig {
    /// Lookup tables for the rule groups: built-in tables plus overrides.
    pub fn rule_tables(&self) -> Result<RuleTables, RuleError> {
        let mut tables = RuleTables::default();
        if let Some(module) = &self.module {
            tables.module.clone_from(module);
        }
        if let Some(fallback) = &self.fallback_type {
            tables.fallback_type.clone_from(fallback);
        }
        for (name, values) in &self.extra_enum_values {
            tables.add_enum(name, values)?;
        }
        Ok(tables)
    }
}

/// The `"prismafix"` section of a `package.json`, or `None` when the
/// manifest has no such key.
fn parse_package_json(content: &str) -> Result<Option<PrismafixConfig>, serde_json::Error> {
    let mut manifest: serde_json::Value = serde_json::from_str(content)?;
    match manifest.get_mut("prismafix") {
        Some(section) => serde_json::from_value(section.take()).map(Some),
        None => Ok(None),
    }
}

impl Config {
    /// Loads configuration from default locations (.prismafix.toml or package.json),
    /// starting in the current directory.
    #[must_use]
    pub fn load() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::load_from_path(&cwd)
    }

    /// Loads configuration starting from a specific path and traversing up.
    ///
    /// `.prismafix.toml` wins over `package.json` in the same directory. A
    /// `package.json` without a `"prismafix"` key is not a config file. Files
    /// that fail to parse are recorded in `warnings` and the walk goes on.
    #[must_use]
    pub fn load_from_path(path: &Path) -> Self {
        let mut current = path.to_path_buf();
        if current.is_file() {
            current.pop();
        }
        let mut warnings = Vec::new();

        loop {
            let prismafix_toml = current.join(CONFIG_FILENAME);
            if prismafix_toml.exists() {
                match fs::read_to_string(&prismafix_toml)
                    .map_err(|e| e.to_string())
                    .and_then(|content| {
                        toml::from_str::<Config>(&content).map_err(|e| e.to_string())
                    }) {
                    Ok(mut config) => {
                        config.config_file_path = Some(prismafix_toml);
                        config.warnings = warnings;
                        return config;
                    }
                    Err(e) => warnings.push(format!(
                        "Ignoring {}: {}",
                        prismafix_toml.display(),
                        e.trim()
                    )),
                }
            }

            let package_json = current.join(PACKAGE_JSON_FILENAME);
            if package_json.exists() {
                match fs::read_to_string(&package_json)
                    .map_err(|e| e.to_string())
                    .and_then(|content| parse_package_json(&content).map_err(|e| e.to_string()))
                {
                    Ok(Some(prismafix)) => {
                        return Config {
                            prismafix,
                            config_file_path: Some(package_json),
                            warnings,
                        };
                    }
                    Ok(None) => {}
                    Err(e) => warnings.push(format!(
                        "Ignoring {}: {}",
                        package_json.display(),
                        e.trim()
                    )),
                }
            }

            if !current.pop() {
                break;
            }
        }

        Config {
            warnings,
            ..Config::default()
        }
    }

    /// Loads an explicitly named configuration file.
    ///
    /// Files named `package.json` are read as JSON, anything else as TOML.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let is_package_json = path
            .file_name()
            .is_some_and(|name| name == PACKAGE_JSON_FILENAME);
        let mut config = if is_package_json {
            let prismafix = parse_package_json(&content)
                .with_context(|| format!("Invalid config in {}", path.display()))?
                .with_context(|| format!("No \"prismafix\" section in {}", path.display()))?;
            Config {
                prismafix,
                ..Config::default()
            }
        } else {
            toml::from_str::<Config>(&content)
                .with_context(|| format!("Invalid config in {}", path.display()))?
        };
        config.config_file_path = Some(path.to_path_buf());
        Ok(config)
    }
}
