//! Configuration types for claimparse.
//!
//! [`Config::load`] layers, in order: the embedded defaults, a TOML file
//! (explicit path, or `$XDG_CONFIG_HOME/claimparse/config.toml` when present),
//! and `CLAIMPARSE_*` environment variables (`__` separates sections, e.g.
//! `CLAIMPARSE_EXTRACT__MIN_LINE_LENGTH=20`). [`Config::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).
//!
//! A user file that declares `[[forms]]` replaces the built-in form list.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::schema::FieldRole;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[extract]
min_line_length = 15

[sheet]
name = "Лист1"

[[forms]]
id          = "5e8b1f3a9c2d4e0017a1c001"
district_id = 1
district    = "Центральный"
fields = [
    { id = "1",  role = "activity" },
    { id = "2",  role = "title" },
    { id = "3",  role = "address" },
    { id = "4",  role = "inn" },
    { id = "5",  role = "head_fio" },
    { id = "6",  role = "phone" },
    { id = "7",  role = "email" },
    { id = "8",  role = "cars" },
    { id = "9",  role = "agreement" },
    { id = "10", role = "reliability" },
]

[[forms]]
id          = "5e8b1f3a9c2d4e0017a1c002"
district_id = 2
district    = "Северный"
fields = [
    { id = "11", role = "title" },
    { id = "12", role = "inn" },
    { id = "13", role = "activity" },
    { id = "14", role = "address" },
    { id = "15", role = "head_fio" },
    { id = "16", role = "phone" },
    { id = "17", role = "email" },
    { id = "18", role = "cars" },
    { id = "19", role = "agreement" },
    { id = "20", role = "reliability" },
]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extract: ExtractConfig,
    #[serde(default)]
    pub sheet: SheetConfig,
    #[serde(default)]
    pub forms: Vec<FormConfig>,
}

/// `[extract]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    /// Car-list lines shorter than this (in characters) are skipped.
    #[serde(default = "default_min_line_length")]
    pub min_line_length: usize,
}

fn default_min_line_length() -> usize { crate::plate::DEFAULT_MIN_LINE_LENGTH }

impl Default for ExtractConfig {
    fn default() -> Self {
        Self { min_line_length: default_min_line_length() }
    }
}

/// `[sheet]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetConfig {
    /// Worksheet holding the application form.
    #[serde(default = "default_sheet_name")]
    pub name: String,
}

fn default_sheet_name() -> String { "Лист1".to_string() }

impl Default for SheetConfig {
    fn default() -> Self {
        Self { name: default_sheet_name() }
    }
}

/// One `[[forms]]` entry: a form identifier, its district, and the role of
/// each known field.
#[derive(Debug, Clone, Deserialize)]
pub struct FormConfig {
    pub id: String,
    pub district_id: i64,
    pub district: String,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FieldConfig {
    pub id: String,
    pub role: FieldRole,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist; the
    /// default location is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("CLAIMPARSE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a TOML document layered on top of the built-in defaults.
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.extract.min_line_length == 0 {
            return Err(ConfigError::ZeroLineLength);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/claimparse/config.toml`, falling back to `~/.config`.
pub fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("claimparse")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
