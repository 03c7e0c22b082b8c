//! Configuration for tokenscope.
//!
//! A config file controls which files a folder scan picks up and how names
//! are reported. Every field is optional; an absent file means defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::finder::ClassNameFinder;
use crate::token::TokenProp;

/// Config file names looked up in the working directory, in order.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["tokenscope.yaml", ".tokenscope.yaml"];

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// File extensions to scan, without the dot (default: `php`)
    #[serde(default)]
    pub extensions: Vec<String>,
    /// Glob patterns for paths to exclude from folder scans (e.g., "**/vendor/**")
    #[serde(default)]
    pub excluded_paths: Vec<String>,
    /// Whether to skip hidden files and directories (default: true)
    #[serde(default)]
    pub skip_hidden: Option<bool>,
    /// Report interface names alongside class names
    #[serde(default)]
    pub include_interfaces: bool,
    /// Report trait names alongside class names
    #[serde(default)]
    pub include_traits: bool,
    /// Qualify names with the namespace and imports (default: true)
    #[serde(default)]
    pub full_names: Option<bool>,
    /// Sort imported names (default: true)
    #[serde(default)]
    pub sort_uses: Option<bool>,
    /// Token predicates trimmed from both ends of a token dump,
    /// e.g. `T_WHITESPACE` or `T_COMMENT|;` (default: whitespace)
    #[serde(default)]
    pub trim_chars: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        Ok(config)
    }

    /// Load the config at `explicit`, or the first default file found in
    /// `dir`, or the defaults. Returns the path that was read, if any.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> anyhow::Result<(Self, Option<PathBuf>)> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => discover(dir),
        };
        let config = match &path {
            Some(p) => Config::parse_file(p)?,
            None => Config::default(),
        };
        validate(&config)?;
        Ok((config, path))
    }

    /// Extensions to scan, lowercased and without a leading dot.
    pub fn extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            return vec!["php".to_string()];
        }
        self.extensions
            .iter()
            .map(|e| e.trim_start_matches('.').to_ascii_lowercase())
            .collect()
    }

    /// Whether `path` has one of the configured extensions (case-insensitive).
    pub fn has_scanned_extension(&self, path: &Path) -> bool {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => e.to_ascii_lowercase(),
            None => return false,
        };
        self.extensions().iter().any(|e| *e == ext)
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    /// Uses globset for matching, which supports `**` for recursive directory matching.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                let matcher = glob.compile_matcher();
                if matcher.is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }

    /// Returns whether hidden entries are skipped (defaults to true).
    pub fn should_skip_hidden(&self) -> bool {
        self.skip_hidden.unwrap_or(true)
    }

    /// Returns whether names are qualified (defaults to true).
    pub fn use_full_names(&self) -> bool {
        self.full_names.unwrap_or(true)
    }

    /// Returns whether imports are sorted (defaults to true).
    pub fn should_sort_uses(&self) -> bool {
        self.sort_uses.unwrap_or(true)
    }

    /// Class name finder honouring the include options.
    pub fn class_name_finder(&self) -> ClassNameFinder {
        ClassNameFinder::new()
            .include_interfaces(self.include_interfaces)
            .include_traits(self.include_traits)
    }

    /// Predicate built from `trim_chars`, `None` for the default.
    pub fn trim_prop(&self) -> anyhow::Result<Option<TokenProp>> {
        let mut props = self
            .trim_chars
            .iter()
            .map(|s| TokenProp::parse(s).with_context(|| format!("invalid trim_chars entry {:?}", s)))
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(match props.len() {
            0 => None,
            1 => props.pop(),
            _ => Some(TokenProp::any_of(props)?),
        })
    }
}

/// Find a config file in `dir`.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Validate a config for correctness.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    for ext in &config.extensions {
        if ext.trim_start_matches('.').is_empty() {
            anyhow::bail!("invalid extension {:?}", ext);
        }
    }

    // Validate excluded_paths glob patterns compile
    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    config.trim_prop()?;
    Ok(())
}
