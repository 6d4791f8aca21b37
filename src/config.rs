//! Site configuration and run options.
//!
//! Two layers feed a run:
//!
//! - [`SiteConfig`]: site text and link roots, loaded from an optional
//!   `gallery.toml` in the output directory; omitted keys keep stock defaults.
//! - [`Options`]: the per-invocation settings (verbosity, simulate mode,
//!   resolved directories), built once from CLI flags plus the config and
//!   never mutated afterwards.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! images_dir = "../images"   # Full-size renders, relative to the output dir
//! thumbs_dir = "../thumbs"   # Thumbnails, same filenames as the renders
//! title = "Fractal LOOT"
//! info = "All fractals here are FREE to download, ..."
//! remote_root = "https://raw.githubusercontent.com/chronologicaldot/FRACTALLOOT/master"
//! local_root = ".."          # Used instead of remote_root with --sim
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the optional config file, looked up in the output directory.
pub const CONFIG_FILE: &str = "gallery.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `gallery.toml`.
///
/// All fields have defaults; a config file only lists what it overrides.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Directory holding full-size images.
    pub images_dir: String,
    /// Directory holding thumbnails.
    pub thumbs_dir: String,
    /// Text of the title bar on every page.
    pub title: String,
    /// Text of the info bar below the title.
    pub info: String,
    /// Link root for the published site.
    pub remote_root: String,
    /// Link root for local previews (`--sim`).
    pub local_root: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            images_dir: "../images".to_string(),
            thumbs_dir: "../thumbs".to_string(),
            title: "Fractal LOOT".to_string(),
            info: "All fractals here are FREE to download, share, and modify! \
                   Credit is appreciated but not required. \
                   These fractals are created by Nic Anderson."
                .to_string(),
            remote_root: "https://raw.githubusercontent.com/chronologicaldot/FRACTALLOOT/master"
                .to_string(),
            local_root: "..".to_string(),
        }
    }
}

impl SiteConfig {
    /// Validate that paths and roots are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.images_dir.trim().is_empty() {
            return Err(ConfigError::Validation("images_dir must not be empty".into()));
        }
        if self.thumbs_dir.trim().is_empty() {
            return Err(ConfigError::Validation("thumbs_dir must not be empty".into()));
        }
        for (key, root) in [
            ("remote_root", &self.remote_root),
            ("local_root", &self.local_root),
        ] {
            if root.is_empty() {
                return Err(ConfigError::Validation(format!("{key} must not be empty")));
            }
            if root.ends_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{key} must not end with '/'"
                )));
            }
        }
        Ok(())
    }
}

// =============================================================================
// Run options
// =============================================================================

/// Settings for one generation run. Read-only once built.
#[derive(Debug, Clone)]
pub struct Options {
    /// Print discovered files.
    pub verbose: bool,
    /// Use the local link root instead of the remote one.
    pub simulate: bool,
    pub images_dir: PathBuf,
    pub thumbs_dir: PathBuf,
    /// Where `index.html` and the letter pages are written.
    pub output_dir: PathBuf,
}

impl Options {
    /// Build options, resolving the configured directories against `output_dir`.
    ///
    /// Absolute paths in the config are used as-is.
    pub fn resolve(verbose: bool, simulate: bool, output_dir: &Path, config: &SiteConfig) -> Self {
        Self {
            verbose,
            simulate,
            images_dir: output_dir.join(&config.images_dir),
            thumbs_dir: output_dir.join(&config.thumbs_dir),
            output_dir: output_dir.to_path_buf(),
        }
    }

    /// Prefix for every generated link.
    pub fn site_root<'a>(&self, config: &'a SiteConfig) -> &'a str {
        if self.simulate {
            &config.local_root
        } else {
            &config.remote_root
        }
    }
}

// =============================================================================
// Config loading and validation
// =============================================================================

/// Parse and validate config text. `None` means no file: stock defaults.
///
/// The file is flat, so keys it omits simply keep their `#[serde(default)]` value.
pub fn resolve_config(content: Option<&str>) -> Result<SiteConfig, ConfigError> {
    let config = match content {
        Some(text) => toml::from_str::<SiteConfig>(text)?,
        None => SiteConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

/// Load `gallery.toml` from the given directory, falling back to stock defaults.
pub fn load_config(dir: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILE);
    if !config_path.is_file() {
        return resolve_config(None);
    }
    let content = fs::read_to_string(&config_path)?;
    resolve_config(Some(&content))
}

/// Returns a fully-commented stock `gallery.toml`.
///
/// Printed by the `--gen-config` flag.
pub fn stock_config_toml() -> &'static str {
    r##"# Flame Gallery Configuration
# ===========================
# Place this file as gallery.toml in the output directory (the directory
# the site is generated into). All settings are optional; values shown
# are the defaults. Unknown keys cause an error.

# Directory of full-size renders (.png, .jpg, .gif).
# Relative paths resolve against the output directory.
images_dir = "../images"

# Directory of thumbnails. A thumbnail must have exactly the same filename
# as its render.
thumbs_dir = "../thumbs"

# Title bar text shown on every page.
title = "Fractal LOOT"

# Info bar text shown below the title.
info = "All fractals here are FREE to download, share, and modify! Credit is appreciated but not required. These fractals are created by Nic Anderson."

# Prefix for image and parameter links on the published site.
# No trailing slash.
remote_root = "https://raw.githubusercontent.com/chronologicaldot/FRACTALLOOT/master"

# Prefix used instead of remote_root when running with --sim.
local_root = ".."
"##
}
