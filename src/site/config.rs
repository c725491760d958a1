//! Site configuration for codebox

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the configuration file at the site root
pub const CONFIG_FILE: &str = "codebox.toml";

/// Configuration for a site whose chapters are extracted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory holding the rendered chapters, relative to the site root
    #[serde(default = "default_source_dir")]
    pub source_dir: PathBuf,

    /// Directory receiving one subdirectory of scripts per chapter
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Remove the output root before writing
    #[serde(default = "default_clean")]
    pub clean: bool,

    /// Extension given to every extracted script
    #[serde(default = "default_script_extension")]
    pub script_extension: String,

    /// Extensions of files treated as chapter documents (empty = every file)
    #[serde(default = "default_document_extensions")]
    pub document_extensions: Vec<String>,
}

fn default_source_dir() -> PathBuf {
    PathBuf::from("_site/chapters")
}

fn default_output_root() -> PathBuf {
    PathBuf::from("_codeboxes")
}

fn default_clean() -> bool {
    true
}

fn default_script_extension() -> String {
    "wppl".to_string()
}

fn default_document_extensions() -> Vec<String> {
    vec!["html".to_string()]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            source_dir: default_source_dir(),
            output_root: default_output_root(),
            clean: default_clean(),
            script_extension: default_script_extension(),
            document_extensions: default_document_extensions(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from the site root or return defaults
    pub fn load_or_default(site_root: &Path) -> Result<Self> {
        let config_path = site_root.join(CONFIG_FILE);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            let config: SiteConfig = toml::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to the site root
    pub fn save(&self, site_root: &Path) -> Result<()> {
        let config_path = site_root.join(CONFIG_FILE);
        let content =
            toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        std::fs::write(&config_path, content)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Look up a single value by key, formatted for display
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "source_dir" => Some(self.source_dir.display().to_string()),
            "output_root" => Some(self.output_root.display().to_string()),
            "clean" => Some(self.clean.to_string()),
            "script_extension" => Some(self.script_extension.clone()),
            "document_extensions" => Some(self.document_extensions.join(", ")),
            _ => None,
        }
    }

    /// Check whether a file is a chapter document by its extension
    pub fn is_document(&self, path: &Path) -> bool {
        if self.document_extensions.is_empty() {
            return true;
        }

        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.document_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}
