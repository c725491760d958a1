//! Site layout and chapter discovery module
//!
//! This module handles the rendered site on disk:
//! - Loading `codebox.toml` from the site root
//! - Resolving the source and output directories
//! - Listing the chapter documents to extract

mod chapter;
mod config;

pub use chapter::{chapter_name, ChapterDocument};
pub use config::{SiteConfig, CONFIG_FILE};

use crate::error::{ExtractError, Result};
use std::path::{Path, PathBuf};

/// A rendered textbook site
#[derive(Debug, Clone)]
pub struct Site {
    /// Path to the site root
    root: PathBuf,
    /// Site configuration
    config: SiteConfig,
}

impl Site {
    /// Open the site at the given path, loading its configuration
    pub fn open<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let root = path.as_ref().to_path_buf();
        let config = SiteConfig::load_or_default(&root)?;
        Ok(Self { root, config })
    }

    /// Create a site with an explicit configuration
    pub fn with_config<P: AsRef<Path>>(path: P, config: SiteConfig) -> Self {
        Self {
            root: path.as_ref().to_path_buf(),
            config,
        }
    }

    /// Get the site root path
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the site configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the site configuration for command-line overrides
    pub fn config_mut(&mut self) -> &mut SiteConfig {
        &mut self.config
    }

    /// Directory holding the rendered chapters
    pub fn source_dir(&self) -> PathBuf {
        self.root.join(&self.config.source_dir)
    }

    /// Directory receiving the extracted scripts
    pub fn output_root(&self) -> PathBuf {
        self.root.join(&self.config.output_root)
    }

    /// List chapter documents directly under the source directory, sorted by name
    pub fn chapters(&self) -> Result<Vec<ChapterDocument>> {
        let source_dir = self.source_dir();

        let metadata = std::fs::metadata(&source_dir)
            .map_err(|e| ExtractError::source_access(&source_dir, e))?;
        if !metadata.is_dir() {
            return Err(ExtractError::source_access(
                &source_dir,
                std::io::Error::other("not a directory"),
            ));
        }

        let mut chapters = Vec::new();

        for entry in walkdir::WalkDir::new(&source_dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
        {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(source_dir.as_path()).to_path_buf();
                ExtractError::source_access(path, e.into())
            })?;

            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if !self.config.is_document(path) {
                tracing::debug!("Skipping non-document {:?}", path);
                continue;
            }

            match ChapterDocument::from_path(path) {
                Some(chapter) => chapters.push(chapter),
                None => tracing::debug!("Skipping hidden file {:?}", path),
            }
        }

        chapters.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));

        Ok(chapters)
    }
}
