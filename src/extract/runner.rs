//! Extraction run: chapters in, scripts out

use super::{code_blocks, content_hash, raw_label, sanitize_label, script_file_name, CodeBlock};
use crate::error::{ExtractError, Result};
use crate::site::{ChapterDocument, Site};
use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// A script derived from one code block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedScript {
    /// 1-based position of the block in its chapter
    pub ordinal: usize,
    /// Sanitized label
    pub label: String,
    /// File name inside the chapter's output directory
    pub file_name: String,
    /// SHA-256 of the script content
    pub hash: String,
    /// Content length in bytes
    pub bytes: usize,
}

/// Scripts produced for one chapter
#[derive(Debug, Clone, Serialize)]
pub struct ChapterReport {
    pub name: String,
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub scripts: Vec<ExtractedScript>,
}

/// Outcome of a full run (or of a dry run)
#[derive(Debug, Clone, Serialize)]
pub struct ExtractReport {
    pub source_dir: PathBuf,
    pub output_root: PathBuf,
    /// Whether the output root was removed first
    pub cleaned: bool,
    /// False for a dry run
    pub written: bool,
    pub chapters: Vec<ChapterReport>,
}

impl ExtractReport {
    /// Total number of scripts across all chapters
    pub fn total_scripts(&self) -> usize {
        self.chapters.iter().map(|c| c.scripts.len()).sum()
    }
}

/// A chapter whose blocks are parsed and named but not yet written
struct PlannedChapter {
    report: ChapterReport,
    blocks: Vec<CodeBlock>,
}

/// Extracts every chapter of a site into per-chapter script directories
pub struct Extractor<'a> {
    site: &'a Site,
}

impl<'a> Extractor<'a> {
    /// Create an extractor for the given site
    pub fn new(site: &'a Site) -> Self {
        Self { site }
    }

    /// Parse every chapter and name its scripts without writing anything
    pub fn plan(&self) -> Result<ExtractReport> {
        let chapters = self.plan_chapters()?;
        Ok(self.report(chapters.into_iter().map(|c| c.report).collect(), false))
    }

    /// Replace the output tree with one script per code block.
    ///
    /// Every chapter is parsed and named before the output root is touched,
    /// so a malformed chapter leaves the previous output in place.
    pub fn run(&self) -> Result<ExtractReport> {
        let chapters = self.plan_chapters()?;
        let output_root = self.site.output_root();

        if self.site.config().clean && output_root.exists() {
            self.check_clean_target(&output_root)?;
            tracing::info!("Removing previous output {:?}", output_root);
            std::fs::remove_dir_all(&output_root)
                .map_err(|e| ExtractError::write(&output_root, e))?;
        }

        std::fs::create_dir_all(&output_root)
            .map_err(|e| ExtractError::write(&output_root, e))?;

        let mut reports = Vec::with_capacity(chapters.len());
        for chapter in chapters {
            write_chapter(&chapter)?;
            tracing::info!(
                "Extracted {} script(s) from chapter '{}'",
                chapter.report.scripts.len(),
                chapter.report.name
            );
            reports.push(chapter.report);
        }

        Ok(self.report(reports, true))
    }

    /// The output root must not hold the chapters or the site itself
    fn check_clean_target(&self, output_root: &Path) -> Result<()> {
        let canonical = |path: &Path| {
            path.canonicalize()
                .map_err(|e| ExtractError::source_access(path, e))
        };

        let output = canonical(output_root)?;
        let source = canonical(self.site.source_dir().as_path())?;
        let root = canonical(self.site.root())?;

        let reason = if source.starts_with(&output) {
            Some("it contains the source directory")
        } else if root.starts_with(&output) {
            Some("it contains the site root")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(ExtractError::UnsafeClean {
                path: output_root.to_path_buf(),
                reason,
            }),
            None => Ok(()),
        }
    }

    fn plan_chapters(&self) -> Result<Vec<PlannedChapter>> {
        let documents = self.site.chapters()?;
        tracing::debug!(
            "Found {} chapter document(s) in {:?}",
            documents.len(),
            self.site.source_dir()
        );

        let mut seen: HashMap<&str, &Path> = HashMap::new();
        for document in &documents {
            if let Some(first) = seen.insert(&document.name, &document.path) {
                return Err(ExtractError::DuplicateChapter {
                    chapter: document.name.clone(),
                    first: first.to_path_buf(),
                    second: document.path.clone(),
                });
            }
        }

        documents
            .iter()
            .map(|document| self.plan_chapter(document))
            .collect()
    }

    fn plan_chapter(&self, document: &ChapterDocument) -> Result<PlannedChapter> {
        let markup = document.read()?;
        let blocks = code_blocks(&markup);

        let scripts = blocks
            .iter()
            .map(|block| self.name_script(&document.name, block))
            .collect::<Result<Vec<_>>>()?;

        Ok(PlannedChapter {
            report: ChapterReport {
                name: document.name.clone(),
                source: document.path.clone(),
                output_dir: self.site.output_root().join(&document.name),
                scripts,
            },
            blocks,
        })
    }

    fn name_script(&self, chapter: &str, block: &CodeBlock) -> Result<ExtractedScript> {
        let raw = raw_label(&block.text).ok_or_else(|| ExtractError::MalformedBlock {
            chapter: chapter.to_string(),
            ordinal: block.ordinal,
            found: block.text.chars().take(40).collect(),
        })?;

        let label = sanitize_label(raw);
        if label.is_empty() {
            tracing::warn!(
                "Chapter '{}', block {}: label {:?} has no usable characters",
                chapter,
                block.ordinal,
                raw
            );
        }

        Ok(ExtractedScript {
            ordinal: block.ordinal,
            file_name: script_file_name(
                block.ordinal,
                &label,
                &self.site.config().script_extension,
            ),
            label,
            hash: content_hash(&block.text),
            bytes: block.text.len(),
        })
    }

    fn report(&self, chapters: Vec<ChapterReport>, written: bool) -> ExtractReport {
        ExtractReport {
            source_dir: self.site.source_dir(),
            output_root: self.site.output_root(),
            cleaned: written && self.site.config().clean,
            written,
            chapters,
        }
    }
}

fn write_chapter(chapter: &PlannedChapter) -> Result<()> {
    let dir = &chapter.report.output_dir;
    if dir.exists() {
        return Err(ExtractError::StaleOutput { path: dir.clone() });
    }
    std::fs::create_dir(dir).map_err(|e| ExtractError::write(dir, e))?;

    for (script, block) in chapter.report.scripts.iter().zip(&chapter.blocks) {
        let path = dir.join(&script.file_name);
        std::fs::write(&path, block.text.as_bytes()).map_err(|e| ExtractError::write(&path, e))?;
        tracing::debug!("Wrote {:?} ({} bytes)", path, script.bytes);
    }

    Ok(())
}
