//! Chapter documents discovered under the source directory

use crate::error::{ExtractError, Result};
use std::path::{Path, PathBuf};

/// One rendered chapter page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterDocument {
    /// File name up to the first `.`
    pub name: String,
    /// Full path of the rendered document
    pub path: PathBuf,
}

impl ChapterDocument {
    /// Create a chapter from its document path
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_string_lossy();
        let name = chapter_name(&file_name);
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }

    /// Read the document as UTF-8 markup
    pub fn read(&self) -> Result<String> {
        let bytes = std::fs::read(&self.path)
            .map_err(|e| ExtractError::source_access(&self.path, e))?;

        String::from_utf8(bytes).map_err(|e| ExtractError::Parse {
            chapter: self.name.clone(),
            reason: format!("document is not valid UTF-8 ({})", e.utf8_error()),
        })
    }
}

/// Chapter name of a document: everything before the first `.`
pub fn chapter_name(file_name: &str) -> &str {
    file_name.split('.').next().unwrap_or(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chapter_name() {
        assert_eq!(chapter_name("1-introduction.html"), "1-introduction");
        assert_eq!(chapter_name("3a-mdp.gridworld.html"), "3a-mdp");
        assert_eq!(chapter_name("appendix"), "appendix");
        assert_eq!(chapter_name(".hidden"), "");
    }

    #[test]
    fn test_from_path() {
        let chapter = ChapterDocument::from_path(Path::new("/site/chapters/2-webppl.html")).unwrap();
        assert_eq!(chapter.name, "2-webppl");
        assert!(ChapterDocument::from_path(Path::new("/site/.DS_Store")).is_none());
    }

    #[test]
    fn test_read_rejects_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.html");
        std::fs::write(&path, [0x3c, 0x70, 0x72, 0x65, 0x3e, 0xff, 0xfe]).unwrap();

        let chapter = ChapterDocument::from_path(&path).unwrap();
        let err = chapter.read().unwrap_err();
        assert!(matches!(err, ExtractError::Parse { ref chapter, .. } if chapter == "bad"));
    }

    #[test]
    fn test_read_missing_file() {
        let chapter = ChapterDocument::from_path(Path::new("/definitely/not/here.html")).unwrap();
        assert!(matches!(chapter.read(), Err(ExtractError::SourceAccess { .. })));
    }
}
