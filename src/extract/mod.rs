//! Code block extraction module
//!
//! This module handles turning rendered chapters into scripts:
//! - Finding `<pre><code>` blocks in HTML (using html5ever)
//! - Deriving a script name from each block's leading comment
//! - Writing every block to its chapter's output directory

pub mod html;
pub mod label;
mod runner;

pub use html::code_blocks;
pub use label::{raw_label, sanitize_label, script_file_name};
pub use runner::{ChapterReport, ExtractReport, ExtractedScript, Extractor};

use sha2::{Digest, Sha256};

/// One embedded code sample and its position within its chapter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    /// 1-based position in document order
    pub ordinal: usize,
    /// Inner text, exactly as it will be written
    pub text: String,
}

/// Compute a stable hash for content
pub fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}
