//! codebox - Code block extraction for rendered textbook sites
//!
//! This library scans rendered chapter pages for `<pre><code>` blocks and
//! writes each block out as a standalone script, one directory per chapter.

pub mod cli;
pub mod error;
pub mod extract;
pub mod site;

/// Re-export commonly used types
pub use error::ExtractError;
pub use extract::{CodeBlock, ExtractReport, Extractor};
pub use site::{Site, SiteConfig};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_NAME: &str = "codebox";
