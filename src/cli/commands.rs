//! Command implementations

use super::{ConfigArgs, ExtractArgs, ListArgs};
use crate::extract::{ExtractReport, Extractor};
use crate::site::{Site, SiteConfig, CONFIG_FILE};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Extract every chapter's code blocks into scripts
pub fn extract(path: &Path, args: &ExtractArgs) -> Result<ExtractReport> {
    let mut site = Site::open(path)?;
    {
        let config = site.config_mut();
        if let Some(ref source) = args.source {
            config.source_dir = PathBuf::from(source);
        }
        if let Some(ref output) = args.output {
            config.output_root = PathBuf::from(output);
        }
        if args.no_clean {
            config.clean = false;
        }
        if let Some(ref ext) = args.ext {
            config.script_extension = ext.trim_start_matches('.').to_string();
        }
    }

    tracing::info!(
        "Extracting code blocks from {:?} into {:?}",
        site.source_dir(),
        site.output_root()
    );

    let report = Extractor::new(&site)
        .run()
        .with_context(|| format!("Extraction failed for site at {:?}", site.root()))?;

    tracing::info!(
        "Wrote {} script(s) for {} chapter(s)",
        report.total_scripts(),
        report.chapters.len()
    );

    Ok(report)
}

/// Plan an extraction without writing anything
pub fn list(path: &Path, args: &ListArgs) -> Result<ExtractReport> {
    let mut site = Site::open(path)?;
    {
        let config = site.config_mut();
        if let Some(ref source) = args.source {
            config.source_dir = PathBuf::from(source);
        }
        if let Some(ref output) = args.output {
            config.output_root = PathBuf::from(output);
        }
        if let Some(ref ext) = args.ext {
            config.script_extension = ext.trim_start_matches('.').to_string();
        }
    }

    let report = Extractor::new(&site)
        .plan()
        .with_context(|| format!("Could not read chapters of site at {:?}", site.root()))?;

    Ok(report)
}

/// Show, query or reset configuration
pub fn config(path: &Path, args: &ConfigArgs) -> Result<()> {
    let site = Site::open(path)?;
    let config = site.config();

    if args.show || (!args.reset && args.get.is_none()) {
        println!("codebox Configuration");
        println!("=====================\n");

        println!("Config file: {:?}", site.root().join(CONFIG_FILE));
        println!("Source directory: {:?}", site.source_dir());
        println!("Output root: {:?}", site.output_root());
        println!("Clean before writing: {}", config.clean);
        println!("Script extension: {}", config.script_extension);
        if config.document_extensions.is_empty() {
            println!("Document extensions: (any)");
        } else {
            println!("Document extensions: {}", config.document_extensions.join(", "));
        }
    }

    if let Some(ref key) = args.get {
        match config.get(key) {
            Some(value) => println!("{}", value),
            None => anyhow::bail!("Unknown config key: {}", key),
        }
    }

    if args.reset {
        SiteConfig::default().save(site.root())?;
        println!("✓ Configuration reset to defaults");
    }

    Ok(())
}

/// Print a report in JSON format
pub fn print_report_json(report: &ExtractReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    println!("{}", json);
    Ok(())
}

/// Print a report in text format
pub fn print_report_text(report: &ExtractReport) {
    if report.chapters.is_empty() {
        println!("No chapters found in {:?}.", report.source_dir);
        return;
    }

    let heading = if report.written {
        "Extracted Scripts:"
    } else {
        "Planned Scripts:"
    };
    println!("\n{}", heading);
    println!("{}\n", "=".repeat(heading.len()));

    for chapter in &report.chapters {
        println!("{} ({} script(s))", chapter.name, chapter.scripts.len());
        for script in &chapter.scripts {
            println!("   {}", chapter.output_dir.join(&script.file_name).display());
        }
        println!();
    }

    let verb = if report.written { "Wrote" } else { "Would write" };
    println!(
        "✓ {} {} script(s) for {} chapter(s) under {:?}",
        verb,
        report.total_scripts(),
        report.chapters.len(),
        report.output_root
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let chapters = dir.path().join("pages");
        fs::create_dir_all(&chapters).unwrap();
        fs::write(
            chapters.join("1-intro.html"),
            "<pre><code>// hello\nprint('hi')</code></pre>",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_extract_applies_overrides() {
        let dir = site();
        let args = ExtractArgs {
            source: Some("pages".to_string()),
            output: Some("out".to_string()),
            no_clean: false,
            ext: Some(".py".to_string()),
        };

        let report = extract(dir.path(), &args).unwrap();
        assert_eq!(report.total_scripts(), 1);
        assert!(dir.path().join("out/1-intro/1_hello.py").exists());
    }

    #[test]
    fn test_list_writes_nothing() {
        let dir = site();
        let args = ListArgs {
            source: Some("pages".to_string()),
            output: None,
            ext: None,
        };

        let report = list(dir.path(), &args).unwrap();
        assert_eq!(report.chapters[0].scripts[0].file_name, "1_hello.wppl");
        assert!(!dir.path().join("_codeboxes").exists());
    }

    #[test]
    fn test_list_uses_output_override() {
        let dir = site();
        let args = ListArgs {
            source: Some("pages".to_string()),
            output: Some("out".to_string()),
            ext: None,
        };

        let report = list(dir.path(), &args).unwrap();
        assert_eq!(report.output_root, dir.path().join("out"));
        assert_eq!(report.chapters[0].output_dir, dir.path().join("out/1-intro"));
        assert!(!dir.path().join("out").exists());
    }

    #[test]
    fn test_missing_source_reports_site() {
        let dir = tempfile::tempdir().unwrap();
        let err = extract(dir.path(), &ExtractArgs::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("cannot read"));
    }

    #[test]
    fn test_config_reset_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConfigArgs {
            show: false,
            get: None,
            reset: true,
        };
        config(dir.path(), &args).unwrap();
        assert!(dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn test_config_unknown_key() {
        let dir = tempfile::tempdir().unwrap();
        let args = ConfigArgs {
            show: false,
            get: Some("nope".to_string()),
            reset: false,
        };
        assert!(config(dir.path(), &args).is_err());
    }
}
