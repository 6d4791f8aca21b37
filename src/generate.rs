//! Site building.
//!
//! Stage 3 of the build, and the entry point that drives the other two:
//! scan the images directory, resolve thumbnails, then write `index.html`
//! followed by `a.html` through `z.html` into the output directory.
//!
//! ## Output Structure
//!
//! ```text
//! site/
//! ├── index.html     # Letter index
//! ├── a.html         # Images whose filename starts with a/A
//! ├── ...
//! └── z.html
//! ```
//!
//! Existing pages are overwritten. Each page is rendered fully in memory and
//! written in one call, so a failure never leaves a half-written file behind,
//! but it does stop the run: pages after the failing one keep whatever a
//! previous run left there.

use crate::config::{Options, SiteConfig};
use crate::render::{self, SiteContext};
use crate::scan::{self, ScanError};
use crate::types::{ImageRecord, Letter};
use maud::Markup;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

pub const INDEX_PAGE: &str = "index.html";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),
    #[error("Cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// One written page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSummary {
    /// Filename inside the output directory
    pub file: String,
    /// `None` for the index page
    pub letter: Option<Letter>,
    /// Images shown on the page (0 for the index)
    pub images: usize,
}

/// What a run produced.
#[derive(Debug, Clone)]
pub struct GenerateSummary {
    pub output_dir: PathBuf,
    pub images: usize,
    pub with_thumbs: usize,
    pub pages: Vec<PageSummary>,
}

/// Scan images and resolve thumbnails.
///
/// Records come back sorted by filename so the generated pages do not depend
/// on directory listing order.
pub fn collect_records(options: &Options) -> Result<Vec<ImageRecord>, GenerateError> {
    info!(path = %options.images_dir.display(), "scanning images");
    let mut records = scan::scan_images(&options.images_dir)?;
    scan::resolve_thumbs(&mut records, &options.thumbs_dir);
    records.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(records)
}

/// Write the index and all 26 letter pages for `records`.
pub fn write_site(
    records: &[ImageRecord],
    options: &Options,
    config: &SiteConfig,
) -> Result<GenerateSummary, GenerateError> {
    let site = SiteContext {
        root: options.site_root(config),
        title: &config.title,
        info: &config.info,
    };
    let output_dir = &options.output_dir;
    fs::create_dir_all(output_dir).map_err(|source| GenerateError::Write {
        path: output_dir.clone(),
        source,
    })?;
    info!(path = %output_dir.display(), root = site.root, "writing pages");

    let mut pages = Vec::with_capacity(27);

    write_page(output_dir, INDEX_PAGE, render::render_index(records, &site))?;
    pages.push(PageSummary {
        file: INDEX_PAGE.to_string(),
        letter: None,
        images: 0,
    });

    for (letter, count) in render::letter_counts(records) {
        let file = letter.page_file();
        let page = render::render_page(records, &letter.prefix(), &site);
        write_page(output_dir, &file, page)?;
        pages.push(PageSummary {
            file,
            letter: Some(letter),
            images: count,
        });
    }

    Ok(GenerateSummary {
        output_dir: output_dir.clone(),
        images: records.len(),
        with_thumbs: records.iter().filter(|r| r.has_thumb).count(),
        pages,
    })
}

/// Run the whole pipeline: scan, resolve thumbnails, write pages.
pub fn generate(options: &Options, config: &SiteConfig) -> Result<GenerateSummary, GenerateError> {
    let records = collect_records(options)?;
    write_site(&records, options, config)
}

fn write_page(dir: &Path, file: &str, page: Markup) -> Result<(), GenerateError> {
    let path = dir.join(file);
    fs::write(&path, page.into_string())
        .map_err(|source| GenerateError::Write { path, source })?;
    debug!(file, "wrote page");
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;

    #[test]
    fn writes_index_and_all_letter_pages() {
        let site = fixture_site(&["Fire.png", "ant.jpg"], &["Fire.png"]);
        let summary = generate(&site.options(false), &SiteConfig::default()).unwrap();

        assert_eq!(summary.pages.len(), 27);
        assert!(site.output.join("index.html").is_file());
        for letter in Letter::all() {
            assert!(site.output.join(letter.page_file()).is_file(), "{letter}");
        }
    }

    #[test]
    fn fire_and_ant_scenario() {
        let site = fixture_site(&["Fire.png", "ant.jpg"], &["Fire.png"]);
        let options = site.options(true);
        let records = collect_records(&options).unwrap();

        assert!(find_record(&records, "Fire.png").has_thumb);
        assert!(!find_record(&records, "ant.jpg").has_thumb);

        write_site(&records, &options, &SiteConfig::default()).unwrap();
        let f_page = site.page("f.html");
        let a_page = site.page("a.html");
        assert!(f_page.contains(r#"src="../images/Fire.png""#));
        assert!(a_page.contains(r#"src="../thumbs/ant.jpg""#));
        assert!(!a_page.contains("Fire.flame"));
    }

    #[test]
    fn simulate_switches_link_root() {
        let site = fixture_site(&["Fire.png"], &[]);
        let config = SiteConfig::default();

        generate(&site.options(false), &config).unwrap();
        let live = site.page("f.html");
        assert!(live.contains(&format!(r#"href="{}/Fire.flame""#, config.remote_root)));

        generate(&site.options(true), &config).unwrap();
        let sim = site.page("f.html");
        assert!(sim.contains(r#"href="../Fire.flame""#));
        assert!(!sim.contains("raw.githubusercontent.com"));
    }

    #[test]
    fn regeneration_is_byte_identical() {
        let site = fixture_site(&["Fire.png", "ant.jpg", "Aurora.gif", "zz.png"], &["ant.jpg"]);
        let options = site.options(false);
        let config = SiteConfig::default();

        generate(&options, &config).unwrap();
        let first: Vec<String> = ["index.html", "a.html", "f.html", "z.html"]
            .iter()
            .map(|f| site.page(f))
            .collect();

        generate(&options, &config).unwrap();
        let second: Vec<String> = ["index.html", "a.html", "f.html", "z.html"]
            .iter()
            .map(|f| site.page(f))
            .collect();

        assert_eq!(first, second);
    }

    #[test]
    fn overwrites_existing_pages() {
        let site = fixture_site(&["ant.jpg"], &[]);
        fs::write(site.output.join("a.html"), "stale").unwrap();

        generate(&site.options(false), &SiteConfig::default()).unwrap();
        assert!(site.page("a.html").contains("ant.flame"));
    }

    #[test]
    fn summary_counts_images_per_page() {
        let site = fixture_site(&["Fire.png", "ant.jpg", "Aurora.gif"], &["Fire.png"]);
        let summary = generate(&site.options(false), &SiteConfig::default()).unwrap();

        assert_eq!(summary.images, 3);
        assert_eq!(summary.with_thumbs, 1);
        assert_eq!(summary.pages[0].file, "index.html");
        let a = summary.pages.iter().find(|p| p.file == "a.html").unwrap();
        assert_eq!(a.images, 2);
    }

    #[test]
    fn missing_images_directory_writes_nothing() {
        let site = fixture_site(&[], &[]);
        fs::remove_dir_all(&site.images).unwrap();

        let result = generate(&site.options(false), &SiteConfig::default());
        assert!(matches!(result, Err(GenerateError::Scan(_))));
        assert!(!site.output.join("index.html").exists());
    }

    #[test]
    fn creates_missing_output_directory() {
        let site = fixture_site(&["ant.jpg"], &[]);
        let config = SiteConfig {
            images_dir: site.images.to_string_lossy().to_string(),
            thumbs_dir: site.thumbs.to_string_lossy().to_string(),
            ..SiteConfig::default()
        };
        let nested = site.output.join("nested/out");
        let options = Options::resolve(false, false, &nested, &config);

        generate(&options, &config).unwrap();
        assert!(nested.join("index.html").is_file());
    }

    #[test]
    fn unwritable_output_is_error() {
        let site = fixture_site(&["ant.jpg"], &[]);
        // A directory where index.html should go makes the first write fail.
        fs::create_dir_all(site.output.join(INDEX_PAGE)).unwrap();

        let result = generate(&site.options(false), &SiteConfig::default());
        assert!(matches!(result, Err(GenerateError::Write { .. })));
        assert!(!site.output.join("a.html").exists());
    }
}
