//! Shared test utilities for the flame-gallery test suite.
//!
//! Builds throwaway site layouts mirroring the default relative paths and
//! provides lookup helpers that panic with a useful message on a miss.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let site = fixture_site(&["Fire.png", "ant.jpg"], &["Fire.png"]);
//! let records = scan_images(&site.images).unwrap();
//! assert_eq!(find_record(&records, "ant.jpg").truename, "ant");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::{Options, SiteConfig};
use crate::types::ImageRecord;

// =========================================================================
// Fixture setup
// =========================================================================

/// A temporary site laid out the way the default config expects:
///
/// ```text
/// <tmp>/site/     output directory
/// <tmp>/images/   full-size renders  (../images from site/)
/// <tmp>/thumbs/   thumbnails         (../thumbs from site/)
/// ```
pub struct FixtureSite {
    _tmp: TempDir,
    pub output: PathBuf,
    pub images: PathBuf,
    pub thumbs: PathBuf,
}

impl FixtureSite {
    /// Options for generating into this site with stock config.
    pub fn options(&self, simulate: bool) -> Options {
        Options::resolve(false, simulate, &self.output, &SiteConfig::default())
    }

    /// Read a generated page. Panics if it was not written.
    pub fn page(&self, file: &str) -> String {
        let path = self.output.join(file);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("page {} not readable: {e}", path.display()))
    }
}

/// Create a fixture site with the given image and thumbnail filenames.
pub fn fixture_site(images: &[&str], thumbs: &[&str]) -> FixtureSite {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("site");
    let images_dir = tmp.path().join("images");
    let thumbs_dir = tmp.path().join("thumbs");
    for dir in [&output, &images_dir, &thumbs_dir] {
        fs::create_dir_all(dir).unwrap();
    }
    touch_all(&images_dir, images);
    touch_all(&thumbs_dir, thumbs);
    FixtureSite {
        _tmp: tmp,
        output,
        images: images_dir,
        thumbs: thumbs_dir,
    }
}

/// Write a placeholder file for each name. Scanning only looks at names.
pub fn touch_all(dir: &Path, names: &[&str]) {
    for name in names {
        fs::write(dir.join(name), "fake image").unwrap();
    }
}

// =========================================================================
// Record lookups
// =========================================================================

/// Find a record by filename. Panics if not found.
pub fn find_record<'a>(records: &'a [ImageRecord], name: &str) -> &'a ImageRecord {
    records.iter().find(|r| r.name == name).unwrap_or_else(|| {
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        panic!("record '{name}' not found. Available: {names:?}")
    })
}

/// Record filenames in sorted order, for listing-order-independent asserts.
pub fn sorted_names(records: &[ImageRecord]) -> Vec<&str> {
    let mut names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    names.sort_unstable();
    names
}

/// Build a record directly, bypassing the filesystem.
pub fn record(name: &str, has_thumb: bool) -> ImageRecord {
    let truename = Path::new(name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(name);
    ImageRecord {
        has_thumb,
        ..ImageRecord::new(name, truename)
    }
}
