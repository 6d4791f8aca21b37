//! Filesystem scanning and thumbnail association.
//!
//! Stage 1 of the build. Lists the images directory, keeps every regular file
//! with an accepted extension, and then checks the thumbnails directory for a
//! file with the exact same name.
//!
//! ## Directory Structure
//!
//! ```text
//! site/                    # Output directory (where the tool runs)
//! ├── index.html           # Generated
//! ├── a.html … z.html      # Generated
//! ├── Fire.flame           # Parameter files (never checked)
//! images/
//! ├── Fire.png             # Full-size render
//! └── ant.jpg
//! thumbs/
//! └── Fire.png             # Same name as the image = has a thumbnail
//! ```
//!
//! ## Matching Rules
//!
//! - Only `.png`, `.jpg`, `.gif`, compared case-sensitively (`FIRE.PNG` is skipped)
//! - Subdirectories are skipped; there is no recursion
//! - Results come back in directory listing order; callers sort if they need to
//! - A thumbnail matches only on a byte-identical filename

use crate::types::{IMAGE_EXTENSIONS, ImageRecord};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Cannot read directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// List every accepted image file directly inside `dir`.
///
/// Fails if the directory is missing or unreadable. Entries that vanish or
/// error mid-listing are skipped.
pub fn scan_images(dir: &Path) -> Result<Vec<ImageRecord>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut records = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "skipping unreadable directory entry");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(record) = record_for(&path) else {
            continue;
        };
        debug!(name = %record.name, "found image file");
        records.push(record);
    }
    Ok(records)
}

/// Mark each record whose filename also exists in `thumbs_dir`.
///
/// A missing thumbnails directory just means no image has a thumbnail.
pub fn resolve_thumbs(records: &mut [ImageRecord], thumbs_dir: &Path) {
    if !thumbs_dir.is_dir() {
        warn!(path = %thumbs_dir.display(), "thumbnails directory not found");
        return;
    }
    for record in records.iter_mut() {
        let candidate = thumbs_dir.join(&record.name);
        record.has_thumb = candidate.is_file() && has_image_extension(&candidate);
        if record.has_thumb {
            debug!(name = %record.name, "found thumbnail");
        }
    }
}

/// Build a record from a path if its extension is accepted.
///
/// Non-UTF-8 filenames cannot be embedded in HTML and are skipped with a warning.
fn record_for(path: &Path) -> Option<ImageRecord> {
    if !has_image_extension(path) {
        return None;
    }
    let (Some(name), Some(truename)) = (
        path.file_name().and_then(|n| n.to_str()),
        path.file_stem().and_then(|s| s.to_str()),
    ) else {
        warn!(path = %path.display(), "skipping image with non UTF-8 name");
        return None;
    };
    Some(ImageRecord::new(name, truename))
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext))
}
