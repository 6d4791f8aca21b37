//! Shared types passed between the scan, render, and generate stages.

use std::fmt;

/// Extensions accepted for images and thumbnails. Matched case-sensitively.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "gif"];

/// Extension appended to an image's stem to name its parameter file.
pub const FLAME_EXTENSION: &str = "flame";

/// One discovered image and the files associated with it.
///
/// Built by [`crate::scan::scan_images`]; `has_thumb` is filled in once by
/// [`crate::scan::resolve_thumbs`] and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Filename with extension, e.g. `Fire.png`
    pub name: String,
    /// Filename without extension, e.g. `Fire`
    pub truename: String,
    /// Parameter file name, always `{truename}.flame`
    pub flame_file: String,
    /// Whether a same-named file exists in the thumbnails directory
    pub has_thumb: bool,
}

impl ImageRecord {
    pub fn new(name: impl Into<String>, truename: impl Into<String>) -> Self {
        let truename = truename.into();
        Self {
            name: name.into(),
            flame_file: format!("{truename}.{FLAME_EXTENSION}"),
            truename,
            has_thumb: false,
        }
    }

    /// Case-insensitive prefix match on `name`. An empty prefix matches everything.
    ///
    /// The prefix is expected to be lower-case already.
    pub fn matches_prefix(&self, prefix: &str) -> bool {
        if prefix.is_empty() {
            return true;
        }
        let lowered: String = self
            .name
            .to_lowercase()
            .chars()
            .take(prefix.chars().count())
            .collect();
        lowered == prefix
    }
}

/// A letter of the alphabet that owns one gallery page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Letter(char);

impl Letter {
    /// All 26 letters, `a` through `z`.
    pub fn all() -> impl Iterator<Item = Letter> {
        ('a'..='z').map(Letter)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Lower-case filter prefix for this page.
    pub fn prefix(self) -> String {
        self.0.to_string()
    }

    /// Output filename, e.g. `f.html`.
    pub fn page_file(self) -> String {
        format!("{}.html", self.0)
    }

    /// Upper-case label used in navigation.
    pub fn label(self) -> char {
        self.0.to_ascii_uppercase()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
