//! # Flame Gallery
//!
//! Generates a static HTML gallery for fractal flame renders. Every image in
//! the images directory gets a thumbnail and a link to download its `.flame`
//! parameter file; images are grouped onto one page per letter of the
//! alphabet, with an index page linking them.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan      images/ + thumbs/  →  Vec<ImageRecord>
//! 2. Render    records + prefix   →  HTML document
//! 3. Generate  index.html, a.html … z.html  →  output directory
//! ```
//!
//! Every run recomputes everything from the filesystem. There is no cache and
//! no incremental mode; with unchanged inputs the output is byte-identical.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Lists accepted images and matches same-named thumbnails |
//! | [`render`] | Maud templates for the index and letter pages |
//! | [`generate`] | Drives scan and render, writes the 27 pages |
//! | [`config`] | `gallery.toml` loading and per-run [`config::Options`] |
//! | [`types`] | [`types::ImageRecord`] and [`types::Letter`] |
//! | [`output`] | Console summaries of scan and generate results |
//! | [`logging`] | `tracing` subscriber setup |
//!
//! # Conventions
//!
//! - Accepted extensions are `.png`, `.jpg` and `.gif`, matched case-sensitively.
//! - A thumbnail is a file in the thumbnails directory with exactly the image's name.
//! - The parameter file for `Fire.png` is `Fire.flame`, linked from the site root.
//!   It is never checked, so a missing file yields a dangling link.
//! - Pages group images by the first letter of the filename, ignoring case.
//!   Names starting with anything other than `a`–`z` appear on no letter page.

pub mod config;
pub mod generate;
pub mod logging;
pub mod output;
pub mod render;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
