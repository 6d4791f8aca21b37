//! CLI output formatting.
//!
//! Each stage has a `format_*` function returning lines, so output can be
//! tested without capturing stdout, and a `print_*` wrapper that writes them.
//!
//! # Output Format
//!
//! ## Scan (with `-v`)
//!
//! ```text
//! Images
//! 001 ant
//!     Source: ant.jpg
//!     Thumb: none
//!     Params: ant.flame
//! 002 Fire
//!     Source: Fire.png
//!     Thumb: Fire.png
//!     Params: Fire.flame
//! ```
//!
//! ## Generate
//!
//! ```text
//! Index → index.html
//! A (1 image) → a.html
//! F (1 image) → f.html
//!
//! Generated 27 pages for 2 images (1 with thumbnails)
//! Site generated at /srv/site
//! ```
//!
//! Letter pages with no images are still written but left out of the listing.

use crate::generate::GenerateSummary;
use crate::types::ImageRecord;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

pub fn format_scan_output(records: &[ImageRecord]) -> Vec<String> {
    let mut lines = vec!["Images".to_string()];
    if records.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }
    for (i, record) in records.iter().enumerate() {
        lines.push(format!("{} {}", format_index(i + 1), record.truename));
        lines.push(format!("    Source: {}", record.name));
        let thumb = if record.has_thumb {
            record.name.as_str()
        } else {
            "none"
        };
        lines.push(format!("    Thumb: {thumb}"));
        lines.push(format!("    Params: {}", record.flame_file));
    }
    lines
}

pub fn print_scan_output(records: &[ImageRecord]) {
    for line in format_scan_output(records) {
        println!("{}", line);
    }
}

pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    let mut lines = Vec::new();
    for page in &summary.pages {
        match page.letter {
            None => lines.push(format!("Index → {}", page.file)),
            Some(_) if page.images == 0 => {}
            Some(letter) => lines.push(format!(
                "{} ({}) → {}",
                letter.label(),
                plural(page.images, "image"),
                page.file
            )),
        }
    }
    lines.push(String::new());
    lines.push(format!(
        "Generated {} for {} ({} with thumbnails)",
        plural(summary.pages.len(), "page"),
        plural(summary.images, "image"),
        summary.with_thumbs
    ));
    lines.push(format!("Site generated at {}", summary.output_dir.display()));
    lines
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{}", line);
    }
}
