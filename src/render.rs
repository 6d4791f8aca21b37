//! HTML page rendering.
//!
//! Stage 2 of the build. Turns image records into complete HTML documents:
//! one index page with a link per letter, and gallery pages holding every
//! image whose filename starts with a given prefix.
//!
//! ## Page Anatomy
//!
//! ```text
//! <head>   highslide script + css, highslide setup, site.css
//! titlebar  site title
//! infobar   site info text
//! nav       index link, A … Z letter links
//! gallery   one thumbnail + caption per image   (gallery pages only)
//! ```
//!
//! ## Links
//!
//! With `root` being the site root chosen by [`crate::config::Options::site_root`]:
//!
//! - full image: `{root}/images/{name}`
//! - thumbnail: `{root}/images/{name}` when the record has a thumb, else `{root}/thumbs/{name}`
//! - parameters: `{root}/{flame_file}`
//!
//! Asset references (`highslide/…`, `site.css`) stay relative to the output
//! directory. They are not copied or checked.
//!
//! Uses [maud](https://maud.lambda.xyz/), so every filename-derived string is
//! escaped on the way in.

use crate::types::{ImageRecord, Letter};
use maud::{DOCTYPE, Markup, PreEscaped, html};

const HIGHSLIDE_SCRIPT: &str = "highslide/highslide-with-gallery.js";
const HIGHSLIDE_CSS: &str = "highslide/highslide.css";
const SITE_CSS: &str = "site.css";

/// Highslide gallery settings, inlined after the highslide script loads.
const HIGHSLIDE_SETUP: &str = r#"
hs.graphicsDir = 'highslide/graphics/';
hs.align = 'center';
hs.transitions = ['expand', 'crossfade'];
hs.outlineType = 'glossy-dark';
hs.wrapperClassName = 'dark';
hs.fadeInOut = true;

if (hs.addSlideshow) hs.addSlideshow({
    interval: 5000,
    repeat: false,
    useControls: true,
    fixedControls: 'fit',
    overlayOptions: {
        opacity: .6,
        position: 'bottom center',
        hideOnMouseOut: true
    }
});
"#;

/// Site-wide values every page needs.
#[derive(Debug, Clone, Copy)]
pub struct SiteContext<'a> {
    /// Link prefix, no trailing slash
    pub root: &'a str,
    pub title: &'a str,
    pub info: &'a str,
}

/// Number of records that land on each letter page, in `a..=z` order.
pub fn letter_counts(records: &[ImageRecord]) -> Vec<(Letter, usize)> {
    Letter::all()
        .map(|letter| {
            let prefix = letter.prefix();
            let count = records.iter().filter(|r| r.matches_prefix(&prefix)).count();
            (letter, count)
        })
        .collect()
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document with the highslide head.
fn base_document(page_title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (page_title) }
                script type="text/javascript" src=(HIGHSLIDE_SCRIPT) {}
                link rel="stylesheet" type="text/css" href=(HIGHSLIDE_CSS);
                script type="text/javascript" { (PreEscaped(HIGHSLIDE_SETUP)) }
                link rel="stylesheet" type="text/css" href=(SITE_CSS);
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the title and info bars.
fn site_header(site: &SiteContext) -> Markup {
    html! {
        div.titlebar { (site.title) }
        div.infobar { (site.info) }
    }
}

/// Renders the letter navigation, marking `current` and showing counts.
fn letter_nav(counts: &[(Letter, usize)], current: Option<Letter>) -> Markup {
    html! {
        nav.letters {
            a href="index.html" { "Index" }
            @for (letter, count) in counts {
                @let is_current = current == Some(*letter);
                " "
                a href=(letter.page_file()) class=[is_current.then_some("current")]
                    title={ (count) " images" } {
                    (letter.label())
                }
            }
        }
    }
}

/// Renders one gallery entry: clickable thumbnail plus caption.
pub fn render_item(record: &ImageRecord, root: &str) -> Markup {
    let image_href = format!("{root}/images/{}", record.name);
    let thumb_src = if record.has_thumb {
        image_href.clone()
    } else {
        format!("{root}/thumbs/{}", record.name)
    };
    let params_href = format!("{root}/{}", record.flame_file);

    html! {
        a.highslide href=(image_href) onclick="return hs.expand(this)" {
            img style="height:10em; width:10em;" src=(thumb_src) alt=(record.truename)
                title="Click to enlarge";
        }
        div.highslide-caption {
            span.flame-name { (record.truename) }
            " "
            a href=(params_href) { "Download Parameters" }
        }
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders a gallery page holding every record that matches `prefix`.
///
/// Matching is case-insensitive on the filename; an empty prefix keeps every
/// record. Records are emitted in the order given.
pub fn render_page(records: &[ImageRecord], prefix: &str, site: &SiteContext) -> Markup {
    let prefix = prefix.to_lowercase();
    let current = letter_for_prefix(&prefix);
    let counts = letter_counts(records);

    let page_title = match current {
        Some(letter) => format!("{} - {}", site.title, letter.label()),
        None => site.title.to_string(),
    };

    let content = html! {
        (site_header(site))
        (letter_nav(&counts, current))
        div.highslide-gallery {
            @for record in records.iter().filter(|r| r.matches_prefix(&prefix)) {
                (render_item(record, site.root))
            }
        }
    };

    base_document(&page_title, content)
}

/// Renders the index page: site header plus one link per letter page.
pub fn render_index(records: &[ImageRecord], site: &SiteContext) -> Markup {
    let counts = letter_counts(records);

    let content = html! {
        (site_header(site))
        main.index-page {
            ul.letter-index {
                @for (letter, count) in &counts {
                    li {
                        a href=(letter.page_file()) { (letter.label()) }
                        " (" (count) ")"
                    }
                }
            }
        }
    };

    base_document(site.title, content)
}

fn letter_for_prefix(prefix: &str) -> Option<Letter> {
    let mut chars = prefix.chars();
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    Letter::all().find(|l| l.as_char() == first)
}

// ============================================================================
// Tests
// ============================================================================
