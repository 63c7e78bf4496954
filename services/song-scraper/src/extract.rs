//!
//! src/extract.rs  Oct 19th, 2026
//!
//! Small DOM helpers shared by the listing and detail parsers.
//!

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{ElementRef, Selector};
use tracing::warn;

use crate::ScrapeError;

// two or more tabs separate the lyrics from the trailing copyright notice,
// a line break right before the run is part of the separator
static TAB_RUN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n?\t\t+").unwrap());

/// Compiles a css selector, mapping the parser error into ours
pub fn selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css}: {e:?}")))
}

/// All descendant text of an element, trimmed
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Text of an element that may not exist. A missing element is logged and
/// read as an empty string, never an error.
pub fn element_text(element: Option<ElementRef<'_>>, what: &str) -> String {
    match element {
        Some(e) => text_of(e),
        None => {
            warn!(element = what, "element.missing");
            String::new()
        }
    }
}

/// CRLF to LF, then each run of 2+ tabs (and a newline directly before it)
/// becomes a single newline
pub fn normalize_lyrics(raw: &str) -> String {
    let unix = raw.replace("\r\n", "\n");
    TAB_RUN_RE.replace_all(&unix, "\n").into_owned()
}
