//!
//! src/listing.rs  Oct 19th, 2026
//!
//! Parses the index page into SongRecords. The listing is strict: any
//! gap in a row aborts the whole run, nothing is guessed.
//!
//! Page shape this expects:
//!
//! ```text
//! #item-list
//!   .line_detail            one per song
//!     .song a[href]         title + detail page link
//!     .release              album name
//!     .played  .played      first played, last played (in that order)
//!     .times                times played
//! ```
//!

use scraper::{ElementRef, Html, Selector};
use tracing::{error, info};
use url::Url;

use crate::extract::{selector, text_of};
use crate::fetch::{PageFetcher, StatusPolicy};
use crate::types::SongRecord;
use crate::ScrapeError;

pub const LIST_ID: &str = "item-list";

/// Fetch the index page and parse every listing row
pub fn get_songs(fetcher: &dyn PageFetcher, index_url: &Url) ->
    Result<Vec<SongRecord>, ScrapeError> {

    let page = fetcher.fetch(index_url, StatusPolicy::Strict)?;
    let songs = parse_listing(&page, index_url)?;
    info!(songs = songs.len(), url = %index_url, "listing.parsed");
    Ok( songs )
}

/// Parse listing html. Relative song links are resolved against `base`.
pub fn parse_listing(html: &str, base: &Url) -> Result<Vec<SongRecord>, ScrapeError> {
    let document = Html::parse_document(html);

    let list_sel = selector(&format!("#{LIST_ID}"))?;
    let Some(list) = document.select(&list_sel).next() else {
        error!(container = LIST_ID, url = %base, "listing.container.missing");
        return Err(ScrapeError::MissingContainer(LIST_ID.to_string()));
    };

    let row_sel = selector(".line_detail")?;
    let cells = RowSelectors::new()?;
    let songs = list.select(&row_sel)
        .enumerate()
        .map(|(i, row)| parse_row(i, row, &cells, base))
        .collect::<Result<Vec<_>, _>>()?;
    Ok( songs )
}

/// Per-row cell selectors, compiled once per page
struct RowSelectors {
    song: Selector,
    anchor: Selector,
    release: Selector,
    played: Selector,
    times: Selector
}

impl RowSelectors {
    fn new() -> Result<Self, ScrapeError> {
        Ok( Self {
            song: selector(".song")?,
            anchor: selector("a")?,
            release: selector(".release")?,
            played: selector(".played")?,
            times: selector(".times")?
        })
    }
}

/// First descendant matching `sel`, or a fatal missing-field error
fn required<'a>(row: ElementRef<'a>, idx: usize, sel: &Selector, field: &'static str) ->
    Result<ElementRef<'a>, ScrapeError> {
    row.select(sel)
        .next()
        .ok_or(ScrapeError::MissingField { row: idx, field })
}

fn parse_row(idx: usize, row: ElementRef<'_>, cells: &RowSelectors, base: &Url) ->
    Result<SongRecord, ScrapeError> {

    let song_cell = required(row, idx, &cells.song, "song")?;
    let anchor = required(song_cell, idx, &cells.anchor, "song link")?;

    let song = text_of(anchor);
    if song.is_empty() {
        return Err(ScrapeError::MissingField { row: idx, field: "song title" });
    }

    let href = anchor.value()
        .attr("href")
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or(ScrapeError::MissingField { row: idx, field: "song link" })?;
    let link = base.join(href)?.to_string();

    let album_name = text_of(required(row, idx, &cells.release, "album name")?);

    // positional: the page lists first played before last played
    let played: Vec<String> = row.select(&cells.played)
        .map(text_of)
        .collect();
    let [first_played, last_played]: [String; 2] = played.try_into()
        .map_err(|v: Vec<String>| ScrapeError::PlayedCount { row: idx, found: v.len() })?;

    let times_played = text_of(required(row, idx, &cells.times, "times played")?);

    Ok( SongRecord {
        song,
        link,
        album_name,
        first_played,
        last_played,
        times_played,
        credits: None,
        lyrics: None
    })
}
