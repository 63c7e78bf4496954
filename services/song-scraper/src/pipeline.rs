//!
//! src/pipeline.rs  Oct 19th, 2026
//!
//! Drives one scrape run: listing, then every detail page in listing
//! order, then the CSV export. Strictly sequential.
//!

use std::path::PathBuf;

use tracing::info;
use url::Url;

use crate::config::ScrapeConfig;
use crate::detail::get_song_info;
use crate::errors::ScrapeError;
use crate::fetch::PageFetcher;
use crate::listing::get_songs;
use crate::sink::CsvSink;
use crate::types::{DetailOutcome, SongRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub songs: usize,
    pub without_article: usize,
    pub output: PathBuf
}

/// Fetch and merge detail for a single listing record
fn enrich(fetcher: &dyn PageFetcher, record: SongRecord) ->
    Result<(SongRecord, bool), ScrapeError> {

    println!("Scraping info on {}.", record.song);
    let url = Url::parse(&record.link)?;
    let outcome = get_song_info(fetcher, &url)?;
    let missing = outcome == DetailOutcome::NoArticle;
    Ok( (record.with_detail(outcome.into_detail()), missing) )
}

/// Listing + details, nothing written yet
pub fn collect(fetcher: &dyn PageFetcher, index_url: &Url) ->
    Result<(Vec<SongRecord>, usize), ScrapeError> {

    let listing = get_songs(fetcher, index_url)?;

    let enriched = listing.into_iter()
        .map(|record| enrich(fetcher, record))
        .collect::<Result<Vec<_>, _>>()?;

    let without_article = enriched.iter().filter(|(_, missing)| *missing).count();
    let songs = enriched.into_iter().map(|(record, _)| record).collect();
    Ok( (songs, without_article) )
}

/// Full run. The CSV only exists if every fetch and the listing succeeded.
pub fn run(fetcher: &dyn PageFetcher, cfg: &ScrapeConfig) -> Result<RunSummary, ScrapeError> {
    info!(index = %cfg.index_url, output = %cfg.output.display(), "pipeline.start");

    let (songs, without_article) = collect(fetcher, &cfg.index_url)?;
    let output = CsvSink::new(&cfg.output).write_songs(&songs)?;

    info!(
        songs = songs.len(),
        without_article,
        output = %output.display(),
        "pipeline.done"
    );
    Ok( RunSummary { songs: songs.len(), without_article, output } )
}
