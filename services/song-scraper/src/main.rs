//!
//! src/main.rs  Oct 19th, 2026
//!
//! Entry point of the song scraper: loads config, starts the logger
//! and runs the listing -> detail -> csv pipeline once.
//!
//!

mod config;
mod errors;
mod logging;

mod extract;
mod fetch;
mod listing;
mod detail;
mod pipeline;
mod sink;
mod types;

use crate::errors::ScrapeError;

fn main() -> Result<(), ScrapeError> {
    let cfgs    = config::load_config()?;
    let _logger = logging::init_logging(&cfgs.logging)?;

    tracing::info!(
        service="song-scraper",
        version=%env!("CARGO_PKG_VERSION"),
        "starting"
    );

    let fetcher = fetch::HttpFetcher::new(&cfgs.http)?;

    match pipeline::run(&fetcher, &cfgs.scrape) {
        Ok(summary) => {
            tracing::info!(
                songs = summary.songs,
                without_article = summary.without_article,
                output = %summary.output.display(),
                "finished"
            );
            Ok(())
        }
        Err(e) => {
            tracing::error!(error = %e, "run aborted, no output written");
            Err(e)
        }
    }
}

/// Unit Tests
/// Live site test
#[cfg(test)]
mod tests {
    use super::*;

    fn live() -> bool {
        std::env::var("LIVE_HTTP").ok().as_deref() == Some("1")
    }

    #[test]
    fn live_listing_testbench() -> Result<(), ScrapeError> {
        dotenvy::dotenv().ok();

        if !live() {
            eprintln!("Set LIVE_HTTP=1 to run");
            return Ok(())
        }

        let cfgs = config::load_config()?;
        let fetcher = fetch::HttpFetcher::new(&cfgs.http)?;

        let songs = listing::get_songs(&fetcher, &cfgs.scrape.index_url)?;
        println!("listing: {} songs", songs.len());
        assert!(songs.iter().all(|s| !s.song.is_empty() && !s.link.is_empty()));

        if let Some(first) = songs.first() {
            let url = url::Url::parse(&first.link)?;
            let detail = detail::get_song_info(&fetcher, &url)?.into_detail();
            println!("{}: credits={:?}", first.song, detail.credits);
            println!("lyrics:\n{}", detail.lyrics);
        }

        Ok(())
    }
}
