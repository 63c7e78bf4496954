//!
//! src/detail.rs  Oct 19th, 2026
//!
//! Parses a song's detail page for credits and lyrics. Unlike the
//! listing, gaps here are tolerated: a page without an article, or an
//! article without credits/lyrics, yields empty strings.
//!

use scraper::Html;
use tracing::{debug, warn};
use url::Url;

use crate::extract::{element_text, normalize_lyrics, selector};
use crate::fetch::{PageFetcher, StatusPolicy};
use crate::types::{DetailOutcome, SongDetail};
use crate::ScrapeError;

/// Fetch and parse one detail page. Only a transport fault can fail.
pub fn get_song_info(fetcher: &dyn PageFetcher, url: &Url) ->
    Result<DetailOutcome, ScrapeError> {

    // error pages are parsed like any other, they just have no article
    let page = fetcher.fetch(url, StatusPolicy::Lenient)?;
    let outcome = parse_detail(&page)?;
    match &outcome {
        DetailOutcome::Extracted(_) => debug!(url = %url, "detail.parsed"),
        DetailOutcome::NoArticle => warn!(url = %url, "detail.article.missing"),
    }
    Ok( outcome )
}

pub fn parse_detail(html: &str) -> Result<DetailOutcome, ScrapeError> {
    let document = Html::parse_document(html);

    let article_sel = selector("article")?;
    let Some(article) = document.select(&article_sel).next() else {
        return Ok( DetailOutcome::NoArticle );
    };

    let credit_sel = selector(".credit")?;
    let lyrics_sel = selector(".lyrics")?;

    let credits = element_text(article.select(&credit_sel).next(), ".credit");
    let lyrics = element_text(article.select(&lyrics_sel).next(), ".lyrics");

    Ok( DetailOutcome::Extracted(SongDetail {
        credits,
        lyrics: normalize_lyrics(&lyrics)
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_credits_and_normalized_lyrics() {
        let html = "<html><body><article>\
            <h2>Blue</h2>\
            <p class=\"credit\">\n  Words and music by A. Writer \n</p>\
            <div class=\"lyrics\">line1\r\nline2\r\n\t\t\tCopyright 2001</div>\
            </article></body></html>";

        let outcome = parse_detail(html).unwrap();
        assert_eq!(outcome, DetailOutcome::Extracted(SongDetail {
            credits: "Words and music by A. Writer".to_string(),
            lyrics: "line1\nline2\nCopyright 2001".to_string()
        }));
    }

    #[test]
    fn no_article_is_not_an_error() {
        let html = "<html><body><div class=\"lyrics\">stray</div></body></html>";
        let outcome = parse_detail(html).unwrap();
        assert_eq!(outcome, DetailOutcome::NoArticle);
        assert_eq!(outcome.into_detail(), SongDetail::default());
    }

    #[test]
    fn missing_parts_default_independently() {
        let only_lyrics = "<article><div class=\"lyrics\">la la</div></article>";
        let detail = parse_detail(only_lyrics).unwrap().into_detail();
        assert_eq!(detail.credits, "");
        assert_eq!(detail.lyrics, "la la");

        let only_credits = "<article><p class=\"credit\">by B</p></article>";
        let detail = parse_detail(only_credits).unwrap().into_detail();
        assert_eq!(detail.credits, "by B");
        assert_eq!(detail.lyrics, "");
    }

    #[test]
    fn only_the_first_article_is_read() {
        let html = "<article><p class=\"credit\">first</p></article>\
                    <article><p class=\"credit\">second</p></article>";
        let detail = parse_detail(html).unwrap().into_detail();
        assert_eq!(detail.credits, "first");
    }
}
