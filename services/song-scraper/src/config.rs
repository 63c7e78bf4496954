//!
//! src/config.rs  Oct 19th, 2026
//!
//! Collects run configuration from the environment (and .env) at
//! program start. Every value has a default so a bare run works.
//!

use std::path::PathBuf;
use url::Url;
use crate::ScrapeError;

/// Defaults for the scrape target and output
pub const DEFAULT_INDEX_URL: &str = "https://es-jobs.about.ikea.com/buscar-trabajo?acm=ALL&alrpm=2510769&ascf=[%7B%22key%22:%22ALL%22,%22value%22:%22%22%7D]";
pub const DEFAULT_OUTPUT: &str = "songs.csv";
pub const DEFAULT_FILTER: &str = "info,song_scraper=info,reqwest=warn";

/// Reads an optional, non-blank environment variable
fn env_opt(s: &str) -> Option<String> {
    match std::env::var(s) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}

/// Ensures that url is http or https
fn ensure_http(url: &Url) -> Result<(), String> {
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(format!("URL must be http(s), got {other}: {url}")),
    }
}

///
/// Where to scrape from and where the CSV goes
///
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub index_url: Url,
    pub output: PathBuf,
}

impl ScrapeConfig {
    pub fn new(index_url: &str, output: impl Into<PathBuf>) -> Result<Self, ScrapeError> {
        let index_url = Url::parse(index_url)
            .map_err(|e| ScrapeError::Config(format!("SONGS_INDEX_URL invalid {e}")))?;
        ensure_http(&index_url).map_err(ScrapeError::Config)?;

        let output = output.into();
        if output.as_os_str().is_empty() {
            return Err(ScrapeError::Config("SONGS_OUTPUT is empty".to_string()));
        }
        Ok( Self { index_url, output } )
    }
}

fn build_scrape() -> Result<ScrapeConfig, ScrapeError> {
    let index_url = env_opt("SONGS_INDEX_URL")
        .unwrap_or_else(|| DEFAULT_INDEX_URL.to_string());
    let output = env_opt("SONGS_OUTPUT")
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    ScrapeConfig::new(&index_url, output)
}

///
/// Http client identity. No timeout or retry knobs, one request per page.
///
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("song-scraper/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

fn build_http() -> HttpConfig {
    match env_opt("SONGS_USER_AGENT") {
        Some(user_agent) => HttpConfig { user_agent },
        None => HttpConfig::default(),
    }
}

///
/// Configuration for Logger
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json
}

impl LogFormat {
    pub fn parse(s: &str) -> Option<LogFormat> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Some(LogFormat::Pretty),
            "json"   => Some(LogFormat::Json),
            _ => None
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub filter_directives: String,
    pub format: LogFormat,
    pub with_ansi: bool,
    pub include_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter_directives: DEFAULT_FILTER.to_string(),
            format: LogFormat::Pretty,
            with_ansi: true,
            include_target: false,
        }
    }
}

fn build_logging() -> Result<LoggingConfig, ScrapeError> {
    let mut logging = LoggingConfig::default();
    if let Some(f) = env_opt("SONGS_LOG_FORMAT") {
        logging.format = LogFormat::parse(&f).ok_or_else(|| ScrapeError::Config(
            format!("SONGS_LOG_FORMAT must be pretty or json, got {f}")
        ))?;
    }
    // json lines should stay machine readable
    logging.with_ansi = logging.format == LogFormat::Pretty;
    Ok( logging )
}

///
/// AppConfig which holds everything the pipeline needs
///
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub scrape: ScrapeConfig,
    pub http: HttpConfig,
    pub logging: LoggingConfig
}

///
/// Return all environment variables to caller at program start.
///
pub fn load_config() -> Result<AppConfig, ScrapeError> {
    dotenvy::dotenv().ok();

    let scrape  = build_scrape()?;
    let http    = build_http();
    let logging = build_logging()?;

    Ok( AppConfig { scrape, http, logging } )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_index_url_is_valid() {
        let cfg = ScrapeConfig::new(DEFAULT_INDEX_URL, DEFAULT_OUTPUT).unwrap();
        assert_eq!(cfg.index_url.scheme(), "https");
        assert_eq!(cfg.output, PathBuf::from("songs.csv"));
    }

    #[test]
    fn rejects_non_http_index() {
        let err = ScrapeConfig::new("ftp://example.com/songs", "songs.csv").unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));

        let err = ScrapeConfig::new("not a url", "songs.csv").unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
    }

    #[test]
    fn rejects_empty_output() {
        let err = ScrapeConfig::new("https://example.com/", "").unwrap_err();
        assert!(matches!(err, ScrapeError::Config(_)));
    }

    #[test]
    fn log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("pretty"), Some(LogFormat::Pretty));
        assert_eq!(LogFormat::parse("xml"), None);
    }
}
