use std::path::{Path, PathBuf};

use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::errors::ScrapeError;
use crate::types::{CsvRow, SongRecord};

/// Export columns, in order. `link` is scraped but never exported.
pub const COLUMNS: [&str; 7] = [
    "song", "album name", "first played", "last played",
    "times played", "credits", "lyrics"
];

/// Index of the only column that may be written bare
const COUNT_COLUMN: usize = 4;

/// Quoted text cell, embedded quotes doubled
fn quote_text(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// A play count is bare only when it is plain digits, anything else
/// (`n/a`, `1e3`, `NaN`) is quoted like text
fn quote_count(value: &str) -> String {
    if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) {
        value.to_string()
    } else {
        quote_text(value)
    }
}

fn quote_row(fields: [&str; 7]) -> Vec<String> {
    fields.iter()
        .enumerate()
        .map(|(i, value)| if i == COUNT_COLUMN { quote_count(value) } else { quote_text(value) })
        .collect()
}

pub struct CsvSink {
    path: PathBuf
}

impl CsvSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Writes header + one row per song into a temp file next to the
    /// target, then moves it into place. A failed write leaves no file.
    pub fn write_songs(&self, songs: &[SongRecord]) -> Result<PathBuf, ScrapeError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };

        let temp = tempfile::NamedTempFile::new_in(&dir)
            .map_err(|e| ScrapeError::Io(std::io::Error::new(
                e.kind(), format!("tempfile in {}: {e}", dir.display())
            )))?;

        {
            let mut writer = WriterBuilder::new()
                .delimiter(b',')
                .quote(b'"')
                // cells arrive pre-quoted
                .quote_style(QuoteStyle::Never)
                .terminator(Terminator::CRLF)
                .has_headers(false)
                .from_writer(temp.as_file());

            // explicit header so an empty listing still gets one
            writer.write_record(COLUMNS.map(quote_text))?;
            for song in songs {
                writer.write_record(quote_row(CsvRow::from(song).fields()))?;
            }
            writer.flush()?;
        }

        temp.persist(&self.path)?;
        Ok( self.path.clone() )
    }
}
