/// One song as read off the listing page, later enriched with its
/// detail page. `credits` and `lyrics` stay None until merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
    pub song: String,
    pub link: String,
    pub album_name: String,
    pub first_played: String,
    pub last_played: String,
    pub times_played: String,
    pub credits: Option<String>,
    pub lyrics: Option<String>
}

impl SongRecord {
    /// Only the detail fields are replaced, listing fields are kept as read
    pub fn with_detail(self, detail: SongDetail) -> Self {
        Self {
            credits: Some(detail.credits),
            lyrics: Some(detail.lyrics),
            ..self
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongDetail {
    pub credits: String,
    pub lyrics: String
}

/// Result of parsing a detail page. A page without an article is not an
/// error, the song is still exported with empty credits and lyrics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    Extracted(SongDetail),
    NoArticle
}

impl DetailOutcome {
    pub fn into_detail(self) -> SongDetail {
        match self {
            DetailOutcome::Extracted(detail) => detail,
            DetailOutcome::NoArticle => SongDetail::default(),
        }
    }
}

/// Borrowed view of one export row, fields in column order
#[derive(Debug)]
pub struct CsvRow<'a> {
    pub song: &'a str,
    pub album_name: &'a str,
    pub first_played: &'a str,
    pub last_played: &'a str,
    pub times_played: &'a str,
    pub credits: &'a str,
    pub lyrics: &'a str
}

impl CsvRow<'_> {
    pub fn fields(&self) -> [&str; 7] {
        [
            self.song, self.album_name, self.first_played, self.last_played,
            self.times_played, self.credits, self.lyrics
        ]
    }
}

impl<'a> From<&'a SongRecord> for CsvRow<'a> {
    fn from(r: &'a SongRecord) -> Self {
        Self {
            song: &r.song,
            album_name: &r.album_name,
            first_played: &r.first_played,
            last_played: &r.last_played,
            times_played: &r.times_played,
            credits: r.credits.as_deref().unwrap_or_default(),
            lyrics: r.lyrics.as_deref().unwrap_or_default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SongRecord {
        SongRecord {
            song: "Blue".into(),
            link: "https://example.com/songs/blue".into(),
            album_name: "Colours".into(),
            first_played: "2001-01-01".into(),
            last_played: "2019-05-05".into(),
            times_played: "12".into(),
            credits: None,
            lyrics: None
        }
    }

    #[test]
    fn merge_only_touches_detail_fields() {
        let merged = record().with_detail(SongDetail {
            credits: "Words by A".into(),
            lyrics: "la la".into()
        });
        assert_eq!(merged.song, "Blue");
        assert_eq!(merged.times_played, "12");
        assert_eq!(merged.credits.as_deref(), Some("Words by A"));
        assert_eq!(merged.lyrics.as_deref(), Some("la la"));
    }

    #[test]
    fn no_article_yields_empty_detail() {
        assert_eq!(DetailOutcome::NoArticle.into_detail(), SongDetail::default());
    }

    #[test]
    fn csv_row_fills_missing_detail_with_empty() {
        let r = record();
        let row = CsvRow::from(&r);
        assert_eq!(row.credits, "");
        assert_eq!(row.lyrics, "");
        assert_eq!(row.album_name, "Colours");
        assert_eq!(row.fields(), ["Blue", "Colours", "2001-01-01", "2019-05-05", "12", "", ""]);
    }
}
