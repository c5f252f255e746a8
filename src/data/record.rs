//! Title record types.
//!
//! `RawTitle` is what the loader extracts from the CSV; `TitleRecord` is the
//! cleaned form every later stage reads.

use chrono::NaiveDate;

/// Columns the analysis cannot run without.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    "show_id",
    "type",
    "country",
    "date_added",
    "listed_in",
    "rating",
];

/// Separator between genre tags inside `listed_in`.
pub const GENRE_SEPARATOR: &str = ", ";

/// One catalog row as read from disk. Blank cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTitle {
    pub show_id: String,
    pub content_type: Option<String>,
    pub country: Option<String>,
    pub date_added: Option<String>,
    pub listed_in: Option<String>,
    pub rating: Option<String>,
}

/// One catalog row after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleRecord {
    pub show_id: String,
    /// "Movie" or "TV Show" in the reference dataset; not validated.
    pub content_type: Option<String>,
    /// Never empty: missing countries are filled with "Unknown".
    pub country: String,
    pub date_added: Option<NaiveDate>,
    /// Calendar year of `date_added`, present iff the date parsed.
    pub year_added: Option<i32>,
    pub listed_in: Option<String>,
    pub rating: Option<String>,
}

impl TitleRecord {
    /// Genre tokens of this title, in listing order.
    pub fn genres(&self) -> impl Iterator<Item = &str> {
        self.listed_in
            .as_deref()
            .into_iter()
            .flat_map(|listed| listed.split(GENRE_SEPARATOR))
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(listed_in: Option<&str>) -> TitleRecord {
        TitleRecord {
            show_id: "s1".into(),
            content_type: Some("Movie".into()),
            country: "Unknown".into(),
            date_added: None,
            year_added: None,
            listed_in: listed_in.map(String::from),
            rating: None,
        }
    }

    #[test]
    fn genres_split_on_comma_space() {
        let r = record(Some("Dramas, International Movies, Thrillers"));
        let genres: Vec<&str> = r.genres().collect();
        assert_eq!(genres, vec!["Dramas", "International Movies", "Thrillers"]);
    }

    #[test]
    fn missing_genre_string_yields_no_tokens() {
        assert_eq!(record(None).genres().count(), 0);
    }
}
