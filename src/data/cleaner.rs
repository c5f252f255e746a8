//! Data Cleaner Module
//! Fills missing countries, parses `date_added` and derives `year_added`.

use crate::data::record::{RawTitle, TitleRecord};
use chrono::{Datelike, NaiveDate};

/// Filler for titles without a country.
pub const UNKNOWN_COUNTRY: &str = "Unknown";

/// Accepted `date_added` layouts, tried in order.
const DATE_FORMATS: [&str; 5] = ["%B %d, %Y", "%b %d, %Y", "%Y-%m-%d", "%d %B %Y", "%m/%d/%Y"];

/// Records after cleaning, plus how many non-empty dates were dropped.
#[derive(Debug, Clone)]
pub struct CleanedCatalog {
    pub records: Vec<TitleRecord>,
    pub unparsed_dates: usize,
}

/// Total cleaning functions over the loaded titles.
pub struct CatalogCleaner;

impl CatalogCleaner {
    /// Clean every title. Never fails: unparseable dates become `None`.
    pub fn clean(titles: Vec<RawTitle>) -> CleanedCatalog {
        let mut unparsed_dates = 0;

        let records = titles
            .into_iter()
            .map(|raw| {
                let date_added = Self::parse_date_added(raw.date_added.as_deref());
                if raw.date_added.is_some() && date_added.is_none() {
                    unparsed_dates += 1;
                }

                TitleRecord {
                    show_id: raw.show_id,
                    content_type: raw.content_type,
                    country: Self::fill_country(raw.country),
                    year_added: date_added.map(|date| date.year()),
                    date_added,
                    listed_in: raw.listed_in,
                    rating: raw.rating,
                }
            })
            .collect();

        CleanedCatalog {
            records,
            unparsed_dates,
        }
    }

    /// Missing or blank countries become "Unknown".
    pub fn fill_country(country: Option<String>) -> String {
        country
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_COUNTRY.to_string())
    }

    /// Parse free-text dates such as "September 25, 2021".
    pub fn parse_date_added(raw: Option<&str>) -> Option<NaiveDate> {
        let text = raw?.trim();
        if text.is_empty() {
            return None;
        }
        DATE_FORMATS
            .iter()
            .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
    }
}
