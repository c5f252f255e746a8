//! Aggregator Module
//! Grouped counts over the cleaned catalog: by type, year, genre and rating.

use crate::data::TitleRecord;
use std::collections::{BTreeMap, HashMap};

/// Label/count pairs in presentation order.
pub type Counts = Vec<(String, usize)>;

/// Year -> title count, ascending by year.
pub type YearCounts = BTreeMap<i32, usize>;

/// Every aggregation the charts and summaries consume.
#[derive(Debug, Clone, Default)]
pub struct CatalogAggregates {
    pub by_type: Counts,
    pub by_year: YearCounts,
    pub top_genres: Counts,
    pub by_rating: Counts,
    /// Per content type (first-encountered order), titles added per year.
    pub by_year_and_type: Vec<(String, YearCounts)>,
}

/// Single-pass counting reductions.
pub struct CatalogAggregator;

impl CatalogAggregator {
    /// Compute all aggregations for `records`.
    pub fn compute(records: &[TitleRecord], top_n: usize) -> CatalogAggregates {
        CatalogAggregates {
            by_type: Self::count_by_type(records),
            by_year: Self::count_by_year(records),
            top_genres: Self::top_genres(records, top_n),
            by_rating: Self::count_by_rating(records),
            by_year_and_type: Self::count_by_year_and_type(records),
        }
    }

    /// Titles per content type, most frequent first.
    pub fn count_by_type(records: &[TitleRecord]) -> Counts {
        Self::by_frequency(Self::count_in_order(
            records.iter().filter_map(|r| r.content_type.as_deref()),
        ))
    }

    /// Titles per `year_added`; records without a year are not counted.
    pub fn count_by_year(records: &[TitleRecord]) -> YearCounts {
        let mut counts = YearCounts::new();
        for year in records.iter().filter_map(|r| r.year_added) {
            *counts.entry(year).or_insert(0) += 1;
        }
        counts
    }

    /// The `n` most frequent genre tokens across all titles.
    ///
    /// Equal counts keep the order in which the genres were first seen.
    pub fn top_genres(records: &[TitleRecord], n: usize) -> Counts {
        let mut counts =
            Self::by_frequency(Self::count_in_order(records.iter().flat_map(TitleRecord::genres)));
        counts.truncate(n);
        counts
    }

    /// Titles per rating code, most frequent first.
    pub fn count_by_rating(records: &[TitleRecord]) -> Counts {
        Self::by_frequency(Self::count_in_order(
            records.iter().filter_map(|r| r.rating.as_deref()),
        ))
    }

    /// Year counts split by content type.
    pub fn count_by_year_and_type(records: &[TitleRecord]) -> Vec<(String, YearCounts)> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut split: Vec<(String, YearCounts)> = Vec::new();

        for record in records {
            let (Some(kind), Some(year)) = (record.content_type.as_deref(), record.year_added)
            else {
                continue;
            };
            let slot = *index.entry(kind).or_insert_with(|| {
                split.push((kind.to_string(), YearCounts::new()));
                split.len() - 1
            });
            *split[slot].1.entry(year).or_insert(0) += 1;
        }

        split
    }

    /// Occurrence counts in first-encountered order.
    fn count_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Counts {
        let mut index: HashMap<&'a str, usize> = HashMap::new();
        let mut counts: Counts = Vec::new();

        for value in values {
            match index.get(value) {
                Some(&slot) => counts[slot].1 += 1,
                None => {
                    index.insert(value, counts.len());
                    counts.push((value.to_string(), 1));
                }
            }
        }

        counts
    }

    // Stable sort: ties stay in first-encountered order.
    fn by_frequency(mut counts: Counts) -> Counts {
        counts.sort_by(|a, b| b.1.cmp(&a.1));
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title(
        content_type: Option<&str>,
        year: Option<i32>,
        listed_in: Option<&str>,
        rating: Option<&str>,
    ) -> TitleRecord {
        TitleRecord {
            show_id: "s".into(),
            content_type: content_type.map(String::from),
            country: "Unknown".into(),
            date_added: year.and_then(|y| chrono::NaiveDate::from_ymd_opt(y, 1, 1)),
            year_added: year,
            listed_in: listed_in.map(String::from),
            rating: rating.map(String::from),
        }
    }

    fn labels(counts: &Counts) -> Vec<&str> {
        counts.iter().map(|(label, _)| label.as_str()).collect()
    }

    #[test]
    fn genre_tokens_are_flattened_and_ranked() {
        let records = vec![
            title(None, None, Some("Drama, International"), None),
            title(None, None, Some("Drama, Comedy"), None),
            title(None, None, None, None),
        ];
        let top = CatalogAggregator::top_genres(&records, 10);
        assert_eq!(
            top,
            vec![
                ("Drama".to_string(), 2),
                ("International".to_string(), 1),
                ("Comedy".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_genres_keeps_only_n() {
        let records: Vec<TitleRecord> = (0..15)
            .map(|i| title(None, None, Some(&format!("Genre {i}")), None))
            .collect();
        let top = CatalogAggregator::top_genres(&records, 10);
        assert_eq!(top.len(), 10);
        assert_eq!(top[0].0, "Genre 0");
        assert_eq!(top[9].0, "Genre 9");
    }

    #[test]
    fn years_group_and_skip_missing() {
        let records = vec![
            title(None, Some(2019), None, None),
            title(None, Some(2019), None, None),
            title(None, Some(2020), None, None),
            title(None, None, None, None),
        ];
        let by_year = CatalogAggregator::count_by_year(&records);
        assert_eq!(by_year, BTreeMap::from([(2019, 2), (2020, 1)]));
    }

    #[test]
    fn ratings_ordered_by_frequency() {
        let records = vec![
            title(None, None, None, Some("R")),
            title(None, None, None, Some("PG")),
            title(None, None, None, Some("PG")),
            title(None, None, None, None),
        ];
        let by_rating = CatalogAggregator::count_by_rating(&records);
        assert_eq!(labels(&by_rating), vec!["PG", "R"]);
        assert_eq!(by_rating[0].1, 2);
    }

    #[test]
    fn type_split_counts_each_value() {
        let records = vec![
            title(Some("Movie"), None, None, None),
            title(Some("TV Show"), None, None, None),
            title(Some("Movie"), None, None, None),
        ];
        let by_type = CatalogAggregator::count_by_type(&records);
        assert_eq!(
            by_type,
            vec![("Movie".to_string(), 2), ("TV Show".to_string(), 1)]
        );
    }

    #[test]
    fn year_and_type_split_needs_both_fields() {
        let records = vec![
            title(Some("TV Show"), Some(2019), None, None),
            title(Some("Movie"), Some(2019), None, None),
            title(Some("Movie"), Some(2021), None, None),
            title(Some("Movie"), None, None, None),
            title(None, Some(2021), None, None),
        ];
        let split = CatalogAggregator::count_by_year_and_type(&records);
        assert_eq!(split.len(), 2);
        assert_eq!(split[0].0, "TV Show");
        assert_eq!(split[0].1, BTreeMap::from([(2019, 1)]));
        assert_eq!(split[1].0, "Movie");
        assert_eq!(split[1].1, BTreeMap::from([(2019, 1), (2021, 1)]));
    }
}
