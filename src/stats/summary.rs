//! Summary Statistics Module
//! Textual overview of the catalog: head rows, schema, shape, descriptive
//! statistics, null counts and value counts.

use crate::data::TitleRecord;
use crate::stats::aggregator::Counts;
use polars::prelude::*;
use statrs::statistics::Statistics;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Descriptive statistics for one numeric column.
#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub column: String,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
}

impl Default for ColumnStats {
    fn default() -> Self {
        Self {
            column: String::new(),
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            p25: f64::NAN,
            median: f64::NAN,
            p75: f64::NAN,
            max: f64::NAN,
        }
    }
}

/// Name, dtype and non-null count of a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub column: String,
    pub dtype: String,
    pub non_null: usize,
}

/// Builds and prints the catalog summaries.
pub struct CatalogSummary;

impl CatalogSummary {
    /// Compute count, mean, std, quartiles and range for `values`.
    pub fn compute_descriptive_stats(values: &[f64]) -> ColumnStats {
        let n = values.len();
        if n == 0 {
            return ColumnStats::default();
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        ColumnStats {
            column: String::new(),
            count: n,
            mean: Statistics::mean(values.iter()),
            // Sample standard deviation (n - 1); NaN for a single value.
            std: Statistics::std_dev(values.iter()),
            min: sorted[0],
            p25: Self::percentile(&sorted, 25.0),
            median: Self::percentile(&sorted, 50.0),
            p75: Self::percentile(&sorted, 75.0),
            max: sorted[n - 1],
        }
    }

    /// Quartiles for `describe`, linearly interpolated like NumPy's default.
    fn percentile(sorted_values: &[f64], p: f64) -> f64 {
        let n = sorted_values.len();
        if n == 0 {
            return f64::NAN;
        }
        if n == 1 {
            return sorted_values[0];
        }

        let rank = (p / 100.0) * (n - 1) as f64;
        let lower = rank.floor() as usize;
        let upper = (rank.ceil() as usize).min(n - 1);
        let frac = rank - lower as f64;

        if lower == upper {
            sorted_values[lower]
        } else {
            sorted_values[lower] * (1.0 - frac) + sorted_values[upper] * frac
        }
    }

    /// Descriptive statistics for every numeric column of `df`.
    pub fn describe(df: &DataFrame) -> Result<Vec<ColumnStats>, SummaryError> {
        let mut stats = Vec::new();

        for column in df.get_columns() {
            if !Self::is_numeric(column.dtype()) {
                continue;
            }
            let as_f64 = column.cast(&DataType::Float64)?;
            let values: Vec<f64> = as_f64.f64()?.into_iter().flatten().collect();

            let mut column_stats = Self::compute_descriptive_stats(&values);
            column_stats.column = column.name().to_string();
            stats.push(column_stats);
        }

        Ok(stats)
    }

    /// Schema overview, one entry per column.
    pub fn column_info(df: &DataFrame) -> Vec<ColumnInfo> {
        df.get_columns()
            .iter()
            .map(|column| ColumnInfo {
                column: column.name().to_string(),
                dtype: column.dtype().to_string(),
                non_null: column.len() - column.null_count(),
            })
            .collect()
    }

    /// Null count per column.
    pub fn null_counts(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .map(|column| (column.name().to_string(), column.null_count()))
            .collect()
    }

    fn is_numeric(dtype: &DataType) -> bool {
        matches!(
            dtype,
            DataType::Float32
                | DataType::Float64
                | DataType::Int8
                | DataType::Int16
                | DataType::Int32
                | DataType::Int64
                | DataType::UInt8
                | DataType::UInt16
                | DataType::UInt32
                | DataType::UInt64
        )
    }

    /// Print the overview of the freshly loaded frame.
    pub fn print_overview(df: &DataFrame, head_rows: usize) -> Result<(), SummaryError> {
        println!("{}", df.head(Some(head_rows)));

        println!("Columns ({} entries):", df.height());
        for info in Self::column_info(df) {
            println!("  {:<16} {:>8} non-null  {}", info.column, info.non_null, info.dtype);
        }

        let (rows, cols) = df.shape();
        println!("Shape: ({}, {})", rows, cols);

        let described = Self::describe(df)?;
        if !described.is_empty() {
            println!(
                "{:<16} {:>8} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
                "", "count", "mean", "std", "min", "25%", "50%", "75%", "max"
            );
            for s in &described {
                println!(
                    "{:<16} {:>8} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
                    s.column, s.count, s.mean, s.std, s.min, s.p25, s.median, s.p75, s.max
                );
            }
        }

        println!("Null counts:");
        for (column, nulls) in Self::null_counts(df) {
            println!("  {:<16} {}", column, nulls);
        }

        Ok(())
    }

    /// Print derived `year_added` values and the content type split.
    pub fn print_cleaned(records: &[TitleRecord], by_type: &Counts, head_rows: usize) {
        println!("{:<8} {:<24} year_added", "show_id", "country");
        for record in records.iter().take(head_rows) {
            let year = record
                .year_added
                .map(|y| y.to_string())
                .unwrap_or_else(|| "null".to_string());
            println!("{:<8} {:<24} {}", record.show_id, record.country, year);
        }

        println!("type:");
        for (kind, count) in by_type {
            println!("  {:<16} {}", kind, count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_matches_numpy_quartiles() {
        let stats = CatalogSummary::compute_descriptive_stats(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(stats.count, 4);
        assert!((stats.mean - 2.5).abs() < 1e-12);
        assert!((stats.p25 - 1.75).abs() < 1e-12);
        assert!((stats.median - 2.5).abs() < 1e-12);
        assert!((stats.p75 - 3.25).abs() < 1e-12);
        assert_eq!(stats.min, 1.0);
        assert_eq!(stats.max, 4.0);
        // sample std of 1..=4
        assert!((stats.std - 1.290_994_448_735_805_6).abs() < 1e-9);
    }

    #[test]
    fn empty_column_stats_are_nan() {
        let stats = CatalogSummary::compute_descriptive_stats(&[]);
        assert_eq!(stats.count, 0);
        assert!(stats.mean.is_nan());
    }

    #[test]
    fn describe_skips_text_columns() {
        let df = polars::df!(
            "show_id" => ["s1", "s2", "s3"],
            "release_year" => [Some(2019i64), None, Some(2021)],
        )
        .unwrap();

        let described = CatalogSummary::describe(&df).unwrap();
        assert_eq!(described.len(), 1);
        assert_eq!(described[0].column, "release_year");
        assert_eq!(described[0].count, 2);
        assert!((described[0].mean - 2020.0).abs() < 1e-9);

        let nulls = CatalogSummary::null_counts(&df);
        assert_eq!(nulls, vec![("show_id".to_string(), 0), ("release_year".to_string(), 1)]);

        let info = CatalogSummary::column_info(&df);
        assert_eq!(info[1].non_null, 2);
    }
}
