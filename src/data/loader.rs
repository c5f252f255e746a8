//! CSV Data Loader Module
//! Reads the title catalog with Polars and validates it into typed records.

use crate::data::record::{RawTitle, REQUIRED_COLUMNS};
use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Catalog file not found: {0}")]
    NotFound(String),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Required column '{0}' is missing from the catalog")]
    MissingColumn(String),
}

/// The catalog as loaded: the raw frame (for textual summaries) and the
/// typed rows extracted from it.
pub struct LoadedCatalog {
    pub frame: DataFrame,
    pub titles: Vec<RawTitle>,
}

/// Loads the catalog CSV with Polars.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load a CSV file and extract one `RawTitle` per row.
    ///
    /// Fails on a missing file, a malformed table or an absent required
    /// column; nothing is partially loaded.
    pub fn load_csv(file_path: &str) -> Result<LoadedCatalog, LoaderError> {
        if !Path::new(file_path).is_file() {
            return Err(LoaderError::NotFound(file_path.to_string()));
        }

        let frame = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(10000))
            .finish()?
            .collect()?;
        debug!(rows = frame.height(), columns = frame.width(), "CSV parsed");

        Self::validate_columns(&frame)?;
        let titles = Self::extract_titles(&frame)?;

        Ok(LoadedCatalog { frame, titles })
    }

    /// Check that every required column is present.
    pub fn validate_columns(frame: &DataFrame) -> Result<(), LoaderError> {
        let names = frame.get_column_names();
        for required in REQUIRED_COLUMNS {
            if !names.iter().any(|name| name.as_str() == required) {
                return Err(LoaderError::MissingColumn(required.to_string()));
            }
        }
        Ok(())
    }

    fn extract_titles(frame: &DataFrame) -> Result<Vec<RawTitle>, LoaderError> {
        let show_ids = Self::string_values(frame, "show_id")?;
        let types = Self::string_values(frame, "type")?;
        let countries = Self::string_values(frame, "country")?;
        let dates = Self::string_values(frame, "date_added")?;
        let genres = Self::string_values(frame, "listed_in")?;
        let ratings = Self::string_values(frame, "rating")?;

        let titles = show_ids
            .into_iter()
            .zip(types)
            .zip(countries)
            .zip(dates)
            .zip(genres)
            .zip(ratings)
            .map(
                |(((((show_id, content_type), country), date_added), listed_in), rating)| {
                    RawTitle {
                        show_id: show_id.unwrap_or_default(),
                        content_type,
                        country,
                        date_added,
                        listed_in,
                        rating,
                    }
                },
            )
            .collect();

        Ok(titles)
    }

    /// Column values as strings, kept verbatim; nulls and blank cells become `None`.
    fn string_values(frame: &DataFrame, column: &str) -> Result<Vec<Option<String>>, LoaderError> {
        let as_str = frame.column(column)?.cast(&DataType::String)?;
        let values = as_str
            .str()?
            .into_iter()
            .map(|value| {
                value
                    .filter(|v| !v.trim().is_empty())
                    .map(str::to_string)
            })
            .collect();
        Ok(values)
    }
}
