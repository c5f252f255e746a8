//! Catalog EDA - exploratory analysis of a streaming title catalog
//!
//! Loads the catalog CSV, cleans it, prints summary statistics and renders
//! the descriptive charts. Runs once, top to bottom.

mod charts;
mod config;
mod data;
mod stats;

use anyhow::{Context, Result};
use charts::{InteractiveChart, StaticChartRenderer};
use data::{CatalogCleaner, CatalogLoader};
use stats::{CatalogAggregator, CatalogSummary};
use std::path::Path;
use std::str::FromStr;
use tracing::{info, Level};

fn main() -> Result<()> {
    let config = config::Config::init().context("Failed to initialize configuration")?;
    init_logging(&config);
    run(&config)
}

fn init_logging(config: &config::Config) {
    tracing_subscriber::fmt()
        .with_max_level(Level::from_str(&config.logs.level).unwrap_or(Level::INFO))
        .init();
}

fn run(config: &config::Config) -> Result<()> {
    let catalog = CatalogLoader::load_csv(&config.input.path)
        .with_context(|| format!("Failed to load catalog from {}", config.input.path))?;
    info!(
        rows = catalog.frame.height(),
        columns = catalog.frame.width(),
        "Catalog loaded"
    );

    CatalogSummary::print_overview(&catalog.frame, config.summary.head_rows)
        .context("Failed to summarize catalog")?;

    let cleaned = CatalogCleaner::clean(catalog.titles);
    info!(
        records = cleaned.records.len(),
        unparsed_dates = cleaned.unparsed_dates,
        "Catalog cleaned"
    );

    let aggregates = CatalogAggregator::compute(&cleaned.records, config.genres.top_n);
    CatalogSummary::print_cleaned(&cleaned.records, &aggregates.by_type, config.summary.head_rows);
    info!(
        types = aggregates.by_type.len(),
        years = aggregates.by_year.len(),
        ratings = aggregates.by_rating.len(),
        "Aggregations computed"
    );

    let out_dir = Path::new(&config.output.dir);
    let mut written = StaticChartRenderer::render_all(&aggregates, out_dir)?;
    written.push(InteractiveChart::write(&aggregates.by_year_and_type, out_dir)?);

    if config.output.open_charts {
        for chart in &written {
            charts::open_chart(chart);
        }
    }

    Ok(())
}
