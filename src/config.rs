//! Runtime configuration.
//!
//! Defaults reproduce the fixed behaviour of the analysis (input file in the
//! working directory, charts opened after rendering). An optional TOML file and
//! `CATALOG_EDA__*` environment variables override them.

use serde::Deserialize;

const DEFAULT_CONFIG_PATH: &str = "./catalog_eda.toml";

impl Config {
    pub fn init() -> Result<Self, config::ConfigError> {
        let config_path = std::env::var("CATALOG_EDA_CONFIG_PATH")
            .unwrap_or_else(|_| String::from(DEFAULT_CONFIG_PATH));

        let config = config::Config::builder()
            .set_default("input.path", "netflix_titles.csv")?
            .set_default("output.dir", "charts")?
            .set_default("output.open_charts", true)?
            .set_default("logs.level", "info")?
            .set_default("summary.head_rows", 5)?
            .set_default("genres.top_n", 10)?
            .add_source(config::File::with_name(&config_path).required(false))
            // e.g. CATALOG_EDA__INPUT__PATH=titles.csv
            .add_source(config::Environment::with_prefix("CATALOG_EDA").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

// ================================================================================================
// Models
// ================================================================================================

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub input: InputConfig,
    pub output: OutputConfig,
    pub logs: LogsConfig,
    pub summary: SummaryConfig,
    pub genres: GenresConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// CSV file holding one title per row.
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the rendered charts. Created when missing.
    pub dir: String,
    /// Open each chart with the system viewer once written.
    pub open_charts: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogsConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SummaryConfig {
    pub head_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenresConfig {
    pub top_n: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_file() {
        let config = Config::init().unwrap();
        assert_eq!(config.input.path, "netflix_titles.csv");
        assert_eq!(config.output.dir, "charts");
        assert!(config.output.open_charts);
        assert_eq!(config.summary.head_rows, 5);
        assert_eq!(config.genres.top_n, 10);
    }
}
