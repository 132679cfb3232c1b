// src/config.rs

//! Run configuration, read from YAML. Every field has a default so a missing
//! file means the stock layout under `data/`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path, path::PathBuf};
use tracing::info;

pub const DEFAULT_CONFIG_FILE: &str = "migration-panel.yaml";

/// Environment variable holding the article search API key.
pub const API_KEY_ENV: &str = "NYT_API_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub world_bank_dir: PathBuf,
    pub unhcr_csv: PathBuf,
    pub oecd_zip: PathBuf,
    pub newspaper_dir: PathBuf,
    pub output_dir: PathBuf,
    pub write_parquet: bool,
    /// Optional GeoNames `countryInfo.txt` adding two-letter codes.
    pub geonames: Option<PathBuf>,
    /// First year kept by every loader.
    pub year_limit: i32,
    pub climate: ClimateConfig,
    pub scrape: ScrapeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            world_bank_dir: PathBuf::from("data/worldbank"),
            unhcr_csv: PathBuf::from("data/unhcr_popstats_export_persons_of_concern.csv"),
            oecd_zip: PathBuf::from("data/oecd_migration.zip"),
            newspaper_dir: PathBuf::from("data/newspaper"),
            output_dir: PathBuf::from("output"),
            write_parquet: false,
            geonames: None,
            year_limit: crate::YEAR_LIMIT,
            climate: ClimateConfig::default(),
            scrape: ScrapeConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClimateConfig {
    /// `.tar.gz` bundle of `<station>.dly` files.
    pub bundle: PathBuf,
    pub stations: PathBuf,
    /// `Country,Latitude,Longitude` lookup.
    pub lat_lon_countries: PathBuf,
    /// Severity table cache; defaults to `ghcnd_gsn.csv` next to the bundle.
    pub cache: Option<PathBuf>,
    /// Ignore an existing cache and recompute.
    pub rebuild: bool,
    pub anomaly_factor: f64,
    /// A series must start no later than this year...
    pub min_first_year: i32,
    /// ...and end no earlier than this one.
    pub min_last_year: i32,
}

impl Default for ClimateConfig {
    fn default() -> Self {
        Self {
            bundle: PathBuf::from("data/climate/ghcnd_gsn.tar.gz"),
            stations: PathBuf::from("data/climate/ghcnd-stations.txt"),
            lat_lon_countries: PathBuf::from("data/climate/LatLon2Country.csv"),
            cache: None,
            rebuild: false,
            anomaly_factor: 1.54,
            min_first_year: 1950,
            min_last_year: 2013,
        }
    }
}

impl ClimateConfig {
    pub fn cache_path(&self) -> PathBuf {
        match &self.cache {
            Some(path) => path.clone(),
            None => self
                .bundle
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("ghcnd_gsn.csv"),
        }
    }
}

/// How a country's synonym counts combine into one yearly figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentionAggregation {
    Max,
    Avg,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub first_year: i32,
    pub last_year: i32,
    /// Pause after every request.
    pub delay_ms: u64,
    /// Pause after a failed request.
    pub retry_delay_ms: u64,
    pub max_attempts: u32,
    /// Per-year progress files.
    pub raw_dir: PathBuf,
    /// Aggregate output, named `<NAME>_scrape.csv`.
    pub output: PathBuf,
    pub aggregation: MentionAggregation,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://api.nytimes.com/svc/search/v2/articlesearch.json".to_string(),
            first_year: 1980,
            last_year: 2014,
            delay_ms: 100,
            retry_delay_ms: 1000,
            max_attempts: 4,
            raw_dir: PathBuf::from("data/newspaper/raw"),
            output: PathBuf::from("data/newspaper/NYT_scrape.csv"),
            aggregation: MentionAggregation::Max,
        }
    }
}

impl Config {
    /// Read `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Config file named by the first CLI argument, or the default file.
    pub fn from_args() -> Result<Self> {
        let path = std::env::args()
            .nth(1)
            .unwrap_or_else(|| DEFAULT_CONFIG_FILE.to_string());
        Self::load(path)
    }
}
