// src/scrape/progress.rs

//! Per-year scrape results on disk: `country_<year>.json` for resuming and
//! `country_<year>.csv` with the raw per-term counts.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::config::MentionAggregation;
use crate::resolver::CountryResolver;

/// Article counts of every query term for one year.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct YearCounts {
    pub year: i32,
    /// Query term -> hits.
    pub counts: BTreeMap<String, u64>,
    /// Terms that failed after every retry.
    pub unresolved: Vec<String>,
    pub scraped_at: Option<DateTime<Utc>>,
}

impl YearCounts {
    pub fn new(year: i32) -> Self {
        Self {
            year,
            ..Self::default()
        }
    }

    pub fn record(&mut self, term: &str, hits: u64) {
        self.counts.insert(term.to_string(), hits);
    }

    /// One figure per country code: the largest count of its synonyms, or
    /// their mean.
    pub fn aggregate(&self, resolver: &CountryResolver, how: MentionAggregation) -> BTreeMap<String, f64> {
        let mut per_country: BTreeMap<String, (f64, f64, usize)> = BTreeMap::new();
        for (term, &hits) in &self.counts {
            let Some(code) = resolver.resolve(term) else {
                warn!(term = %term, "query term not recognised as a country");
                continue;
            };
            let hits = hits as f64;
            let entry = per_country
                .entry(code.to_string())
                .or_insert((f64::MIN, 0.0, 0));
            entry.0 = entry.0.max(hits);
            entry.1 += hits;
            entry.2 += 1;
        }
        per_country
            .into_iter()
            .map(|(code, (max, sum, n))| {
                let value = match how {
                    MentionAggregation::Max => max,
                    MentionAggregation::Avg => sum / n as f64,
                };
                (code, value)
            })
            .collect()
    }
}

pub fn json_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("country_{}.json", year))
}

pub fn csv_path(dir: &Path, year: i32) -> PathBuf {
    dir.join(format!("country_{}.csv", year))
}

/// Persist one finished year. The JSON file is written to a temp file and
/// renamed so a crash never leaves a half-written year behind.
pub fn save_year(dir: &Path, counts: &YearCounts) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("creating progress directory {:?}", dir))?;

    // 1) raw counts, header = terms
    let csv = csv_path(dir, counts.year);
    let mut writer = csv::Writer::from_path(&csv).with_context(|| format!("creating {:?}", csv))?;
    writer.write_record(counts.counts.keys())?;
    writer.write_record(counts.counts.values().map(|v| v.to_string()))?;
    writer.flush().with_context(|| format!("writing {:?}", csv))?;

    // 2) JSON, atomically
    let path = json_path(dir, counts.year);
    let tmp_path = dir.join(format!(".country_{}.json.tmp", counts.year));
    let mut tmp = fs::File::create(&tmp_path).with_context(|| format!("creating {:?}", tmp_path))?;
    serde_json::to_writer_pretty(&mut tmp, counts).context("serializing year counts")?;
    tmp.write_all(b"\n")?;
    fs::rename(&tmp_path, &path).with_context(|| format!("renaming {:?} to {:?}", tmp_path, path))?;

    debug!(year = counts.year, terms = counts.counts.len(), "saved scrape progress");
    Ok(())
}

pub fn load_year(dir: &Path, year: i32) -> Result<Option<YearCounts>> {
    let path = json_path(dir, year);
    if !path.exists() {
        return Ok(None);
    }
    let file = fs::File::open(&path).with_context(|| format!("opening {:?}", path))?;
    let counts: YearCounts =
        serde_json::from_reader(file).with_context(|| format!("parsing {:?}", path))?;
    Ok(Some(counts))
}

/// Years with a saved JSON progress file.
pub fn completed_years(dir: &Path) -> Result<BTreeSet<i32>> {
    let pattern = format!("{}/country_*.json", dir.display());
    let mut years = BTreeSet::new();
    for entry in glob::glob(&pattern).with_context(|| format!("bad glob pattern {}", pattern))? {
        let Ok(path) = entry else { continue };
        let year = path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|s| s.strip_prefix("country_"))
            .and_then(|s| s.parse::<i32>().ok());
        if let Some(year) = year {
            years.insert(year);
        }
    }
    Ok(years)
}
