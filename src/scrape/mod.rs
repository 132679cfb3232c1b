// src/scrape/mod.rs

//! Resumable yearly article-count scrape for every country name.

pub mod api;
pub mod progress;

use anyhow::{Context, Result};
use chrono::Utc;
use std::{collections::BTreeSet, path::Path, time::Duration};
use tracing::{error, info, instrument, warn};

use crate::config::{MentionAggregation, ScrapeConfig};
use crate::resolver::CountryResolver;
pub use api::{is_rate_limited, ArticleSearch, HitSource, RateLimited};
pub use progress::YearCounts;

/// Query every term for one year, one request at a time.
///
/// A failed query is retried up to `max_attempts` times and then recorded as
/// unresolved. A [`RateLimited`] answer aborts immediately.
#[instrument(level = "info", skip(source, terms, config), fields(terms = terms.len()))]
pub async fn scrape_year<S: HitSource>(
    source: &S,
    terms: &[&str],
    year: i32,
    config: &ScrapeConfig,
) -> Result<YearCounts> {
    let delay = Duration::from_millis(config.delay_ms);
    let retry_delay = Duration::from_millis(config.retry_delay_ms);
    let mut counts = YearCounts::new(year);

    for term in terms {
        let mut attempt = 0;
        let mut done = false;
        while attempt < config.max_attempts && !done {
            attempt += 1;
            let result = source.hits(term, year).await;
            tokio::time::sleep(delay).await;
            match result {
                Ok(hits) => {
                    counts.record(term, hits);
                    done = true;
                }
                Err(e) if is_rate_limited(&e) => {
                    return Err(e.context(format!("querying {:?} for {}", term, year)));
                }
                Err(e) => {
                    warn!(term = %term, year, attempt, error = %e, "search failed");
                    tokio::time::sleep(retry_delay).await;
                }
            }
        }
        if !done {
            error!(term = %term, year, "giving up on query");
            counts.unresolved.push(term.to_string());
        }
    }
    counts.scraped_at = Some(Utc::now());
    Ok(counts)
}

/// Scrape `config.first_year..=config.last_year`, resuming from saved years,
/// then write the aggregate mentions CSV.
pub async fn run<S: HitSource>(source: &S, resolver: &CountryResolver, config: &ScrapeConfig) -> Result<()> {
    let raw_dir = config.raw_dir.as_path();
    let done: BTreeSet<i32> = progress::completed_years(raw_dir)?;
    let terms = resolver.country_names();
    info!(
        terms = terms.len(),
        completed = done.len(),
        "starting mention scrape"
    );

    let mut years = Vec::new();
    for year in config.first_year..=config.last_year {
        let counts = match progress::load_year(raw_dir, year)? {
            Some(counts) => {
                info!(year, "loading saved year");
                counts
            }
            None => {
                info!(year, "processing year");
                let counts = scrape_year(source, &terms, year, config).await?;
                progress::save_year(raw_dir, &counts)?;
                counts
            }
        };
        years.push(counts);
    }

    write_mentions(&config.output, &years, resolver, config.aggregation)
}

/// Aggregate CSV: row index, `YEAR`, then one column per country code.
pub fn write_mentions(
    path: impl AsRef<Path>,
    years: &[YearCounts],
    resolver: &CountryResolver,
    how: MentionAggregation,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }

    let mut sorted: Vec<&YearCounts> = years.iter().collect();
    sorted.sort_by_key(|y| y.year);
    let rows: Vec<_> = sorted
        .iter()
        .map(|y| (y.year, y.aggregate(resolver, how)))
        .collect();
    let codes: BTreeSet<&str> = rows
        .iter()
        .flat_map(|(_, values)| values.keys().map(String::as_str))
        .collect();

    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {:?}", path))?;
    let mut header = vec!["", "YEAR"];
    header.extend(codes.iter().copied());
    writer.write_record(&header)?;

    for (idx, (year, values)) in rows.iter().enumerate() {
        let mut record = vec![idx.to_string(), year.to_string()];
        record.extend(
            codes
                .iter()
                .map(|code| values.get(*code).map(|v| v.to_string()).unwrap_or_default()),
        );
        writer.write_record(&record)?;
    }
    writer.flush().with_context(|| format!("writing {:?}", path))?;
    info!(years = rows.len(), countries = codes.len(), path = %path.display(), "wrote mention counts");
    Ok(())
}
