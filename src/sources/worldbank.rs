// src/sources/worldbank.rs

use anyhow::{ensure, Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use super::{file_prefix, files_with_extension, open_zip, parse_value, read_entry, skip_lines};
use crate::catalog::IndicatorCatalog;
use crate::resolver::CountryResolver;
use crate::table::{Aggregation, Observation, Table, TableBuilder};

/// Lines before the header in every World Bank CSV export.
const PREAMBLE_LINES: usize = 4;

/// Load every `<INDICATOR>_*.zip` in `dir`. Files whose indicator is not in
/// the catalogue are skipped.
#[instrument(level = "info", skip(dir, catalog, resolver), fields(dir = %dir.as_ref().display()))]
pub fn load_world_bank(
    dir: impl AsRef<Path>,
    catalog: &IndicatorCatalog,
    resolver: &CountryResolver,
    year_limit: i32,
) -> Result<Table> {
    let mut builder = TableBuilder::new(false, Aggregation::Mean);
    let files = files_with_extension(dir.as_ref(), "zip")?;

    for path in &files {
        let Some(prefix) = file_prefix(path) else {
            continue;
        };
        let Some(code) = catalog.indicator_code(&prefix) else {
            warn!(indicator = %prefix, file = %path.display(), "indicator not found in the catalogue, not loading");
            continue;
        };
        let aggregation = catalog
            .category(code)
            .map(|c| c.aggregation())
            .unwrap_or(Aggregation::Mean);
        let observations = read_indicator_zip(path, code, resolver, year_limit)?;
        debug!(indicator = code, rows = observations.len(), "melted indicator");
        builder.column(code, aggregation);
        builder.extend(observations, aggregation);
    }

    let table = builder.finish();
    info!(
        files = files.len(),
        indicators = table.columns().len(),
        rows = table.num_rows(),
        "loaded World Bank indicators"
    );
    Ok(table)
}

/// Melt one indicator download into observations of `code`.
fn read_indicator_zip(
    path: &Path,
    code: &str,
    resolver: &CountryResolver,
    year_limit: i32,
) -> Result<Vec<Observation>> {
    // 1) find the single data entry; metadata files sit next to it
    let mut archive = open_zip(path)?;
    let mut data_entries = Vec::new();
    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .with_context(|| format!("Failed to access ZIP entry #{} in {:?}", i, path))?;
        if !entry.name().starts_with("Metadata") && !entry.name().starts_with('[') {
            data_entries.push(i);
        }
    }
    ensure!(
        data_entries.len() == 1,
        "{:?} holds {} data files, expected exactly one",
        path,
        data_entries.len()
    );
    let (name, data) = read_entry(&mut archive, data_entries[0])?;

    // 2) header after the preamble, years as columns
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(skip_lines(&data, PREAMBLE_LINES));
    let headers = rdr
        .headers()
        .with_context(|| format!("reading header of {} in {:?}", name, path))?
        .clone();
    let country_col = headers
        .iter()
        .position(|h| h.trim() == "Country Code")
        .with_context(|| format!("{} in {:?} has no Country Code column", name, path))?;
    let years: Vec<(usize, i32)> = headers
        .iter()
        .enumerate()
        .filter_map(|(i, h)| {
            let h = h.trim();
            if h.is_empty() || !h.chars().all(|c| c.is_ascii_digit()) {
                return None;
            }
            h.parse::<i32>().ok().map(|y| (i, y))
        })
        .filter(|(_, year)| *year >= year_limit)
        .collect();

    // 3) melt
    let mut observations = Vec::new();
    let mut skipped = 0usize;
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error in {} at record {}", name, idx))?;
        let raw_country = record.get(country_col).unwrap_or_default();
        let Some(country) = resolver.resolve(raw_country) else {
            debug!(country = raw_country, "country not understood, ignoring");
            skipped += 1;
            continue;
        };
        for &(col, year) in &years {
            observations.push(Observation {
                year,
                country: country.to_string(),
                origin: None,
                variable: code.to_string(),
                value: record.get(col).and_then(parse_value),
            });
        }
    }
    if skipped > 0 {
        debug!(skipped, indicator = code, "rows with unresolved country codes");
    }
    Ok(observations)
}
