// src/sources/unhcr.rs

use anyhow::{ensure, Context, Result};
use csv::ReaderBuilder;
use std::{fs, path::Path};
use tracing::{info, instrument, warn};

use super::{parse_value, skip_lines};
use crate::resolver::CountryResolver;
use crate::table::{Aggregation, Observation, Table, TableBuilder};

const PREAMBLE_LINES: usize = 2;
/// Year, country of asylum, origin.
const KEY_COLUMNS: usize = 3;

/// Load the UNHCR persons-of-concern export.
///
/// Redacted cells (`*`) are missing and never count towards a sum. Countries
/// and origins that cannot be resolved are bucketed as `Various/Unknown`
/// before rows are summed per (Year, Country, Origin).
#[instrument(level = "info", skip(path, resolver), fields(path = %path.as_ref().display()))]
pub fn load_unhcr(path: impl AsRef<Path>, resolver: &CountryResolver, year_limit: i32) -> Result<Table> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading UNHCR export {:?}", path))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(skip_lines(&data, PREAMBLE_LINES));
    let headers = rdr
        .headers()
        .with_context(|| format!("reading header of {:?}", path))?
        .clone();
    ensure!(
        headers.len() > KEY_COLUMNS,
        "{:?} has {} columns, expected Year, Country, Origin and counts",
        path,
        headers.len()
    );
    let variables: Vec<String> = headers
        .iter()
        .skip(KEY_COLUMNS)
        .map(|h| h.trim().to_string())
        .collect();

    let mut builder = TableBuilder::new(true, Aggregation::Sum);
    for variable in &variables {
        builder.column(variable, Aggregation::Sum);
    }

    let mut bad_years = 0usize;
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        let Some(year) = record.get(0).and_then(|y| y.trim().parse::<i32>().ok()) else {
            bad_years += 1;
            continue;
        };
        if year < year_limit {
            continue;
        }
        let country = resolver.resolve_or_unknown(record.get(1).unwrap_or_default());
        let origin = resolver.resolve_or_unknown(record.get(2).unwrap_or_default());

        for (offset, variable) in variables.iter().enumerate() {
            builder.push(
                Observation {
                    year,
                    country: country.clone(),
                    origin: Some(origin.clone()),
                    variable: variable.clone(),
                    value: record.get(KEY_COLUMNS + offset).and_then(parse_value),
                },
                Aggregation::Sum,
            );
        }
    }
    if bad_years > 0 {
        warn!(rows = bad_years, "rows without a numeric year skipped");
    }

    let table = builder.finish();
    info!(rows = table.num_rows(), "loaded UNHCR persons of concern");
    Ok(table)
}
