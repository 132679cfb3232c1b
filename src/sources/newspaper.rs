// src/sources/newspaper.rs

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

use super::{file_prefix, files_with_extension, parse_value};
use crate::catalog::MENTIONS_PREFIX;
use crate::resolver::CountryResolver;
use crate::table::{Aggregation, Observation, Table, TableBuilder};

/// Load every `<NAME>_*.csv` mention count in `dir` as a `Mentions_<NAME>`
/// column keyed by (Year, Country).
#[instrument(level = "info", skip(dir, resolver), fields(dir = %dir.as_ref().display()))]
pub fn load_newspapers(dir: impl AsRef<Path>, resolver: &CountryResolver, year_limit: i32) -> Result<Table> {
    let mut builder = TableBuilder::new(false, Aggregation::Mean);
    for path in files_with_extension(dir.as_ref(), "csv")? {
        let Some(name) = file_prefix(&path) else {
            continue;
        };
        let column = format!("{}{}", MENTIONS_PREFIX, name);
        let observations = read_mentions(&path, &column, resolver, year_limit)?;
        debug!(column = %column, rows = observations.len(), "melted mentions");
        builder.column(&column, Aggregation::Mean);
        builder.extend(observations, Aggregation::Mean);
    }
    let table = builder.finish();
    info!(
        newspapers = table.columns().len(),
        rows = table.num_rows(),
        "loaded newspaper mentions"
    );
    Ok(table)
}

/// Columns: row index, `YEAR`, one per country code.
fn read_mentions(
    path: &Path,
    column: &str,
    resolver: &CountryResolver,
    year_limit: i32,
) -> Result<Vec<Observation>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {:?}", path))?;
    let headers = rdr.headers()?.clone();
    let year_col = headers
        .iter()
        .position(|h| h.trim() == "YEAR")
        .with_context(|| format!("{:?} has no YEAR column", path))?;

    // the first column is the row index
    let mut countries: Vec<(usize, String)> = Vec::new();
    for (i, header) in headers.iter().enumerate().skip(1) {
        if i == year_col {
            continue;
        }
        match resolver.resolve(header) {
            Some(code) => countries.push((i, code.to_string())),
            None => warn!(country = header, file = %path.display(), "country not understood, ignoring column"),
        }
    }

    let mut observations = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        let year: i32 = record
            .get(year_col)
            .unwrap_or_default()
            .trim()
            .parse()
            .with_context(|| format!("bad YEAR in {:?} at record {}", path, idx))?;
        if year < year_limit {
            continue;
        }
        for (i, country) in &countries {
            observations.push(Observation {
                year,
                country: country.clone(),
                origin: None,
                variable: column.to_string(),
                value: record.get(*i).and_then(parse_value),
            });
        }
    }
    Ok(observations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RowKey;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn each_file_becomes_a_mentions_column() -> Result<()> {
        crate::init_test_logging();
        let dir = tempdir()?;
        fs::write(
            dir.path().join("NYT_scrape.csv"),
            ",YEAR,DEU,FRA,XYZ\n0,1980,12,7,1\n1,1981,15,,2\n",
        )?;
        fs::write(dir.path().join("GUARDIAN_scrape.csv"), ",YEAR,DEU\n0,1980,3\n")?;

        let table = load_newspapers(dir.path(), CountryResolver::builtin(), 1980)?;

        assert_eq!(table.column_names(), vec!["Mentions_GUARDIAN", "Mentions_NYT"]);
        assert_eq!(table.get(&RowKey::new(1980, "DEU", None), "Mentions_NYT"), Some(12.0));
        assert_eq!(table.get(&RowKey::new(1980, "DEU", None), "Mentions_GUARDIAN"), Some(3.0));
        assert_eq!(table.get(&RowKey::new(1981, "FRA", None), "Mentions_NYT"), None);
        assert_eq!(table.num_rows(), 4);
        Ok(())
    }
}
