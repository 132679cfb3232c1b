// src/sources/oecd.rs

use anyhow::{ensure, Context, Result};
use csv::{ReaderBuilder, StringRecord};
use std::{collections::BTreeMap, path::Path};
use tracing::{info, instrument};

use super::{open_zip, parse_value, read_entry};
use crate::resolver::{CountryResolver, UNKNOWN_COUNTRY};
use crate::table::{Accumulator, Aggregation, Observation, Table, TableBuilder};

/// Positions of the columns the loader reads.
struct Layout {
    origin_code: usize,
    origin_name: usize,
    variable: usize,
    country_code: usize,
    country_name: usize,
    year: usize,
    value: usize,
    flags: usize,
}

impl Layout {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers
                .iter()
                .position(|h| clean_header(h) == name)
                .with_context(|| format!("OECD table has no `{}` column", name))
        };
        Ok(Self {
            origin_code: find("CO2")?,
            origin_name: find("Country of origin")?,
            variable: find("Variable")?,
            country_code: find("COU")?,
            country_name: find("Country")?,
            year: find("Year")?,
            value: find("Value")?,
            flags: find("Flags")?,
        })
    }
}

/// Cell identity as written in the export, before country resolution.
/// Country and origin are (name, code) pairs.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct RawKey {
    year: i32,
    country: (String, String),
    origin: (String, String),
    variable: String,
}

/// Header cells may carry a BOM and literal quotes, e.g. `"CO2"`.
fn clean_header(h: &str) -> &str {
    h.trim_start_matches('\u{feff}').trim().trim_matches('"')
}

/// Load the OECD international migration database export (zipped CSV).
///
/// Flagged rows (breaks, estimates) are dropped and duplicate cells are
/// averaged. Distinct raw origins or countries resolving to the same code,
/// `Various/Unknown` included, are then summed. Every variable becomes one
/// column keyed by (Year, Country, Origin).
#[instrument(level = "info", skip(path, resolver), fields(path = %path.as_ref().display()))]
pub fn load_oecd(path: impl AsRef<Path>, resolver: &CountryResolver, year_limit: i32) -> Result<Table> {
    let path = path.as_ref();
    let mut archive = open_zip(path)?;
    ensure!(archive.len() > 0, "{:?} is an empty ZIP archive", path);
    let (name, data) = read_entry(&mut archive, 0)?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(data.as_slice());
    let headers = rdr
        .headers()
        .with_context(|| format!("reading header of {} in {:?}", name, path))?
        .clone();
    let layout = Layout::from_headers(&headers).with_context(|| format!("{} in {:?}", name, path))?;

    // 1) mean of duplicate cells, keyed on the raw names and codes
    let mut cells: BTreeMap<RawKey, Accumulator> = BTreeMap::new();
    let mut flagged = 0usize;
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("CSV parse error in {} at record {}", name, idx))?;
        let field = |i: usize| record.get(i).unwrap_or_default().trim();

        if !field(layout.flags).is_empty() {
            flagged += 1;
            continue;
        }
        let year: i32 = field(layout.year)
            .parse()
            .with_context(|| format!("bad Year `{}` in {} at record {}", field(layout.year), name, idx))?;
        if year < year_limit {
            continue;
        }

        let key = RawKey {
            year,
            country: (field(layout.country_name).to_string(), field(layout.country_code).to_string()),
            origin: (field(layout.origin_name).to_string(), field(layout.origin_code).to_string()),
            variable: field(layout.variable).to_string(),
        };
        let cell = cells.entry(key).or_default();
        if let Some(value) = parse_value(field(layout.value)) {
            cell.add(value);
        }
    }

    // 2) resolve, then sum cells that land on the same code or the unknown bucket
    let resolve = |(name, code): &(String, String)| -> String {
        resolver
            .resolve(name)
            .or_else(|| resolver.resolve(code))
            .unwrap_or(UNKNOWN_COUNTRY)
            .to_string()
    };
    let mut builder = TableBuilder::new(true, Aggregation::Sum);
    for (key, cell) in &cells {
        builder.push(
            Observation {
                year: key.year,
                country: resolve(&key.country),
                origin: Some(resolve(&key.origin)),
                variable: key.variable.clone(),
                value: Aggregation::Mean.finish(cell),
            },
            Aggregation::Sum,
        );
    }

    let table = builder.finish();
    info!(
        rows = table.num_rows(),
        variables = table.columns().len(),
        flagged,
        "loaded OECD migration database"
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::write_zip;
    use crate::table::RowKey;
    use tempfile::tempdir;

    const MIG_CSV: &str = "\u{feff}\"\"\"CO2\"\"\",Country of origin,VAR,Variable,GEN,Gender,COU,Country,YEA,Year,Value,Flag Codes,Flags
TUR,Turkey,B11,Inflows of foreign population by nationality,TOT,Total,DEU,Germany,2000,2000,100,,
TUR,Turkey,B11,Inflows of foreign population by nationality,TOT,Total,DEU,Germany,2000,2000,300,,
POL,Poland,B11,Inflows of foreign population by nationality,TOT,Total,DEU,Germany,2000,2000,50,B,Break
XXA,Stateless,B14,Stock of foreign population by nationality,TOT,Total,DEU,Germany,2001,2001,7,,
TUR,Turkey,B11,Inflows of foreign population by nationality,TOT,Total,DEU,Germany,1975,1975,9,,
";

    #[test]
    fn drops_flagged_rows_and_averages_duplicates() -> Result<()> {
        crate::init_test_logging();
        let dir = tempdir()?;
        let path = dir.path().join("MIG.zip");
        write_zip(&path, &[("MIG_Data.csv", MIG_CSV)])?;

        let table = load_oecd(&path, CountryResolver::builtin(), 1980)?;

        let inflows = "Inflows of foreign population by nationality";
        assert_eq!(table.get(&RowKey::new(2000, "DEU", Some("TUR".into())), inflows), Some(200.0));
        assert!(table.row(&RowKey::new(2000, "DEU", Some("POL".into()))).is_none());
        assert_eq!(
            table.get(
                &RowKey::new(2001, "DEU", Some(UNKNOWN_COUNTRY.into())),
                "Stock of foreign population by nationality"
            ),
            Some(7.0)
        );
        assert!(table.row(&RowKey::new(1975, "DEU", Some("TUR".into()))).is_none());
        assert_eq!(table.columns()[0].aggregation, Aggregation::Sum);
        Ok(())
    }

    #[test]
    fn distinct_unknown_origins_add_up() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("MIG.zip");
        write_zip(
            &path,
            &[(
                "MIG_Data.csv",
                "CO2,Country of origin,Variable,COU,Country,Year,Value,Flags
XXA,Stateless,Inflows of foreign population by nationality,DEU,Germany,2001,7,
XXZ,Not stated,Inflows of foreign population by nationality,DEU,Germany,2001,3,
XXZ,Not stated,Inflows of foreign population by nationality,DEU,Germany,2001,5,
TUR,Turkey,Inflows of foreign population by nationality,DEU,Germany,2001,10,
",
            )],
        )?;

        let table = load_oecd(&path, CountryResolver::builtin(), 1980)?;

        let inflows = "Inflows of foreign population by nationality";
        let unknown = RowKey::new(2001, "DEU", Some(UNKNOWN_COUNTRY.into()));
        // Stateless 7 + mean(3, 5) for Not stated
        assert_eq!(table.get(&unknown, inflows), Some(11.0));
        assert_eq!(table.get(&RowKey::new(2001, "DEU", Some("TUR".into())), inflows), Some(10.0));
        assert_eq!(table.collapse().get(&RowKey::new(2001, "DEU", None), inflows), Some(21.0));
        Ok(())
    }
}
