// src/climate/mod.rs

//! Climate severity index from GHCN-Daily station readings.

pub mod archive;
pub mod dly;
pub mod severity;
pub mod stations;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::{info, instrument, warn};

use crate::config::ClimateConfig;
use crate::resolver::CountryResolver;
use crate::table::{self, Aggregation, Table};
pub use severity::{classify_series, classify_station, SeverityIndex, SeverityParams};
pub use stations::StationMap;

/// Tracked GHCN-Daily elements, in output order.
pub const ELEMENTS: &[&str] = &["PRCP", "SNOW", "SNWD", "TMAX", "TMIN", "AWND"];

/// Severity table keyed by (Year, Country). Reads the CSV cache when present
/// unless `config.rebuild` is set; otherwise computes it from the bundle and
/// writes the cache.
#[instrument(level = "info", skip_all, fields(bundle = %config.bundle.display()))]
pub fn load_severity(config: &ClimateConfig, resolver: &CountryResolver, year_limit: i32) -> Result<Table> {
    let cache = config.cache_path();
    if cache.exists() && !config.rebuild {
        info!(cache = %cache.display(), "loading severity index from cache");
        let mut table = table::read_csv(&cache, |_| Aggregation::Mean)
            .with_context(|| format!("reading severity cache {:?}", cache))?;
        table.retain_years(year_limit);
        return Ok(table);
    }

    let stations = StationMap::load(&config.stations, &config.lat_lon_countries, resolver)?;
    let params = SeverityParams::from_config(config, year_limit);
    let table = build_severity(&config.bundle, &stations, &params)?;
    table::write_csv(&table, &cache)?;
    Ok(table)
}

/// Compute the severity index from a `.tar.gz` bundle of station files.
pub fn build_severity(bundle: impl AsRef<Path>, stations: &StationMap, params: &SeverityParams) -> Result<Table> {
    let mut index = SeverityIndex::new();
    let mut unmapped = 0usize;

    let read = archive::for_each_station(
        bundle,
        |station| {
            let mapped = stations.country(station).is_some();
            if !mapped {
                unmapped += 1;
            }
            mapped
        },
        |station, readings| {
            let Some(country) = stations.country(station) else {
                return Ok(());
            };
            let flags = classify_station(&readings, params);
            index.add_station(country, &flags);
            Ok(())
        },
    )?;

    if unmapped > 0 {
        warn!(unmapped, "station files without a country skipped");
    }
    info!(
        stations = read,
        contributing = index.stations(),
        "classified climate stations"
    );
    index.finish(params.year_limit)
}

#[cfg(test)]
mod tests {
    use super::archive::testutil::write_bundle;
    use super::dly::testutil::dly_line;
    use super::*;
    use crate::catalog::SEVERITY_COLUMN;
    use crate::table::RowKey;
    use std::fs;
    use tempfile::tempdir;

    /// A long TMAX series, hot in `hot_year`, for one January.
    fn station_file(station: &str, hot_year: i32) -> String {
        (1950..=2013)
            .map(|year| {
                let value = if year == hot_year { 400 } else { 200 + (year % 3) };
                dly_line(station, year, 1, "TMAX", &[(value, ' ')])
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn fixture(dir: &Path) -> Result<ClimateConfig> {
        let bundle = dir.join("ghcnd_gsn.tar.gz");
        write_bundle(
            &bundle,
            &[
                ("ghcnd_gsn/GM000003342.dly", station_file("GM000003342", 1995)),
                ("ghcnd_gsn/GM000004204.dly", station_file("GM000004204", 1995)),
                ("ghcnd_gsn/FR000007150.dly", station_file("FR000007150", 2001)),
                ("ghcnd_gsn/XX000000001.dly", station_file("XX000000001", 2001)),
            ],
        )?;
        let stations = dir.join("ghcnd-stations.txt");
        fs::write(
            &stations,
            "ACW00011604  17.1167  -61.7833   10.1    ST JOHNS COOLIDGE FLD
GM000003342  50.0500    8.6000  112.0    FRANKFURT/MAIN
GM000004204  52.4667   13.4000   50.0    BERLIN
FR000007150  48.9667    2.4500   52.0    PARIS/LE BOURGET
",
        )?;
        let lat_lon = dir.join("LatLon2Country.csv");
        fs::write(
            &lat_lon,
            "Country,Latitude,Longitude\nGermany,50.0500,8.6000\nGermany,52.4667,13.4000\nFrance,48.9667,2.4500\n",
        )?;
        Ok(ClimateConfig {
            bundle,
            stations,
            lat_lon_countries: lat_lon,
            ..ClimateConfig::default()
        })
    }

    #[test]
    fn builds_index_and_reuses_cache() -> Result<()> {
        crate::init_test_logging();
        let dir = tempdir()?;
        let config = fixture(dir.path())?;

        let table = load_severity(&config, CountryResolver::builtin(), 1980)?;
        assert!(config.cache_path().exists());

        let hot = RowKey::new(1995, "DEU", None);
        assert_eq!(table.get(&hot, "TMAX"), Some(1.0));
        assert_eq!(table.get(&hot, SEVERITY_COLUMN), Some(1.0));
        assert_eq!(table.get(&hot, "PRCP"), None);
        assert_eq!(table.get(&RowKey::new(2001, "FRA", None), "TMAX"), Some(1.0));
        assert!(table.rows().all(|(key, _)| key.year >= 1980));
        assert!(table.rows().all(|(key, _)| key.country == "DEU" || key.country == "FRA"));

        // a second load reads the cache, even with the bundle gone
        fs::remove_file(&config.bundle)?;
        let cached = load_severity(&config, CountryResolver::builtin(), 1980)?;
        assert_eq!(cached.num_rows(), table.num_rows());
        assert_eq!(cached.get(&hot, SEVERITY_COLUMN), Some(1.0));
        Ok(())
    }

    #[test]
    fn rebuild_ignores_cache() -> Result<()> {
        let dir = tempdir()?;
        let config = ClimateConfig {
            rebuild: true,
            ..fixture(dir.path())?
        };
        fs::write(config.cache_path(), "Year,Country,Severity\n1990,DEU,99\n")?;
        let table = load_severity(&config, CountryResolver::builtin(), 1980)?;
        assert_ne!(table.get(&RowKey::new(1990, "DEU", None), SEVERITY_COLUMN), Some(99.0));
        Ok(())
    }
}
