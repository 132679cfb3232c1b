// src/container/mod.rs

//! Loads every source in a fixed order and merges them into one panel.

use anyhow::{Context, Result};
use std::{fs, path::PathBuf};
use tracing::{info, instrument};

use crate::catalog::IndicatorCatalog;
use crate::climate;
use crate::config::Config;
use crate::resolver::CountryResolver;
use crate::sources;
use crate::table::{self, Table};

/// All normalized source tables.
#[derive(Debug)]
pub struct DataContainer {
    pub oecd: Table,
    pub unhcr: Table,
    pub world_bank: Table,
    pub newspaper: Table,
    pub climate: Table,
}

/// Files written by [`DataContainer::write`].
#[derive(Debug, Default)]
pub struct Outputs {
    pub files: Vec<PathBuf>,
}

impl DataContainer {
    #[instrument(level = "info", skip_all)]
    pub fn load(config: &Config, resolver: &CountryResolver) -> Result<Self> {
        let catalog = IndicatorCatalog::builtin();
        let year_limit = config.year_limit;

        let oecd = sources::load_oecd(&config.oecd_zip, resolver, year_limit)
            .context("loading OECD migration data")?;
        let unhcr = sources::load_unhcr(&config.unhcr_csv, resolver, year_limit)
            .context("loading UNHCR data")?;
        let world_bank = sources::load_world_bank(&config.world_bank_dir, catalog, resolver, year_limit)
            .context("loading World Bank indicators")?;
        let newspaper = sources::load_newspapers(&config.newspaper_dir, resolver, year_limit)
            .context("loading newspaper mentions")?;
        let climate = climate::load_severity(&config.climate, resolver, year_limit)
            .context("loading climate severity index")?;

        Ok(Self {
            oecd,
            unhcr,
            world_bank,
            newspaper,
            climate,
        })
    }

    /// Outer-join OECD, UNHCR, World Bank, newspaper and climate tables, in
    /// that order, and sort the columns into catalogue order.
    pub fn merge(&self) -> Result<Table> {
        let mut merged = self
            .oecd
            .outer_join(&self.unhcr)
            .context("joining UNHCR onto OECD")?
            .outer_join(&self.world_bank)
            .context("joining World Bank")?
            .outer_join(&self.newspaper)
            .context("joining newspaper mentions")?
            .outer_join(&self.climate)
            .context("joining climate severity")?;

        let names = merged.column_names();
        let order = IndicatorCatalog::builtin().order_columns(&names);
        merged.reorder_columns(&order);

        info!(
            rows = merged.num_rows(),
            columns = merged.columns().len(),
            "merged all sources"
        );
        Ok(merged)
    }

    /// Write the merged and the origin-collapsed panel to `config.output_dir`.
    pub fn write(&self, config: &Config) -> Result<Outputs> {
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("creating output directory {:?}", config.output_dir))?;

        let merged = self.merge()?;
        let collapsed = merged.collapse();

        let mut outputs = Outputs::default();
        for (name, table) in [("merged", &merged), ("collapsed", &collapsed)] {
            let csv = config.output_dir.join(format!("{}.csv", name));
            table::write_csv(table, &csv)?;
            outputs.files.push(csv);
            if config.write_parquet {
                let parquet = config.output_dir.join(format!("{}.parquet", name));
                table::write_parquet(table, &parquet)?;
                outputs.files.push(parquet);
            }
        }
        Ok(outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::testutil::write_zip;
    use crate::table::RowKey;
    use std::path::Path;
    use tempfile::tempdir;

    fn fixture(root: &Path) -> Result<Config> {
        let mut config = Config {
            world_bank_dir: root.join("worldbank"),
            unhcr_csv: root.join("unhcr.csv"),
            oecd_zip: root.join("oecd.zip"),
            newspaper_dir: root.join("newspaper"),
            output_dir: root.join("out"),
            write_parquet: true,
            ..Config::default()
        };
        config.climate.cache = Some(root.join("ghcnd_gsn.csv"));

        fs::create_dir_all(&config.world_bank_dir)?;
        write_zip(
            &config.world_bank_dir.join("SP.POP.TOTL_Indicator_en_csv_v2.zip"),
            &[(
                "SP.POP.TOTL_Indicator_en_csv_v2.csv",
                "\"Data Source\",\"WDI\",\n\n\"Last Updated Date\",\"2015-09-18\",\n\n\
\"Country Name\",\"Country Code\",\"Indicator Name\",\"Indicator Code\",\"2000\",\n\
\"Germany\",\"DEU\",\"Population, total\",\"SP.POP.TOTL\",\"82\",\n\
\"Sweden\",\"SWE\",\"Population, total\",\"SP.POP.TOTL\",\"9\",\n",
            )],
        )?;

        fs::write(
            &config.unhcr_csv,
            "preamble\npreamble\nYear,Country / territory of asylum/residence,Origin,Refugees (incl. refugee-like situations),Total Population\n\
2000,Germany,Turkey,10,10\n2000,Germany,Iraq,*,4\n",
        )?;

        write_zip(
            &config.oecd_zip,
            &[(
                "MIG.csv",
                "CO2,Country of origin,Variable,COU,Country,Year,Value,Flags\n\
TUR,Turkey,Inflows of foreign population by nationality,DEU,Germany,2000,100,\n\
POL,Poland,Inflows of foreign population by nationality,DEU,Germany,2000,30,\n",
            )],
        )?;

        fs::create_dir_all(&config.newspaper_dir)?;
        fs::write(config.newspaper_dir.join("NYT_scrape.csv"), ",YEAR,DEU,FRA\n0,2000,5,3\n")?;

        fs::write(root.join("ghcnd_gsn.csv"), "Year,Country,TMAX,Severity\n2000,DEU,2,2\n")?;
        Ok(config)
    }

    #[test]
    fn merges_sources_in_catalogue_order() -> Result<()> {
        crate::init_test_logging();
        let dir = tempdir()?;
        let config = fixture(dir.path())?;

        let container = DataContainer::load(&config, CountryResolver::builtin())?;
        let merged = container.merge()?;

        assert_eq!(
            merged.column_names(),
            vec![
                "SP.POP.TOTL",
                "Refugees (incl. refugee-like situations)",
                "Total Population",
                "Inflows of foreign population by nationality",
                "Mentions_NYT",
                "TMAX",
                "Severity",
            ]
        );
        // DEU x {TUR, IRQ, POL}, SWE and FRA without an origin
        assert_eq!(merged.num_rows(), 5);

        let turkey = RowKey::new(2000, "DEU", Some("TUR".into()));
        assert_eq!(merged.get(&turkey, "Inflows of foreign population by nationality"), Some(100.0));
        assert_eq!(merged.get(&turkey, "Refugees (incl. refugee-like situations)"), Some(10.0));
        assert_eq!(merged.get(&turkey, "SP.POP.TOTL"), Some(82.0));
        assert_eq!(merged.get(&turkey, "Severity"), Some(2.0));
        assert_eq!(merged.get(&RowKey::new(2000, "FRA", None), "Mentions_NYT"), Some(3.0));

        let collapsed = merged.collapse();
        let deu = RowKey::new(2000, "DEU", None);
        assert_eq!(collapsed.get(&deu, "Inflows of foreign population by nationality"), Some(130.0));
        assert_eq!(collapsed.get(&deu, "Total Population"), Some(14.0));
        assert_eq!(collapsed.get(&deu, "Refugees (incl. refugee-like situations)"), Some(10.0));
        assert_eq!(collapsed.get(&deu, "SP.POP.TOTL"), Some(82.0));
        assert_eq!(collapsed.get(&deu, "Mentions_NYT"), Some(5.0));
        assert_eq!(collapsed.num_rows(), 3);
        Ok(())
    }

    #[test]
    fn writes_csv_and_parquet() -> Result<()> {
        let dir = tempdir()?;
        let config = fixture(dir.path())?;
        let container = DataContainer::load(&config, CountryResolver::builtin())?;
        let outputs = container.write(&config)?;

        assert_eq!(outputs.files.len(), 4);
        for file in &outputs.files {
            assert!(file.exists(), "{:?}", file);
        }
        let collapsed = fs::read_to_string(config.output_dir.join("collapsed.csv"))?;
        assert!(collapsed.starts_with("Year,Country,SP.POP.TOTL,"));
        Ok(())
    }
}
