// src/climate/severity.rs

//! Anomaly classification and the per-country severity index.
//!
//! Every (station, element, month) series is compared year by year against
//! the mean and population standard deviation of all strictly earlier years.
//! Flags are averaged over a country's stations, rounded, summed over the
//! twelve months per element and over the elements for the total.

use anyhow::Result;
use std::collections::BTreeMap;

use super::dly::MonthlyReading;
use super::ELEMENTS;
use crate::catalog::SEVERITY_COLUMN;
use crate::config::ClimateConfig;
use crate::table::{Aggregation, Column, RowKey, Table};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityParams {
    pub factor: f64,
    pub min_first_year: i32,
    pub min_last_year: i32,
    pub year_limit: i32,
}

impl SeverityParams {
    pub fn from_config(config: &ClimateConfig, year_limit: i32) -> Self {
        Self {
            factor: config.anomaly_factor,
            min_first_year: config.min_first_year,
            min_last_year: config.min_last_year,
            year_limit,
        }
    }
}

impl Default for SeverityParams {
    fn default() -> Self {
        Self::from_config(&ClimateConfig::default(), crate::YEAR_LIMIT)
    }
}

/// Welford running mean and population variance.
#[derive(Debug, Default, Clone, Copy)]
struct Trailing {
    n: usize,
    mean: f64,
    m2: f64,
}

impl Trailing {
    fn add(&mut self, value: f64) {
        self.n += 1;
        let diff_a = value - self.mean;
        self.mean += diff_a / self.n as f64;
        let diff_b = value - self.mean;
        self.m2 += diff_a * diff_b;
    }

    fn std_dev(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            (self.m2 / self.n as f64).sqrt()
        }
    }
}

/// Flag each year of a series sorted by year with one value per year.
/// The first year has no baseline and is never anomalous.
pub fn classify_series(series: &[(i32, f64)], factor: f64) -> Vec<(i32, bool)> {
    let mut trailing = Trailing::default();
    let mut flags = Vec::with_capacity(series.len());
    for &(year, value) in series {
        let anomalous = if trailing.n == 0 {
            false
        } else {
            let band = factor * trailing.std_dev();
            value > trailing.mean + band || value < trailing.mean - band
        };
        flags.push((year, anomalous));
        trailing.add(value);
    }
    flags
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthFlag {
    /// Index into [`ELEMENTS`].
    pub element: usize,
    pub year: i32,
    pub month: u32,
    pub anomalous: bool,
}

/// Classify all readings of one station. Element series that start after
/// `min_first_year` or end before `min_last_year` are dropped.
pub fn classify_station(readings: &[MonthlyReading], params: &SeverityParams) -> Vec<MonthFlag> {
    // element -> month -> year -> (sum, n)
    let mut series: BTreeMap<usize, BTreeMap<u32, BTreeMap<i32, (f64, usize)>>> = BTreeMap::new();
    for reading in readings {
        let cell = series
            .entry(reading.element)
            .or_default()
            .entry(reading.month)
            .or_default()
            .entry(reading.year)
            .or_insert((0.0, 0));
        cell.0 += reading.value;
        cell.1 += 1;
    }

    let mut flags = Vec::new();
    for (element, months) in series {
        let first = months.values().filter_map(|y| y.keys().next()).min();
        let last = months.values().filter_map(|y| y.keys().next_back()).max();
        match (first, last) {
            (Some(&first), Some(&last))
                if first <= params.min_first_year && last >= params.min_last_year => {}
            _ => continue,
        }

        for (month, years) in months {
            let values: Vec<(i32, f64)> = years
                .into_iter()
                .map(|(year, (sum, n))| (year, sum / n as f64))
                .collect();
            for (year, anomalous) in classify_series(&values, params.factor) {
                flags.push(MonthFlag {
                    element,
                    year,
                    month,
                    anomalous,
                });
            }
        }
    }
    flags
}

/// Accumulates station flags per (country, element, year, month).
#[derive(Debug, Default)]
pub struct SeverityIndex {
    flags: BTreeMap<(String, usize, i32, u32), (f64, usize)>,
    stations: usize,
}

impl SeverityIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_station(&mut self, country: &str, flags: &[MonthFlag]) {
        if flags.is_empty() {
            return;
        }
        self.stations += 1;
        for flag in flags {
            let cell = self
                .flags
                .entry((country.to_string(), flag.element, flag.year, flag.month))
                .or_insert((0.0, 0));
            cell.0 += if flag.anomalous { 1.0 } else { 0.0 };
            cell.1 += 1;
        }
    }

    /// Stations that contributed at least one flag.
    pub fn stations(&self) -> usize {
        self.stations
    }

    /// Table keyed by (Year, Country) with one 0..=12 column per element and
    /// the total in [`SEVERITY_COLUMN`], years before `year_limit` dropped.
    pub fn finish(self, year_limit: i32) -> Result<Table> {
        // (country, year) -> per-element month counts
        let mut scores: BTreeMap<(String, i32), Vec<Option<f64>>> = BTreeMap::new();
        for ((country, element, year, _month), (sum, n)) in self.flags {
            if year < year_limit {
                continue;
            }
            let month_flag = (sum / n as f64).round_ties_even();
            let row = scores
                .entry((country, year))
                .or_insert_with(|| vec![None; ELEMENTS.len()]);
            *row[element].get_or_insert(0.0) += month_flag;
        }

        let mut table = Table::new(false, severity_columns());
        for ((country, year), mut values) in scores {
            let total: f64 = values.iter().flatten().sum();
            values.push(Some(total));
            table.insert_row(RowKey::new(year, country, None), values)?;
        }
        Ok(table)
    }
}

/// Element columns followed by the total.
pub fn severity_columns() -> Vec<Column> {
    ELEMENTS
        .iter()
        .copied()
        .chain(std::iter::once(SEVERITY_COLUMN))
        .map(|name| Column {
            name: name.to_string(),
            aggregation: Aggregation::Mean,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(element: &str, year: i32, month: u32, value: f64) -> MonthlyReading {
        MonthlyReading {
            station: "ST1".into(),
            year,
            month,
            element: ELEMENTS.iter().position(|e| *e == element).unwrap(),
            value,
        }
    }

    #[test]
    fn outlier_against_all_earlier_years_is_flagged() {
        let series: Vec<(i32, f64)> = (2000..)
            .zip([10.0, 11.0, 12.0, 30.0, 13.0, 12.0])
            .collect();
        let flags = classify_series(&series, 1.54);
        assert_eq!(
            flags,
            vec![
                (2000, false),
                (2001, true),
                (2002, true),
                (2003, true),
                (2004, false),
                (2005, false),
            ]
        );
    }

    #[test]
    fn first_year_is_never_anomalous() {
        let flags = classify_series(&[(1990, 1e9)], 1.54);
        assert_eq!(flags, vec![(1990, false)]);
        let flags = classify_series(&[(1990, -5.0), (1991, -5.0)], 1.54);
        assert_eq!(flags, vec![(1990, false), (1991, false)]);
    }

    #[test]
    fn short_station_span_contributes_nothing() {
        let params = SeverityParams::default();
        let readings: Vec<MonthlyReading> = (1951..=2013)
            .map(|year| reading("TMAX", year, 1, year as f64))
            .collect();
        assert!(classify_station(&readings, &params).is_empty());

        let readings: Vec<MonthlyReading> = (1950..=2012)
            .map(|year| reading("TMAX", year, 1, year as f64))
            .collect();
        assert!(classify_station(&readings, &params).is_empty());

        let readings: Vec<MonthlyReading> = (1950..=2013)
            .map(|year| reading("TMAX", year, 1, 1.0))
            .collect();
        let flags = classify_station(&readings, &params);
        assert_eq!(flags.len(), 64);
        assert!(flags.iter().all(|f| !f.anomalous));
    }

    #[test]
    fn country_index_rounds_station_average_and_stays_bounded() -> Result<()> {
        let mut index = SeverityIndex::new();
        let mut all = Vec::new();
        for element in 0..ELEMENTS.len() {
            for month in 1..=12 {
                all.push(MonthFlag { element, year: 1990, month, anomalous: true });
            }
        }
        index.add_station("DEU", &all);
        index.add_station("DEU", &all);

        // month 1 flagged by both stations -> 1, month 2 by one of two -> 0.5 -> 0
        let tmax = ELEMENTS.iter().position(|e| *e == "TMAX").unwrap();
        index.add_station(
            "FRA",
            &[
                MonthFlag { element: tmax, year: 1990, month: 1, anomalous: true },
                MonthFlag { element: tmax, year: 1990, month: 2, anomalous: false },
                MonthFlag { element: tmax, year: 1979, month: 1, anomalous: true },
            ],
        );
        index.add_station(
            "FRA",
            &[
                MonthFlag { element: tmax, year: 1990, month: 1, anomalous: true },
                MonthFlag { element: tmax, year: 1990, month: 2, anomalous: true },
            ],
        );

        let table = index.finish(1980)?;
        assert_eq!(table.num_rows(), 2);
        let deu = RowKey::new(1990, "DEU", None);
        assert_eq!(table.get(&deu, SEVERITY_COLUMN), Some(72.0));
        assert_eq!(table.get(&deu, "PRCP"), Some(12.0));

        let fra = RowKey::new(1990, "FRA", None);
        assert_eq!(table.get(&fra, "TMAX"), Some(1.0));
        assert_eq!(table.get(&fra, "PRCP"), None);
        assert_eq!(table.get(&fra, SEVERITY_COLUMN), Some(1.0));

        for (_, row) in table.rows() {
            let total = row[ELEMENTS.len()].unwrap_or(0.0);
            assert!(total <= (ELEMENTS.len() * 12) as f64);
        }
        Ok(())
    }
}
