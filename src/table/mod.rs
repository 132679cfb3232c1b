// src/table/mod.rs

//! Panel table keyed by (Year, Country[, Origin]).
//!
//! Loaders emit long-format [`Observation`]s which a [`TableBuilder`] pivots
//! into a wide [`Table`]: one row per key, one nullable `f64` column per
//! variable. Tables combine with [`Table::outer_join`] and drop the origin
//! dimension with [`Table::collapse`].

pub mod io;

use anyhow::{ensure, Result};
use std::collections::{BTreeMap, HashMap, HashSet};

pub use io::{read_csv, to_record_batch, write_csv, write_parquet};

/// Row key. `origin` is always `None` in tables without an origin dimension.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowKey {
    pub year: i32,
    pub country: String,
    pub origin: Option<String>,
}

impl RowKey {
    pub fn new(year: i32, country: impl Into<String>, origin: Option<String>) -> Self {
        Self {
            year,
            country: country.into(),
            origin,
        }
    }

    fn without_origin(&self) -> Self {
        Self {
            year: self.year,
            country: self.country.clone(),
            origin: None,
        }
    }
}

/// How several values for one cell combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    Sum,
    Mean,
}

impl Aggregation {
    pub fn finish(&self, acc: &Accumulator) -> Option<f64> {
        if acc.count == 0 {
            return None;
        }
        match self {
            Aggregation::Sum => Some(acc.sum),
            Aggregation::Mean => Some(acc.sum / acc.count as f64),
        }
    }
}

/// Running sum and count of present values.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accumulator {
    sum: f64,
    count: usize,
}

impl Accumulator {
    /// NaN counts as missing.
    pub fn add(&mut self, value: f64) {
        if value.is_nan() {
            return;
        }
        self.sum += value;
        self.count += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    /// Applied when the origin dimension is collapsed.
    pub aggregation: Aggregation,
}

/// One long-format record.
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    pub year: i32,
    pub country: String,
    pub origin: Option<String>,
    pub variable: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Table {
    has_origin: bool,
    columns: Vec<Column>,
    rows: BTreeMap<RowKey, Vec<Option<f64>>>,
}

impl Table {
    pub fn new(has_origin: bool, columns: Vec<Column>) -> Self {
        Self {
            has_origin,
            columns,
            rows: BTreeMap::new(),
        }
    }

    pub fn has_origin(&self) -> bool {
        self.has_origin
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = (&RowKey, &[Option<f64>])> {
        self.rows.iter().map(|(k, v)| (k, v.as_slice()))
    }

    pub fn row(&self, key: &RowKey) -> Option<&[Option<f64>]> {
        self.rows.get(key).map(Vec::as_slice)
    }

    /// Value of `column` at `key`; `None` when absent.
    pub fn get(&self, key: &RowKey, column: &str) -> Option<f64> {
        let idx = self.column_index(column)?;
        self.rows.get(key).and_then(|row| row[idx])
    }

    /// Insert or overwrite a full row. `values` must match the column count.
    pub fn insert_row(&mut self, key: RowKey, values: Vec<Option<f64>>) -> Result<()> {
        ensure!(
            values.len() == self.columns.len(),
            "row has {} values but the table has {} columns",
            values.len(),
            self.columns.len()
        );
        let key = if self.has_origin {
            key
        } else {
            key.without_origin()
        };
        self.rows.insert(key, values);
        Ok(())
    }

    /// Drop every row before `min_year`.
    pub fn retain_years(&mut self, min_year: i32) {
        self.rows.retain(|key, _| key.year >= min_year);
    }

    /// Reorder columns; `order[i]` is the old index of new column `i`.
    pub fn reorder_columns(&mut self, order: &[usize]) {
        if order.len() != self.columns.len() {
            return;
        }
        self.columns = order.iter().map(|&i| self.columns[i].clone()).collect();
        for row in self.rows.values_mut() {
            *row = order.iter().map(|&i| row[i]).collect();
        }
    }

    /// Outer join on the shared key set.
    ///
    /// Two tables of the same shape join on the full key. A table without an
    /// origin joined to one with an origin joins on (Year, Country): its values
    /// are repeated on every origin row of that key, and keys it alone holds
    /// become rows with an absent origin. Column names must be disjoint.
    pub fn outer_join(&self, other: &Table) -> Result<Table> {
        for column in &other.columns {
            ensure!(
                self.column_index(&column.name).is_none(),
                "column `{}` present on both sides of the join",
                column.name
            );
        }
        let (lw, rw) = (self.columns.len(), other.columns.len());
        let mut columns = self.columns.clone();
        columns.extend(other.columns.iter().cloned());

        let mut rows: BTreeMap<RowKey, Vec<Option<f64>>> = BTreeMap::new();

        if self.has_origin == other.has_origin {
            for (key, values) in &self.rows {
                rows.insert(key.clone(), joined(Some(values), lw, None, rw));
            }
            for (key, values) in &other.rows {
                match rows.get_mut(key) {
                    Some(row) => row[lw..].copy_from_slice(values),
                    None => {
                        rows.insert(key.clone(), joined(None, lw, Some(values), rw));
                    }
                }
            }
        } else {
            // many-to-one: `fine` carries the origin dimension
            let (fine, coarse, fine_is_left) = if self.has_origin {
                (self, other, true)
            } else {
                (other, self, false)
            };
            let mut matched: HashSet<RowKey> = HashSet::new();

            for (key, values) in &fine.rows {
                let coarse_key = key.without_origin();
                let coarse_values = coarse.rows.get(&coarse_key);
                if coarse_values.is_some() {
                    matched.insert(coarse_key);
                }
                let row = if fine_is_left {
                    joined(Some(values), lw, coarse_values, rw)
                } else {
                    joined(coarse_values, lw, Some(values), rw)
                };
                rows.insert(key.clone(), row);
            }
            for (key, values) in &coarse.rows {
                if matched.contains(key) {
                    continue;
                }
                let row = if fine_is_left {
                    joined(None, lw, Some(values), rw)
                } else {
                    joined(Some(values), lw, None, rw)
                };
                rows.insert(key.clone(), row);
            }
        }

        Ok(Table {
            has_origin: self.has_origin || other.has_origin,
            columns,
            rows,
        })
    }

    /// Remove the origin dimension, grouping by (Year, Country) and applying
    /// each column's aggregation to its present values.
    pub fn collapse(&self) -> Table {
        let width = self.columns.len();
        let mut groups: BTreeMap<RowKey, Vec<Accumulator>> = BTreeMap::new();
        for (key, values) in &self.rows {
            let accs = groups
                .entry(key.without_origin())
                .or_insert_with(|| vec![Accumulator::default(); width]);
            for (acc, value) in accs.iter_mut().zip(values) {
                if let Some(v) = value {
                    acc.add(*v);
                }
            }
        }

        let rows = groups
            .into_iter()
            .map(|(key, accs)| {
                let values = accs
                    .iter()
                    .zip(&self.columns)
                    .map(|(acc, column)| column.aggregation.finish(acc))
                    .collect();
                (key, values)
            })
            .collect();

        Table {
            has_origin: false,
            columns: self.columns.clone(),
            rows,
        }
    }

    /// Yearly values of `column` for one country, origins collapsed.
    /// Returns `None` when the column does not exist.
    pub fn series(&self, country: &str, column: &str) -> Option<Vec<(i32, Option<f64>)>> {
        let idx = self.column_index(column)?;
        let collapsed;
        let table = if self.has_origin {
            collapsed = self.collapse();
            &collapsed
        } else {
            self
        };
        Some(
            table
                .rows
                .iter()
                .filter(|(key, _)| key.country == country)
                .map(|(key, values)| (key.year, values[idx]))
                .collect(),
        )
    }

    /// Yearly values of `column` for one origin country, combined over every
    /// destination with the column's aggregation. Returns `None` when the
    /// table has no origin dimension or the column does not exist.
    pub fn series_by_origin(&self, origin: &str, column: &str) -> Option<Vec<(i32, Option<f64>)>> {
        if !self.has_origin {
            return None;
        }
        let idx = self.column_index(column)?;
        let aggregation = self.columns[idx].aggregation;
        let mut years: BTreeMap<i32, Accumulator> = BTreeMap::new();
        for (key, values) in &self.rows {
            if key.origin.as_deref() != Some(origin) {
                continue;
            }
            let acc = years.entry(key.year).or_default();
            if let Some(value) = values[idx] {
                acc.add(value);
            }
        }
        Some(
            years
                .into_iter()
                .map(|(year, acc)| (year, aggregation.finish(&acc)))
                .collect(),
        )
    }
}

fn joined(
    left: Option<&Vec<Option<f64>>>,
    lw: usize,
    right: Option<&Vec<Option<f64>>>,
    rw: usize,
) -> Vec<Option<f64>> {
    let mut row = Vec::with_capacity(lw + rw);
    match left {
        Some(values) => row.extend_from_slice(values),
        None => row.resize(lw, None),
    }
    match right {
        Some(values) => row.extend_from_slice(values),
        None => row.resize(lw + rw, None),
    }
    row
}

/// Pivots long observations into a [`Table`].
pub struct TableBuilder {
    has_origin: bool,
    /// Combines duplicate observations of one cell.
    combine: Aggregation,
    columns: Vec<Column>,
    index: HashMap<String, usize>,
    cells: BTreeMap<RowKey, Vec<Accumulator>>,
}

impl TableBuilder {
    pub fn new(has_origin: bool, combine: Aggregation) -> Self {
        Self {
            has_origin,
            combine,
            columns: Vec::new(),
            index: HashMap::new(),
            cells: BTreeMap::new(),
        }
    }

    /// Declare a column up front so it exists even without observations.
    pub fn column(&mut self, name: &str, aggregation: Aggregation) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.columns.len();
        self.columns.push(Column {
            name: name.to_string(),
            aggregation,
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Add one observation. A missing value still creates the row.
    pub fn push(&mut self, obs: Observation, aggregation: Aggregation) {
        let idx = self.column(&obs.variable, aggregation);
        let key = RowKey {
            year: obs.year,
            country: obs.country,
            origin: if self.has_origin { obs.origin } else { None },
        };
        let row = self.cells.entry(key).or_default();
        if row.len() <= idx {
            row.resize(idx + 1, Accumulator::default());
        }
        if let Some(value) = obs.value {
            row[idx].add(value);
        }
    }

    pub fn extend<I>(&mut self, observations: I, aggregation: Aggregation)
    where
        I: IntoIterator<Item = Observation>,
    {
        for obs in observations {
            self.push(obs, aggregation);
        }
    }

    pub fn finish(self) -> Table {
        let width = self.columns.len();
        let combine = self.combine;
        let rows = self
            .cells
            .into_iter()
            .map(|(key, mut accs)| {
                accs.resize(width, Accumulator::default());
                let values = accs.iter().map(|acc| combine.finish(acc)).collect();
                (key, values)
            })
            .collect();
        Table {
            has_origin: self.has_origin,
            columns: self.columns,
            rows,
        }
    }
}
