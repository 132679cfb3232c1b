// src/table/io.rs

use anyhow::{bail, Context, Result};
use arrow::array::{ArrayRef, Float64Array, Int32Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;
use std::{
    fs::{self, File},
    io::BufWriter,
    path::Path,
    sync::Arc,
};
use tracing::info;

use super::{Aggregation, Column, RowKey, Table};

/// Arrow view of a table: `Year` Int32, `Country` Utf8, `Origin` Utf8 when the
/// table has that dimension, then one nullable Float64 per column.
pub fn to_record_batch(table: &Table) -> Result<RecordBatch> {
    let mut fields = vec![
        Field::new("Year", DataType::Int32, false),
        Field::new("Country", DataType::Utf8, false),
    ];
    if table.has_origin() {
        fields.push(Field::new("Origin", DataType::Utf8, true));
    }
    for column in table.columns() {
        fields.push(Field::new(&column.name, DataType::Float64, true));
    }
    let schema = Arc::new(Schema::new(fields));

    let years: Int32Array = table.rows().map(|(k, _)| k.year).collect::<Vec<_>>().into();
    let countries = StringArray::from_iter_values(table.rows().map(|(k, _)| k.country.as_str()));

    let mut arrays: Vec<ArrayRef> = vec![Arc::new(years), Arc::new(countries)];
    if table.has_origin() {
        let origins: StringArray = table.rows().map(|(k, _)| k.origin.as_deref()).collect();
        arrays.push(Arc::new(origins));
    }
    for idx in 0..table.columns().len() {
        let values: Float64Array = table.rows().map(|(_, row)| row[idx]).collect();
        arrays.push(Arc::new(values));
    }

    RecordBatch::try_new(schema, arrays).context("building panel record batch")
}

/// Write a table as CSV with a header row; missing values are empty cells.
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let batch = to_record_batch(table)?;
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let mut writer = arrow::csv::WriterBuilder::new()
        .with_header(true)
        .build(BufWriter::new(file));
    writer
        .write(&batch)
        .with_context(|| format!("writing CSV {:?}", path))?;
    info!(rows = table.num_rows(), path = %path.display(), "wrote CSV");
    Ok(())
}

pub fn write_parquet(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let batch = to_record_batch(table)?;
    let file = File::create(path).with_context(|| format!("creating {:?}", path))?;
    let props = WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build();
    let mut writer = ArrowWriter::try_new(BufWriter::new(file), batch.schema(), Some(props))
        .context("creating Arrow writer for panel")?;
    writer.write(&batch).context("writing panel batch")?;
    writer.close().context("closing panel writer")?;
    info!(rows = table.num_rows(), path = %path.display(), "wrote Parquet");
    Ok(())
}

/// Read a CSV written by [`write_csv`]. `aggregation` picks each column's
/// collapse rule by name.
pub fn read_csv<F>(path: impl AsRef<Path>, aggregation: F) -> Result<Table>
where
    F: Fn(&str) -> Aggregation,
{
    let path = path.as_ref();
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {:?}", path))?;
    let headers = rdr.headers()?.clone();

    if headers.get(0) != Some("Year") || headers.get(1) != Some("Country") {
        bail!("{:?} does not start with Year,Country columns", path);
    }
    let has_origin = headers.get(2) == Some("Origin");
    let first_value = if has_origin { 3 } else { 2 };

    let columns = headers
        .iter()
        .skip(first_value)
        .map(|name| Column {
            name: name.to_string(),
            aggregation: aggregation(name),
        })
        .collect();
    let mut table = Table::new(has_origin, columns);

    for (line, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("reading {:?} row {}", path, line + 1))?;
        let year: i32 = record
            .get(0)
            .unwrap_or_default()
            .trim()
            .parse()
            .with_context(|| format!("bad Year in {:?} row {}", path, line + 1))?;
        let country = record.get(1).unwrap_or_default().to_string();
        let origin = if has_origin {
            record.get(2).filter(|s| !s.is_empty()).map(str::to_string)
        } else {
            None
        };
        let values = record
            .iter()
            .skip(first_value)
            .map(|cell| cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan()))
            .collect();
        table.insert_row(RowKey::new(year, country, origin), values)?;
    }
    Ok(table)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("creating directory {:?}", parent))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
    use tempfile::tempdir;

    fn sample() -> Result<Table> {
        let mut table = Table::new(
            true,
            vec![
                Column { name: "Refugees".into(), aggregation: Aggregation::Sum },
                Column { name: "GDP".into(), aggregation: Aggregation::Mean },
            ],
        );
        table.insert_row(RowKey::new(1990, "DEU", Some("TUR".into())), vec![Some(12.0), None])?;
        table.insert_row(RowKey::new(1990, "FRA", None), vec![None, Some(2.5)])?;
        Ok(table)
    }

    #[test]
    fn csv_written_then_read_keeps_cells() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("out").join("merged.csv");
        write_csv(&sample()?, &path)?;

        let text = fs::read_to_string(&path)?;
        assert!(text.starts_with("Year,Country,Origin,Refugees,GDP"));

        let table = read_csv(&path, |name| {
            if name == "Refugees" { Aggregation::Sum } else { Aggregation::Mean }
        })?;
        assert!(table.has_origin());
        assert_eq!(table.num_rows(), 2);
        assert_eq!(table.get(&RowKey::new(1990, "DEU", Some("TUR".into())), "Refugees"), Some(12.0));
        assert_eq!(table.get(&RowKey::new(1990, "DEU", Some("TUR".into())), "GDP"), None);
        assert_eq!(table.get(&RowKey::new(1990, "FRA", None), "GDP"), Some(2.5));
        assert_eq!(table.columns()[0].aggregation, Aggregation::Sum);
        Ok(())
    }

    #[test]
    fn parquet_has_one_row_per_key() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("merged.parquet");
        write_parquet(&sample()?, &path)?;

        let reader = ParquetRecordBatchReaderBuilder::try_new(File::open(&path)?)?.build()?;
        let mut rows = 0;
        for batch in reader {
            let batch = batch?;
            assert_eq!(batch.num_columns(), 5);
            rows += batch.num_rows();
        }
        assert_eq!(rows, 2);
        Ok(())
    }
}
