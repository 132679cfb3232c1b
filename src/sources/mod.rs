// src/sources/mod.rs

//! Per-source loaders. Each reads one raw download format, resolves country
//! identifiers and returns a [`Table`](crate::table::Table) keyed by
//! (Year, Country[, Origin]) restricted to the configured first year.

pub mod newspaper;
pub mod oecd;
pub mod unhcr;
pub mod worldbank;

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::Read,
    path::{Path, PathBuf},
};
use zip::ZipArchive;

pub use newspaper::load_newspapers;
pub use oecd::load_oecd;
pub use unhcr::load_unhcr;
pub use worldbank::load_world_bank;

/// Open `path` as a zip archive; anything else fails the sanity check.
pub(crate) fn open_zip(path: &Path) -> Result<ZipArchive<File>> {
    let file = File::open(path).with_context(|| format!("Failed to open ZIP file: {:?}", path))?;
    ZipArchive::new(file).with_context(|| format!("{:?} is not a valid ZIP archive", path))
}

/// Read entry `index` of an open archive fully into memory.
pub(crate) fn read_entry(archive: &mut ZipArchive<File>, index: usize) -> Result<(String, Vec<u8>)> {
    let mut entry = archive
        .by_index(index)
        .with_context(|| format!("Failed to access ZIP entry #{}", index))?;
    let name = entry.name().to_string();
    let mut buf = Vec::with_capacity(entry.size() as usize);
    entry
        .read_to_end(&mut buf)
        .with_context(|| format!("Failed to read {} into memory", name))?;
    Ok((name, buf))
}

/// Drop the first `n` physical lines (blank ones included).
pub(crate) fn skip_lines(data: &[u8], n: usize) -> &[u8] {
    let mut rest = data;
    for _ in 0..n {
        match rest.iter().position(|&b| b == b'\n') {
            Some(pos) => rest = &rest[pos + 1..],
            None => return &[],
        }
    }
    rest
}

/// Numeric cell; empty, `*` and `..` are missing.
pub(crate) fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim().trim_matches('"');
    match cell {
        "" | "*" | ".." => None,
        _ => cell.replace(',', "").parse::<f64>().ok().filter(|v| !v.is_nan()),
    }
}

/// Part of the file name before the first `_`, or the stem when there is none.
pub(crate) fn file_prefix(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    let prefix = match name.find('_') {
        Some(idx) => &name[..idx],
        None => path.file_stem()?.to_str()?,
    };
    (!prefix.is_empty()).then(|| prefix.to_string())
}

/// Files in `dir` ending in `.<extension>`, sorted.
pub(crate) fn files_with_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let pattern = format!("{}/*.{}", dir.display(), extension);
    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("bad glob pattern {}", pattern))? {
        match entry {
            Ok(path) if path.is_file() => files.push(path),
            Ok(_) => {}
            Err(e) => tracing::warn!(error = %e, "unreadable directory entry"),
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
pub(crate) mod testutil {
    use anyhow::Result;
    use std::{fs::File, io::Write, path::Path};
    use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

    /// Write a stored (uncompressed) zip with the given entries.
    pub fn write_zip(path: &Path, entries: &[(&str, &str)]) -> Result<()> {
        let file = File::create(path)?;
        let mut zip = ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);
        for (name, contents) in entries {
            zip.start_file(*name, options)?;
            zip.write_all(contents.as_bytes())?;
        }
        zip.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_handle_preamble_and_sentinels() {
        assert_eq!(skip_lines(b"a\n\nb\nc,d\n", 3), b"c,d\n");
        assert_eq!(skip_lines(b"a", 2), b"");
        assert_eq!(parse_value(" 12 "), Some(12.0));
        assert_eq!(parse_value("*"), None);
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("1,234"), Some(1234.0));
        assert_eq!(
            file_prefix(Path::new("data/SP.POP.TOTL_Indicator_en_csv_v2.zip")).as_deref(),
            Some("SP.POP.TOTL")
        );
        assert_eq!(file_prefix(Path::new("NYT_scrape.csv")).as_deref(), Some("NYT"));
        assert_eq!(file_prefix(Path::new("guardian.csv")).as_deref(), Some("guardian"));
    }
}
