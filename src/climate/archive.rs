// src/climate/archive.rs

use anyhow::{ensure, Context, Result};
use flate2::read::GzDecoder;
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};
use tar::Archive;
use tracing::debug;

use super::dly::{parse_dly, MonthlyReading};

/// Stream every `<station>.dly` entry of a `.tar.gz` bundle through `visit`
/// without extracting to disk. Entries whose station id fails `keep` are not
/// parsed. Returns the number of station files handed to `visit`.
pub fn for_each_station<K, F>(path: impl AsRef<Path>, mut keep: K, mut visit: F) -> Result<usize>
where
    K: FnMut(&str) -> bool,
    F: FnMut(&str, Vec<MonthlyReading>) -> Result<()>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("opening climate bundle {:?}", path))?;
    let mut archive = Archive::new(GzDecoder::new(BufReader::new(file)));

    let mut station_files = 0usize;
    let mut stations = 0usize;
    for entry in archive
        .entries()
        .with_context(|| format!("reading tar entries of {:?}", path))?
    {
        let entry = entry.with_context(|| format!("reading tar entry in {:?}", path))?;
        let entry_path = entry.path()?.into_owned();
        if entry_path.extension().and_then(|e| e.to_str()) != Some("dly") {
            continue;
        }
        let Some(station) = entry_path.file_stem().and_then(|s| s.to_str()).map(str::to_string) else {
            continue;
        };
        station_files += 1;
        if !keep(&station) {
            continue;
        }
        let name = entry_path.display().to_string();
        let readings = parse_dly(BufReader::new(entry), &name)?;
        debug!(station = %station, months = readings.len(), "read station");
        visit(&station, readings)?;
        stations += 1;
    }

    ensure!(station_files > 0, "{:?} contains no .dly station files", path);
    Ok(stations)
}

#[cfg(test)]
pub(crate) mod testutil {
    use anyhow::Result;
    use flate2::{write::GzEncoder, Compression};
    use std::{fs::File, path::Path};
    use tar::{Builder, Header};

    /// Write a `.tar.gz` holding the given (name, contents) entries.
    pub fn write_bundle(path: &Path, entries: &[(&str, String)]) -> Result<()> {
        let file = File::create(path)?;
        let mut builder = Builder::new(GzEncoder::new(file, Compression::default()));
        for (name, contents) in entries {
            let mut header = Header::new_gnu();
            header.set_size(contents.len() as u64);
            header.set_mode(0o644);
            header.set_cksum();
            builder.append_data(&mut header, name, contents.as_bytes())?;
        }
        builder.into_inner()?.finish()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::testutil::write_bundle;
    use super::*;
    use crate::climate::dly::testutil::dly_line;
    use tempfile::tempdir;

    #[test]
    fn streams_dly_entries_and_skips_others() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("ghcnd_gsn.tar.gz");
        write_bundle(
            &path,
            &[
                ("ghcnd_gsn/ST1.dly", dly_line("ST1", 2000, 1, "PRCP", &[(10, ' ')])),
                ("ghcnd_gsn/readme.txt", "not station data".to_string()),
                ("ghcnd_gsn/ST2.dly", dly_line("ST2", 2000, 1, "TMIN", &[(-20, ' ')])),
            ],
        )?;

        let mut seen = Vec::new();
        let count = for_each_station(&path, |_| true, |station, readings| {
            seen.push((station.to_string(), readings.len()));
            Ok(())
        })?;

        assert_eq!(count, 2);
        assert_eq!(seen, vec![("ST1".to_string(), 1), ("ST2".to_string(), 1)]);
        Ok(())
    }

    #[test]
    fn bundle_without_stations_fails() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("empty.tar.gz");
        write_bundle(&path, &[("readme.txt", "nothing".to_string())])?;
        assert!(for_each_station(&path, |_| true, |_, _| Ok(())).is_err());
        Ok(())
    }

    #[test]
    fn rejected_stations_are_not_parsed() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("ghcnd_gsn.tar.gz");
        write_bundle(
            &path,
            &[
                ("ghcnd_gsn/ST1.dly", dly_line("ST1", 2000, 1, "PRCP", &[(10, ' ')])),
                // garbled, but never read
                ("ghcnd_gsn/ST2.dly", "ST2 garbled".to_string()),
            ],
        )?;

        let mut seen = Vec::new();
        let count = for_each_station(
            &path,
            |station| station != "ST2",
            |station, _| {
                seen.push(station.to_string());
                Ok(())
            },
        )?;

        assert_eq!(count, 1);
        assert_eq!(seen, vec!["ST1".to_string()]);

        // every station rejected still counts as a bundle with station files
        assert_eq!(for_each_station(&path, |_| false, |_, _| Ok(()))?, 0);
        Ok(())
    }

    #[test]
    fn malformed_bundle_fails() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("bundle.tar.gz");
        std::fs::write(&path, "not a tarball")?;
        assert!(for_each_station(&path, |_| true, |_, _| Ok(())).is_err());

        // gzip that does not hold a tar stream
        let plain = dir.path().join("plain.tar.gz");
        let mut gz = flate2::write::GzEncoder::new(std::fs::File::create(&plain)?, flate2::Compression::default());
        std::io::Write::write_all(&mut gz, &[0x7f; 1024])?;
        gz.finish()?;
        assert!(for_each_station(&plain, |_| true, |_, _| Ok(())).is_err());
        Ok(())
    }
}
