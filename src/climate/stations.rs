// src/climate/stations.rs

use anyhow::{ensure, Context, Result};
use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};
use tracing::{debug, info};

use crate::resolver::CountryResolver;

/// First line of every `ghcnd-stations.txt`.
pub const FIRST_STATION_LINE: &str =
    "ACW00011604  17.1167  -61.7833   10.1    ST JOHNS COOLIDGE FLD";

const LAT_LON_HEADER: &str = "Country,Latitude,Longitude";

/// Station id -> canonical country code.
#[derive(Debug, Default)]
pub struct StationMap {
    stations: HashMap<String, String>,
    unmapped: usize,
}

impl StationMap {
    pub fn load(
        stations: impl AsRef<Path>,
        lat_lon: impl AsRef<Path>,
        resolver: &CountryResolver,
    ) -> Result<Self> {
        let (stations, lat_lon) = (stations.as_ref(), lat_lon.as_ref());
        let stations_file =
            File::open(stations).with_context(|| format!("opening station list {:?}", stations))?;
        let lat_lon_file =
            File::open(lat_lon).with_context(|| format!("opening lat/lon lookup {:?}", lat_lon))?;
        let map = Self::from_readers(BufReader::new(stations_file), lat_lon_file, resolver)
            .with_context(|| format!("mapping stations of {:?}", stations))?;
        info!(
            mapped = map.len(),
            unmapped = map.unmapped(),
            "mapped weather stations to countries"
        );
        Ok(map)
    }

    /// Join the fixed-width station list with the lat/lon lookup on the exact
    /// coordinate strings, then resolve the country.
    pub fn from_readers<S: BufRead, L: Read>(
        stations: S,
        lat_lon: L,
        resolver: &CountryResolver,
    ) -> Result<Self> {
        let coordinates = read_lat_lon(lat_lon)?;
        let mut map = StationMap::default();

        for (idx, line) in stations.lines().enumerate() {
            let line = line.with_context(|| format!("reading station list line {}", idx + 1))?;
            if idx == 0 {
                ensure!(
                    line.trim() == FIRST_STATION_LINE,
                    "unexpected first line in station list: {:?}",
                    line
                );
            }
            let id = line.get(0..11).unwrap_or_default().trim();
            let lat = line.get(12..20).unwrap_or_default().trim();
            let lon = line.get(21..30).unwrap_or_default().trim();
            if id.is_empty() {
                continue;
            }

            let country = coordinates
                .get(&(lat.to_string(), lon.to_string()))
                .and_then(|name| resolver.resolve(name));
            match country {
                Some(code) => {
                    map.stations.insert(id.to_string(), code.to_string());
                }
                None => {
                    debug!(station = id, lat, lon, "station not mapped to a country");
                    map.unmapped += 1;
                }
            }
        }
        Ok(map)
    }

    pub fn country(&self, station: &str) -> Option<&str> {
        self.stations.get(station).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Stations dropped because their coordinates or country were unknown.
    pub fn unmapped(&self) -> usize {
        self.unmapped
    }
}

fn read_lat_lon<R: Read>(reader: R) -> Result<HashMap<(String, String), String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect();
    ensure!(
        headers.join(",") == LAT_LON_HEADER,
        "lat/lon lookup header is {:?}, expected {:?}",
        headers.join(","),
        LAT_LON_HEADER
    );

    let mut coordinates = HashMap::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record.with_context(|| format!("lat/lon lookup record {}", idx))?;
        let (Some(country), Some(lat), Some(lon)) = (record.get(0), record.get(1), record.get(2)) else {
            continue;
        };
        coordinates.insert(
            (lat.trim().to_string(), lon.trim().to_string()),
            country.trim().to_string(),
        );
    }
    Ok(coordinates)
}
