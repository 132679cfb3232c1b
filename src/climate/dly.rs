// src/climate/dly.rs

//! GHCN-Daily `.dly` fixed-width records.
//!
//! ```text
//! cols  0-11  station id
//!      11-15  year
//!      15-17  month
//!      17-21  element
//!      21-    31 day slots of 8 chars: value(5) mflag qflag sflag
//! ```

use anyhow::{bail, Context, Result};
use std::io::BufRead;

use super::ELEMENTS;

/// Raw value marking a missing day.
pub const MISSING: i32 = -9999;

const HEADER_LEN: usize = 21;
const DAY_WIDTH: usize = 8;
const DAYS: usize = 31;

/// Mean of the qualifying daily values of one station month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReading {
    pub station: String,
    pub year: i32,
    pub month: u32,
    /// Index into [`ELEMENTS`].
    pub element: usize,
    pub value: f64,
}

/// Parse one line. Untracked elements and months without a single
/// qualifying day yield `Ok(None)`.
pub fn parse_line(line: &str) -> Result<Option<MonthlyReading>> {
    let line = line.trim_end_matches(['\r', '\n']);

    let station = columns(line, 0, 11)?.trim();
    let year: i32 = columns(line, 11, 15)?
        .trim()
        .parse()
        .with_context(|| format!("bad year in {:?}", line))?;
    let month: u32 = columns(line, 15, 17)?
        .trim()
        .parse()
        .with_context(|| format!("bad month in {:?}", line))?;
    let element_code = columns(line, 17, HEADER_LEN)?.trim();

    let Some(element) = ELEMENTS.iter().position(|e| *e == element_code) else {
        return Ok(None);
    };

    let mut sum = 0.0;
    let mut kept = 0usize;
    for day in 0..DAYS {
        let start = HEADER_LEN + DAY_WIDTH * day;
        let Some(raw) = line.get(start..start + 5) else {
            break;
        };
        let qflag = line.get(start + 6..start + 7).unwrap_or("").trim();
        if !qflag.is_empty() {
            continue;
        }
        let Ok(value) = raw.trim().parse::<i32>() else {
            continue;
        };
        if value == MISSING {
            continue;
        }
        sum += value as f64;
        kept += 1;
    }

    if kept == 0 {
        return Ok(None);
    }
    Ok(Some(MonthlyReading {
        station: station.to_string(),
        year,
        month,
        element,
        value: sum / kept as f64,
    }))
}

fn columns(line: &str, from: usize, to: usize) -> Result<&str> {
    match line.get(from..to) {
        Some(s) => Ok(s),
        None => bail!("line too short for columns {}-{}: {:?}", from, to, line),
    }
}

/// Parse every line of one station file.
pub fn parse_dly<R: BufRead>(reader: R, name: &str) -> Result<Vec<MonthlyReading>> {
    let mut readings = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading {} line {}", name, idx + 1))?;
        if line.trim().is_empty() {
            continue;
        }
        if let Some(reading) =
            parse_line(&line).with_context(|| format!("parsing {} line {}", name, idx + 1))?
        {
            readings.push(reading);
        }
    }
    Ok(readings)
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::{DAYS, MISSING};

    /// One `.dly` line; `days` fills the first slots, the rest are missing.
    pub fn dly_line(station: &str, year: i32, month: u32, element: &str, days: &[(i32, char)]) -> String {
        let mut line = format!("{:<11}{:04}{:02}{:<4}", station, year, month, element);
        for day in 0..DAYS {
            let (value, qflag) = days.get(day).copied().unwrap_or((MISSING, ' '));
            line.push_str(&format!("{:>5} {} ", value, qflag));
        }
        line
    }
}
