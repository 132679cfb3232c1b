// src/resolver/mod.rs

//! Country identity resolution.
//!
//! Every loader funnels its country columns through [`CountryResolver`] so
//! that the merged table is keyed by ISO 3166 alpha-3 codes only. Lookups
//! are case-insensitive; inputs that cannot be resolved are reported to the
//! caller as `None` and never panic.

mod countries;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use std::{fs, path::Path};
use tracing::{debug, info};

use crate::bimap::BiMap;
pub use countries::COUNTRY_SYNONYMS;

/// Bucket for destination/origin entries that cannot be resolved.
pub const UNKNOWN_COUNTRY: &str = "Various/Unknown";

static BUILTIN: Lazy<CountryResolver> = Lazy::new(CountryResolver::from_table);

#[derive(Debug, Clone)]
pub struct CountryResolver {
    /// Uppercased synonym or code -> code; code -> first synonym.
    map: BiMap,
    /// Synonyms in registration order, original spelling.
    names: Vec<(String, String)>,
    codes: Vec<String>,
}

impl CountryResolver {
    /// Shared resolver built from the built-in synonym table.
    pub fn builtin() -> &'static CountryResolver {
        &BUILTIN
    }

    /// A fresh copy of the built-in resolver that can be extended.
    pub fn from_table() -> Self {
        let mut resolver = Self {
            map: BiMap::new(),
            names: Vec::new(),
            codes: Vec::with_capacity(COUNTRY_SYNONYMS.len()),
        };
        for (code, synonyms) in COUNTRY_SYNONYMS {
            resolver.add_code(code);
            for synonym in synonyms.iter() {
                resolver.register(synonym, code);
            }
        }
        resolver
    }

    fn add_code(&mut self, code: &str) {
        let code = normalize(code);
        if self.map.right(&code).is_none() {
            self.map.alias(code.clone(), code.clone());
            self.codes.push(code);
        }
    }

    /// Register `synonym` as another name for `code`. Unknown codes are added.
    pub fn register(&mut self, synonym: &str, code: &str) {
        let code = normalize(code);
        self.add_code(&code);
        self.map.insert(normalize(synonym), code.clone());
        self.names.push((synonym.trim().to_string(), code));
    }

    /// Canonical three-letter code for a code, name or demonym.
    pub fn resolve(&self, input: &str) -> Option<&str> {
        self.map.right(&normalize(input))
    }

    /// Like [`resolve`](Self::resolve) but falls back to [`UNKNOWN_COUNTRY`].
    pub fn resolve_or_unknown(&self, input: &str) -> String {
        match self.resolve(input) {
            Some(code) => code.to_string(),
            None => {
                debug!(country = input, "country not understood, bucketing as unknown");
                UNKNOWN_COUNTRY.to_string()
            }
        }
    }

    /// Primary name of a code, in its original spelling.
    pub fn display_name(&self, code: &str) -> Option<&str> {
        let code = self.resolve(code)?;
        self.names
            .iter()
            .find(|(_, c)| c == code)
            .map(|(name, _)| name.as_str())
    }

    /// Full names and synonyms (anything longer than a code).
    pub fn country_names(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(|(name, _)| name.as_str())
            .filter(|name| name.chars().count() > 3)
            .collect()
    }

    pub fn country_codes(&self) -> &[String] {
        &self.codes
    }

    /// Register the two-letter codes of a GeoNames `countryInfo.txt` as
    /// synonyms of their three-letter code. Returns the number of entries added.
    pub fn load_geonames(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading GeoNames country info {}", path.display()))?;

        let mut added = 0;
        for line in text.lines() {
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let (Some(iso2), Some(iso3)) = (fields.next(), fields.next()) else {
                continue;
            };
            if iso2.len() != 2 || iso3.len() != 3 || self.resolve(iso2).is_some() {
                continue;
            }
            self.add_code(iso3);
            self.map.alias(normalize(iso2), normalize(iso3));
            added += 1;
        }
        info!(added, path = %path.display(), "loaded GeoNames two-letter codes");
        Ok(added)
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn every_synonym_round_trips_regardless_of_case() {
        let resolver = CountryResolver::builtin();
        for (code, synonyms) in COUNTRY_SYNONYMS {
            for synonym in synonyms.iter() {
                assert_eq!(resolver.resolve(synonym), Some(*code), "{}", synonym);
                assert_eq!(resolver.resolve(&synonym.to_lowercase()), Some(*code));
                assert_eq!(resolver.resolve(&synonym.to_uppercase()), Some(*code));
            }
            assert_eq!(resolver.resolve(&code.to_lowercase()), Some(*code));
        }
    }

    #[test]
    fn unknown_input_is_reported_not_raised() {
        let resolver = CountryResolver::builtin();
        assert_eq!(resolver.resolve("Atlantis"), None);
        assert_eq!(resolver.resolve(""), None);
        assert_eq!(resolver.resolve_or_unknown("Atlantis"), UNKNOWN_COUNTRY);
        assert_eq!(resolver.resolve_or_unknown(" germany "), "DEU");
    }

    #[test]
    fn display_name_and_name_list() {
        let resolver = CountryResolver::builtin();
        assert_eq!(resolver.display_name("usa"), Some("United States"));
        assert_eq!(resolver.display_name("Ivorian"), Some("Côte d'Ivoire"));

        let names = resolver.country_names();
        assert!(names.contains(&"American"));
        assert!(!names.contains(&"US"));
        assert_eq!(resolver.country_codes().len(), COUNTRY_SYNONYMS.len());
    }

    #[test]
    fn geonames_adds_two_letter_codes() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "# GeoNames.org Country Information")?;
        writeln!(tmp, "#ISO\tISO3\tISO-Numeric\tfips\tCountry")?;
        writeln!(tmp, "DE\tDEU\t276\tGM\tGermany")?;
        writeln!(tmp, "FR\tFRA\t250\tFR\tFrance")?;
        writeln!(tmp, "US\tUSA\t840\tUS\tUnited States")?;

        let mut resolver = CountryResolver::from_table();
        let added = resolver.load_geonames(tmp.path())?;

        assert_eq!(added, 2);
        assert_eq!(resolver.resolve("de"), Some("DEU"));
        assert_eq!(resolver.resolve("FR"), Some("FRA"));
        assert_eq!(resolver.resolve("us"), Some("USA"));
        Ok(())
    }
}
