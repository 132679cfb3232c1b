// src/catalog/mod.rs

//! Variable catalogue: World Bank indicator names and codes, the category of
//! every column the loaders produce, and the canonical output column order.

mod indicators;

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::bimap::BiMap;
use crate::table::Aggregation;
pub use indicators::WORLD_BANK_INDICATORS;

/// UNHCR persons-of-concern columns, in file order.
pub static UNHCR_VARIABLES: &[&str] = &[
    "Refugees (incl. refugee-like situations)",
    "Asylum-seekers (pending cases)",
    "Returned refugees",
    "Internally displaced persons (IDPs)",
    "Returned IDPs",
    "Stateless persons",
    "Others of concern",
    "Total Population",
];

/// OECD international migration variables.
pub static OECD_VARIABLES: &[&str] = &[
    "Acquisition of nationality by country of former nationality",
    "Inflows of asylum seekers by nationality",
    "Inflows of foreign population by nationality",
    "Inflows of foreign workers by nationality",
    "Inflows of seasonal foreign workers by nationality",
    "Outflows of foreign population by nationality",
    "Stock of foreign labour by nationality",
    "Stock of foreign population by nationality",
    "Stock of foreign-born labour by country of birth",
    "Stock of foreign-born population by country of birth",
];

/// Column prefix of newspaper mention counts, e.g. `Mentions_NYT`.
pub const MENTIONS_PREFIX: &str = "Mentions_";

/// Name of the total climate severity column.
pub const SEVERITY_COLUMN: &str = "Severity";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Development,
    Ecology,
    EconomyGeneral,
    EconomySocialImpact,
    EconomyEmployment,
    Education,
    Emission,
    Energy,
    GovernmentExpenditure,
    Health,
    InternationalRelations,
    LandUse,
    Population,
    Unhcr,
    Oecd,
    Newspaper,
    Climate,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Development => "Development",
            Category::Ecology => "Ecology",
            Category::EconomyGeneral => "Economy (general)",
            Category::EconomySocialImpact => "Economy (social impact)",
            Category::EconomyEmployment => "Economy (employment)",
            Category::Education => "Education",
            Category::Emission => "Emission",
            Category::Energy => "Energy",
            Category::GovernmentExpenditure => "Government expenditure",
            Category::Health => "Health",
            Category::InternationalRelations => "International relations",
            Category::LandUse => "Land use",
            Category::Population => "Population",
            Category::Unhcr => "UNHCR",
            Category::Oecd => "OECD",
            Category::Newspaper => "Newspaper",
            Category::Climate => "Climate",
        }
    }

    /// How columns of this category collapse over the origin dimension:
    /// migration counts add up, everything else is a rate or level.
    pub fn aggregation(&self) -> Aggregation {
        match self {
            Category::Unhcr | Category::Oecd => Aggregation::Sum,
            _ => Aggregation::Mean,
        }
    }
}

static BUILTIN: Lazy<IndicatorCatalog> = Lazy::new(IndicatorCatalog::new);

pub struct IndicatorCatalog {
    /// Uppercased indicator name <-> uppercased indicator code.
    names: BiMap,
    /// Known column -> (category, rank in output order).
    columns: HashMap<String, (Category, usize)>,
}

impl IndicatorCatalog {
    pub fn builtin() -> &'static IndicatorCatalog {
        &BUILTIN
    }

    fn new() -> Self {
        let mut names = BiMap::new();
        let mut columns = HashMap::new();
        let mut rank = 0;
        let mut push = |column: &str, category: Category| {
            columns.insert(column.to_string(), (category, rank));
            rank += 1;
        };

        for (code, name, category) in WORLD_BANK_INDICATORS {
            names.insert(name.to_uppercase(), code.to_uppercase());
            push(code, *category);
        }
        for column in UNHCR_VARIABLES {
            push(column, Category::Unhcr);
        }
        for column in OECD_VARIABLES {
            push(column, Category::Oecd);
        }
        for column in crate::climate::ELEMENTS {
            push(column, Category::Climate);
        }
        push(SEVERITY_COLUMN, Category::Climate);

        Self { names, columns }
    }

    /// Indicator code for an indicator name or code, case-insensitive.
    pub fn indicator_code(&self, name_or_code: &str) -> Option<&str> {
        let key = name_or_code.trim().to_uppercase();
        if let Some(name) = self.names.left(&key) {
            return self.names.right(name);
        }
        self.names.right(&key)
    }

    /// Published indicator name for a code, uppercased as stored.
    pub fn indicator_name(&self, code: &str) -> Option<&str> {
        self.names.left(&code.trim().to_uppercase())
    }

    pub fn category(&self, column: &str) -> Option<Category> {
        if column.starts_with(MENTIONS_PREFIX) {
            return Some(Category::Newspaper);
        }
        self.columns.get(column).map(|(category, _)| *category)
    }

    /// Sort columns into catalogue order: indicator categories, UNHCR, OECD,
    /// newspaper mentions, climate; unknown columns last, alphabetically.
    pub fn order_columns<S: AsRef<str>>(&self, columns: &[S]) -> Vec<usize> {
        let newspaper_rank = self
            .columns
            .values()
            .filter(|(category, _)| *category < Category::Newspaper)
            .count();

        let rank = |column: &str| -> (usize, String) {
            if column.starts_with(MENTIONS_PREFIX) {
                return (newspaper_rank, column.to_string());
            }
            match self.columns.get(column) {
                Some((Category::Climate, r)) => (r + 1, String::new()),
                Some((_, r)) => (*r, String::new()),
                None => (usize::MAX, column.to_string()),
            }
        };

        let mut order: Vec<usize> = (0..columns.len()).collect();
        order.sort_by_key(|&i| rank(columns[i].as_ref()));
        order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_lookup_by_name_or_code() {
        let catalog = IndicatorCatalog::builtin();
        assert_eq!(catalog.indicator_code("SP.POP.TOTL"), Some("SP.POP.TOTL"));
        assert_eq!(catalog.indicator_code("sp.pop.totl"), Some("SP.POP.TOTL"));
        assert_eq!(
            catalog.indicator_code("Arable land (% of land area)"),
            Some("AG.LND.ARBL.ZS")
        );
        assert_eq!(catalog.indicator_code("NOT.AN.INDICATOR"), None);
        assert_eq!(
            catalog.indicator_name("ag.lnd.arbl.zs"),
            Some("ARABLE LAND (% OF LAND AREA)")
        );
    }

    #[test]
    fn categories_drive_aggregation() {
        let catalog = IndicatorCatalog::builtin();
        assert_eq!(catalog.category("Returned IDPs"), Some(Category::Unhcr));
        assert_eq!(catalog.category("Mentions_NYT"), Some(Category::Newspaper));
        assert_eq!(catalog.category("TMAX"), Some(Category::Climate));
        assert_eq!(Category::Oecd.aggregation(), Aggregation::Sum);
        assert_eq!(Category::Health.aggregation(), Aggregation::Mean);
    }

    #[test]
    fn order_columns_groups_by_category() {
        let catalog = IndicatorCatalog::builtin();
        let columns = [
            "zzz custom",
            "Severity",
            "Mentions_NYT",
            "Total Population",
            "SP.POP.TOTL",
            "IC.FRM.CORR.ZS",
            "aaa custom",
            "TMAX",
        ];
        let ordered: Vec<&str> = catalog
            .order_columns(&columns)
            .into_iter()
            .map(|i| columns[i])
            .collect();
        assert_eq!(
            ordered,
            vec![
                "IC.FRM.CORR.ZS",
                "SP.POP.TOTL",
                "Total Population",
                "Mentions_NYT",
                "TMAX",
                "Severity",
                "aaa custom",
                "zzz custom",
            ]
        );
    }
}
