use anyhow::Result;
use migration_panel::{climate, config::Config, init_logging, resolver::CountryResolver};
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    init_logging("info");

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Config::from_args()?;
    let mut resolver = CountryResolver::from_table();
    if let Some(geonames) = &config.geonames {
        resolver.load_geonames(geonames)?;
    }

    // ─── 3) build or reload the severity index ───────────────────────
    let start = Instant::now();
    let table = climate::load_severity(&config.climate, &resolver, config.year_limit)?;
    info!(
        rows = table.num_rows(),
        columns = table.columns().len(),
        cache = %config.climate.cache_path().display(),
        elapsed = ?start.elapsed(),
        "severity index ready"
    );
    Ok(())
}
