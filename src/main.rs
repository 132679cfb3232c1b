use anyhow::Result;
use migration_panel::{
    config::Config, container::DataContainer, init_logging, resolver::CountryResolver,
};
use std::time::Instant;
use tracing::info;

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    init_logging("info");
    info!("startup");

    // ─── 2) configuration ────────────────────────────────────────────
    let config = Config::from_args()?;

    // ─── 3) country resolver, optionally extended by GeoNames ────────
    let mut resolver = CountryResolver::from_table();
    if let Some(geonames) = &config.geonames {
        resolver.load_geonames(geonames)?;
    }

    // ─── 4) load every source ────────────────────────────────────────
    let start = Instant::now();
    let container = DataContainer::load(&config, &resolver)?;
    info!(elapsed = ?start.elapsed(), "loaded all sources");

    // ─── 5) merge, collapse, write ───────────────────────────────────
    let outputs = container.write(&config)?;
    for file in &outputs.files {
        info!(path = %file.display(), "output");
    }

    info!("all done");
    Ok(())
}
