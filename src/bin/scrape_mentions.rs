use anyhow::{Context, Result};
use migration_panel::{
    config::{Config, API_KEY_ENV},
    init_logging,
    resolver::CountryResolver,
    scrape::{self, is_rate_limited, ArticleSearch},
};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    init_logging("info");

    // ─── 2) configuration & credentials ──────────────────────────────
    let config = Config::from_args()?;
    let api_key = std::env::var(API_KEY_ENV)
        .with_context(|| format!("{} must hold the article search API key", API_KEY_ENV))?;
    let mut resolver = CountryResolver::from_table();
    if let Some(geonames) = &config.geonames {
        resolver.load_geonames(geonames)?;
    }

    // ─── 3) scrape, resuming from saved years ────────────────────────
    let search = ArticleSearch::new(config.scrape.base_url.clone(), api_key);
    if let Err(e) = scrape::run(&search, &resolver, &config.scrape).await {
        if is_rate_limited(&e) {
            error!(error = %e, "rate limited; rerun later to resume");
        } else {
            error!(error = ?e, "scrape failed");
        }
        return Err(e);
    }

    info!(output = %config.scrape.output.display(), "all done");
    Ok(())
}
