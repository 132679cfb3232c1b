pub mod bimap;
pub mod catalog;
pub mod climate;
pub mod config;
pub mod container;
pub mod resolver;
pub mod scrape;
pub mod sources;
pub mod table;

/// First year kept by every loader.
pub const YEAR_LIMIT: i32 = 1980;

/// Install the `tracing` subscriber used by every binary.
/// `RUST_LOG` overrides the given default filter.
pub fn init_logging(default_filter: &str) {
    use tracing_subscriber::{fmt, EnvFilter};

    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
}

#[cfg(test)]
pub(crate) fn init_test_logging() {
    use tracing_subscriber::{EnvFilter, FmtSubscriber};

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,migration_panel=debug")),
        )
        .with_test_writer()
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
