use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global `env_logger` once.
///
/// Filter resolution order: explicit `filter` argument, then the `RUST_LOG`
/// environment variable, then a warn-level default. Subsequent calls are
/// ignored, so libraries and applications can both call this safely.
pub fn init_logging(filter: Option<&str>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Warn);
        }

        builder.init();

        log::debug!("logging initialized");
    });
}
