use env_logger::Builder;
use log::LevelFilter;
use std::str::FromStr;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize logging for tests.
///
/// Quiet by default (errors only). Set `LOG_LEVEL=debug` to see what the
/// store and the booking rules are doing while a test runs.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let level_filter = std::env::var("LOG_LEVEL")
            .ok()
            .and_then(|level| LevelFilter::from_str(&level).ok())
            .unwrap_or(LevelFilter::Error);

        // try_init: the global logger may already be set
        let _ = Builder::new()
            .filter_level(level_filter)
            .is_test(true)
            .try_init();
    });
}
