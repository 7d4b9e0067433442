// Logging setup.

use log::{Level, LevelFilter};

/// Route `log` records to the browser console. A second call keeps the
/// existing logger and only adjusts the level.
pub fn init_logging(level: LevelFilter) {
    if let Err(e) = console_log::init_with_level(initial_level(level)) {
        log::warn!("console logger already installed: {e}");
    }
    log::set_max_level(level);
}

// `console_log` wants a concrete level; `Off` is applied afterwards through
// the max level.
fn initial_level(filter: LevelFilter) -> Level {
    filter.to_level().unwrap_or(Level::Info)
}
