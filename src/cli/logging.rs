use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Adjust the log level after the logger is installed
pub fn set_log_level(level: LevelFilter) {
    log::set_max_level(level);
}

/// Initialize logging with the specified level.
///
/// The logger itself accepts every record; the global max level is the only
/// filter, so `set_log_level` can raise or lower it later.
pub fn init_logging(debug: bool) -> LevelFilter {
    let log_level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if let Err(e) = SimpleLogger::new().with_level(LevelFilter::Trace).init() {
        eprintln!("Failed to initialize logging: {}", e);
    }
    set_log_level(log_level);

    log_level
}

/// Configure backtrace if trace is enabled
pub fn configure_backtrace(trace: bool) {
    if trace {
        std::env::set_var("RUST_BACKTRACE", "1");
    }
}
