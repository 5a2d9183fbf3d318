pub use log::LevelFilter::*;

/// Routes `log` records to stdout as `(LEVEL) target: message`. Fails if a logger is
/// already installed.
pub fn setup_logging(verbosity: log::LevelFilter) -> Result<(), String> {
    fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| out.finish(format_args!("({}) {}: {}", record.level(), record.target(), message)))
        .chain(std::io::stdout())
        .apply()
        .map_err(|e| e.to_string())
}
