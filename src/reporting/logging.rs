use crate::config::Config;
use log::{debug, error, info, warn};

/// Initialize the logger with appropriate level based on verbosity
///
/// `RUST_LOG` is read first; the verbosity flags then override its level.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    // A second initialization (tests, embedders) is not an error
    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log configuration information
pub fn log_config_info(config: &Config) {
    let timeout = config.timeout_duration().as_secs();
    let skip_ssl_verification = config.skip_ssl_verification.unwrap_or(false);
    let proxy = config.proxy.as_deref().unwrap_or("none");

    info!("Configuration: timeout={timeout}s, format={}", config.output_format());
    info!("HTTP: proxy={proxy}, skip_ssl={skip_ssl_verification}");
}

/// Log source processing information
pub fn log_source_info(source_count: usize, names: &[String]) {
    info!("Processing {source_count} source(s)");
    for (i, name) in names.iter().enumerate() {
        debug!("  {}. {}", i + 1, name);
    }
}

/// Log URL discovery information
pub fn log_url_discovery(unique_urls: usize, tagged: usize, total_found: usize) {
    info!("Found {unique_urls} unique URLs, tagged {tagged} of {total_found} candidates");
}

/// Log individual URL probe results for debugging
pub fn log_url_result(url: &str, status: Option<u16>, description: Option<&str>) {
    match (status, description) {
        (Some(status), None) => debug!("✓ {url} -> {status}"),
        (Some(status), Some(desc)) => debug!("✗ {url} -> {status} ({desc})"),
        (None, Some(desc)) => debug!("✗ {url} -> {desc}"),
        (None, None) => debug!("? {url} -> unknown"),
    }
}

/// Log error information
pub fn log_error(message: &str, source: Option<&dyn std::error::Error>) {
    match source {
        Some(err) => error!("{message}: {err}"),
        None => error!("{message}"),
    }
}

/// Log warning information
pub fn log_warning(message: &str) {
    warn!("{message}");
}
