use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

use super::set_enabled;

/// Install the global `tracing` subscriber and apply the logging switch.
///
/// The filter comes from `RUST_LOG` when set, otherwise from the config.
/// Output goes to a file when `FLOWKIT_LOG` or `logging.file` names one,
/// and to stderr otherwise.
///
/// Log files get a `{path}.{timestamp}.{pid}` suffix so concurrent
/// processes never share a file.
pub fn init_tracing(config: &LoggingConfig) {
    set_enabled(config.enabled);
    if !config.enabled {
        return;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.filter.as_str()));

    let log_path = std::env::var("FLOWKIT_LOG")
        .ok()
        .or_else(|| config.file.as_ref().map(|p| p.display().to_string()));

    let Some(log_path) = log_path else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_level(true),
            )
            .try_init();
        return;
    };

    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = format!("{}.{}.{}", log_path, timestamp, pid);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!("Warning: Failed to create log file: {}", unique_path);
        return;
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
}
