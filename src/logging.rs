//! Tracing subscriber setup for the command-line host

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "info";

/// Installs a JSON file logger writing to `log_path`.
///
/// The returned guard flushes pending records when dropped and must be held
/// until the process exits.
pub fn init_logging(log_path: &Path) -> std::io::Result<WorkerGuard> {
    let dir = log_path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = log_path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "update-checker.log".into());
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded in another host
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true),
        )
        .try_init();

    Ok(guard)
}

/// Like [`init_logging`], but a log file that cannot be created only disables
/// file logging and prints a warning to stderr.
pub fn init_logging_or_warn(log_path: &Path) -> Option<WorkerGuard> {
    match init_logging(log_path) {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("warning: file logging disabled ({}): {}", log_path.display(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_logging_or_warn_continues_when_log_dir_cannot_be_created() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();

        let guard = init_logging_or_warn(&blocker.join("logs").join("update-checker.log"));

        assert!(guard.is_none());
    }
}
