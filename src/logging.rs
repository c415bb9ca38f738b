//! Diagnostic logging.  The terminal belongs to the game while it's running,
//! so log messages only ever go to a file.
use crate::config::LogConfig;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter directive used when neither `RUST_LOG` nor the configuration file
/// says otherwise
const DEFAULT_DIRECTIVE: &str = "info";

/// Install a global `tracing` subscriber that appends to the log file named
/// in `config`.  Does nothing if no log file is configured.
///
/// # Errors
///
/// Returns `Err` if the filter directive is invalid, the log file could not
/// be opened, or a global subscriber has already been set.
pub(crate) fn init(config: &LogConfig) -> Result<(), LogError> {
    let Some(path) = config.file.as_deref() else {
        return Ok(());
    };
    let filter = make_filter(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        config.level.as_deref(),
    )?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::Open)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::Open)?;
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

/// Build the filter from `RUST_LOG` if set, else from the configured level,
/// else from [`DEFAULT_DIRECTIVE`]
fn make_filter(env: Option<String>, configured: Option<&str>) -> Result<EnvFilter, LogError> {
    let directive = env
        .or_else(|| configured.map(String::from))
        .unwrap_or_else(|| String::from(DEFAULT_DIRECTIVE));
    match EnvFilter::try_new(&directive) {
        Ok(filter) => Ok(filter),
        Err(source) => Err(LogError::Filter { directive, source }),
    }
}

#[derive(Debug, Error)]
pub(crate) enum LogError {
    #[error("invalid log filter {directive:?}")]
    Filter {
        directive: String,
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install log subscriber")]
    Install(#[from] tracing::subscriber::SetGlobalDefaultError),
}
