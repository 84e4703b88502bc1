//! File surface of the pronunciation dictionary tools: reading
//! `word<TAB>transcript` files and component lists, running the core passes,
//! and writing their reports.

pub mod commands;
pub mod io;
pub mod trace_init;

use std::path::PathBuf;

/// Print the error to stderr and exit with status 1.
#[macro_export]
macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            ::std::process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Settings(#[from] pron_core::settings::SettingsError),
    #[error(transparent)]
    Mappings(#[from] pron_core::g2p::MappingConfigError),
    #[error(transparent)]
    Reconcile(#[from] pron_core::variants::ReconcileError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
