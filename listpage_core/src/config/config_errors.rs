use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors raised while loading configuration documents from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read configuration file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Configuration file {} is invalid: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
