use thiserror::Error;

use std::path::PathBuf;

#[derive(Debug, Error)]
pub enum PolicyViewError {
    #[error("unable to open file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse settings {path}: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("missing policy information")]
    MissingPolicyId,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
